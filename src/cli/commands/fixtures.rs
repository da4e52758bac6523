//! Shared test projects for command tests.

use std::fs;

use tempfile::TempDir;

/// A small compatibility database covering the ES2016 catalog entries.
pub const DATA: &str = r#"{
    "__meta": { "version": "5.0.0" },
    "browsers": {
        "chrome": { "name": "Chrome", "type": "desktop" },
        "firefox": { "name": "Firefox", "type": "desktop" },
        "safari": { "name": "Safari", "type": "desktop" },
        "nodejs": { "name": "Node.js", "type": "server" }
    },
    "javascript": {
        "builtins": {
            "Array": {
                "includes": { "__compat": { "support": {
                    "chrome": { "version_added": "47" },
                    "firefox": { "version_added": "43" },
                    "safari": { "version_added": "9" },
                    "nodejs": { "version_added": "6.0.0" }
                } } }
            }
        },
        "operators": {
            "exponentiation": { "__compat": { "support": {
                "chrome": { "version_added": "52" },
                "firefox": { "version_added": "52" },
                "safari": { "version_added": "10.1" },
                "nodejs": { "version_added": "7.0.0" }
            } } }
        }
    }
}"#;

/// Project with `config` as `.escompat.yml` and the database at the default path.
pub fn project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".escompat.yml"), config).unwrap();

    let database = temp.path().join(crate::config::DEFAULT_DATABASE);
    fs::create_dir_all(database.parent().unwrap()).unwrap();
    fs::write(database, DATA).unwrap();

    temp
}
