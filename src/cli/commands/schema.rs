//! Schema command implementation.
//!
//! The `escompat schema` command prints the JSON schema for `.escompat.yml`,
//! for editor completion and validation.

use std::io::Write;

use crate::config::CompatConfig;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand;

impl Command for SchemaCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let schema = schemars::schema_for!(CompatConfig);
        serde_json::to_writer_pretty(&mut *out, &schema).map_err(anyhow::Error::from)?;
        writeln!(out)?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_describes_config_fields() {
        let mut out = Vec::new();
        SchemaCommand.execute(&mut out).unwrap();

        let schema: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for field in ["database", "targets", "environments", "polyfills", "editions", "aliases"] {
            assert!(properties.contains_key(field), "missing {}", field);
        }
        assert_eq!(schema["additionalProperties"], false);
    }
}
