//! ECMAScript editions that group catalog entries.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An ECMAScript edition.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    Es2016,
    Es2017,
    Es2018,
    Es2019,
    Es2020,
    Es2021,
    Es2022,
    Es2023,
}

impl Edition {
    /// Every edition, oldest first.
    pub const ALL: [Edition; 8] = [
        Edition::Es2016,
        Edition::Es2017,
        Edition::Es2018,
        Edition::Es2019,
        Edition::Es2020,
        Edition::Es2021,
        Edition::Es2022,
        Edition::Es2023,
    ];

    /// Publication year of the edition.
    pub fn year(self) -> u16 {
        match self {
            Edition::Es2016 => 2016,
            Edition::Es2017 => 2017,
            Edition::Es2018 => 2018,
            Edition::Es2019 => 2019,
            Edition::Es2020 => 2020,
            Edition::Es2021 => 2021,
            Edition::Es2022 => 2022,
            Edition::Es2023 => 2023,
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ES{}", self.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_upper_case_prefix() {
        assert_eq!(Edition::Es2016.to_string(), "ES2016");
        assert_eq!(Edition::Es2023.to_string(), "ES2023");
    }

    #[test]
    fn editions_are_ordered_by_year() {
        assert!(Edition::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn deserializes_lowercase_name() {
        let e: Edition = serde_yaml::from_str("es2019").unwrap();
        assert_eq!(e, Edition::Es2019);
    }
}
