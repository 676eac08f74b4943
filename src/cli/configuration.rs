use super::error::Error;
use serde::Serialize;
use std::{env, error, str::FromStr};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encode,
    Decode,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "encode" => Ok(Self::Encode),
            "decode" => Ok(Self::Decode),
            _ => Err(Error::new(format!("Unknown mode {}", value))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    mode: Mode,
    hex: bool,
    json: bool,
    verbose: bool,
}

fn var_map<T, E: error::Error>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    mut f: impl FnMut(&str) -> Result<T, E>,
    default: Option<T>,
) -> Result<T, Error> {
    match lookup(key) {
        Some(value) => f(&value).map_err(|_| Error::new(format!("Invalid {} {}", key, value))),
        None => default.ok_or_else(|| Error::new(format!("Missing {}", key))),
    }
}

impl Configuration {
    pub fn new() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mode = var_map(&lookup, "Z85_MODE", |mode| mode.parse(), Some(Mode::Encode))?;
        let hex = var_map(&lookup, "Z85_HEX", |hex| hex.parse(), Some(false))?;
        let json = var_map(&lookup, "Z85_JSON", |json| json.parse(), Some(false))?;
        let verbose = var_map(&lookup, "Z85_VERBOSE", |verbose| verbose.parse(), Some(false))?;
        Ok(Self { mode, hex, json, verbose })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the unencoded side is hexadecimal text rather than raw bytes.
    pub fn hex(&self) -> bool {
        self.hex
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
