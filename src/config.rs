use crate::prelude::*;
use serde::{de, Deserialize, Deserializer};
use std::{fs, path::Path, time::Duration};

/// Settings of [`RpcClient`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Applied to calls whose context has no deadline of its own.
    #[serde(default, deserialize_with = "human_duration")]
    pub call_timeout: Option<Duration>,

    /// Error codes ignored by calls that don't specify any.
    #[serde(default)]
    pub default_ignored_codes: Vec<u32>,
}

impl Config {
    #[cfg(test)]
    pub fn from_code(code: &str) -> Self {
        serde_yaml::from_str(code).unwrap()
    }

    pub fn load(file: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = file.as_ref();

        let result: anyhow::Result<_> = (|| {
            let code = fs::read_to_string(file).context("Couldn't read file")?;
            serde_yaml::from_str(&code).context("Couldn't parse file")
        })();

        result.with_context(|| format!("Couldn't load configuration from: {}", file.display()))
    }
}

fn human_duration<'de, D>(d: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(d)?
        .map(|value| humantime::parse_duration(&value).map_err(de::Error::custom))
        .transpose()
}
