//! Environment-based configuration.

use std::env::{self, VarError};

use anyhow::{bail, Context};

/// Seed used when `RAPTURE_SEED` is not set.
pub const DEFAULT_SEED: u64 = 0x7261_7074_7572_6521;

/// Runtime configuration of the demo binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Seed of the random number generator.
    pub seed: u64,
    /// Number of frames to render.
    pub frames: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            frames: 1,
        }
    }
}

impl Config {
    /// Reads the configuration from the `RAPTURE_SEED` and `RAPTURE_FRAMES` environment
    /// variables. Unset variables keep their default value.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| env::var(name))
    }

    /// Reads the configuration through `var`, which has the same contract as [`env::var`].
    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let mut config = Self::default();
        if let Some(seed) = lookup(&var, "RAPTURE_SEED")? {
            config.seed = parse_u64(&seed).context("invalid value set for `RAPTURE_SEED`")?;
        }
        if let Some(frames) = lookup(&var, "RAPTURE_FRAMES")? {
            config.frames =
                parse_u64(&frames).context("invalid value set for `RAPTURE_FRAMES`")?;
        }
        log::debug!("using {:?}", config);
        Ok(config)
    }
}

fn lookup<F>(var: &F, name: &str) -> anyhow::Result<Option<String>>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(s)) => {
            bail!(
                "invalid value set for `{name}`: {}",
                s.to_string_lossy()
            )
        }
    }
}

fn parse_u64(s: &str) -> anyhow::Result<u64> {
    let s = s.trim();
    let value = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16)?,
        None => s.parse()?,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, ffi::OsString};

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
        let map = pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |name: &str| map.get(name).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.frames, 1);
    }

    #[test]
    fn overrides() {
        let config =
            Config::from_vars(vars(&[("RAPTURE_SEED", "42"), ("RAPTURE_FRAMES", " 10 ")])).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.frames, 10);

        let config = Config::from_vars(vars(&[("RAPTURE_SEED", "0xdead_beef")])).unwrap();
        assert_eq!(config.seed, 0xdead_beef);
    }

    #[test]
    fn invalid() {
        let err = Config::from_vars(vars(&[("RAPTURE_FRAMES", "many")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value set for `RAPTURE_FRAMES`");

        let err = Config::from_vars(vars(&[("RAPTURE_SEED", "-1")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value set for `RAPTURE_SEED`");

        let err = Config::from_vars(|name: &str| match name {
            "RAPTURE_SEED" => Err(VarError::NotUnicode(OsString::from("seed"))),
            _ => Err(VarError::NotPresent),
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "invalid value set for `RAPTURE_SEED`: seed");
    }
}
