//! Runtime configuration read from the process environment.
use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::riot::Region;

pub const DEFAULT_MATCH_COUNT: u8 = 5;
pub const MIN_MATCH_COUNT: u8 = 1;
pub const MAX_MATCH_COUNT: u8 = 10;
pub const DEFAULT_REQUEST_RETRIES: u8 = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError
{
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{key} has an invalid value: {value}")]
    Invalid
    {
        key:   &'static str,
        value: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config
{
    pub api_key:         String,
    pub region:          Region,
    pub match_count:     u8,
    pub request_retries: u8,
}

/// Keep a requested number of matches within what a report is built from.
pub fn clamp_match_count(count: u8) -> u8 { count.clamp(MIN_MATCH_COUNT, MAX_MATCH_COUNT) }

impl Config
{
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RIOT_API_KEY` - Key for the Riot API (required)
    /// - `REGION` - Platform region of the players (default: kr)
    /// - `MATCH_COUNT` - Matches per report, 1 to 10 (default: 5)
    /// - `REQUEST_RETRIES` - Retries of a failed request (default: 2)
    pub fn from_env() -> Result<Self, ConfigError> { Self::from_lookup(|key| env::var(key).ok()) }

    /// Same as [`Config::from_env`], with the variables looked up through `lookup`.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("RIOT_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("RIOT_API_KEY"))?;

        let region = read_var(&lookup, "REGION")?.unwrap_or_default();
        let match_count = read_var::<u8, _>(&lookup, "MATCH_COUNT")?
            .map_or(DEFAULT_MATCH_COUNT, clamp_match_count);
        let request_retries =
            read_var(&lookup, "REQUEST_RETRIES")?.unwrap_or(DEFAULT_REQUEST_RETRIES);

        Ok(Self {
            api_key: api_key.trim().to_owned(),
            region,
            match_count,
            request_retries,
        })
    }
}

/// An unset variable is `None`, one that is set but does not parse is an error.
fn read_var<T, L>(lookup: &L, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    L: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };

    match value.trim().parse() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) => Err(ConfigError::Invalid { key, value }),
    }
}
