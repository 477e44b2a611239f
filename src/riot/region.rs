use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Platform a Riot account plays on. Summoner data lives on the platform
/// host, accounts and matches on the host of the routing region the platform
/// belongs to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Region
{
    #[default]
    Korea,
    Japan,
    NorthAmerica,
    Brazil,
    LatinAmericaNorth,
    LatinAmericaSouth,
    Oceania,
    EuropeWest,
    EuropeNordicEast,
    Turkey,
    Russia,
}

/// The regional clusters of the Riot API.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Routing
{
    Americas,
    Asia,
    Europe,
}

impl Region
{
    /// Host prefix of the platform, as in `https://{platform}.api.riotgames.com`.
    pub fn platform(self) -> &'static str
    {
        match self {
            Self::Korea => "kr",
            Self::Japan => "jp1",
            Self::NorthAmerica => "na1",
            Self::Brazil => "br1",
            Self::LatinAmericaNorth => "la1",
            Self::LatinAmericaSouth => "la2",
            Self::Oceania => "oc1",
            Self::EuropeWest => "euw1",
            Self::EuropeNordicEast => "eun1",
            Self::Turkey => "tr1",
            Self::Russia => "ru",
        }
    }

    pub fn routing(self) -> Routing
    {
        match self {
            Self::Korea | Self::Japan => Routing::Asia,
            Self::NorthAmerica
            | Self::Brazil
            | Self::LatinAmericaNorth
            | Self::LatinAmericaSouth
            | Self::Oceania => Routing::Americas,
            Self::EuropeWest | Self::EuropeNordicEast | Self::Turkey | Self::Russia => {
                Routing::Europe
            },
        }
    }
}

impl Routing
{
    pub fn host(self) -> &'static str
    {
        match self {
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Europe => "europe",
        }
    }
}

impl fmt::Display for Region
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.platform()) }
}

#[derive(Debug, Error)]
#[error("Unknown region `{region}`")]
pub struct UnknownRegionError
{
    region: String,
}

impl FromStr for Region
{
    type Err = UnknownRegionError;

    /// Parse the platform id of a region, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.trim().to_lowercase().as_str() {
            "kr" => Ok(Self::Korea),
            "jp1" | "jp" => Ok(Self::Japan),
            "na1" | "na" => Ok(Self::NorthAmerica),
            "br1" | "br" => Ok(Self::Brazil),
            "la1" => Ok(Self::LatinAmericaNorth),
            "la2" => Ok(Self::LatinAmericaSouth),
            "oc1" | "oce" => Ok(Self::Oceania),
            "euw1" | "euw" => Ok(Self::EuropeWest),
            "eun1" | "eune" => Ok(Self::EuropeNordicEast),
            "tr1" | "tr" => Ok(Self::Turkey),
            "ru" => Ok(Self::Russia),
            unknown => Err(UnknownRegionError {
                region: unknown.to_string(),
            }),
        }
    }
}
