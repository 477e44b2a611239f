use std::fmt;

use super::extract::MatchPerformance;

/// Number of matches at the start and at the end of the history that are
/// compared against each other.
pub const TREND_WINDOW: usize = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trend
{
    InsufficientData,
    Improving,
    Declining,
    Stable,
}

impl Trend
{
    pub fn label(self) -> &'static str
    {
        match self {
            Self::InsufficientData => "Insufficient data",
            Self::Improving => "Improving",
            Self::Declining => "Declining",
            Self::Stable => "Stable",
        }
    }
}

impl fmt::Display for Trend
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

fn wins(performances: &[MatchPerformance]) -> usize
{
    performances.iter().filter(|perf| perf.win).count()
}

/// Compare the wins in the most recent matches with the wins in the earliest
/// ones. `performances` must be sorted from oldest to newest.
///
/// With fewer than `2 * TREND_WINDOW` matches the two windows overlap, with
/// exactly `TREND_WINDOW` they are the same and the trend is always stable.
pub fn classify(performances: &[MatchPerformance]) -> Trend
{
    if performances.len() < TREND_WINDOW {
        return Trend::InsufficientData;
    }

    let early = wins(&performances[..TREND_WINDOW]);
    let recent = wins(&performances[performances.len() - TREND_WINDOW..]);

    if recent > early {
        Trend::Improving
    }
    else if recent < early {
        Trend::Declining
    }
    else {
        Trend::Stable
    }
}
