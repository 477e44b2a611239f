//! Riot queue ids. A match only carries the numeric id of the queue it was
//! played in, the ranked flag of a match is derived from it.

use enum_primitive_derive::Primitive;
use num_traits::FromPrimitive;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Primitive)]
pub enum Queue
{
    Custom = 0,
    NormalDraft = 400,
    RankedSolo = 420,
    NormalBlind = 430,
    RankedFlex = 440,
    Aram = 450,
    Quickplay = 490,
    Clash = 700,
    CoopVsAiIntro = 870,
    CoopVsAiBeginner = 880,
    CoopVsAiIntermediate = 890,
    Urf = 900,
    Arena = 1700,
}

impl Queue
{
    /// Look up a queue by its id as found in the `queueId` field of a match.
    /// Unknown and retired queues give `None`.
    pub fn from_id(id: u16) -> Option<Self> { Self::from_u16(id) }

    pub fn is_ranked(self) -> bool { matches!(self, Self::RankedSolo | Self::RankedFlex) }

    pub fn id(self) -> u16 { self as u16 }
}

/// Check if the queue with the given id counts as a ranked queue. Unknown ids
/// are never ranked.
pub fn is_ranked_queue(id: u16) -> bool { Queue::from_id(id).map_or(false, Queue::is_ranked) }

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn ranked_queues()
    {
        assert!(is_ranked_queue(420));
        assert!(is_ranked_queue(440));
        assert!(!is_ranked_queue(400));
        assert!(!is_ranked_queue(450));
        assert!(!is_ranked_queue(0));
    }

    #[test]
    fn unknown_queue()
    {
        assert_eq!(Queue::from_id(1234), None);
        assert!(!is_ranked_queue(1234));
    }

    #[test]
    fn id_matches_discriminant()
    {
        assert_eq!(Queue::from_id(420), Some(Queue::RankedSolo));
        assert_eq!(Queue::RankedFlex.id(), 440);
    }
}
