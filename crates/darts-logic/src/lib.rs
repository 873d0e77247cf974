//! Darts leg scoring for 501/301 play
//!
//! Core scoring logic for one player's leg: throws, turns, busts,
//! checkout rules and derived statistics. Persistence and transport live
//! behind the [`ScoreSink`] trait. This crate is compiled to:
//! - Native (for the scorekeeping service and tools)
//! - WASM (for the browser scorer UI)

mod player;
mod segment;
mod sink;
mod throw;

#[cfg(feature = "wasm")]
mod wasm;

pub use player::{MatchPlayer, PlayerSnapshot};
pub use segment::{segment_points, SegmentError};
pub use sink::{NullSink, RecordingSink, ScoreSink, SinkEvent};
pub use throw::{Checkout, GameKind, Throw, ThrowOutcome, Turn, BUST_LABEL};

/// Whether a one-dart double-out is arithmetically reachable from
/// `score`: exactly 50 (bull), or even and at most 40 (D1-D20).
pub fn double_attempt_possible(score: u16) -> bool {
    score == 50 || (score <= 40 && score % 2 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_attempt_range() {
        assert!(double_attempt_possible(50));
        assert!(double_attempt_possible(40));
        assert!(double_attempt_possible(38));
        assert!(double_attempt_possible(2));
        assert!(!double_attempt_possible(41));
        assert!(!double_attempt_possible(39));
        // even, but above D20: no single dart finishes it
        assert!(!double_attempt_possible(48));
        assert!(!double_attempt_possible(51));
        assert!(!double_attempt_possible(60));
    }
}
