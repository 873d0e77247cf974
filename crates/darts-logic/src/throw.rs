//! Throw, turn and game configuration types

use serde::{Deserialize, Serialize};

/// Label recorded on the synthetic throw that closes a forfeited turn.
pub const BUST_LABEL: &str = "bust";

/// A single dart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Throw {
    /// Face value scored by the dart (0-60). The core trusts the input
    /// layer to map board segments to values; see `segment_points`.
    pub points: u16,
    /// Board segment descriptor, e.g. "T20", "D16", "S5".
    pub label: String,
}

impl Throw {
    pub fn new(points: u16, label: impl Into<String>) -> Self {
        Self {
            points,
            label: label.into(),
        }
    }

    /// Zero-value marker appended when a turn is forfeited.
    pub fn bust() -> Self {
        Self::new(0, BUST_LABEL)
    }

    /// A label starting with 'D' denotes a double segment.
    pub fn is_double(&self) -> bool {
        self.label.starts_with('D')
    }

    pub fn is_bust_marker(&self) -> bool {
        self.label == BUST_LABEL
    }
}

/// One player's committed visit to the oche: 1-3 throws.
///
/// A turn that ended in a forfeit keeps the darts thrown before the bust,
/// closed by the bust marker. Those darts were never deducted from the
/// player's score, so `scored_points` treats the whole turn as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub throws: Vec<Throw>,
}

impl Turn {
    pub fn new(throws: Vec<Throw>) -> Self {
        Self { throws }
    }

    pub fn len(&self) -> usize {
        self.throws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.throws.is_empty()
    }

    /// True if the turn ended in a forfeit.
    pub fn is_bust(&self) -> bool {
        self.throws.last().is_some_and(Throw::is_bust_marker)
    }

    /// Sum of face values, including darts thrown before a bust.
    pub fn total_face_value(&self) -> u16 {
        self.throws.iter().map(|t| t.points).sum()
    }

    /// Points the turn actually took off the score. Zero for a busted turn.
    pub fn scored_points(&self) -> u16 {
        if self.is_bust() {
            0
        } else {
            self.total_face_value()
        }
    }

    /// Segment labels joined with '-', e.g. "T20-T19-D12".
    pub fn summary(&self) -> String {
        self.throws
            .iter()
            .map(|t| t.label.as_str())
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Rule governing the dart that brings the score to exactly zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Checkout {
    /// Any dart may finish the leg.
    Straight,
    /// The finishing dart must land on a double.
    Double,
    /// Double required, waived once the player has attempted three
    /// doubles during the leg.
    ThreeOut,
}

/// Starting score variant of the leg.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameKind {
    FiveOhOne,
    ThreeOhOne,
}

impl GameKind {
    pub fn start_score(self) -> u16 {
        match self {
            GameKind::FiveOhOne => 501,
            GameKind::ThreeOhOne => 301,
        }
    }
}

impl Default for GameKind {
    fn default() -> Self {
        GameKind::FiveOhOne
    }
}

/// Result of recording one dart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrowOutcome {
    /// More darts expected this turn.
    Again,
    /// Turn finalized (third dart or a bust); the leg continues.
    Done,
    /// Leg won with a valid checkout.
    Winner,
}

impl ThrowOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            ThrowOutcome::Again => "again",
            ThrowOutcome::Done => "done",
            ThrowOutcome::Winner => "winner",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bust_marker() {
        let t = Throw::bust();
        assert_eq!(t.points, 0);
        assert!(t.is_bust_marker());
        assert!(!t.is_double());
    }

    #[test]
    fn test_double_detection() {
        assert!(Throw::new(32, "D16").is_double());
        assert!(!Throw::new(16, "S16").is_double());
        assert!(!Throw::new(60, "T20").is_double());
    }

    #[test]
    fn test_turn_totals() {
        let turn = Turn::new(vec![
            Throw::new(60, "T20"),
            Throw::new(57, "T19"),
            Throw::new(24, "D12"),
        ]);
        assert_eq!(turn.total_face_value(), 141);
        assert_eq!(turn.scored_points(), 141);
        assert_eq!(turn.summary(), "T20-T19-D12");
        assert!(!turn.is_bust());
    }

    #[test]
    fn test_busted_turn_scores_zero() {
        let turn = Turn::new(vec![Throw::new(60, "T20"), Throw::bust()]);
        assert!(turn.is_bust());
        assert_eq!(turn.total_face_value(), 60);
        assert_eq!(turn.scored_points(), 0);
    }

    #[test]
    fn test_start_scores() {
        assert_eq!(GameKind::FiveOhOne.start_score(), 501);
        assert_eq!(GameKind::ThreeOhOne.start_score(), 301);
        assert_eq!(GameKind::default().start_score(), 501);
    }

    #[test]
    fn test_outcome_strings() {
        assert_eq!(ThrowOutcome::Again.as_str(), "again");
        assert_eq!(ThrowOutcome::Done.as_str(), "done");
        assert_eq!(ThrowOutcome::Winner.as_str(), "winner");
    }
}
