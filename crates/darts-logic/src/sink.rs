//! Collaborator interface to the external scorekeeping service
//!
//! The scoring core never awaits or inspects the outcome of a
//! notification: delivery is fire-and-forget, at most once, and any
//! retry policy belongs to the implementation behind the trait.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::throw::Turn;

/// Notifications emitted at the core's extension points: turn commit,
/// undo, and leg transition. Pure queries never reach the sink.
pub trait ScoreSink {
    /// A turn was committed to the leg history. `seq` is the 1-based
    /// position of the turn within the leg.
    fn turn_committed(&mut self, player_id: u32, game_id: u32, turn: &Turn, seq: u32);

    /// The most recent throw was undone.
    fn undo(&mut self, player_id: u32, game_id: u32);

    /// A leg with at least one committed turn ended; reported once.
    fn leg_average(&mut self, game_id: u32, player_num: u8, average: f64);
}

/// Sink that drops every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl ScoreSink for NullSink {
    fn turn_committed(&mut self, _player_id: u32, _game_id: u32, _turn: &Turn, _seq: u32) {}
    fn undo(&mut self, _player_id: u32, _game_id: u32) {}
    fn leg_average(&mut self, _game_id: u32, _player_num: u8, _average: f64) {}
}

/// One captured notification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SinkEvent {
    TurnCommitted {
        player_id: u32,
        game_id: u32,
        turn: Turn,
        seq: u32,
    },
    Undo {
        player_id: u32,
        game_id: u32,
    },
    LegAverage {
        game_id: u32,
        player_num: u8,
        average: f64,
    },
}

/// Sink that buffers notifications for later inspection.
///
/// Clones share the same buffer, so a caller can hand one clone to the
/// player and keep another to read events back (tests, or the WASM
/// bindings draining events into the UI). Single-threaded by design,
/// like the core itself.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<SinkEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the buffered events.
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return all buffered events.
    pub fn drain(&self) -> Vec<SinkEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl ScoreSink for RecordingSink {
    fn turn_committed(&mut self, player_id: u32, game_id: u32, turn: &Turn, seq: u32) {
        self.events.borrow_mut().push(SinkEvent::TurnCommitted {
            player_id,
            game_id,
            turn: turn.clone(),
            seq,
        });
    }

    fn undo(&mut self, player_id: u32, game_id: u32) {
        self.events
            .borrow_mut()
            .push(SinkEvent::Undo { player_id, game_id });
    }

    fn leg_average(&mut self, game_id: u32, player_num: u8, average: f64) {
        self.events.borrow_mut().push(SinkEvent::LegAverage {
            game_id,
            player_num,
            average,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::throw::Throw;

    #[test]
    fn test_clones_share_buffer() {
        let sink = RecordingSink::new();
        let mut handle = sink.clone();

        handle.undo(4, 9);
        handle.turn_committed(4, 9, &Turn::new(vec![Throw::new(60, "T20")]), 1);

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], SinkEvent::Undo { player_id: 4, game_id: 9 });
    }

    #[test]
    fn test_drain_empties_buffer() {
        let sink = RecordingSink::new();
        let mut handle = sink.clone();
        handle.leg_average(9, 1, 63.5);

        assert_eq!(sink.drain().len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_events_serialize() {
        let event = SinkEvent::LegAverage {
            game_id: 3,
            player_num: 2,
            average: 41.0,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: SinkEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
