//! Leg scoring state machine for one player
//!
//! Tracks the remaining score, the in-progress turn (up to three darts),
//! the committed turn history and the derived statistics for one player
//! working through a leg of 501/301. Committing a turn, undoing a throw
//! and closing a leg are reported to an injected [`ScoreSink`]; pure
//! queries never touch it.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::double_attempt_possible;
use crate::sink::ScoreSink;
use crate::throw::{Checkout, GameKind, Throw, ThrowOutcome, Turn};

/// One player's scoring state for the current leg, plus the match-level
/// turn archive carried across legs.
pub struct MatchPlayer {
    player_id: u32,
    name: String,
    game_id: u32,
    player_num: u8,
    start_score: u16,
    score: u16,
    /// In-progress turn, 0-2 darts at rest.
    pending: Vec<Throw>,
    /// Committed turns of the current leg.
    turns: Vec<Turn>,
    /// Every committed turn of the match, surviving leg resets.
    match_turns: Vec<Turn>,
    best_turn: u16,
    doubles_attempted: u32,
    attempted_double_this_turn: bool,
    checkout: Checkout,
    sink: Box<dyn ScoreSink>,
}

impl MatchPlayer {
    pub fn new(
        player_id: u32,
        name: impl Into<String>,
        kind: GameKind,
        checkout: Checkout,
        sink: Box<dyn ScoreSink>,
    ) -> Self {
        let start_score = kind.start_score();
        Self {
            player_id,
            name: name.into(),
            game_id: 0,
            player_num: 0,
            start_score,
            score: start_score,
            pending: Vec::new(),
            turns: Vec::new(),
            match_turns: Vec::new(),
            best_turn: 0,
            doubles_attempted: 0,
            attempted_double_this_turn: false,
            checkout,
            sink,
        }
    }

    pub fn set_game(&mut self, game_id: u32) {
        self.game_id = game_id;
    }

    pub fn set_player_num(&mut self, player_num: u8) {
        self.player_num = player_num;
    }

    pub fn set_checkout(&mut self, checkout: Checkout) {
        self.checkout = checkout;
    }

    /// Record one dart.
    ///
    /// `points` is trusted (0-60 by convention, not re-validated): a value
    /// that would push the score below zero simply busts the turn, which
    /// is the designed recovery path. A label starting with 'D' marks a
    /// double for checkout validation.
    pub fn record_throw(&mut self, points: u16, label: &str) -> ThrowOutcome {
        // The score standing before this dart decides whether the player
        // was lined up for a double; the counter itself only moves when
        // the turn commits.
        if double_attempt_possible(self.score) {
            self.attempted_double_this_turn = true;
        }

        if points > self.score {
            return self.bust();
        }

        if points == self.score {
            return match self.checkout {
                Checkout::Double if !label.starts_with('D') => self.bust(),
                Checkout::ThreeOut
                    if !label.starts_with('D') && self.doubles_attempted < 3 =>
                {
                    self.bust()
                }
                _ => self.finish(points, label),
            };
        }

        self.score -= points;
        self.pending.push(Throw::new(points, label));
        if self.pending.len() == 3 {
            self.commit_pending();
            if self.score > 0 {
                ThrowOutcome::Done
            } else {
                ThrowOutcome::Winner
            }
        } else {
            ThrowOutcome::Again
        }
    }

    /// Undo the most recent throw of the leg: from the in-progress turn
    /// if there is one, otherwise by reopening the last committed turn
    /// and popping its final dart. No-op on an empty leg.
    pub fn undo_last_throw(&mut self) {
        if self.pending.is_empty() {
            let Some(turn) = self.turns.pop() else {
                return;
            };
            self.match_turns.pop();
            if turn.is_bust() {
                // The bust handed these darts' points back; take them
                // off again so the reopened turn is an ordinary in-progress
                // turn with its darts already deducted.
                for t in &turn.throws {
                    self.score -= t.points;
                }
            }
            self.pending = turn.throws;
            self.best_turn = self
                .turns
                .iter()
                .map(Turn::scored_points)
                .max()
                .unwrap_or(0);
        }

        if let Some(popped) = self.pending.pop() {
            self.score += popped.points;
            debug!(
                "player {} undid {} ({} points), score {}",
                self.player_id, popped.label, popped.points, self.score
            );
            self.sink.undo(self.player_id, self.game_id);
        }
    }

    /// Close out the current leg and reset for the next one.
    ///
    /// Any in-progress darts are folded into the match-level archive as a
    /// partial turn (they were never committed, so no turn notification is
    /// sent), the finished leg's average is reported if it had committed
    /// turns, and the leg state resets. Identity and checkout rule persist.
    pub fn start_new_leg(&mut self, new_game_id: u32) {
        if !self.pending.is_empty() {
            let partial = Turn::new(std::mem::take(&mut self.pending));
            self.match_turns.push(partial);
        }
        if !self.turns.is_empty() {
            let average = self.leg_average();
            self.sink
                .leg_average(self.game_id, self.player_num, average);
        }

        debug!(
            "player {} starting leg {} at {}",
            self.player_id, new_game_id, self.start_score
        );
        self.game_id = new_game_id;
        self.turns.clear();
        self.score = self.start_score;
        self.best_turn = 0;
        self.doubles_attempted = 0;
        self.attempted_double_this_turn = false;
    }

    // ── Derived queries ──────────────────────────────────────────────

    pub fn player_id(&self) -> u32 {
        self.player_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn player_num(&self) -> u8 {
        self.player_num
    }

    pub fn checkout(&self) -> Checkout {
        self.checkout
    }

    pub fn score(&self) -> u16 {
        self.score
    }

    pub fn start_score(&self) -> u16 {
        self.start_score
    }

    /// Committed turns this leg.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Darts in the in-progress turn.
    pub fn throw_count(&self) -> usize {
        self.pending.len()
    }

    pub fn best_turn_score(&self) -> u16 {
        self.best_turn
    }

    pub fn doubles_attempted(&self) -> u32 {
        self.doubles_attempted
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn pending_throws(&self) -> &[Throw] {
        &self.pending
    }

    /// Committed turns across the whole match, including past legs.
    pub fn match_turn_count(&self) -> usize {
        self.match_turns.len()
    }

    /// Average points per committed turn this leg. Busted turns count
    /// as zero. 0.0 for an empty leg.
    pub fn leg_average(&self) -> f64 {
        if self.turns.is_empty() {
            return 0.0;
        }
        let total: u32 = self.turns.iter().map(|t| u32::from(t.scored_points())).sum();
        f64::from(total) / self.turns.len() as f64
    }

    /// Full leg history, turns separated by " | ", e.g.
    /// "T20-T20-T20 | S5-bust | D16-D8".
    pub fn formatted_turns(&self) -> String {
        self.turns
            .iter()
            .map(Turn::summary)
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Last committed turn's labels plus its face-value total, e.g.
    /// "T20-T19-D12 | 141". Empty string when no turn has been committed.
    pub fn last_turn_summary(&self) -> String {
        match self.turns.last() {
            None => String::new(),
            Some(turn) => format!("{} | {}", turn.summary(), turn.total_face_value()),
        }
    }

    /// Serializable view of the current state (for UIs and persistence
    /// layers; the sink is not part of it).
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            player_id: self.player_id,
            name: self.name.clone(),
            game_id: self.game_id,
            player_num: self.player_num,
            start_score: self.start_score,
            score: self.score,
            pending: self.pending.clone(),
            turns: self.turns.clone(),
            best_turn: self.best_turn,
            doubles_attempted: self.doubles_attempted,
            checkout: self.checkout,
        }
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Forfeit the in-progress turn: hand back every point deducted this
    /// turn, close it with the bust marker and commit. Net score change
    /// for the turn is zero.
    fn bust(&mut self) -> ThrowOutcome {
        for t in &self.pending {
            self.score += t.points;
        }
        self.pending.push(Throw::bust());
        debug!(
            "player {} busted, score restored to {}",
            self.player_id, self.score
        );
        self.commit_pending();
        ThrowOutcome::Done
    }

    /// Valid checkout: the final dart lands and the leg is won.
    fn finish(&mut self, points: u16, label: &str) -> ThrowOutcome {
        self.score -= points;
        self.pending.push(Throw::new(points, label));
        self.commit_pending();
        ThrowOutcome::Winner
    }

    fn commit_pending(&mut self) {
        let turn = Turn::new(std::mem::take(&mut self.pending));
        let scored = turn.scored_points();
        if scored > self.best_turn {
            self.best_turn = scored;
        }
        if self.attempted_double_this_turn {
            self.doubles_attempted += 1;
            self.attempted_double_this_turn = false;
        }
        debug!(
            "player {} committed turn {} ({}), score {}",
            self.player_id,
            self.turns.len() + 1,
            turn.summary(),
            self.score
        );
        self.match_turns.push(turn.clone());
        self.turns.push(turn);
        let seq = self.turns.len() as u32;
        let committed = &self.turns[seq as usize - 1];
        self.sink
            .turn_committed(self.player_id, self.game_id, committed, seq);
    }
}

/// Serializable snapshot of a [`MatchPlayer`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub player_id: u32,
    pub name: String,
    pub game_id: u32,
    pub player_num: u8,
    pub start_score: u16,
    pub score: u16,
    pub pending: Vec<Throw>,
    pub turns: Vec<Turn>,
    pub best_turn: u16,
    pub doubles_attempted: u32,
    pub checkout: Checkout,
}
