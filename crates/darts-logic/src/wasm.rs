//! WASM bindings for the browser scorer UI

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{
    segment_points, Checkout, GameKind, MatchPlayer, RecordingSink, Throw, ThrowOutcome,
};

fn parse_game_kind(kind: &str) -> Result<GameKind, JsError> {
    match kind {
        "501" => Ok(GameKind::FiveOhOne),
        "301" => Ok(GameKind::ThreeOhOne),
        other => Err(JsError::new(&format!("Unknown game kind: {}", other))),
    }
}

fn parse_checkout(rule: &str) -> Result<Checkout, JsError> {
    match rule {
        "Straight" => Ok(Checkout::Straight),
        "Double" => Ok(Checkout::Double),
        "Three-out" | "ThreeOut" => Ok(Checkout::ThreeOut),
        other => Err(JsError::new(&format!("Unknown checkout rule: {}", other))),
    }
}

/// One player's leg scorer, driven from JS. Sink notifications are
/// buffered and drained by the UI, which owns the actual transport.
#[wasm_bindgen]
pub struct WasmMatchPlayer {
    inner: MatchPlayer,
    events: RecordingSink,
}

#[wasm_bindgen]
impl WasmMatchPlayer {
    /// Create a scorer.
    ///
    /// # Arguments
    /// * `player_id` - External identifier of the player
    /// * `name` - Display name
    /// * `game_kind` - "501" or "301"
    /// * `checkout` - "Straight", "Double" or "Three-out"
    #[wasm_bindgen(constructor)]
    pub fn new(
        player_id: u32,
        name: String,
        game_kind: &str,
        checkout: &str,
    ) -> Result<WasmMatchPlayer, JsError> {
        let kind = parse_game_kind(game_kind)?;
        let rule = parse_checkout(checkout)?;
        let events = RecordingSink::new();
        let inner = MatchPlayer::new(player_id, name, kind, rule, Box::new(events.clone()));
        Ok(WasmMatchPlayer { inner, events })
    }

    #[wasm_bindgen(js_name = setGame)]
    pub fn set_game(&mut self, game_id: u32) {
        self.inner.set_game(game_id);
    }

    #[wasm_bindgen(js_name = setPlayerNum)]
    pub fn set_player_num(&mut self, player_num: u8) {
        self.inner.set_player_num(player_num);
    }

    /// Record one dart; returns "again", "done" or "winner".
    #[wasm_bindgen(js_name = recordThrow)]
    pub fn record_throw(&mut self, points: u16, label: &str) -> String {
        self.inner.record_throw(points, label).as_str().to_string()
    }

    /// Record one dart given as a JSON throw, e.g.
    /// `{"points": 60, "label": "T20"}`.
    #[wasm_bindgen(js_name = recordThrowJson)]
    pub fn record_throw_json(&mut self, throw_json: &str) -> Result<String, JsError> {
        let throw: Throw = serde_json::from_str(throw_json)
            .map_err(|e| JsError::new(&format!("Invalid throw: {}", e)))?;
        let outcome: ThrowOutcome = self.inner.record_throw(throw.points, &throw.label);
        Ok(outcome.as_str().to_string())
    }

    #[wasm_bindgen(js_name = undoLastThrow)]
    pub fn undo_last_throw(&mut self) {
        self.inner.undo_last_throw();
    }

    #[wasm_bindgen(js_name = startNewLeg)]
    pub fn start_new_leg(&mut self, game_id: u32) {
        self.inner.start_new_leg(game_id);
    }

    pub fn score(&self) -> u16 {
        self.inner.score()
    }

    #[wasm_bindgen(js_name = turnCount)]
    pub fn turn_count(&self) -> u32 {
        self.inner.turn_count() as u32
    }

    #[wasm_bindgen(js_name = bestTurnScore)]
    pub fn best_turn_score(&self) -> u16 {
        self.inner.best_turn_score()
    }

    #[wasm_bindgen(js_name = doublesAttempted)]
    pub fn doubles_attempted(&self) -> u32 {
        self.inner.doubles_attempted()
    }

    #[wasm_bindgen(js_name = legAverage)]
    pub fn leg_average(&self) -> f64 {
        self.inner.leg_average()
    }

    #[wasm_bindgen(js_name = formattedTurns)]
    pub fn formatted_turns(&self) -> String {
        self.inner.formatted_turns()
    }

    #[wasm_bindgen(js_name = lastTurnSummary)]
    pub fn last_turn_summary(&self) -> String {
        self.inner.last_turn_summary()
    }

    /// Full serializable state snapshot.
    pub fn state(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.snapshot())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Remove and return the buffered sink notifications (turn commits,
    /// undos, leg averages) for the UI to forward.
    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&mut self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.events.drain())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }
}

/// Face value of a board segment label, e.g. "T20" -> 60.
#[wasm_bindgen(js_name = segmentPoints)]
pub fn segment_points_js(label: &str) -> Result<u16, JsError> {
    segment_points(label).map_err(|e| JsError::new(&e.to_string()))
}
