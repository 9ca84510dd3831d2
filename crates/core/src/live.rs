//! State machine for a live match against a real opponent.
//!
//! The machine is pure: the page feeds it the join/leave actions and the
//! events pushed over the hub, mirrors its state into the view, and carries
//! out the [`LiveEffect`]s it returns. All network and timer work stays on
//! the page side.

use crate::model::RoundRecord;
use crate::protocol::{ClientCommand, ServerEvent};
use crate::window::{TrailingWindow, RECENT_WINDOW};

/// Where the match currently stands.
///
/// `RoundResolved` is playable like `InRound`; it only signals that a result
/// line is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LivePhase {
    #[default]
    Disconnected,
    Connecting,
    WaitingForOpponent,
    InRound,
    AwaitingOpponentMove,
    RoundResolved,
}

/// Work the page must do after feeding the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveEffect {
    /// A new game may use a different choice set; re-fetch the catalog.
    ReloadChoices,
    /// A round landed on the scoreboard; nudge the results viewer.
    BumpRefresh,
}

#[derive(Debug, Clone)]
pub struct LiveMatch {
    phase: LivePhase,
    status: String,
    round_status: Option<String>,
    pending_move: Option<u32>,
    rounds: TrailingWindow<RoundRecord>,
}

impl LiveMatch {
    pub fn new() -> Self {
        Self {
            phase: LivePhase::Disconnected,
            status: "Not connected".to_string(),
            round_status: None,
            pending_move: None,
            rounds: TrailingWindow::new(RECENT_WINDOW),
        }
    }

    pub fn phase(&self) -> LivePhase {
        self.phase
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn round_status(&self) -> Option<&str> {
        self.round_status.as_deref()
    }

    /// The move sent for the current round, kept until its result arrives so
    /// the view can disable re-submission.
    pub fn pending_move(&self) -> Option<u32> {
        self.pending_move
    }

    pub fn rounds(&self) -> &TrailingWindow<RoundRecord> {
        &self.rounds
    }

    /// The join action. Returns false (and does nothing) unless currently
    /// disconnected; joining is the only way out of `Disconnected`.
    pub fn join(&mut self) -> bool {
        if self.phase != LivePhase::Disconnected {
            return false;
        }
        self.phase = LivePhase::Connecting;
        self.status = "Connecting...".to_string();
        true
    }

    /// The channel handshake completed.
    pub fn opened(&mut self) {
        if self.phase == LivePhase::Connecting {
            self.status = "Joining game...".to_string();
        }
    }

    /// The channel handshake failed; the user must retry via the join action.
    pub fn handshake_failed(&mut self) {
        self.reset();
        self.status = "Failed to connect".to_string();
    }

    /// Local move submission. Returns the command to send, or `None` when a
    /// move is already pending or no round is open.
    pub fn send_move(&mut self, choice_id: u32, player_name: &str) -> Option<ClientCommand> {
        if self.pending_move.is_some() {
            return None;
        }
        if !matches!(self.phase, LivePhase::InRound | LivePhase::RoundResolved) {
            return None;
        }
        self.pending_move = Some(choice_id);
        self.phase = LivePhase::AwaitingOpponentMove;
        self.round_status = Some("Move sent. Waiting for opponent...".to_string());
        Some(ClientCommand::SendMove {
            player: choice_id,
            player_name: player_name.to_string(),
        })
    }

    /// A server-pushed event. Events arriving while disconnected are ignored
    /// (the connection and its handlers are already gone).
    pub fn on_event(&mut self, event: ServerEvent) -> Vec<LiveEffect> {
        if self.phase == LivePhase::Disconnected {
            return Vec::new();
        }
        match event {
            ServerEvent::WaitingForOpponent => {
                self.phase = LivePhase::WaitingForOpponent;
                self.status = "Waiting for opponent...".to_string();
                Vec::new()
            }
            ServerEvent::GameStarted { message } => {
                self.phase = LivePhase::InRound;
                self.status = message;
                vec![LiveEffect::ReloadChoices]
            }
            ServerEvent::RoundResult { round } => {
                // Appended in arrival order, pending or not; results are
                // trusted to arrive at most once per move and in round order.
                self.round_status = Some(round.result.clone());
                self.rounds.push(round);
                self.pending_move = None;
                self.phase = LivePhase::RoundResolved;
                vec![LiveEffect::BumpRefresh]
            }
            ServerEvent::WaitingForOpponentMove => {
                self.round_status = Some("Waiting for opponent's move...".to_string());
                Vec::new()
            }
            ServerEvent::Unknown => Vec::new(),
        }
    }

    /// The return-to-main action: tear down and clear everything.
    pub fn leave(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.phase = LivePhase::Disconnected;
        self.status = "Not connected".to_string();
        self.round_status = None;
        self.pending_move = None;
        self.rounds.clear();
    }
}

impl Default for LiveMatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(player: u32, opponent: Option<u32>, result: &str) -> ServerEvent {
        ServerEvent::RoundResult {
            round: RoundRecord {
                player_choice: player,
                opponent_choice: opponent,
                result: result.to_string(),
            },
        }
    }

    fn started() -> LiveMatch {
        let mut m = LiveMatch::new();
        assert!(m.join());
        m.opened();
        m.on_event(ServerEvent::WaitingForOpponent);
        m.on_event(ServerEvent::GameStarted { message: "Game started!".to_string() });
        m
    }

    #[test]
    fn only_join_leaves_disconnected() {
        let mut m = LiveMatch::new();
        m.on_event(ServerEvent::WaitingForOpponent);
        m.on_event(ServerEvent::GameStarted { message: "hi".to_string() });
        m.on_event(round(1, Some(2), "Win"));
        assert_eq!(m.phase(), LivePhase::Disconnected);
        assert!(m.rounds().is_empty());
        assert_eq!(m.send_move(1, "Alice"), None);

        assert!(m.join());
        assert_eq!(m.phase(), LivePhase::Connecting);
        assert!(!m.join(), "join is a no-op once underway");
    }

    #[test]
    fn happy_path_reaches_a_resolved_round() {
        let mut m = LiveMatch::new();
        assert!(m.join());
        m.opened();
        assert_eq!(m.status(), "Joining game...");

        assert!(m.on_event(ServerEvent::WaitingForOpponent).is_empty());
        assert_eq!(m.phase(), LivePhase::WaitingForOpponent);
        assert_eq!(m.status(), "Waiting for opponent...");

        let effects = m.on_event(ServerEvent::GameStarted { message: "Game on".to_string() });
        assert_eq!(effects, vec![LiveEffect::ReloadChoices]);
        assert_eq!(m.status(), "Game on");

        let cmd = m.send_move(3, "Alice");
        assert_eq!(
            cmd,
            Some(ClientCommand::SendMove { player: 3, player_name: "Alice".to_string() })
        );
        assert_eq!(m.phase(), LivePhase::AwaitingOpponentMove);
        assert_eq!(m.pending_move(), Some(3));

        // Status-only self-loop while the opponent chooses.
        assert!(m.on_event(ServerEvent::WaitingForOpponentMove).is_empty());
        assert_eq!(m.phase(), LivePhase::AwaitingOpponentMove);
        assert_eq!(m.round_status(), Some("Waiting for opponent's move..."));

        let effects = m.on_event(round(3, Some(5), "Win"));
        assert_eq!(effects, vec![LiveEffect::BumpRefresh]);
        assert_eq!(m.phase(), LivePhase::RoundResolved);
        assert_eq!(m.pending_move(), None, "result clears the pending move");
        assert_eq!(m.rounds().len(), 1);
        assert_eq!(m.round_status(), Some("Win"));
    }

    #[test]
    fn pending_move_blocks_resubmission() {
        let mut m = started();
        assert!(m.send_move(1, "Alice").is_some());
        assert!(m.send_move(2, "Alice").is_none());
        assert_eq!(m.pending_move(), Some(1));

        m.on_event(round(1, Some(2), "Lose"));
        assert!(m.send_move(2, "Alice").is_some(), "playable again once resolved");
    }

    #[test]
    fn round_history_is_a_trailing_window() {
        let mut m = started();
        for n in 1..=8 {
            assert!(m.send_move(n, "Alice").is_some());
            m.on_event(round(n, Some(1), "Win"));
        }
        assert_eq!(m.rounds().len(), 5);
        let kept: Vec<u32> = m.rounds().iter().map(|r| r.player_choice).collect();
        assert_eq!(kept, vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn unsolicited_round_result_is_still_recorded() {
        // No move pending; the server's word is taken as-is (see DESIGN.md).
        let mut m = started();
        let effects = m.on_event(round(2, None, "Tie"));
        assert_eq!(effects, vec![LiveEffect::BumpRefresh]);
        assert_eq!(m.rounds().len(), 1);
        assert_eq!(m.rounds().as_slice()[0].opponent_choice, None);
    }

    #[test]
    fn leave_always_lands_disconnected_and_clear() {
        let mut m = started();
        m.send_move(1, "Alice");
        m.on_event(round(1, Some(4), "Lose"));
        m.leave();
        assert_eq!(m.phase(), LivePhase::Disconnected);
        assert_eq!(m.status(), "Not connected");
        assert_eq!(m.round_status(), None);
        assert_eq!(m.pending_move(), None);
        assert!(m.rounds().is_empty());
    }

    #[test]
    fn handshake_failure_returns_to_disconnected_with_message() {
        let mut m = LiveMatch::new();
        assert!(m.join());
        m.handshake_failed();
        assert_eq!(m.phase(), LivePhase::Disconnected);
        assert_eq!(m.status(), "Failed to connect");
        assert!(m.join(), "manual retry is allowed");
    }

    #[test]
    fn unknown_events_change_nothing() {
        let mut m = started();
        let before = format!("{m:?}");
        assert!(m.on_event(ServerEvent::Unknown).is_empty());
        assert_eq!(format!("{m:?}"), before);
    }
}
