//! JSON messages exchanged over the game hub.
//!
//! Frames are tagged objects: `{"type": "GameStarted", "message": "..."}`.
//! Unrecognized server frames decode to [`ServerEvent::Unknown`] and are
//! dropped by the connection, so a chattier hub stays compatible.

use serde::{Deserialize, Serialize};

use crate::model::RoundRecord;

/// Server-to-client hub events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerEvent {
    /// Joined the pool; no opponent yet.
    WaitingForOpponent,
    /// A match formed; the carried message becomes the page status.
    GameStarted { message: String },
    /// A round resolved.
    RoundResult {
        #[serde(flatten)]
        round: RoundRecord,
    },
    /// Our move landed first; the opponent is still choosing.
    WaitingForOpponentMove,
    #[serde(other)]
    Unknown,
}

/// Client-to-server hub invocations.
///
/// Field casing is the hub's, not ours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientCommand {
    SendMove {
        #[serde(rename = "Player")]
        player: u32,
        #[serde(rename = "PlayerName")]
        player_name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_events_decode_by_tag() {
        let e: ServerEvent = serde_json::from_str(r#"{"type":"WaitingForOpponent"}"#).unwrap();
        assert_eq!(e, ServerEvent::WaitingForOpponent);

        let e: ServerEvent =
            serde_json::from_str(r#"{"type":"GameStarted","message":"Game started!"}"#).unwrap();
        assert_eq!(
            e,
            ServerEvent::GameStarted { message: "Game started!".to_string() }
        );

        let e: ServerEvent = serde_json::from_str(
            r#"{"type":"RoundResult","playerChoice":1,"opponentChoice":4,"result":"Lose"}"#,
        )
        .unwrap();
        assert_eq!(
            e,
            ServerEvent::RoundResult {
                round: RoundRecord {
                    player_choice: 1,
                    opponent_choice: Some(4),
                    result: "Lose".to_string(),
                },
            }
        );
    }

    #[test]
    fn unrecognized_events_decode_to_unknown() {
        let e: ServerEvent =
            serde_json::from_str(r#"{"type":"ServerRestarting","in":30}"#).unwrap();
        assert_eq!(e, ServerEvent::Unknown);
    }

    #[test]
    fn send_move_serializes_with_hub_casing() {
        let cmd = ClientCommand::SendMove { player: 3, player_name: "Alice".to_string() };
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "SendMove", "Player": 3, "PlayerName": "Alice"})
        );
    }
}
