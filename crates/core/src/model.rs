//! Wire types shared with the game API, plus the lookups the tables need.

use serde::{Deserialize, Serialize};

/// One playable move, enumerated by the server. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: u32,
    pub name: String,
}

/// The choice catalog fetched from the server, cached for a page's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChoiceSet {
    choices: Vec<Choice>,
}

impl ChoiceSet {
    pub fn new(choices: Vec<Choice>) -> Self {
        Self { choices }
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn into_vec(self) -> Vec<Choice> {
        self.choices
    }

    /// Reverse lookup by id for rendering history rows.
    pub fn name_of(&self, id: u32) -> String {
        self.choices
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| format!("Unknown ({id})"))
    }

    /// Like [`name_of`](Self::name_of), for an opponent move that may still
    /// be unresolved.
    pub fn name_of_opt(&self, id: Option<u32>) -> String {
        match id {
            Some(id) => self.name_of(id),
            None => "Unknown".to_string(),
        }
    }
}

/// Outcome of one solo move against the server-chosen opponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayResult {
    pub results: String,
    pub player: u32,
    pub computer: u32,
}

/// One live round. `opponent_choice` stays `None` until the server resolves
/// the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    pub player_choice: u32,
    #[serde(default)]
    pub opponent_choice: Option<u32>,
    pub result: String,
}

/// Server-owned score line; read-only on this side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub player_name: String,
    pub result: String,
}

/// The "selected" player for the per-player leaderboard: the name on the
/// most recent global record.
///
/// Deriving this from the first row (rather than from the locally stored
/// name) mirrors the served behavior; see DESIGN.md before changing it.
pub fn selected_player(records: &[ScoreRecord]) -> Option<&str> {
    records.first().map(|r| r.player_name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ChoiceSet {
        ChoiceSet::new(
            [(1, "Rock"), (2, "Paper"), (3, "Scissors"), (4, "Spock"), (5, "Lizard")]
                .into_iter()
                .map(|(id, name)| Choice { id, name: name.to_string() })
                .collect(),
        )
    }

    #[test]
    fn reverse_lookup_renders_history_row() {
        let choices = catalog();
        let result = PlayResult {
            results: "Lose".to_string(),
            player: 1,
            computer: 4,
        };
        assert_eq!(choices.name_of(result.player), "Rock");
        assert_eq!(choices.name_of(result.computer), "Spock");
        assert_eq!(result.results, "Lose");
    }

    #[test]
    fn unknown_ids_fall_back_to_placeholder() {
        let choices = catalog();
        assert_eq!(choices.name_of(9), "Unknown (9)");
        assert_eq!(choices.name_of_opt(None), "Unknown");
        assert_eq!(choices.name_of_opt(Some(5)), "Lizard");
    }

    #[test]
    fn selected_player_is_first_record() {
        let records = vec![
            ScoreRecord { player_name: "Alice".to_string(), result: "Win".to_string() },
            ScoreRecord { player_name: "Bob".to_string(), result: "Lose".to_string() },
        ];
        assert_eq!(selected_player(&records), Some("Alice"));
        assert_eq!(selected_player(&[]), None);
    }

    #[test]
    fn wire_field_names_match_the_api() {
        let choice: Choice = serde_json::from_str(r#"{"id":1,"name":"Rock"}"#).unwrap();
        assert_eq!(choice, Choice { id: 1, name: "Rock".to_string() });

        let play: PlayResult =
            serde_json::from_str(r#"{"results":"Win","player":2,"computer":3}"#).unwrap();
        assert_eq!(play.player, 2);

        let round: RoundRecord =
            serde_json::from_str(r#"{"playerChoice":2,"opponentChoice":null,"result":"Tie"}"#)
                .unwrap();
        assert_eq!(round.opponent_choice, None);

        let score: ScoreRecord =
            serde_json::from_str(r#"{"playerName":"Alice","result":"Win"}"#).unwrap();
        assert_eq!(score.player_name, "Alice");
    }
}
