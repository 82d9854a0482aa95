//! Unit tests for player API wire types

use super::*;
use serde_json::json;

fn comparison_json(choices: serde_json::Value) -> serde_json::Value {
    json!({
        "data": {
            "id": "chatcmpl-123",
            "model": "gpt-3.5-turbo-0613",
            "object": "chat.completion",
            "created": 1698000000,
            "usage": {
                "completion_tokens": 40,
                "prompt_tokens": 25,
                "total_tokens": 65
            },
            "choices": choices
        }
    })
}

#[cfg(test)]
mod player_tests {
    use super::*;

    #[test]
    fn test_player_deserialization_maps_snake_case_keys() {
        let player: Player = serde_json::from_value(json!({
            "id": "17",
            "name": "Alice",
            "team": "B",
            "position": "WR",
            "games_played": 5,
            "type": "offense"
        }))
        .unwrap();

        assert_eq!(player.id, PlayerId::new("17"));
        assert_eq!(player.games_played, 5);
        assert_eq!(player.kind, "offense");
    }

    #[test]
    fn test_player_missing_field_fails() {
        let result = serde_json::from_value::<Player>(json!({
            "id": "17",
            "name": "Alice",
            "team": "B",
            "position": "WR",
            "type": "offense"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_games_played_rejected() {
        let result = serde_json::from_value::<Player>(json!({
            "id": "1",
            "name": "Alice",
            "team": "B",
            "position": "WR",
            "games_played": -1,
            "type": "offense"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_player_serializes_back_to_wire_names() {
        let player = Player {
            id: PlayerId::new("9"),
            name: "Bob".to_string(),
            team: "A".to_string(),
            position: "QB".to_string(),
            games_played: 3,
            kind: "offense".to_string(),
        };

        let value = serde_json::to_value(&player).unwrap();
        assert_eq!(value["id"], "9");
        assert_eq!(value["games_played"], 3);
        assert_eq!(value["type"], "offense");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_player_display() {
        let player = Player {
            id: PlayerId::new("9"),
            name: "Bob".to_string(),
            team: "A".to_string(),
            position: "QB".to_string(),
            games_played: 3,
            kind: "offense".to_string(),
        };
        assert_eq!(player.to_string(), "Bob (A, QB, 3 games)");
    }

    #[test]
    fn test_player_envelope_requires_data_key() {
        let result = serde_json::from_value::<PlayerEnvelope>(json!({ "players": [] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_roster_envelope() {
        let envelope: PlayerEnvelope = serde_json::from_value(json!({ "data": [] })).unwrap();
        assert!(envelope.data.is_empty());
    }
}

#[cfg(test)]
mod comparison_tests {
    use super::*;

    #[test]
    fn test_comparison_envelope_decodes_nested_fields() {
        let envelope: ComparisonEnvelope = serde_json::from_value(comparison_json(json!([
            {
                "finish_reason": "stop",
                "index": 0,
                "message": { "content": "Bob scores more.", "role": "assistant" }
            }
        ])))
        .unwrap();

        let comparison = envelope.data;
        assert_eq!(comparison.model, "gpt-3.5-turbo-0613");
        assert_eq!(comparison.object, "chat.completion");
        assert_eq!(comparison.created, 1698000000);
        assert_eq!(
            comparison.usage,
            Usage {
                completion_tokens: 40,
                prompt_tokens: 25,
                total_tokens: 65
            }
        );
        assert_eq!(comparison.choices[0].finish_reason, "stop");
        assert_eq!(comparison.choices[0].message.role, "assistant");
        assert_eq!(comparison.first_message().unwrap(), "Bob scores more.");
    }

    #[test]
    fn test_only_first_choice_is_surfaced() {
        let envelope: ComparisonEnvelope = serde_json::from_value(comparison_json(json!([
            {
                "finish_reason": "stop",
                "index": 0,
                "message": { "content": "first", "role": "assistant" }
            },
            {
                "finish_reason": "stop",
                "index": 1,
                "message": { "content": "second", "role": "assistant" }
            }
        ])))
        .unwrap();

        assert_eq!(envelope.data.into_first_message().unwrap(), "first");
    }

    #[test]
    fn test_empty_choices_is_checked() {
        let envelope: ComparisonEnvelope =
            serde_json::from_value(comparison_json(json!([]))).unwrap();

        assert!(matches!(
            envelope.data.first_message(),
            Err(FantasyError::EmptyChoices)
        ));
        assert!(matches!(
            envelope.data.into_first_message(),
            Err(FantasyError::EmptyChoices)
        ));
    }

    #[test]
    fn test_comparison_missing_usage_fails() {
        let result = serde_json::from_value::<ComparisonEnvelope>(json!({
            "data": {
                "id": "x",
                "model": "m",
                "object": "chat.completion",
                "created": 1,
                "choices": []
            }
        }));
        assert!(result.is_err());
    }
}
