use std::fs;

use kanban_board::config::BoardConfig;
use kanban_board::models::*;
use speculate2::speculate;
use tempfile::TempDir;

speculate! {
    before {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
    }

    describe "load_from" {
        it "builds a board from a custom roster and cards" {
            fs::write(&path, r#"{
                "members": [{"id": 10, "name": "Ada"}, {"id": 11, "name": "Linus"}],
                "cards": [
                    {"title": "Ship it", "content": "Release", "assigned_person_id": 11, "size": "XL", "line": "IN_PROGRESS"}
                ]
            }"#).expect("Failed to write config");

            let board = BoardConfig::load_from(&path)
                .expect("Failed to load")
                .into_board()
                .expect("Failed to build board");

            assert_eq!(board.roster().name_or_unknown(11), "Linus");
            assert_eq!(board.roster().name_or_unknown(1), "Unknown");
            assert_eq!(board.len(), 1);
            assert_eq!(board.cards()[0].size, CardSize::XL);
            assert_eq!(board.cards()[0].line, BoardLine::InProgress);
        }

        it "fails on malformed JSON" {
            fs::write(&path, "{ not json").expect("Failed to write config");
            assert!(BoardConfig::load_from(&path).is_err());
        }

        it "fails on a missing file" {
            assert!(BoardConfig::load_from(&dir.path().join("absent.json")).is_err());
        }
    }

    describe "into_board" {
        it "rejects duplicate member ids" {
            fs::write(&path, r#"{"members": [{"id": 1, "name": "A"}, {"id": 1, "name": "B"}], "cards": []}"#)
                .expect("Failed to write config");

            let result = BoardConfig::load_from(&path).expect("Failed to load").into_board();
            assert!(result.is_err());
        }

        it "rejects cards assigned to unknown members" {
            fs::write(&path, r#"{
                "members": [{"id": 1, "name": "A"}],
                "cards": [{"title": "T", "content": "C", "assigned_person_id": 2, "size": "S", "line": "TODO"}]
            }"#).expect("Failed to write config");

            let result = BoardConfig::load_from(&path).expect("Failed to load").into_board();
            assert!(result.is_err());
        }
    }
}
