use std::fmt;

use serde::{Deserialize, Serialize};

/// A single work item on the board.
///
/// Titles are not unique. Every lookup by title compares case-insensitively
/// and has to decide what to do when several cards share a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub content: String,
    /// Roster id of the assignee, validated when the card is created.
    pub assigned_person_id: i64,
    pub size: CardSize,
    pub line: BoardLine,
}

impl Card {
    /// Case-insensitive exact title comparison used by every title lookup.
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

/// Effort estimate for a card, ordered from smallest to largest.
///
/// Menu tokens:
/// - `1`: XS
/// - `2`: S
/// - `3`: M
/// - `4`: L
/// - `5`: XL
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardSize {
    XS,
    S,
    M,
    L,
    XL,
}

impl CardSize {
    pub const ALL: [CardSize; 5] = [Self::XS, Self::S, Self::M, Self::L, Self::XL];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::XS => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::XL => "XL",
        }
    }

    pub fn choice(&self) -> u8 {
        match self {
            Self::XS => 1,
            Self::S => 2,
            Self::M => 3,
            Self::L => 4,
            Self::XL => 5,
        }
    }

    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::XS),
            2 => Some(Self::S),
            3 => Some(Self::M),
            4 => Some(Self::L),
            5 => Some(Self::XL),
            _ => None,
        }
    }

    /// Parse raw menu input. Surrounding whitespace is ignored.
    pub fn parse_choice(input: &str) -> Option<Self> {
        input.trim().parse::<i64>().ok().and_then(Self::from_choice)
    }
}

impl fmt::Display for CardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The board column a card occupies.
///
/// Menu tokens:
/// - `1`: TODO
/// - `2`: IN_PROGRESS
/// - `3`: DONE
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoardLine {
    Todo,
    InProgress,
    Done,
}

impl BoardLine {
    /// Lines in display order.
    pub const ALL: [BoardLine; 3] = [Self::Todo, Self::InProgress, Self::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }

    /// Human-facing column heading.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN PROGRESS",
            Self::Done => "DONE",
        }
    }

    pub fn choice(&self) -> u8 {
        match self {
            Self::Todo => 1,
            Self::InProgress => 2,
            Self::Done => 3,
        }
    }

    /// Only the exact tokens "1", "2" and "3" select a line.
    pub fn from_choice(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Todo),
            "2" => Some(Self::InProgress),
            "3" => Some(Self::Done),
            _ => None,
        }
    }
}

impl fmt::Display for BoardLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for creating a new card. New cards always land in [`BoardLine::Todo`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCardInput {
    pub title: String,
    pub content: String,
    pub assigned_person_id: i64,
    pub size: CardSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_choices_map_both_ways() {
        for size in CardSize::ALL {
            assert_eq!(CardSize::from_choice(size.choice() as i64), Some(size));
        }
    }

    #[test]
    fn test_size_rejects_out_of_range_and_garbage() {
        assert_eq!(CardSize::from_choice(0), None);
        assert_eq!(CardSize::from_choice(6), None);
        assert_eq!(CardSize::parse_choice("-1"), None);
        assert_eq!(CardSize::parse_choice("large"), None);
        assert_eq!(CardSize::parse_choice(" 4 "), Some(CardSize::L));
    }

    #[test]
    fn test_sizes_are_ordered() {
        assert!(CardSize::XS < CardSize::S);
        assert!(CardSize::L < CardSize::XL);
    }

    #[test]
    fn test_line_choice_is_exact() {
        assert_eq!(BoardLine::from_choice("2"), Some(BoardLine::InProgress));
        assert_eq!(BoardLine::from_choice("4"), None);
        assert_eq!(BoardLine::from_choice(" 1"), None);
        assert_eq!(BoardLine::from_choice(""), None);
    }

    #[test]
    fn test_line_serializes_screaming_snake() {
        let json = serde_json::to_string(&BoardLine::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
    }

    #[test]
    fn test_title_matches_ignores_case() {
        let card = Card {
            title: "Frontend Dev".to_string(),
            content: String::new(),
            assigned_person_id: 1,
            size: CardSize::M,
            line: BoardLine::Todo,
        };
        assert!(card.title_matches("FRONTEND dev"));
        assert!(!card.title_matches("Frontend"));
    }
}
