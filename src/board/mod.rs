//! Board state: the team roster plus the ordered card store.
//!
//! Cards are kept in insertion order. Nothing here ever re-sorts the store,
//! so listing a line always shows its cards in the order they were added.

mod render;
mod roster;

pub use render::*;
pub use roster::*;

use crate::error::BoardError;
use crate::models::*;

/// The whole board, owned by whoever drives the session.
#[derive(Debug, Clone, Default)]
pub struct Board {
    roster: Roster,
    cards: Vec<Card>,
}

/// Cards of one line, in store order.
#[derive(Debug, Clone)]
pub struct LineGroup<'a> {
    pub line: BoardLine,
    pub cards: Vec<&'a Card>,
}

/// Result of a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovedCard {
    pub card: Card,
    pub from: BoardLine,
}

impl Board {
    /// An empty board with the given roster.
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            cards: Vec::new(),
        }
    }

    /// A board pre-loaded with `cards` in the given order.
    ///
    /// Every card must be assigned to a roster member.
    pub fn with_cards(roster: Roster, cards: Vec<Card>) -> Result<Self, BoardError> {
        if let Some(card) = cards.iter().find(|c| !roster.exists(c.assigned_person_id)) {
            return Err(BoardError::UnknownMember(card.assigned_person_id));
        }
        Ok(Self { roster, cards })
    }

    /// Default roster and the four starter cards.
    pub fn seeded() -> Self {
        Self {
            roster: Roster::default(),
            cards: default_cards(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards_in_line(&self, line: BoardLine) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().filter(move |c| c.line == line)
    }

    /// Partition the store by line, TODO first. Empty lines are still present.
    pub fn grouped(&self) -> Vec<LineGroup<'_>> {
        BoardLine::ALL
            .iter()
            .map(|&line| LineGroup {
                line,
                cards: self.cards_in_line(line).collect(),
            })
            .collect()
    }

    /// Append a new card to the TODO line.
    pub fn add_card(&mut self, input: CreateCardInput) -> Result<&Card, BoardError> {
        if !self.roster.exists(input.assigned_person_id) {
            return Err(BoardError::UnknownMember(input.assigned_person_id));
        }

        self.cards.push(Card {
            title: input.title,
            content: input.content,
            assigned_person_id: input.assigned_person_id,
            size: input.size,
            line: BoardLine::Todo,
        });
        tracing::debug!(count = self.cards.len(), "card appended to store");

        Ok(&self.cards[self.cards.len() - 1])
    }

    /// All cards whose title matches case-insensitively, in store order.
    pub fn find_by_title(&self, title: &str) -> Vec<&Card> {
        self.cards.iter().filter(|c| c.title_matches(title)).collect()
    }

    /// The earliest-inserted card whose title matches case-insensitively.
    pub fn find_first_by_title(&self, title: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.title_matches(title))
    }

    /// Store index of the earliest-inserted card whose title matches.
    pub fn position_by_title(&self, title: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.title_matches(title))
    }

    /// Remove every card whose title matches case-insensitively.
    ///
    /// Ambiguous titles are resolved by deleting all matches. The remaining
    /// cards keep their relative order. Returns the removed cards.
    pub fn delete_by_title(&mut self, title: &str) -> Result<Vec<Card>, BoardError> {
        let (removed, kept): (Vec<Card>, Vec<Card>) = std::mem::take(&mut self.cards)
            .into_iter()
            .partition(|c| c.title_matches(title));
        self.cards = kept;

        if removed.is_empty() {
            return Err(BoardError::CardNotFound(title.to_string()));
        }
        Ok(removed)
    }

    /// Move the first card matching `title` to `line`.
    ///
    /// Only that card's line changes; its position in the store does not.
    pub fn move_first_by_title(
        &mut self,
        title: &str,
        line: BoardLine,
    ) -> Result<MovedCard, BoardError> {
        let index = self
            .position_by_title(title)
            .ok_or_else(|| BoardError::CardNotFound(title.to_string()))?;
        Ok(self.move_at(index, line))
    }

    /// Set the line of the card at `index` in the store.
    ///
    /// # Panics
    /// If `index` is out of bounds. Indexes come from [`Board::position_by_title`].
    pub fn move_at(&mut self, index: usize, line: BoardLine) -> MovedCard {
        let card = &mut self.cards[index];
        let from = card.line;
        card.line = line;
        MovedCard {
            card: card.clone(),
            from,
        }
    }
}

/// Validate raw size menu input (`1`..=`5`).
pub fn parse_size_choice(input: &str) -> Result<CardSize, BoardError> {
    CardSize::parse_choice(input).ok_or_else(|| BoardError::InvalidSize(input.to_string()))
}

/// Validate raw destination menu input (`1`, `2` or `3`).
pub fn parse_line_choice(input: &str) -> Result<BoardLine, BoardError> {
    BoardLine::from_choice(input).ok_or_else(|| BoardError::InvalidLine(input.to_string()))
}

/// Parse raw assignee input as a numeric id. Roster membership is checked by
/// [`Board::add_card`].
pub fn parse_member_id(input: &str) -> Result<i64, BoardError> {
    input
        .trim()
        .parse()
        .map_err(|_| BoardError::InvalidMemberInput(input.to_string()))
}

pub fn default_cards() -> Vec<Card> {
    let card = |title: &str, content: &str, assigned_person_id, size, line| Card {
        title: title.to_string(),
        content: content.to_string(),
        assigned_person_id,
        size,
        line,
    };

    vec![
        card("Frontend Dev", "Develop user interface", 1, CardSize::M, BoardLine::Todo),
        card("Backend API", "Create RESTful endpoints", 2, CardSize::L, BoardLine::InProgress),
        card("Database Setup", "Configure SQL database", 1, CardSize::S, BoardLine::Done),
        card("User Auth", "Implement user authentication", 3, CardSize::XL, BoardLine::Todo),
    ]
}
