//! Plain-text rendering of cards and the board listing.

use super::{Board, Roster};
use crate::models::{BoardLine, Card};

/// Marker printed for a line with no cards.
pub const EMPTY_MARKER: &str = "~ EMPTY ~";

const RULE: &str = "************************";

/// Render a card's title, content, assignee and size.
///
/// Example output:
/// ```text
/// Title       : Frontend Dev
/// Content     : Develop user interface
/// Assigned To : John Doe
/// Size        : M
/// -
/// ```
pub fn render_card(card: &Card, roster: &Roster) -> String {
    let mut output = String::new();
    push_field(&mut output, "Title", &card.title);
    push_field(&mut output, "Content", &card.content);
    push_field(
        &mut output,
        "Assigned To",
        roster.name_or_unknown(card.assigned_person_id),
    );
    push_field(&mut output, "Size", card.size.as_str());
    output.push_str("-\n");
    output
}

/// Like [`render_card`], followed by the card's current line.
pub fn render_card_with_line(card: &Card, roster: &Roster) -> String {
    let mut output = render_card(card, roster);
    push_field(&mut output, "Line", card.line.as_str());
    output
}

/// Render every line with a heading, TODO first.
pub fn render_board(board: &Board) -> String {
    let mut output = String::new();
    for group in board.grouped() {
        render_line(&mut output, group.line, &group.cards, board.roster());
    }
    output
}

fn render_line(output: &mut String, line: BoardLine, cards: &[&Card], roster: &Roster) {
    output.push_str(&format!("\n--- {} Line ---\n", line.label()));
    output.push_str(RULE);
    output.push('\n');

    if cards.is_empty() {
        output.push_str(EMPTY_MARKER);
        output.push('\n');
        return;
    }

    for card in cards {
        output.push_str(&render_card(card, roster));
    }
}

fn push_field(output: &mut String, label: &str, value: &str) {
    output.push_str(&format!("{:<12}: {}\n", label, value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CardSize;

    fn make_card(title: &str, assignee: i64, line: BoardLine) -> Card {
        Card {
            title: title.to_string(),
            content: format!("{} content", title),
            assigned_person_id: assignee,
            size: CardSize::S,
            line,
        }
    }

    #[test]
    fn test_card_details() {
        let output = render_card(&make_card("Docs", 2, BoardLine::Todo), &Roster::default());
        assert_eq!(
            output,
            "Title       : Docs\nContent     : Docs content\nAssigned To : Jane Smith\nSize        : S\n-\n"
        );
    }

    #[test]
    fn test_unknown_assignee() {
        let output = render_card(&make_card("Docs", 77, BoardLine::Todo), &Roster::default());
        assert!(output.contains("Assigned To : Unknown\n"));
    }

    #[test]
    fn test_card_with_line() {
        let output =
            render_card_with_line(&make_card("Docs", 1, BoardLine::InProgress), &Roster::default());
        assert!(output.ends_with("-\nLine        : IN_PROGRESS\n"));
    }

    #[test]
    fn test_empty_board_marks_every_line() {
        let output = render_board(&Board::new(Roster::default()));
        assert_eq!(output.matches(EMPTY_MARKER).count(), 3);
        let todo = output.find("--- TODO Line ---").unwrap();
        let progress = output.find("--- IN PROGRESS Line ---").unwrap();
        let done = output.find("--- DONE Line ---").unwrap();
        assert!(todo < progress && progress < done);
    }

    #[test]
    fn test_groups_keep_store_order() {
        let board = Board::with_cards(
            Roster::default(),
            vec![
                make_card("First", 1, BoardLine::Done),
                make_card("Second", 1, BoardLine::Todo),
                make_card("Third", 1, BoardLine::Done),
            ],
        )
        .unwrap();

        let output = render_board(&board);
        let done = output.find("--- DONE Line ---").unwrap();
        let first = output.find("Title       : First").unwrap();
        let third = output.find("Title       : Third").unwrap();
        assert!(done < first && first < third);
        assert_eq!(output.matches(EMPTY_MARKER).count(), 1);
    }
}
