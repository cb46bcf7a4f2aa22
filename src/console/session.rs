use std::io::{BufRead, Write};

use crate::board::{
    parse_line_choice, parse_member_id, parse_size_choice, render_board, render_card_with_line,
    Board, MovedCard,
};
use crate::error::{BoardError, ConsoleError, ConsoleResult};
use crate::models::{Card, CardSize, CreateCardInput};

const SIZE_PROMPT: &str = "Select Size -> XS(1),S(2),M(3),L(4),XL(5)  : ";
const NOT_FOUND: &str =
    "No card matching your criteria was found on the board. Please make a selection.";

/// What the operator picked after a title lookup found nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryChoice {
    /// `1`: stop the operation.
    End,
    /// `2`: start the operation again from the title prompt.
    Retry,
    /// Anything else. Stops the operation with a different message.
    Invalid,
}

impl RecoveryChoice {
    pub fn from_token(token: &str) -> Self {
        match token {
            "1" => Self::End,
            "2" => Self::Retry,
            _ => Self::Invalid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(Card),
    /// The assignee input was not numeric or not on the roster.
    Cancelled(BoardError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Every card matching the title, in the order they were stored.
    Deleted(Vec<Card>),
    /// No match, and the operator did not retry.
    NotFound(RecoveryChoice),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(MovedCard),
    /// The destination input was not `1`, `2` or `3`.
    InvalidLine(BoardError),
    /// No match, and the operator did not retry.
    NotFound(RecoveryChoice),
}

/// One operator working against one board.
pub struct Session<'a, R, W> {
    pub(super) board: &'a mut Board,
    pub(super) input: R,
    pub(super) output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(board: &'a mut Board, input: R, output: W) -> Self {
        Self {
            board,
            input,
            output,
        }
    }

    pub fn board(&self) -> &Board {
        &*self.board
    }

    /// Print all three lines with their cards.
    pub fn list_board(&mut self) -> ConsoleResult<()> {
        write!(self.output, "{}", render_board(self.board))?;
        Ok(())
    }

    /// Prompt for a new card and append it to TODO.
    ///
    /// A bad size is re-prompted. A bad assignee cancels the whole add.
    pub fn add_card(&mut self) -> ConsoleResult<AddOutcome> {
        let title = self.prompt("Enter Title                                : ", "title")?;
        let content = self.prompt("Enter Content                              : ", "content")?;
        let size = self.prompt_size()?;

        // Roster membership is checked by the board, not here.
        let added = match self.prompt_assignee()? {
            Ok(assigned_person_id) => self
                .board
                .add_card(CreateCardInput {
                    title,
                    content,
                    assigned_person_id,
                    size,
                })
                .cloned(),
            Err(e) => Err(e),
        };

        match added {
            Ok(card) => {
                tracing::info!(title = %card.title, size = %card.size, "Card added");
                writeln!(self.output, "Card added successfully to TODO line!")?;
                Ok(AddOutcome::Added(card))
            }
            Err(e) => {
                match &e {
                    BoardError::UnknownMember(_) => {
                        writeln!(self.output, "Invalid ID. No team member found with that ID.")?
                    }
                    _ => writeln!(self.output, "Invalid input. Please enter a numeric ID.")?,
                }
                writeln!(self.output, "Invalid entries made! Operation cancelled.")?;
                tracing::info!("Card addition cancelled: {}", e);
                Ok(AddOutcome::Cancelled(e))
            }
        }
    }

    /// Delete every card with the entered title.
    pub fn delete_card(&mut self) -> ConsoleResult<DeleteOutcome> {
        loop {
            let title = self.prompt(
                "\nFirst, you need to select the card you want to delete. Please enter the card title: ",
                "card title",
            )?;

            match self.board.delete_by_title(&title) {
                Ok(removed) => {
                    tracing::info!(title = %title, count = removed.len(), "Cards deleted");
                    writeln!(
                        self.output,
                        "{} card(s) with title '{}' deleted successfully!",
                        removed.len(),
                        title
                    )?;
                    return Ok(DeleteOutcome::Deleted(removed));
                }
                Err(e) => {
                    tracing::info!("Delete lookup failed: {}", e);
                    writeln!(self.output, "{}", NOT_FOUND)?;
                    match self.recover("delete")? {
                        RecoveryChoice::Retry => continue,
                        choice => return Ok(DeleteOutcome::NotFound(choice)),
                    }
                }
            }
        }
    }

    /// Move the first card with the entered title to another line.
    pub fn move_card(&mut self) -> ConsoleResult<MoveOutcome> {
        let index = loop {
            let title = self.prompt(
                "\nFirst, you need to select the card you want to move. Please enter the card title: ",
                "card title",
            )?;

            if let Some(index) = self.board.position_by_title(&title) {
                let details = render_card_with_line(&self.board.cards()[index], self.board.roster());
                writeln!(self.output, "\nFound Card Information:")?;
                writeln!(self.output, "**************************************")?;
                write!(self.output, "{}", details)?;
                break index;
            }

            tracing::info!(title = %title, "Move lookup found no card");
            writeln!(self.output, "{}", NOT_FOUND)?;
            match self.recover("move")? {
                RecoveryChoice::Retry => continue,
                choice => return Ok(MoveOutcome::NotFound(choice)),
            }
        };

        writeln!(self.output, "\nPlease select the Line you want to move to:")?;
        writeln!(self.output, "(1) TODO")?;
        writeln!(self.output, "(2) IN PROGRESS")?;
        writeln!(self.output, "(3) DONE")?;
        let choice = self.prompt("Your choice: ", "line choice")?;

        let line = match parse_line_choice(&choice) {
            Ok(line) => line,
            Err(e) => {
                tracing::info!("Move cancelled: {}", e);
                writeln!(self.output, "You made an invalid selection! Operation cancelled.")?;
                return Ok(MoveOutcome::InvalidLine(e));
            }
        };

        let moved = self.board.move_at(index, line);

        tracing::info!(title = %moved.card.title, from = %moved.from, to = %line, "Card moved");
        writeln!(
            self.output,
            "Card '{}' moved to {} line successfully!",
            moved.card.title, line
        )?;
        self.list_board()?;
        Ok(MoveOutcome::Moved(moved))
    }

    /// Offer end-or-retry after a failed title lookup.
    fn recover(&mut self, operation: &str) -> ConsoleResult<RecoveryChoice> {
        writeln!(self.output, "* To end the {}: (1)", operation)?;
        writeln!(self.output, "* To try again        : (2)")?;
        let token = self.prompt("Your choice: ", "recovery choice")?;

        let choice = RecoveryChoice::from_token(&token);
        if choice == RecoveryChoice::Invalid {
            writeln!(self.output, "Invalid choice. Returning to main menu.")?;
        }
        tracing::debug!(?choice, operation, "not-found recovery");
        Ok(choice)
    }

    fn prompt_size(&mut self) -> ConsoleResult<CardSize> {
        loop {
            let input = self.prompt(SIZE_PROMPT, "size")?;
            match parse_size_choice(&input) {
                Ok(size) => return Ok(size),
                Err(e) => {
                    tracing::debug!("{}", e);
                    writeln!(
                        self.output,
                        "Invalid size input. Please enter a number between 1 and 5."
                    )?;
                }
            }
        }
    }

    fn prompt_assignee(&mut self) -> ConsoleResult<Result<i64, BoardError>> {
        writeln!(self.output, "Available Team Members:")?;
        for member in self.board.roster().members() {
            writeln!(self.output, "- {}: {}", member.id, member.name)?;
        }
        let input = self.prompt("Select Person ID                           : ", "person id")?;
        Ok(parse_member_id(&input))
    }

    /// Write `text` without a newline, then read one line of input.
    pub(super) fn prompt(&mut self, text: &str, what: &'static str) -> ConsoleResult<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line(what)
    }

    /// Invalid UTF-8 is replaced rather than rejected, so it reaches the
    /// usual validation as ordinary text.
    fn read_line(&mut self, what: &'static str) -> ConsoleResult<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ConsoleError::InputClosed(what));
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovery_tokens() {
        assert_eq!(RecoveryChoice::from_token("1"), RecoveryChoice::End);
        assert_eq!(RecoveryChoice::from_token("2"), RecoveryChoice::Retry);
        assert_eq!(RecoveryChoice::from_token("3"), RecoveryChoice::Invalid);
        assert_eq!(RecoveryChoice::from_token(""), RecoveryChoice::Invalid);
    }

    #[test]
    fn test_read_line_strips_line_endings_only() {
        let mut board = Board::seeded();
        let mut session = Session::new(&mut board, " padded \r\n".as_bytes(), Vec::new());
        assert_eq!(session.read_line("test").unwrap(), " padded ");
        assert!(matches!(
            session.read_line("test"),
            Err(ConsoleError::InputClosed("test"))
        ));
    }

    #[test]
    fn test_read_line_replaces_invalid_utf8() {
        let mut board = Board::seeded();
        let input: &[u8] = b"bad\xff title\n";
        let mut session = Session::new(&mut board, input, Vec::new());
        assert_eq!(session.read_line("test").unwrap(), "bad\u{FFFD} title");
    }
}
