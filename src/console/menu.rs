use std::io::{BufRead, Write};

use super::Session;
use crate::error::{ConsoleError, ConsoleResult};

pub const MENU: &str = "\nPlease select an operation you want to perform :)\n\
*******************************************\n\
(1) List Board\n\
(2) Add Card to Board\n\
(3) Delete Card from Board\n\
(4) Move Card\n\
(0) Exit Application\n";

/// A main-menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    List,
    Add,
    Delete,
    Move,
}

impl Command {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "0" => Some(Self::Exit),
            "1" => Some(Self::List),
            "2" => Some(Self::Add),
            "3" => Some(Self::Delete),
            "4" => Some(Self::Move),
            _ => None,
        }
    }
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    /// Run the menu loop until the operator exits or input runs out.
    pub fn run(&mut self) -> ConsoleResult<()> {
        match self.run_inner() {
            Err(ConsoleError::InputClosed(what)) => {
                tracing::info!("Input closed while waiting for {}, ending session", what);
                Ok(())
            }
            other => other,
        }
    }

    fn run_inner(&mut self) -> ConsoleResult<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let token = self.prompt("Your choice: ", "menu choice")?;

            match Command::from_token(&token) {
                Some(Command::Exit) => {
                    writeln!(self.output, "Exiting ToDo Application. Goodbye!")?;
                    return Ok(());
                }
                Some(command) => self.dispatch(command)?,
                None => {
                    tracing::debug!(token = %token, "unknown menu token");
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                }
            }

            self.prompt(
                "\nPress Enter to return to the main menu...",
                "return to menu",
            )?;
        }
    }

    /// Run a single non-exit command.
    pub fn dispatch(&mut self, command: Command) -> ConsoleResult<()> {
        match command {
            Command::List => self.list_board(),
            Command::Add => self.add_card().map(|_| ()),
            Command::Delete => self.delete_card().map(|_| ()),
            Command::Move => self.move_card().map(|_| ()),
            Command::Exit => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_tokens() {
        assert_eq!(Command::from_token("0"), Some(Command::Exit));
        assert_eq!(Command::from_token("4"), Some(Command::Move));
        assert_eq!(Command::from_token("5"), None);
        assert_eq!(Command::from_token("list"), None);
    }
}
