//! Error types for the kanban board.

use thiserror::Error;

/// Rule violations reported by the [`Board`](crate::Board) API.
///
/// None of these leave the board modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("no team member found with id {0}")]
    UnknownMember(i64),

    #[error("member id must be numeric, got {0:?}")]
    InvalidMemberInput(String),

    #[error("duplicate team member id {0}")]
    DuplicateMember(i64),

    #[error("invalid size selection: {0:?}")]
    InvalidSize(String),

    #[error("invalid line selection: {0:?}")]
    InvalidLine(String),

    #[error("no card titled {0:?} found")]
    CardNotFound(String),
}

/// Failures of the console front end. Only I/O crosses this boundary.
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed while waiting for {0}")]
    InputClosed(&'static str),
}

pub type ConsoleResult<T> = std::result::Result<T, ConsoleError>;
