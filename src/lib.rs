pub mod board;
pub mod config;
pub mod console;
pub mod error;
pub mod models;

pub use board::Board;
pub use error::{BoardError, ConsoleError};
