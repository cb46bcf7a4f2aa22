//! Interactive console front end.
//!
//! A [`Session`] borrows the board mutably for its whole lifetime and runs one
//! operation at a time against a line-oriented input and a text sink. Both are
//! generic so tests can drive a session from in-memory buffers.
//!
//! Operations never fail on bad user input. They report what happened to the
//! sink and return an outcome value; only I/O errors are propagated.

mod menu;
mod session;

pub use menu::*;
pub use session::*;
