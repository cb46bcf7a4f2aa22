//! Domain models for the kanban board.
//!
//! # Core Concepts
//!
//! - [`TeamMember`]: A person cards can be assigned to. The roster is seeded once
//!   at startup and never changes during a session.
//! - [`Card`]: A unit of work. Only its [`BoardLine`] changes after creation.
//! - [`CardSize`]: Ordered effort estimate, XS through XL.
//! - [`BoardLine`]: The column a card currently sits in.

mod card;
mod member;

pub use card::*;
pub use member::*;
