//! AI-generated commit messages for staged changes.

pub mod confirm;
pub mod dispatch;
pub mod message;

pub use confirm::{Confirmation, TerminalConfirmation, confirm_from, is_affirmative};
pub use dispatch::{Dispatcher, GitCommand, Outcome};
pub use message::MessageGenerator;
