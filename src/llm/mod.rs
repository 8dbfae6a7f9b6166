//! Language model completion client.

pub mod client;
pub mod response;

pub use client::{CompletionClient, OpenAiClient};
pub use response::{ChatCompletion, Choice, ChoiceMessage};
