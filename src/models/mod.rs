//! Presentation models shared by the command handlers.

pub mod output;
