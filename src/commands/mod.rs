//! Command implementations for the fantasy helper CLI

pub mod compare;
pub mod players;
