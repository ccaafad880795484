//! Core types for palaver.

pub mod completion;
pub mod message;

pub use completion::*;
pub use message::*;
