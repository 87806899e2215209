//! Shared Types
//!
//! Wire types and errors used by both the messaging core and the HTTP layer.
//! JSON field names in this module are part of the client wire contract.

pub mod contact;
pub mod error;
pub mod message;

pub use contact::Contact;
pub use error::SharedError;
pub use message::{ConversationSummary, Message, MessageInput};
