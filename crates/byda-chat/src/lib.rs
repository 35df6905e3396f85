//! Client side of the Byda chat service.
//!
//! [`ChatApi`] speaks the HTTP interface of `byda-api`; [`ChatSession`]
//! drives the send flow and hands back a rendered transcript.

pub mod api;
pub mod error;
pub mod session;

pub use api::{ChatApi, DEFAULT_SERVER};
pub use error::{ChatError, Result};
pub use session::{conversation_title, ChatSession, TITLE_LIMIT};
