//! Response generation for the Byda chat service.
//!
//! A message and a capability id go in, a displayable answer with metadata
//! comes out. In live mode the capability's profile picks a system prompt,
//! a token limit and a primary/fallback provider pair; any failure that
//! survives the fallback degrades to a canned demo reply.

pub mod builder;
pub mod config;
pub mod demo;
pub mod detect;
pub mod generator;
pub mod profile;
pub mod prompts;

pub use builder::ResponseGeneratorBuilder;
pub use config::{api_key_from_env, GeneratorConfig, ResponseMode};
pub use detect::Detector;
pub use generator::{ProviderSlot, ResponseGenerator, NO_RESPONSE};
pub use profile::CapabilityProfile;
