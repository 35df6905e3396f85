pub mod capability;
pub mod metadata;

pub use capability::{is_catalog_id, Capability, CapabilityInfo, CATALOG};
pub use metadata::{GeneratedResponse, MessageMetadata};

/// Hardcoded user every request is attributed to; there is no auth layer.
pub const DEMO_USER_ID: &str = "default-user";
