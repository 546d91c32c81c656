//! Deferred content-hash ("revv") protocol.
//!
//! Rendering emits `{revv: <path>}` placeholders and registers each path;
//! a later pass, once every output file exists, fingerprints the registered
//! files and rewrites the placeholders.
//!
//! - [`token`]: placeholder grammar (`RevvToken`)
//! - [`registry`]: concurrent pending set (`PendingRevvs`)
//! - `gateway`: `Resolver::revv`

mod gateway;
pub mod registry;
pub mod token;

pub use gateway::AssetRef;
pub use registry::{PendingRevvs, RevvRegistry};
pub use token::{RevvToken, encode_component_keeping_tokens};
