//! Data models for the DIME SDK.
//!
//! These types mirror the server-side models and are used for request/response
//! serialization. All models derive `Serialize` and `Deserialize` for JSON
//! transport; optional request fields are omitted from the wire when unset.

pub mod creator;
pub mod health;
pub mod search;

pub use creator::*;
pub use health::*;
pub use search::*;
