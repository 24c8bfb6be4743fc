
///
/// Serde derives, re-exported so that every crate serializes through the same version.
///
pub use serde::{Deserialize, Serialize};
