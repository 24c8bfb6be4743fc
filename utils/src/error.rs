
///
/// The error and result types shared by every crate in the workspace.
///
/// Fatal failures (missing assets, unreadable configuration) travel as an
/// `Error` with context attached at each layer; `error!` builds an ad-hoc one.
///
pub use anyhow::{anyhow as error, Context, Error, Result};

