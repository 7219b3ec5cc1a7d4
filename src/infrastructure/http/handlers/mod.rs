//! HTTP Handlers

mod ping;
mod summary;

pub use ping::*;
pub use summary::*;
