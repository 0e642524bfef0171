//! Test fixtures and sample data
//!
//! Sample gateway responses and SSE wire-format builders shared by the unit
//! tests.

#[cfg(test)]
mod chat_fixtures;
#[cfg(test)]
mod error_fixtures;
#[cfg(test)]
mod stream_fixtures;

#[cfg(test)]
pub use chat_fixtures::*;
#[cfg(test)]
pub use error_fixtures::*;
#[cfg(test)]
pub use stream_fixtures::*;
