//! Mock implementations for testing
//!
//! Test doubles for the transport and session-store seams, so services can be
//! exercised without real HTTP or sign-in state.

#[cfg(test)]
mod mock_session;

#[cfg(test)]
pub use mock_session::MockSessionStore;
#[cfg(test)]
pub use mock_transport::{MockHttpTransport, MockRequest};
