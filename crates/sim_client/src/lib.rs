//! # Sim Client
//!
//! Simulator client boundary: the trait the environment talks to, plus a
//! mock implementation for tests and development without a running
//! simulator.
//!
//! The transport behind a real client (RPC framing, serialization, retry) is
//! out of scope here; anything satisfying [`SimClient`] can drive the
//! environment.

mod client;
mod mock_client;

pub use client::SimClient;
pub use mock_client::{MockConfig, MockSimClient};
