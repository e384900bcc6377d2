//! Typed client for the Supvisors process supervision control plane.
//!
//! [`SupvisorsClient`] exposes every `supvisors.*` remote procedure as one
//! synchronous method. Arguments are encoded (strategies as their wire
//! ordinal), results are decoded into the records in [`model`], and faults
//! reported by the supervisor are returned unchanged as
//! [`ClientError::Fault`], apart from local [`DecodeError`]s.
//!
//! The client is written against [`supvisors_rpc::RpcTransport`]; use
//! [`supvisors_rpc::HttpTransport`] to talk to a real supervisor:
//!
//! ```no_run
//! use supvisors_client::{StartingStrategy, SupvisorsClient};
//! use supvisors_config::Config;
//! use supvisors_rpc::HttpTransport;
//!
//! # fn main() -> Result<(), supvisors_client::ClientError> {
//! let client = SupvisorsClient::new(HttpTransport::from_config(&Config::default()));
//! for (namespec, process) in client.process_info("web:*")? {
//!     println!("{namespec}: {}", process.state);
//! }
//! client.start_application(StartingStrategy::LessLoaded, "web", true)?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod convert;
mod errors;
pub mod model;
mod namespec;
mod procedure;
pub mod record;
mod state;
mod strategy;

pub use client::SupvisorsClient;
pub use convert::NameKeyed;
pub use errors::{ClientError, DecodeError, DecodeProblem};
pub use namespec::{Namespec, NamespecParseError};
pub use procedure::{NAMESPACE, Procedure};
pub use record::Record;
pub use state::{AddressState, ApplicationState, ProcessState, SupvisorsState};
pub use strategy::{
    ConciliationStrategy, RunningFailureStrategy, StartingFailureStrategy, StartingStrategy,
    StrategyFamily,
};

pub(crate) const CLIENT_TARGET: &str = "supvisors::client";

#[cfg(test)]
mod tests;
