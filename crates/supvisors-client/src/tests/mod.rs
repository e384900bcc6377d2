//! Facade coverage against in-memory transports.

mod facade;
mod mocked;
mod support;
