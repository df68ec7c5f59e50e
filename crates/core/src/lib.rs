//! Pure domain logic for the registration wizard.
//!
//! Everything in this crate is synchronous and I/O-free: catalog types,
//! selection rules, partnership validation, the wizard state machine, and
//! submission planning. The `db` and `api` crates build on these types.

pub mod catalog;
pub mod error;
pub mod partnership;
pub mod selection;
pub mod submission;
pub mod types;
pub mod wizard;
