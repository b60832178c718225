//! # Script Entries
//!
//! The "Script Bible" crate - contains the configured entry definitions,
//! criteria contracts, and the entry store consumed by the interaction
//! engine. This crate is the single source of truth for scripted behavior
//! and does not contain any engine logic.

pub mod actor;
pub mod criteria;
pub mod entry;
pub mod store;

pub use actor::*;
pub use criteria::*;
pub use entry::*;
pub use store::*;
