//! Outcome model and the session ledger.
//!
//! Every probe produces exactly one [`Outcome`]. The session runner appends
//! them, in execution order, to a [`ResultLedger`] that the reporter later
//! reads back.

mod ledger;
mod status;

pub use ledger::{ResultLedger, StatusCounts};
pub use status::{Outcome, Status};
