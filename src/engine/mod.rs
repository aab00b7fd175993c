//! The running machine.
//!
//! - [`Hsm`]: one machine instance with its context, lifecycle and dispatcher
//! - Transition requests and the exit/enter/start executor
//! - [`HsmError`]: every condition the engine reports
//!
//! Everything here is synchronous and single-threaded per instance. Distinct
//! instances share nothing mutable and may run on different threads.

mod error;
mod machine;
#[cfg(test)]
mod testing;
mod transition;

pub use error::HsmError;
pub use machine::{DispatchOutcome, Hsm};
