//! Declaration API for state tables.
//!
//! States are declared once, at initialization, either one by one through
//! [`StateTableBuilder`] or all at once with the [`state_table!`] macro.
//!
//! [`state_table!`]: crate::state_table

pub mod error;
pub mod macros;
pub mod table;

pub use error::BuildError;
pub use table::{StateTableBuilder, MAX_STATES};
