//! hsm-engine: a hierarchical state machine engine
//!
//! States form a static tree. Each message is offered to the current state
//! and, while unhandled, to its ancestors. Transitions are resolved through
//! the least common ancestor of the source and target states, so only the
//! states that actually change are exited and entered.
//!
//! # Core Concepts
//!
//! - **State table**: an arena of named states with parent links and
//!   handler functions, declared once and shared by reference
//! - **Handlers**: `fn(&mut Hsm<C>, &Message) -> Response`, returning
//!   `Consumed` or `PassToParent`
//! - **Lifecycle**: Exit (leaf first), Entry (outermost first), then Start
//!   to the new current state, which may chain another transition
//!
//! # Example
//!
//! ```rust
//! use hsm_engine::core::{Address, Lifecycle, Message, Response};
//! use hsm_engine::engine::Hsm;
//! use hsm_engine::state_table;
//! use std::sync::Arc;
//!
//! #[derive(Default)]
//! struct Lamp {
//!     switched: u32,
//! }
//!
//! const TOGGLE: u16 = 1;
//!
//! fn top(hsm: &mut Hsm<Lamp>, msg: &Message) -> Response {
//!     if msg.is_start() {
//!         hsm.request_transition(OFF).ok();
//!     }
//!     Response::Consumed
//! }
//!
//! fn off(hsm: &mut Hsm<Lamp>, msg: &Message) -> Response {
//!     match msg.lifecycle() {
//!         Some(_) => Response::Consumed,
//!         None if msg.dest.local == TOGGLE => {
//!             hsm.request_transition(ON).ok();
//!             Response::Consumed
//!         }
//!         None => Response::PassToParent,
//!     }
//! }
//!
//! fn on(hsm: &mut Hsm<Lamp>, msg: &Message) -> Response {
//!     match msg.lifecycle() {
//!         Some(Lifecycle::Entry) => {
//!             hsm.context_mut().switched += 1;
//!             Response::Consumed
//!         }
//!         Some(_) => Response::Consumed,
//!         None if msg.dest.local == TOGGLE => {
//!             hsm.request_transition(OFF).ok();
//!             Response::Consumed
//!         }
//!         None => Response::PassToParent,
//!     }
//! }
//!
//! state_table! {
//!     fn lamp_states() -> StateTable<Lamp>;
//!     TOP: "Top" => top;
//!     OFF: "Off" in TOP => off;
//!     ON: "On" in TOP => on;
//! }
//!
//! let table = Arc::new(lamp_states().unwrap());
//! let mut lamp = Hsm::new(table, TOP, 0x20, Lamp::default()).unwrap();
//! lamp.start().unwrap();
//! assert_eq!(lamp.current(), Some(OFF));
//!
//! lamp.dispatch(&Message::new(Address::new(0x20, TOGGLE))).unwrap();
//! assert_eq!(lamp.current(), Some(ON));
//! assert_eq!(lamp.context().switched, 1);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, StateTableBuilder};
pub use config::{ConfigBuilder, DuplicatePolicy, HsmConfig};
pub use crate::core::{Message, Response, StateId, StateTable};
pub use engine::{DispatchOutcome, Hsm, HsmError};
