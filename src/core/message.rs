//! Addressed, typed event records.
//!
//! The engine never interprets message contents. The only messages it
//! inspects or builds itself are the three lifecycle notifications
//! ([`ENTRY`], [`START`], [`EXIT`]).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of parameter slots in one message.
pub const MSG_MAX_PARAM_SLOTS: usize = 8;

/// Owner id reserved for the engine's internal messages.
pub const HSM_OWNER_ID: u16 = 0xFF;

/// Local id of the Entry notification.
pub const LID_ENTRY: u16 = 1;

/// Local id of the Start notification.
pub const LID_START: u16 = 2;

/// Local id of the Exit notification.
pub const LID_EXIT: u16 = 3;

/// Delivered to each state as it is entered.
pub static ENTRY: Message = Message::new(Address::new(HSM_OWNER_ID, LID_ENTRY));

/// Delivered to the newly active state once a transition has completed.
pub static START: Message = Message::new(Address::new(HSM_OWNER_ID, LID_START));

/// Delivered to each state as it is left.
pub static EXIT: Message = Message::new(Address::new(HSM_OWNER_ID, LID_EXIT));

/// Sender or receiver of a message: the owning component plus a local id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Address {
    pub owner: u16,
    pub local: u16,
}

impl Address {
    pub const fn new(owner: u16, local: u16) -> Self {
        Address { owner, local }
    }
}

/// One typed parameter: a type tag and a 32-bit payload.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct ParamSlot {
    pub kind: u8,
    pub value: u32,
}

impl ParamSlot {
    pub const fn new(kind: u8, value: u32) -> Self {
        ParamSlot { kind, value }
    }
}

/// Lifecycle notification synthesized by the engine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Lifecycle {
    Entry,
    Start,
    Exit,
}

/// Returned when a message already holds [`MSG_MAX_PARAM_SLOTS`] parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("message parameter list is full ({} slots)", MSG_MAX_PARAM_SLOTS)]
pub struct ParamOverflow;

/// An event delivered to a state machine.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Message {
    /// Address of the receiver.
    pub dest: Address,
    /// Address of the sender.
    pub src: Address,
    /// Delivery bookkeeping, reserved for the transport.
    pub status: u8,
    /// Distinguishes concurrent requests of the same kind.
    pub transaction_id: u8,
    /// Result code carried by response messages.
    pub result_code: i8,
    params: heapless::Vec<ParamSlot, MSG_MAX_PARAM_SLOTS>,
}

impl Message {
    /// Create an empty message addressed to `dest`.
    pub const fn new(dest: Address) -> Self {
        Message {
            dest,
            src: Address::new(0, 0),
            status: 0,
            transaction_id: 0,
            result_code: 0,
            params: heapless::Vec::new(),
        }
    }

    pub fn with_source(mut self, src: Address) -> Self {
        self.src = src;
        self
    }

    pub fn with_transaction(mut self, transaction_id: u8) -> Self {
        self.transaction_id = transaction_id;
        self
    }

    pub fn with_result(mut self, result_code: i8) -> Self {
        self.result_code = result_code;
        self
    }

    /// Append a parameter, consuming the message.
    pub fn with_param(mut self, slot: ParamSlot) -> Result<Self, ParamOverflow> {
        self.push_param(slot)?;
        Ok(self)
    }

    /// Append a parameter. The slot is not written when the list is full.
    pub fn push_param(&mut self, slot: ParamSlot) -> Result<(), ParamOverflow> {
        self.params.push(slot).map_err(|_| ParamOverflow)
    }

    pub fn params(&self) -> &[ParamSlot] {
        &self.params
    }

    pub fn param(&self, index: usize) -> Option<&ParamSlot> {
        self.params.get(index)
    }

    /// Classify this message as one of the engine's lifecycle notifications.
    pub fn lifecycle(&self) -> Option<Lifecycle> {
        if self.dest.owner != HSM_OWNER_ID {
            return None;
        }
        match self.dest.local {
            LID_ENTRY => Some(Lifecycle::Entry),
            LID_START => Some(Lifecycle::Start),
            LID_EXIT => Some(Lifecycle::Exit),
            _ => None,
        }
    }

    pub fn is_entry(&self) -> bool {
        self.lifecycle() == Some(Lifecycle::Entry)
    }

    pub fn is_start(&self) -> bool {
        self.lifecycle() == Some(Lifecycle::Start)
    }

    pub fn is_exit(&self) -> bool {
        self.lifecycle() == Some(Lifecycle::Exit)
    }
}
