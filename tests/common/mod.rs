//! Scripted handlers for integration tests.
//!
//! Every state uses the same scripted behaviour: it logs each delivery and
//! reacts according to rules stored in the machine's context.

#![allow(dead_code)]

use hsm_engine::core::{Address, Handler, Lifecycle, Message, Response, StateId, StateTable};
use hsm_engine::{Hsm, HsmError};
use std::sync::Arc;

pub const MAX_TEST_STATES: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Entry,
    Exit,
    Start,
    Msg(u16),
}

#[derive(Debug, Default)]
pub struct Script {
    pub log: Vec<(StateId, Event)>,
    pub consumes: Vec<(StateId, u16)>,
    pub on: Vec<(StateId, u16, StateId)>,
    pub start: Vec<(StateId, StateId)>,
    pub errors: Vec<HsmError>,
}

impl Script {
    pub fn lifecycle_log(&self) -> Vec<(StateId, Event)> {
        self.log
            .iter()
            .copied()
            .filter(|(_, e)| !matches!(e, Event::Msg(_)))
            .collect()
    }
}

pub fn msg(local: u16) -> Message {
    Message::new(Address::new(0x42, local)).with_source(Address::new(0x01, 0))
}

fn scripted(hsm: &mut Hsm<Script>, message: &Message, me: StateId) -> Response {
    let event = match message.lifecycle() {
        Some(Lifecycle::Entry) => Event::Entry,
        Some(Lifecycle::Exit) => Event::Exit,
        Some(Lifecycle::Start) => Event::Start,
        None => Event::Msg(message.dest.local),
    };
    hsm.context_mut().log.push((me, event));

    let targets: Vec<StateId> = match event {
        Event::Start => hsm
            .context()
            .start
            .iter()
            .filter(|(s, _)| *s == me)
            .map(|(_, t)| *t)
            .collect(),
        Event::Msg(local) => hsm
            .context()
            .on
            .iter()
            .filter(|(s, l, _)| *s == me && *l == local)
            .map(|(_, _, t)| *t)
            .collect(),
        Event::Entry | Event::Exit => Vec::new(),
    };
    let requested = !targets.is_empty();
    for target in targets {
        if let Err(e) = hsm.request_transition(target) {
            hsm.context_mut().errors.push(e);
        }
    }

    match event {
        Event::Msg(local) if !requested && !hsm.context().consumes.contains(&(me, local)) => {
            Response::PassToParent
        }
        _ => Response::Consumed,
    }
}

pub fn at<const I: u16>(hsm: &mut Hsm<Script>, message: &Message) -> Response {
    scripted(hsm, message, StateId::from_index(I))
}

const HANDLERS: [Handler<Script>; MAX_TEST_STATES] = [
    at::<0>, at::<1>, at::<2>, at::<3>, at::<4>, at::<5>,
    at::<6>, at::<7>, at::<8>, at::<9>, at::<10>, at::<11>,
];

const NAMES: [&str; MAX_TEST_STATES] = [
    "S0", "S1", "S2", "S3", "S4", "S5", "S6", "S7", "S8", "S9", "S10", "S11",
];

/// Build a table where state `i` has parent `parents[i]`.
pub fn tree(parents: &[Option<u16>]) -> Arc<StateTable<Script>> {
    let mut builder = StateTable::builder();
    for (i, parent) in parents.iter().enumerate() {
        builder
            .state(NAMES[i], parent.map(StateId::from_index), HANDLERS[i])
            .expect("test tree is well formed");
    }
    Arc::new(builder.build())
}
