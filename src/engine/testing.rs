//! Scripted state handlers shared by the engine's unit tests.

use crate::core::{Address, Handler, Lifecycle, Message, Response, StateId, StateTable};
use crate::engine::{Hsm, HsmError};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    Entry,
    Exit,
    Start,
    Msg(u16),
}

/// Context that records every delivery and reacts according to its rules.
#[derive(Debug, Default)]
pub(crate) struct Script {
    pub log: Vec<(StateId, Event)>,
    /// (state, local id) pairs the state consumes.
    pub consumes: Vec<(StateId, u16)>,
    /// (state, local id, target): request `target` when the message arrives.
    pub on: Vec<(StateId, u16, StateId)>,
    /// (state, target): request `target` when Start arrives.
    pub start: Vec<(StateId, StateId)>,
    /// (state, target): request `target` from the Entry handler.
    pub entry_requests: Vec<(StateId, StateId)>,
    /// (state, target): request `target` from the Exit handler.
    pub exit_requests: Vec<(StateId, StateId)>,
    /// (state, local id): dispatch into the own machine on this message.
    pub reenter_on: Vec<(StateId, u16)>,
    pub errors: Vec<HsmError>,
}

pub(crate) fn msg(local: u16) -> Message {
    Message::new(Address::new(0x10, local))
}

fn scripted(hsm: &mut Hsm<Script>, message: &Message, me: StateId) -> Response {
    let event = match message.lifecycle() {
        Some(Lifecycle::Entry) => Event::Entry,
        Some(Lifecycle::Exit) => Event::Exit,
        Some(Lifecycle::Start) => Event::Start,
        None => Event::Msg(message.dest.local),
    };
    hsm.context_mut().log.push((me, event));

    let script = hsm.context();
    let targets: Vec<StateId> = match event {
        Event::Entry => pick(&script.entry_requests, me),
        Event::Start => pick(&script.start, me),
        Event::Exit => pick(&script.exit_requests, me),
        Event::Msg(local) => script
            .on
            .iter()
            .filter(|(s, l, _)| *s == me && *l == local)
            .map(|(_, _, t)| *t)
            .collect(),
    };
    let requested = !targets.is_empty();
    for target in targets {
        if let Err(e) = hsm.request_transition(target) {
            hsm.context_mut().errors.push(e);
        }
    }

    let Event::Msg(local) = event else {
        return Response::Consumed;
    };
    if hsm.context().reenter_on.contains(&(me, local)) {
        if let Err(e) = hsm.dispatch(&msg(99)) {
            hsm.context_mut().errors.push(e);
        }
        return Response::Consumed;
    }
    if requested || hsm.context().consumes.contains(&(me, local)) {
        Response::Consumed
    } else {
        Response::PassToParent
    }
}

fn pick(rules: &[(StateId, StateId)], me: StateId) -> Vec<StateId> {
    rules
        .iter()
        .filter(|(s, _)| *s == me)
        .map(|(_, t)| *t)
        .collect()
}

fn at<const I: u16>(hsm: &mut Hsm<Script>, message: &Message) -> Response {
    scripted(hsm, message, StateId::from_index(I))
}

const HANDLERS: [Handler<Script>; 16] = [
    at::<0>, at::<1>, at::<2>, at::<3>, at::<4>, at::<5>, at::<6>, at::<7>,
    at::<8>, at::<9>, at::<10>, at::<11>, at::<12>, at::<13>, at::<14>, at::<15>,
];

const NAMES: [&str; 16] = [
    "S0", "S1", "S2", "S3", "S4", "S5", "S6", "S7",
    "S8", "S9", "S10", "S11", "S12", "S13", "S14", "S15",
];

/// Build a table where state `i` has parent `parents[i]`.
pub(crate) fn tree(parents: &[Option<u16>]) -> Arc<StateTable<Script>> {
    let mut builder = StateTable::builder();
    for (i, parent) in parents.iter().enumerate() {
        builder
            .state(NAMES[i], parent.map(StateId::from_index), HANDLERS[i])
            .expect("test tree is well formed");
    }
    Arc::new(builder.build())
}
