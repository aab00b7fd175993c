//! Macros for declaring state tables.

/// Declare a state table with a named [`StateId`](crate::core::StateId)
/// constant per state.
///
/// Each line declares `ID: "Name" [in PARENT] => handler;`. States get ids in
/// declaration order and parents must come first. The macro expands to one
/// `const` per state plus a constructor function returning
/// `Result<StateTable<Ctx>, BuildError>`, so handlers can name their
/// transition targets directly.
///
/// Ids are numbered by the discriminants of a private enum rather than by
/// recursion, so the size of a chart is not bound by `recursion_limit`.
///
/// # Example
///
/// ```
/// use hsm_engine::core::{Message, Response};
/// use hsm_engine::engine::Hsm;
/// use hsm_engine::state_table;
///
/// fn top(_: &mut Hsm<()>, _: &Message) -> Response {
///     Response::Consumed
/// }
///
/// fn idle(hsm: &mut Hsm<()>, msg: &Message) -> Response {
///     if msg.dest.local == 7 {
///         hsm.request_transition(BUSY).ok();
///         return Response::Consumed;
///     }
///     Response::PassToParent
/// }
///
/// fn busy(_: &mut Hsm<()>, _: &Message) -> Response {
///     Response::PassToParent
/// }
///
/// state_table! {
///     pub fn worker_states() -> StateTable<()>;
///     TOP: "Top" => top;
///     IDLE: "Idle" in TOP => idle;
///     BUSY: "Busy" in TOP => busy;
/// }
///
/// let table = worker_states().unwrap();
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.parent(BUSY), Some(TOP));
/// ```
#[macro_export]
macro_rules! state_table {
    (@ids [$vis:vis] $all:tt; $($id:ident)+) => {
        $(
            $vis const $id: $crate::core::StateId = {
                #[allow(dead_code, non_camel_case_types, clippy::upper_case_acronyms)]
                #[repr(u16)]
                enum Slot $all
                $crate::core::StateId::from_index(Slot::$id as u16)
            };
        )+
    };
    (@declare $builder:ident, $id:ident, $name:expr, $handler:expr) => {
        $builder.declare($id, $name, ::core::option::Option::None, $handler)?;
    };
    (@declare $builder:ident, $id:ident, $name:expr, $handler:expr, $parent:ident) => {
        $builder.declare($id, $name, ::core::option::Option::Some($parent), $handler)?;
    };
    (
        $(#[$meta:meta])*
        $vis:vis fn $build:ident() -> StateTable<$ctx:ty>;
        $(
            $id:ident : $name:literal $(in $parent:ident)? => $handler:expr;
        )+
    ) => {
        $crate::state_table!(@ids [$vis] { $($id),+ }; $($id)+);

        $(#[$meta])*
        $vis fn $build() -> ::core::result::Result<
            $crate::core::StateTable<$ctx>,
            $crate::builder::BuildError,
        > {
            let mut builder = $crate::core::StateTable::<$ctx>::builder();
            $(
                $crate::state_table!(@declare builder, $id, $name, $handler $(, $parent)?);
            )+
            ::core::result::Result::Ok(builder.build())
        }
    };
}
