//! Input routing module
//!
//! Models the drag gesture as an explicit state machine: the router is
//! `Idle` until a pointer-down on a window header starts a move, and
//! returns to `Idle` on pointer-up. Holding the active gesture in an
//! `Option<DragState>` makes "at most one drag at a time" structural
//! rather than a flag to keep consistent.

mod drag;
mod result;
mod router;

pub use drag::DragState;
pub use result::InputResult;
pub use router::InputRouter;
