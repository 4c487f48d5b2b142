//! Controller layer: widget interactions, view-state transitions, and the cached table.

pub mod events;
pub mod reducer;
