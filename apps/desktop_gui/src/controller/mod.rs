//! Controller layer: UI events collected during a frame and their application to the coordinator.

pub mod events;
pub mod orchestration;
