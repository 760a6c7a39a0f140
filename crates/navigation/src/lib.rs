//! Navigation state for declarative UIs.
//!
//! A [`NavigationCoordinator`] owns a stack of pushed screens plus two
//! independent presentation slots (sheet and full-screen cover). Every
//! state-changing call bumps a version counter and notifies subscribers
//! synchronously, before the call returns, so a bound render layer observes
//! the new state on the same call stack.

pub mod capability;
pub mod command;
pub mod coordinator;
pub mod event;
pub mod observer;

pub use capability::{CoordinatorFullScreenCover, CoordinatorScreen, CoordinatorSheet};
pub use command::NavigationCommand;
pub use coordinator::{NavigationCoordinator, NavigationSnapshot};
pub use event::NavigationEvent;
pub use observer::Subscription;
