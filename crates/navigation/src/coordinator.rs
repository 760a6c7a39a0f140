use std::fmt;

use crossbeam_channel::Sender;
use serde::Serialize;

use crate::{
    capability::{CoordinatorFullScreenCover, CoordinatorScreen, CoordinatorSheet},
    command::NavigationCommand,
    event::NavigationEvent,
    observer::{channel_forwarder, Subscribers, Subscription},
};

/// Owned copy of the coordinator state at one version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationSnapshot<R, S, F> {
    pub path: Vec<R>,
    pub sheet: Option<S>,
    pub full_screen_cover: Option<F>,
    pub version: u64,
}

/// Single source of truth for what is currently shown.
///
/// The path and the two presentation slots are independent: a sheet and a
/// full-screen cover may be active at the same time, and neither is affected
/// by pushes or pops. Mutually exclusive presentation is left to callers.
///
/// The coordinator is bound to one thread. Subscribers run synchronously,
/// in registration order, before the mutating call returns.
pub struct NavigationCoordinator<R, S, F> {
    path: Vec<R>,
    active_sheet: Option<S>,
    active_full_screen_cover: Option<F>,
    version: u64,
    subscribers: Subscribers<NavigationEvent<R, S, F>>,
}

impl<R, S, F> NavigationCoordinator<R, S, F>
where
    R: CoordinatorScreen,
    S: CoordinatorSheet,
    F: CoordinatorFullScreenCover,
{
    pub fn new() -> Self {
        Self {
            path: Vec::new(),
            active_sheet: None,
            active_full_screen_cover: None,
            version: 0,
            subscribers: Subscribers::new(),
        }
    }

    pub fn path(&self) -> &[R] {
        &self.path
    }

    /// Top of the path, or `None` at the root screen.
    pub fn current(&self) -> Option<&R> {
        self.path.last()
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.path.is_empty()
    }

    pub fn active_sheet(&self) -> Option<&S> {
        self.active_sheet.as_ref()
    }

    pub fn active_full_screen_cover(&self) -> Option<&F> {
        self.active_full_screen_cover.as_ref()
    }

    /// Number of state-changing calls since construction.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn snapshot(&self) -> NavigationSnapshot<R, S, F> {
        NavigationSnapshot {
            path: self.path.clone(),
            sheet: self.active_sheet.clone(),
            full_screen_cover: self.active_full_screen_cover.clone(),
            version: self.version,
        }
    }

    pub fn push(&mut self, route: R) {
        self.path.push(route.clone());
        let depth = self.path.len();
        tracing::debug!(depth, route = ?route, "pushed route");
        self.commit(NavigationEvent::Pushed { route, depth });
    }

    /// Removes the top route. Popping an empty path is a no-op.
    pub fn pop(&mut self) {
        let Some(route) = self.path.pop() else {
            tracing::trace!("pop on empty path ignored");
            return;
        };
        let depth = self.path.len();
        tracing::debug!(depth, route = ?route, "popped route");
        self.commit(NavigationEvent::Popped { route, depth });
    }

    pub fn pop_to_root(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let removed = std::mem::take(&mut self.path);
        tracing::debug!(removed = removed.len(), "popped to root");
        self.commit(NavigationEvent::PoppedToRoot { removed });
    }

    /// Replaces any active sheet; sheets do not stack.
    pub fn present_sheet(&mut self, item: S) {
        self.set_active_sheet(Some(item));
    }

    pub fn dismiss_sheet(&mut self) {
        self.set_active_sheet(None);
    }

    /// Replaces any active full-screen cover.
    pub fn present_full_screen_cover(&mut self, item: F) {
        self.set_active_full_screen_cover(Some(item));
    }

    pub fn dismiss_full_screen_cover(&mut self) {
        self.set_active_full_screen_cover(None);
    }

    /// Write-back entry for the render layer, e.g. after a swipe-to-dismiss.
    pub fn set_active_sheet(&mut self, item: Option<S>) {
        if self.active_sheet == item {
            return;
        }
        let previous = std::mem::replace(&mut self.active_sheet, item.clone());
        tracing::debug!(
            previous = ?previous.as_ref().map(S::id),
            current = ?item.as_ref().map(S::id),
            "sheet changed"
        );
        self.commit(NavigationEvent::SheetChanged {
            previous,
            current: item,
        });
    }

    /// Write-back entry for the render layer.
    pub fn set_active_full_screen_cover(&mut self, item: Option<F>) {
        if self.active_full_screen_cover == item {
            return;
        }
        let previous = std::mem::replace(&mut self.active_full_screen_cover, item.clone());
        tracing::debug!(
            previous = ?previous.as_ref().map(F::id),
            current = ?item.as_ref().map(F::id),
            "full-screen cover changed"
        );
        self.commit(NavigationEvent::FullScreenCoverChanged {
            previous,
            current: item,
        });
    }

    pub fn apply(&mut self, command: NavigationCommand<R, S, F>) {
        tracing::trace!(command = command.name(), "applying navigation command");
        match command {
            NavigationCommand::Push(route) => self.push(route),
            NavigationCommand::Pop => self.pop(),
            NavigationCommand::PopToRoot => self.pop_to_root(),
            NavigationCommand::PresentSheet(item) => self.present_sheet(item),
            NavigationCommand::DismissSheet => self.dismiss_sheet(),
            NavigationCommand::PresentFullScreenCover(item) => {
                self.present_full_screen_cover(item)
            }
            NavigationCommand::DismissFullScreenCover => self.dismiss_full_screen_cover(),
        }
    }

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&NavigationEvent<R, S, F>) + 'static,
    ) -> Subscription {
        self.subscribers.subscribe(callback)
    }

    /// Forwards every event into `sender` without blocking.
    pub fn subscribe_channel(&mut self, sender: Sender<NavigationEvent<R, S, F>>) -> Subscription {
        self.subscribers.subscribe(channel_forwarder(sender))
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.live_count()
    }

    fn commit(&mut self, event: NavigationEvent<R, S, F>) {
        self.version += 1;
        tracing::trace!(version = self.version, kind = event.kind(), "notifying subscribers");
        self.subscribers.notify(&event);
    }
}

impl<R, S, F> Default for NavigationCoordinator<R, S, F>
where
    R: CoordinatorScreen,
    S: CoordinatorSheet,
    F: CoordinatorFullScreenCover,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R, S, F> fmt::Debug for NavigationCoordinator<R, S, F>
where
    R: fmt::Debug,
    S: fmt::Debug,
    F: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationCoordinator")
            .field("path", &self.path)
            .field("active_sheet", &self.active_sheet)
            .field("active_full_screen_cover", &self.active_full_screen_cover)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/coordinator_tests.rs"]
mod tests;
