//! Change notifications emitted by the coordinator.

/// One state change. Calls that leave the state untouched emit nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent<R, S, F> {
    Pushed {
        route: R,
        depth: usize,
    },
    Popped {
        route: R,
        depth: usize,
    },
    /// Routes removed by a pop-to-root, oldest first.
    PoppedToRoot {
        removed: Vec<R>,
    },
    SheetChanged {
        previous: Option<S>,
        current: Option<S>,
    },
    FullScreenCoverChanged {
        previous: Option<F>,
        current: Option<F>,
    },
}

impl<R, S, F> NavigationEvent<R, S, F> {
    pub fn kind(&self) -> &'static str {
        match self {
            NavigationEvent::Pushed { .. } => "pushed",
            NavigationEvent::Popped { .. } => "popped",
            NavigationEvent::PoppedToRoot { .. } => "popped_to_root",
            NavigationEvent::SheetChanged { .. } => "sheet_changed",
            NavigationEvent::FullScreenCoverChanged { .. } => "full_screen_cover_changed",
        }
    }
}
