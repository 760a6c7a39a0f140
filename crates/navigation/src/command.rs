//! Navigation operations as data, for UI actions and scripted replays.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCommand<R, S, F> {
    Push(R),
    Pop,
    PopToRoot,
    PresentSheet(S),
    DismissSheet,
    PresentFullScreenCover(F),
    DismissFullScreenCover,
}

impl<R, S, F> NavigationCommand<R, S, F> {
    pub fn name(&self) -> &'static str {
        match self {
            NavigationCommand::Push(_) => "push",
            NavigationCommand::Pop => "pop",
            NavigationCommand::PopToRoot => "pop_to_root",
            NavigationCommand::PresentSheet(_) => "present_sheet",
            NavigationCommand::DismissSheet => "dismiss_sheet",
            NavigationCommand::PresentFullScreenCover(_) => "present_full_screen_cover",
            NavigationCommand::DismissFullScreenCover => "dismiss_full_screen_cover",
        }
    }
}
