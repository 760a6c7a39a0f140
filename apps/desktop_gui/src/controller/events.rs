//! Events raised by the render layer while drawing a frame.

use shared::AppCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A page action was activated.
    Navigate(AppCommand),
    /// The sheet window was closed through its chrome or Escape.
    SheetClosedByUser,
    /// The cover was closed through its close button or Escape.
    CoverClosedByUser,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::Navigate(command) => command.name(),
            UiEvent::SheetClosedByUser => "sheet_closed_by_user",
            UiEvent::CoverClosedByUser => "cover_closed_by_user",
        }
    }
}
