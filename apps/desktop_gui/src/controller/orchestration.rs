//! Applies frame events to the coordinator after drawing has finished.

use shared::{command::format_command, AppCoordinator};

use crate::controller::events::UiEvent;

/// Upper bound on the visible action log.
pub const HISTORY_LIMIT: usize = 64;

pub fn apply_ui_events(
    coordinator: &mut AppCoordinator,
    events: impl IntoIterator<Item = UiEvent>,
    history: &mut Vec<String>,
) {
    for event in events {
        tracing::debug!(event = event.name(), "applying ui event");
        match event {
            UiEvent::Navigate(command) => {
                record(history, format_command(&command));
                coordinator.apply(command);
            }
            UiEvent::SheetClosedByUser => {
                if coordinator.active_sheet().is_some() {
                    record(history, "dismiss-sheet (gesture)".to_string());
                }
                coordinator.set_active_sheet(None);
            }
            UiEvent::CoverClosedByUser => {
                if coordinator.active_full_screen_cover().is_some() {
                    record(history, "dismiss-cover (gesture)".to_string());
                }
                coordinator.set_active_full_screen_cover(None);
            }
        }
    }
}

fn record(history: &mut Vec<String>, line: String) {
    history.push(line);
    if history.len() > HISTORY_LIMIT {
        let overflow = history.len() - HISTORY_LIMIT;
        history.drain(..overflow);
    }
}
