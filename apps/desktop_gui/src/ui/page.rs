use eframe::egui;
use shared::{
    view::{Block, Page},
    AppCommand,
};

/// Draws a page body and returns the command of the action clicked this frame, if any.
pub fn render_page_body(ui: &mut egui::Ui, page: &Page) -> Option<AppCommand> {
    let mut clicked = None;
    for block in &page.blocks {
        match block {
            Block::Heading(text) => {
                ui.strong(text.as_str());
            }
            Block::Text(text) => {
                ui.label(text.as_str());
            }
            Block::Action { label, command } => {
                if ui.button(label.as_str()).clicked() {
                    clicked = Some(command.clone());
                }
            }
            Block::Separator => {
                ui.separator();
            }
        }
    }
    clicked
}
