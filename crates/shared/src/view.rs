//! Renderer-neutral page descriptions produced by `build()`.

use crate::routes::AppCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Text(String),
    /// A button that issues a navigation command when activated.
    Action { label: String, command: AppCommand },
    Separator,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn heading(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Heading(text.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Text(text.into()));
        self
    }

    pub fn action(mut self, label: impl Into<String>, command: AppCommand) -> Self {
        self.blocks.push(Block::Action {
            label: label.into(),
            command,
        });
        self
    }

    pub fn separator(mut self) -> Self {
        self.blocks.push(Block::Separator);
        self
    }

    pub fn actions(&self) -> impl Iterator<Item = (&str, &AppCommand)> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Action { label, command } => Some((label.as_str(), command)),
            _ => None,
        })
    }
}
