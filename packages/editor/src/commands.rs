//! Keyboard shortcuts for the editor shell.
//!
//! | Keys                              | Command            |
//! |-----------------------------------|--------------------|
//! | Ctrl/Cmd+Z                        | undo               |
//! | Ctrl/Cmd+Shift+Z, Ctrl/Cmd+Y      | redo               |
//! | Delete, Backspace                 | delete selected    |
//! | Escape                            | deselect           |
//! | Ctrl/Cmd+D                        | duplicate selected |
//!
//! Delete and duplicate are suppressed while a text field has focus so that
//! typing never edits the tree.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditorCommand {
    Undo,
    Redo,
    DeleteSelected,
    Deselect,
    DuplicateSelected,
}

/// Where keyboard focus was when the key went down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FocusTarget {
    #[default]
    Canvas,
    /// input, textarea, select
    TextInput,
}

/// A key-down event. `key` uses DOM `KeyboardEvent.key` names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPress {
    pub key: String,
    #[serde(default)]
    pub ctrl_or_meta: bool,
    #[serde(default)]
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl_or_meta: false,
            shift: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_or_meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// Map a key press to an editor command, if it is bound to one
pub fn resolve(key: &KeyPress, focus: FocusTarget, has_selection: bool) -> Option<EditorCommand> {
    let editing_text = focus == FocusTarget::TextInput;

    if key.ctrl_or_meta {
        return match key.key.to_ascii_lowercase().as_str() {
            "z" if key.shift => Some(EditorCommand::Redo),
            "z" => Some(EditorCommand::Undo),
            "y" => Some(EditorCommand::Redo),
            "d" if has_selection && !editing_text => Some(EditorCommand::DuplicateSelected),
            _ => None,
        };
    }

    match key.key.as_str() {
        "Delete" | "Backspace" if has_selection && !editing_text => Some(EditorCommand::DeleteSelected),
        "Escape" => Some(EditorCommand::Deselect),
        _ => None,
    }
}
