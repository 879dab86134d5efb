//! In-memory document the view-controller renders into.
//!
//! # Design
//! The document models exactly the markup contract the controller relies on:
//! a form input, a list container of rows, and the per-row controls addressed
//! by fixed class names. Rows are always rebuilt wholesale from the last
//! fetched collection; nothing patches a single row from server data.
//!
//! Visibility follows the row's mode. A hidden control cannot be clicked, so
//! the controller asks `Row::shows` before routing a click.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::types::{Todo, TodoId};

/// A clickable per-row control, identified in markup by its class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Checkbox,
    Edit,
    Remove,
    Confirm,
    Cancel,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::Checkbox,
        Control::Edit,
        Control::Remove,
        Control::Confirm,
        Control::Cancel,
    ];

    pub const fn class_name(self) -> &'static str {
        match self {
            Control::Checkbox => "todo_checkbox",
            Control::Edit => "todo_edit_button",
            Control::Remove => "todo_remove_button",
            Control::Confirm => "todo_edit_confirm_button",
            Control::Cancel => "todo_edit_cancel_button",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no control has class `{0}`")]
pub struct UnknownControl(pub String);

impl FromStr for Control {
    type Err = UnknownControl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Control::ALL
            .into_iter()
            .find(|control| control.class_name() == s)
            .ok_or_else(|| UnknownControl(s.to_string()))
    }
}

/// Client-side edit state of a row. Never sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowMode {
    #[default]
    Viewing,
    Editing,
}

/// What currently holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Nothing,
    FormInput,
    /// The edit input of the row at this position.
    RowEditInput(usize),
}

/// One rendered todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    id: TodoId,
    checked: bool,
    label: String,
    edit_value: String,
    mode: RowMode,
}

impl Row {
    fn from_todo(todo: &Todo) -> Self {
        Self {
            id: todo.id.clone(),
            checked: todo.completed,
            label: todo.content.clone(),
            edit_value: todo.content.clone(),
            mode: RowMode::Viewing,
        }
    }

    /// The identifier stored on the row element.
    pub fn id(&self) -> &TodoId {
        &self.id
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn edit_value(&self) -> &str {
        &self.edit_value
    }

    pub fn mode(&self) -> RowMode {
        self.mode
    }

    pub fn label_visible(&self) -> bool {
        self.mode == RowMode::Viewing
    }

    pub fn edit_input_visible(&self) -> bool {
        self.mode == RowMode::Editing
    }

    /// Whether the edit and delete buttons are shown.
    pub fn content_buttons_visible(&self) -> bool {
        self.mode == RowMode::Viewing
    }

    /// Whether the confirm and cancel buttons are shown.
    pub fn edit_buttons_visible(&self) -> bool {
        self.mode == RowMode::Editing
    }

    pub fn shows(&self, control: Control) -> bool {
        match control {
            Control::Checkbox => true,
            Control::Edit | Control::Remove => self.content_buttons_visible(),
            Control::Confirm | Control::Cancel => self.edit_buttons_visible(),
        }
    }

    fn begin_edit(&mut self) {
        self.mode = RowMode::Editing;
    }

    fn cancel_edit(&mut self) {
        self.mode = RowMode::Viewing;
        self.edit_value = self.label.clone();
    }
}

/// The page: a form input above a list container.
#[derive(Debug, Clone, Default)]
pub struct Document {
    form_input: String,
    rows: Vec<Row>,
    focus: Focus,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn find_row(&self, id: &TodoId) -> Option<&Row> {
        self.rows.iter().find(|row| &row.id == id)
    }

    pub fn form_input(&self) -> &str {
        &self.form_input
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Replace the whole list container with one row per record, in the
    /// order given. Any row-level edit state and focus is discarded.
    pub fn render(&mut self, todos: &[Todo]) {
        self.rows = todos.iter().map(Row::from_todo).collect();
        if matches!(self.focus, Focus::RowEditInput(_)) {
            self.focus = Focus::Nothing;
        }
    }

    pub(crate) fn set_form_input(&mut self, text: &str) {
        self.form_input = text.to_string();
    }

    pub(crate) fn clear_form_input(&mut self) {
        self.form_input.clear();
    }

    pub(crate) fn focus_form_input(&mut self) {
        self.focus = Focus::FormInput;
    }

    /// Returns `false` when there is no such row or its edit input is hidden.
    pub(crate) fn set_edit_value(&mut self, index: usize, text: &str) -> bool {
        match self.rows.get_mut(index) {
            Some(row) if row.edit_input_visible() => {
                row.edit_value = text.to_string();
                true
            }
            _ => false,
        }
    }

    pub(crate) fn begin_edit(&mut self, index: usize) {
        if let Some(row) = self.rows.get_mut(index) {
            row.begin_edit();
            self.focus = Focus::RowEditInput(index);
        }
    }

    pub(crate) fn cancel_edit(&mut self, index: usize) {
        if let Some(row) = self.rows.get_mut(index) {
            row.cancel_edit();
            if self.focus == Focus::RowEditInput(index) {
                self.focus = Focus::Nothing;
            }
        }
    }
}
