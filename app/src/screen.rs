//! Plain-text rendering of the document.

use std::fmt::Write;

use todo_core::{Document, Focus, Row};

const CURSOR: &str = "_";

pub fn render(document: &Document) -> String {
    let mut out = String::new();
    if document.rows().is_empty() {
        out.push_str("  (nothing to do)\n");
    }
    for (index, row) in document.rows().iter().enumerate() {
        let focused = document.focus() == Focus::RowEditInput(index);
        let _ = writeln!(out, "{:>3}. {}", index + 1, render_row(row, focused));
    }

    let cursor = if document.focus() == Focus::FormInput { CURSOR } else { "" };
    let _ = writeln!(out, "new> {}{cursor}", document.form_input());
    out
}

fn render_row(row: &Row, focused: bool) -> String {
    let checkbox = if row.is_checked() { "[x]" } else { "[ ]" };
    let mut line = format!("{checkbox} ");

    if row.label_visible() {
        line.push_str(row.label());
    }
    if row.edit_input_visible() {
        let cursor = if focused { CURSOR } else { "" };
        let _ = write!(line, "<{}{cursor}>", row.edit_value());
    }
    if row.content_buttons_visible() {
        line.push_str("  (edit) (delete)");
    }
    if row.edit_buttons_visible() {
        line.push_str("  (confirm) (cancel)");
    }
    line
}
