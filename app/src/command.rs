//! Line commands accepted by the terminal host.
//!
//! Each command maps onto one document event: typing, submitting the form, or
//! clicking a control in a row. Rows are numbered from 1 as displayed.

use std::str::FromStr;

use thiserror::Error;
use todo_core::Control;

pub const HELP: &str = "\
commands:
  add <text>          type <text> into the form and submit it
  type [text]         set the form input
  submit              submit the form
  toggle <n>          click the checkbox of row n
  edit <n>            start editing row n
  set <n> <text>      type into the edit input of row n
  confirm <n>         save the edit of row n
  cancel <n>          discard the edit of row n
  delete <n>          delete row n
  click <n> <class>   click the control of row n with that class name
  reload              fetch the list again
  show                print the list
  help                print this help
  quit                exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Type(String),
    Submit,
    /// `row` is zero-based.
    Click { row: usize, control: Control },
    ClickClass { row: usize, class_name: String },
    Set { row: usize, text: String },
    Reload,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{0}` needs a row number")]
    MissingRow(&'static str),
    #[error("`{0}` is not a row number")]
    BadRow(String),
    #[error("`{0}` needs text")]
    MissingText(&'static str),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim_start();

        let command = match verb {
            "" => return Err(ParseCommandError::Empty),
            "add" if rest.is_empty() => return Err(ParseCommandError::MissingText("add")),
            "add" => Command::Add(rest.to_string()),
            "type" => Command::Type(rest.to_string()),
            "submit" => Command::Submit,
            "toggle" => click("toggle", rest, Control::Checkbox)?,
            "edit" => click("edit", rest, Control::Edit)?,
            "confirm" => click("confirm", rest, Control::Confirm)?,
            "cancel" => click("cancel", rest, Control::Cancel)?,
            "delete" => click("delete", rest, Control::Remove)?,
            "set" => {
                let (row, text) = row_and_text("set", rest)?;
                Command::Set { row, text }
            }
            "click" => {
                let (row, class_name) = row_and_text("click", rest)?;
                if class_name.is_empty() {
                    return Err(ParseCommandError::MissingText("click"));
                }
                Command::ClickClass { row, class_name }
            }
            "reload" => Command::Reload,
            "show" | "ls" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(ParseCommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn click(verb: &'static str, rest: &str, control: Control) -> Result<Command, ParseCommandError> {
    let (row, _) = row_and_text(verb, rest)?;
    Ok(Command::Click { row, control })
}

/// Split `"<n> <text>"` into a zero-based row index and the remaining text.
fn row_and_text(verb: &'static str, rest: &str) -> Result<(usize, String), ParseCommandError> {
    let (number, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    if number.is_empty() {
        return Err(ParseCommandError::MissingRow(verb));
    }
    let row = number
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| ParseCommandError::BadRow(number.to_string()))?;
    Ok((row, text.trim_start().to_string()))
}
