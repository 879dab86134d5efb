//! The todo view-controller.
//!
//! # Design
//! One `TodoController` owns the client, the document and the table of
//! in-flight requests. Event handlers never perform I/O: a handler that needs
//! the server returns a `Dispatch` naming the request, and the host reports the
//! outcome through `complete`. A completed mutation answers with the next
//! dispatch, a full re-fetch of the collection, so the rendered list is always
//! rebuilt from the last list the server returned.
//!
//! Requests are independent. Nothing is sequenced or debounced, and whichever
//! list response is completed last determines what is rendered.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, error, warn};

use crate::client::TodoClient;
use crate::dom::{Control, Document};
use crate::error::{ApiError, TransportError};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreateTodo, TodoId, UpdateTodo};

/// Correlates a dispatched request with its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// What a dispatched request is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Load,
    Create,
    Toggle(TodoId),
    Commit(TodoId),
    Delete(TodoId),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Load => write!(f, "load"),
            Action::Create => write!(f, "create"),
            Action::Toggle(id) => write!(f, "toggle {id}"),
            Action::Commit(id) => write!(f, "commit {id}"),
            Action::Delete(id) => write!(f, "delete {id}"),
        }
    }
}

/// A request the host must execute and later report back via
/// `TodoController::complete`.
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub ticket: Ticket,
    pub action: Action,
    pub request: HttpRequest,
}

/// One logged failure of a request chain.
#[derive(Debug)]
pub struct SyncFailure {
    pub action: Action,
    pub error: ApiError,
}

impl fmt::Display for SyncFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.action, self.error)
    }
}

#[derive(Debug)]
pub struct TodoController {
    client: TodoClient,
    document: Document,
    in_flight: HashMap<Ticket, Action>,
    next_ticket: u64,
    failures: Vec<SyncFailure>,
}

impl TodoController {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            document: Document::new(),
            in_flight: HashMap::new(),
            next_ticket: 0,
            failures: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Every failure logged so far, oldest first.
    pub fn failures(&self) -> &[SyncFailure] {
        &self.failures
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Page-loaded hook: fetch and render the initial list.
    pub fn start(&mut self) -> Dispatch {
        self.load_all()
    }

    /// Fetch the whole collection. The list is re-rendered when the response
    /// is completed; on failure the current rendering stays.
    pub fn load_all(&mut self) -> Dispatch {
        let request = self.client.build_list_todos();
        self.dispatch(Action::Load, request)
    }

    pub fn type_into_form(&mut self, text: &str) {
        self.document.set_form_input(text);
    }

    /// Set the edit input of the row at `row`. Ignored unless that row is
    /// being edited.
    pub fn type_into_row(&mut self, row: usize, text: &str) {
        if !self.document.set_edit_value(row, text) {
            debug!(row, "typing ignored, no visible edit input");
        }
    }

    /// Form submission. Empty input is ignored without contacting the server.
    pub fn submit(&mut self) -> Option<Dispatch> {
        let content = self.document.form_input();
        if content.is_empty() {
            return None;
        }
        let built = self.client.build_create_todo(&CreateTodo::new(content));
        self.send(Action::Create, built)
    }

    /// Route a click inside the list container to the handler for `control`.
    ///
    /// `control` is `None` for clicks that did not land on a control (the
    /// label, the row padding). Those, clicks on hidden controls and clicks
    /// on rows that do not exist do nothing.
    pub fn click(&mut self, row: usize, control: Option<Control>) -> Option<Dispatch> {
        let control = control?;
        let target = self.document.row(row)?;
        if !target.shows(control) {
            debug!(row, %control, "click on hidden control ignored");
            return None;
        }
        let id = target.id().clone();

        match control {
            Control::Checkbox => {
                let completed = !target.is_checked();
                let built = self.client.build_update_todo(&id, &UpdateTodo::completed(completed));
                self.send(Action::Toggle(id), built)
            }
            Control::Edit => {
                self.document.begin_edit(row);
                None
            }
            Control::Cancel => {
                self.document.cancel_edit(row);
                None
            }
            Control::Confirm => {
                let update = UpdateTodo::content(target.edit_value());
                let built = self.client.build_update_todo(&id, &update);
                self.send(Action::Commit(id), built)
            }
            Control::Remove => {
                let request = self.client.build_delete_todo(&id);
                Some(self.dispatch(Action::Delete(id), request))
            }
        }
    }

    /// `click` keyed by the clicked element's class name.
    pub fn click_class(&mut self, row: usize, class_name: &str) -> Option<Dispatch> {
        self.click(row, class_name.parse().ok())
    }

    /// Apply the outcome of a dispatched request. Returns the follow-up
    /// re-fetch after a successful mutation.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<HttpResponse, TransportError>,
    ) -> Option<Dispatch> {
        let Some(action) = self.in_flight.remove(&ticket) else {
            warn!(?ticket, "completion for unknown request ignored");
            return None;
        };

        let result = outcome
            .map_err(ApiError::from)
            .and_then(|response| self.apply(&action, response));
        match result {
            Ok(next) => next,
            Err(error) => {
                self.fail(action, error);
                None
            }
        }
    }

    fn apply(&mut self, action: &Action, response: HttpResponse) -> Result<Option<Dispatch>, ApiError> {
        match action {
            Action::Load => {
                let todos = self.client.parse_list_todos(response)?;
                debug!(count = todos.len(), "rendering list");
                self.document.render(&todos);
                Ok(None)
            }
            Action::Create => {
                self.client.parse_create_todo(response)?;
                let reload = self.load_all();
                self.document.clear_form_input();
                self.document.focus_form_input();
                Ok(Some(reload))
            }
            Action::Toggle(_) | Action::Commit(_) => {
                // The echoed record is not trusted; the re-fetch is.
                self.client.parse_update_todo(response)?;
                Ok(Some(self.load_all()))
            }
            Action::Delete(_) => {
                self.client.parse_delete_todo(response)?;
                Ok(Some(self.load_all()))
            }
        }
    }

    fn send(&mut self, action: Action, built: Result<HttpRequest, ApiError>) -> Option<Dispatch> {
        match built {
            Ok(request) => Some(self.dispatch(action, request)),
            Err(error) => {
                self.fail(action, error);
                None
            }
        }
    }

    fn dispatch(&mut self, action: Action, request: HttpRequest) -> Dispatch {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        debug!(?ticket, %action, method = %request.method, path = %request.path, "dispatching");
        self.in_flight.insert(ticket, action.clone());
        Dispatch {
            ticket,
            action,
            request,
        }
    }

    fn fail(&mut self, action: Action, error: ApiError) {
        error!(%action, %error, "sync failed");
        self.failures.push(SyncFailure { action, error });
    }
}
