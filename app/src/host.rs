//! Drives one `TodoController` with a real transport.
//!
//! Dispatches wait in a FIFO and are executed one at a time; each completion
//! may enqueue the follow-up re-fetch. `pump` returns once the queue is empty.

use std::collections::VecDeque;

use todo_core::{Dispatch, Document, SyncFailure, TodoClient, TodoController};
use tracing::info;

use crate::command::Command;
use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Host<T> {
    controller: TodoController,
    transport: T,
    queue: VecDeque<Dispatch>,
}

impl<T: Transport> Host<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            controller: TodoController::new(client),
            transport,
            queue: VecDeque::new(),
        }
    }

    pub fn document(&self) -> &Document {
        self.controller.document()
    }

    pub fn failures(&self) -> &[SyncFailure] {
        self.controller.failures()
    }

    /// Initial load, as on page load.
    pub fn start(&mut self) {
        let load = self.controller.start();
        self.queue.push_back(load);
        self.pump();
    }

    pub fn run(&mut self, command: Command) -> Flow {
        let dispatch = match command {
            Command::Add(text) => {
                self.controller.type_into_form(&text);
                self.controller.submit()
            }
            Command::Type(text) => {
                self.controller.type_into_form(&text);
                None
            }
            Command::Submit => self.controller.submit(),
            Command::Click { row, control } => self.controller.click(row, Some(control)),
            Command::ClickClass { row, class_name } => self.controller.click_class(row, &class_name),
            Command::Set { row, text } => {
                self.controller.type_into_row(row, &text);
                None
            }
            Command::Reload => Some(self.controller.load_all()),
            Command::Show | Command::Help => None,
            Command::Quit => {
                info!("bye");
                return Flow::Quit;
            }
        };
        self.queue.extend(dispatch);
        self.pump();
        Flow::Continue
    }

    /// Execute queued requests until none remain.
    pub fn pump(&mut self) {
        while let Some(dispatch) = self.queue.pop_front() {
            let outcome = self.transport.execute(&dispatch.request);
            self.queue.extend(self.controller.complete(dispatch.ticket, outcome));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use todo_core::{HttpMethod, HttpRequest, HttpResponse, RowMode, TransportError};

    use super::*;

    /// Answers list requests from a fixed body and records everything sent.
    struct Scripted {
        list: &'static str,
        online: bool,
        sent: RefCell<Vec<(HttpMethod, String)>>,
    }

    impl Scripted {
        fn new(list: &'static str) -> Self {
            Self {
                list,
                online: true,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for Scripted {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.sent.borrow_mut().push((request.method, request.path.clone()));
            if !self.online {
                return Err(TransportError::new("offline"));
            }
            Ok(match request.method {
                HttpMethod::Get => HttpResponse::new(200, self.list),
                HttpMethod::Post => HttpResponse::new(201, r#"{"id":9,"content":"x","completed":false}"#),
                HttpMethod::Patch | HttpMethod::Delete => HttpResponse::new(200, "{}"),
            })
        }
    }

    const ONE: &str = r#"[{"id":1,"content":"Buy milk","completed":false}]"#;

    fn host(transport: Scripted) -> Host<Scripted> {
        let mut host = Host::new(TodoClient::new("http://store"), transport);
        host.start();
        host
    }

    #[test]
    fn start_renders_initial_list() {
        let host = host(Scripted::new(ONE));
        assert_eq!(host.document().rows().len(), 1);
        assert_eq!(host.transport.sent.borrow().len(), 1);
    }

    #[test]
    fn mutation_is_followed_by_reload() {
        let mut host = host(Scripted::new(ONE));
        assert_eq!(host.run(Command::Add("Bread".to_string())), Flow::Continue);

        let sent = host.transport.sent.borrow();
        assert_eq!(
            *sent,
            vec![
                (HttpMethod::Get, "http://store/todos".to_string()),
                (HttpMethod::Post, "http://store/todos".to_string()),
                (HttpMethod::Get, "http://store/todos".to_string()),
            ]
        );
        assert_eq!(host.document().form_input(), "");
    }

    #[test]
    fn view_only_commands_send_nothing() {
        let mut host = host(Scripted::new(ONE));
        host.run("edit 1".parse().unwrap());
        host.run("set 1 Buy bread".parse().unwrap());
        host.run(Command::Show);
        host.run("type draft".parse().unwrap());

        assert_eq!(host.transport.sent.borrow().len(), 1);
        assert_eq!(host.document().rows()[0].mode(), RowMode::Editing);
        assert_eq!(host.document().rows()[0].edit_value(), "Buy bread");
        assert_eq!(host.document().form_input(), "draft");
    }

    #[test]
    fn offline_commands_log_and_keep_going() {
        let mut host = host(Scripted::new(ONE));
        host.transport.online = false;

        assert_eq!(host.run("toggle 1".parse().unwrap()), Flow::Continue);
        assert_eq!(host.run("click 1 todo_remove_button".parse().unwrap()), Flow::Continue);
        assert_eq!(host.failures().len(), 2);
        assert_eq!(host.document().rows().len(), 1);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut host = host(Scripted::new("[]"));
        assert_eq!(host.run(Command::Quit), Flow::Quit);
    }
}
