//! Full lifecycle tests against the live mock server.
//!
//! Starts the mock server on a random port, then exercises every client
//! operation and every controller handler over real HTTP using ureq.

use todo_core::{
    Action, ApiError, Control, CreateTodo, Dispatch, HttpMethod, HttpRequest, HttpResponse, RowMode, TodoClient,
    TodoController, TransportError, UpdateTodo,
};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// handle status interpretation.
fn execute(req: &HttpRequest) -> Result<HttpResponse, TransportError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let body = req.body.clone().unwrap_or_default();
    let result = match req.method {
        HttpMethod::Get => agent.get(&req.path).call(),
        HttpMethod::Delete => agent.delete(&req.path).call(),
        HttpMethod::Post => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        HttpMethod::Patch => agent
            .patch(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
    };
    let mut response = result.map_err(|e| TransportError::new(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();
    Ok(HttpResponse::new(status, body))
}

/// Run a dispatch and every follow-up it triggers.
fn drive(controller: &mut TodoController, dispatch: Option<Dispatch>) {
    let mut next = dispatch;
    while let Some(dispatch) = next {
        next = controller.complete(dispatch.ticket, execute(&dispatch.request));
    }
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn client_crud_lifecycle() {
    let client = TodoClient::new(&start_server());

    // list: empty
    let todos = client.parse_list_todos(execute(&client.build_list_todos()).unwrap()).unwrap();
    assert!(todos.is_empty(), "expected empty list");

    // create
    let req = client.build_create_todo(&CreateTodo::new("Integration test")).unwrap();
    let created = client.parse_create_todo(execute(&req).unwrap()).unwrap();
    assert_eq!(created.content, "Integration test");
    assert!(!created.completed);
    let id = created.id;

    // patch completed, echoed body is still valid json
    let req = client.build_update_todo(&id, &UpdateTodo::completed(true)).unwrap();
    let echoed = client.parse_update_todo(execute(&req).unwrap()).unwrap();
    assert_eq!(echoed["completed"], true);

    // patch content
    let req = client.build_update_todo(&id, &UpdateTodo::content("Updated")).unwrap();
    client.parse_update_todo(execute(&req).unwrap()).unwrap();

    let todos = client.parse_list_todos(execute(&client.build_list_todos()).unwrap()).unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].content, "Updated");
    assert!(todos[0].completed);

    // delete, then delete again
    client.parse_delete_todo(execute(&client.build_delete_todo(&id)).unwrap()).unwrap();
    let err = client
        .parse_delete_todo(execute(&client.build_delete_todo(&id)).unwrap())
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    let todos = client.parse_list_todos(execute(&client.build_list_todos()).unwrap()).unwrap();
    assert!(todos.is_empty(), "expected empty list after delete");
}

#[test]
fn controller_session_against_live_server() {
    let mut c = TodoController::new(TodoClient::new(&start_server()));
    let start = c.start();
    drive(&mut c, Some(start));
    assert!(c.document().rows().is_empty());

    // empty submit never reaches the server
    assert!(c.submit().is_none());

    for text in ["Buy milk", "Walk dog"] {
        c.type_into_form(text);
        let create = c.submit();
        drive(&mut c, create);
    }
    let labels: Vec<&str> = c.document().rows().iter().map(|r| r.label()).collect();
    assert_eq!(labels, vec!["Buy milk", "Walk dog"]);
    assert_eq!(c.document().form_input(), "");

    // toggle the first
    let toggle = c.click(0, Some(Control::Checkbox));
    drive(&mut c, toggle);
    assert!(c.document().rows()[0].is_checked());
    assert!(!c.document().rows()[1].is_checked());

    // edit the second
    c.click(1, Some(Control::Edit));
    c.type_into_row(1, "Walk cat");
    let commit = c.click(1, Some(Control::Confirm));
    drive(&mut c, commit);
    let row = &c.document().rows()[1];
    assert_eq!(row.label(), "Walk cat");
    assert_eq!(row.mode(), RowMode::Viewing);

    // delete the first
    let delete = c.click(0, Some(Control::Remove));
    drive(&mut c, delete);
    let labels: Vec<&str> = c.document().rows().iter().map(|r| r.label()).collect();
    assert_eq!(labels, vec!["Walk cat"]);

    assert!(c.failures().is_empty());
    assert_eq!(c.in_flight(), 0);
}

#[test]
fn unreachable_server_logs_one_failure_per_action() {
    // bind then drop to get a port nobody listens on
    let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let mut c = TodoController::new(TodoClient::new(&format!("http://{addr}")));

    let start = c.start();
    drive(&mut c, Some(start));
    assert_eq!(c.failures().len(), 1);

    c.type_into_form("Buy milk");
    let create = c.submit();
    drive(&mut c, create);

    assert_eq!(c.failures().len(), 2);
    assert_eq!(c.failures()[1].action, Action::Create);
    assert!(matches!(c.failures()[1].error, ApiError::Transport(_)));
    assert_eq!(c.document().form_input(), "Buy milk");
    assert!(c.document().rows().is_empty());
}
