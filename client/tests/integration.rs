//! Full lifecycle test against a live server.
//!
//! Starts the server on a random port, then exercises every client operation
//! over real HTTP using ureq.

use todo_client::{ApiError, CreateTodo, HttpMethod, HttpRequest, HttpResponse, TodoClient, TodoId, UpdateTodo};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Status codes are returned as data rather than `Err`, so the client core
/// does all status interpretation.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Patch, Some(body)) => {
            agent.patch(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Patch, None) => agent.patch(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_server() -> std::net::SocketAddr {
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
            todo_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn crud_lifecycle() {
    let addr = start_server();
    let client = TodoClient::new(&format!("http://{addr}"));

    // Empty to begin with.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos.is_empty(), "expected empty list");

    // Create two.
    let req = client
        .build_create_todo(&CreateTodo {
            text: "Buy milk".to_string(),
        })
        .unwrap();
    let first = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(first.message, "This action added a new todo");
    assert_eq!(first.details.id, TodoId(1));
    assert!(!first.details.is_checked);

    let req = client
        .build_create_todo(&CreateTodo {
            text: "Walk dog".to_string(),
        })
        .unwrap();
    let second = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(second.details.id, TodoId(2));

    // Get.
    let fetched = client
        .parse_get_todo(execute(client.build_get_todo(first.details.id)))
        .unwrap();
    assert_eq!(fetched, first.details);

    // Validation is surfaced with the server's messages.
    let req = client
        .build_create_todo(&CreateTodo {
            text: "no".to_string(),
        })
        .unwrap();
    let err = client.parse_create_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::Validation(ref m) if m.len() == 1), "{err:?}");

    // Delete the first.
    let message = client
        .parse_delete_todo(execute(client.build_delete_todo(first.details.id)))
        .unwrap();
    assert_eq!(message, "This action removed a #1 todo");

    let err = client
        .parse_get_todo(execute(client.build_get_todo(first.details.id)))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(ref m) if m == "Todo with id 1 not found"));

    let err = client
        .parse_delete_todo(execute(client.build_delete_todo(first.details.id)))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    // Update the second.
    let req = client
        .build_update_todo(
            second.details.id,
            &UpdateTodo {
                text: "Walk dog".to_string(),
                is_checked: true,
            },
        )
        .unwrap();
    let updated = client.parse_update_todo(execute(req)).unwrap();
    assert_eq!(updated.message, "This action updated a #2 todo");
    assert_eq!(updated.details.id, second.details.id);
    assert!(updated.details.is_checked);

    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(todos, vec![updated.details.clone()]);

    // Clear, then ids keep counting.
    let message = client
        .parse_clear_todos(execute(client.build_clear_todos()))
        .unwrap();
    assert_eq!(message, "This action deleted all todos");

    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos.is_empty(), "expected empty list after clear");

    let req = client
        .build_create_todo(&CreateTodo {
            text: "Feed cat".to_string(),
        })
        .unwrap();
    let third = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(third.details.id, TodoId(3));
}
