//! Full CRUD lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every core client
//! operation over real HTTP using ureq. Validates that the core's request
//! building and response parsing work end-to-end with the actual server,
//! including the form-encoded bodies and the delete acknowledgment envelope.

use snippet_core::{
    ApiError, CreateSnippet, HttpMethod, HttpResponse, SnippetClient, SnippetType, UpdateSnippet,
};

const SERVICE: &str = "SU1Z0isxPaozGVKXdv0eY";
const VERSION: u32 = 1;

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: snippet_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/x-www-form-urlencoded")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(&req.path)
            .content_type("application/x-www-form-urlencoded")
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
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

#[test]
fn crud_lifecycle() {
    // Step 1: start mock server on a random port.
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

    let client = SnippetClient::new(&format!("http://{addr}"));

    // Step 2: list — should be empty.
    let req = client.build_list_snippets(SERVICE, VERSION).unwrap();
    let snippets = client.parse_list_snippets(execute(req)).unwrap();
    assert!(snippets.is_empty(), "expected empty list");

    // Step 3: create three snippets, deliberately out of name order.
    for name in ["b", "a", "c"] {
        let input = CreateSnippet {
            content: "set req.http.X-Greeting = \"hello\";".to_string(),
            dynamic: false,
            name: name.to_string(),
            priority: 100,
            snippet_type: SnippetType::Recv,
        };
        let req = client.build_create_snippet(SERVICE, VERSION, &input).unwrap();
        let created = client.parse_create_snippet(execute(req)).unwrap();
        assert_eq!(created.name, name);
        assert_eq!(created.service_id, SERVICE);
        assert_eq!(created.version, VERSION);
        assert_eq!(created.snippet_type, SnippetType::Recv);
        assert!(!created.id.is_empty(), "server must assign an id");
        assert!(created.created_at.is_some());
    }

    // Step 4: list — sorted by name regardless of creation order.
    let req = client.build_list_snippets(SERVICE, VERSION).unwrap();
    let snippets = client.parse_list_snippets(execute(req)).unwrap();
    let names: Vec<&str> = snippets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);

    // Step 5: update "a" — content, priority, and placement change; name stays.
    let input = UpdateSnippet {
        content: "new content".to_string(),
        name: "a".to_string(),
        priority: 110,
        snippet_type: SnippetType::Fetch,
    };
    let req = client
        .build_update_snippet(SERVICE, VERSION, "a", &input)
        .unwrap();
    let updated = client.parse_update_snippet(execute(req)).unwrap();
    assert_eq!(updated.content, "new content");
    assert_eq!(updated.name, "a");
    assert_eq!(updated.priority, 110);
    assert_eq!(updated.snippet_type, SnippetType::Fetch);

    // Step 6: delete "b".
    let req = client.build_delete_snippet(SERVICE, VERSION, "b").unwrap();
    client.parse_delete_snippet(execute(req)).unwrap();

    // Step 7: list — "b" is gone.
    let req = client.build_list_snippets(SERVICE, VERSION).unwrap();
    let snippets = client.parse_list_snippets(execute(req)).unwrap();
    let names: Vec<&str> = snippets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["a", "c"]);

    // Step 8: delete "b" again — the server's envelope reports the rejection.
    let req = client.build_delete_snippet(SERVICE, VERSION, "b").unwrap();
    let err = client.parse_delete_snippet(execute(req)).unwrap_err();
    match err {
        ApiError::RemoteRejected(msg) => assert_eq!(msg, "not found"),
        other => panic!("expected RemoteRejected, got {other:?}"),
    }
}
