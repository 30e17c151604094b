/*
[INPUT]:  Mock backend and the review state machine
[OUTPUT]: Test results for the fetch/mutate/re-fetch workflow
[POS]:    Integration tests - review workflow invariants
[UPDATE]: When the fetch protocol or review transitions change
*/

use taskdesk_client::{PortalClient, Role, SessionToken, TaskStatus};
use taskdesk_tui::ReviewState;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PortalClient {
    let mut client = PortalClient::new(&server.uri()).expect("client should build");
    client.set_session(SessionToken::new("test-session-token"));
    client
}

fn page_body(page: u32, total_pages: u32, ids: &[&str]) -> serde_json::Value {
    let data: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "id": id,
                "title": format!("Task {id}"),
                "link_url": "https://docs.example.com/report",
                "department_name": "Sales",
                "status": "Menunggu",
                "comment": null,
                "created_at": "2024-03-05T10:00:00Z",
            })
        })
        .collect();
    serde_json::json!({
        "page": page,
        "limit": 5,
        "totalTasks": ids.len(),
        "totalPages": total_pages,
        "data": data,
    })
}

#[tokio::test]
async fn accept_refetches_with_the_same_filters_page_and_limit() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    // The same query must hit the list endpoint twice: once for the
    // initial page, once after the accept succeeds.
    Mock::given(method("GET"))
        .and(path("/task"))
        .and(query_param("year", "2024"))
        .and(query_param("department", "Sales"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 1, &["t-1"])))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/task/t-1/accept"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = ReviewState::new(Role::Manager, 5);
    state.set_year(Some(2024));
    state.set_department(Some("Sales".to_string()));

    let ticket = state.begin_fetch();
    let first_query = state.query();
    let page = client.list_tasks(state.role, &first_query).await.unwrap();
    assert!(state.apply_page(ticket, page));
    assert_eq!(state.tasks[0].status, TaskStatus::Pending);

    assert_ok!(client.accept_task(&state.tasks[0].id).await);

    // No optimistic local mutation: the view is rebuilt from the server
    // with an identical query.
    let refetch_query = state.query();
    assert_eq!(refetch_query, first_query);

    let ticket = state.begin_fetch();
    let page = client.list_tasks(state.role, &refetch_query).await.unwrap();
    assert!(state.apply_page(ticket, page));
}

#[tokio::test]
async fn slow_first_page_cannot_overwrite_a_filtered_page() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/myTask"))
        .and(query_param("year", "2023"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 1, &["old-1"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/myTask"))
        .and(query_param("year", "2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 1, &["new-1"])))
        .mount(&server)
        .await;

    let mut state = ReviewState::new(Role::Employee, 5);

    // First fetch dispatched against 2023...
    state.set_year(Some(2023));
    let slow_ticket = state.begin_fetch();
    let slow_query = state.query();

    // ...then the user switches to 2024 before it resolves.
    state.set_year(Some(2024));
    let fresh_ticket = state.begin_fetch();
    let fresh_query = state.query();

    let fresh_page = client.list_tasks(state.role, &fresh_query).await.unwrap();
    assert!(state.apply_page(fresh_ticket, fresh_page));

    let slow_page = client.list_tasks(state.role, &slow_query).await.unwrap();
    assert!(!state.apply_page(slow_ticket, slow_page));

    assert_eq!(state.tasks.len(), 1);
    assert_eq!(state.tasks[0].id, "new-1");
}

#[tokio::test]
async fn filter_change_resets_to_page_one_before_the_next_fetch() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/myTask"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(3, 4, &["t-9"])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/myTask"))
        .and(query_param("month", "7"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 1, &["t-2"])))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = ReviewState::new(Role::Employee, 5);
    state.pager.total_pages = 4;
    state.pager.set_page(3);

    let ticket = state.begin_fetch();
    let page = client.list_tasks(state.role, &state.query()).await.unwrap();
    assert!(state.apply_page(ticket, page));
    assert_eq!(state.pager.current_page, 3);

    state.set_month(Some(7));
    assert_eq!(state.query().page, 1);

    let ticket = state.begin_fetch();
    let page = client.list_tasks(state.role, &state.query()).await.unwrap();
    assert!(state.apply_page(ticket, page));
    assert_eq!(state.tasks[0].id, "t-2");
}

#[tokio::test]
async fn malformed_page_yields_empty_list_without_a_crash() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/myTask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "page": 1,
            "limit": 5,
            "totalPages": 7,
            "data": { "unexpected": "shape" },
        })))
        .mount(&server)
        .await;

    let mut state = ReviewState::new(Role::Employee, 5);
    state.pager.total_pages = 7;
    state.pager.set_page(6);

    let ticket = state.begin_fetch();
    let err = client
        .list_tasks(state.role, &state.query())
        .await
        .unwrap_err();
    assert!(state.apply_fetch_error(ticket, &err));

    assert!(state.tasks.is_empty());
    assert_eq!(state.pager.total_pages, 1);
    assert!(state.error.is_some());
}
