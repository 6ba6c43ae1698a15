mod common;

use common::{TestCtx, envelope, test_session, users_json};
use kittest::Queryable;
use serde_json::json;
use tipdesk_business::entities::User;
use tipdesk_ui::route::Route;
use tipdesk_ui::state::State;
use tipdesk_ui::tasks::TaskEvent;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn with_users(server: MockServer) -> MockServer {
    Mock::given(method("GET"))
        .and(path("/admin/users"))
        .and(header("authorization", "Bearer test_token"))
        .and(header("x-limit", "100"))
        .respond_with(envelope(users_json(25)))
        .mount(&server)
        .await;
    server
}

#[tokio::test(flavor = "multi_thread")]
async fn test_users_page_loads_and_paginates() {
    let mut ctx = TestCtx::signed_in(with_users).await;

    assert!(ctx.wait_for_label("Page 1 of 3").await);
    assert!(ctx.harness().query_by_label("0 of 25 row(s) selected").is_some());
    assert!(ctx.harness().query_by_label("➕ Add New User").is_some());

    ctx.harness_mut().get_by_label("Next").click();
    assert!(ctx.wait_for_label("Page 2 of 3").await);
    assert_eq!(ctx.state().users.table.page_index(), 1);

    ctx.harness_mut().get_by_label("Last").click();
    assert!(ctx.wait_for_label("Page 3 of 3").await);
    assert_eq!(ctx.state().users.table.page_rows().len(), 5);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_without_matches_shows_empty_state() {
    let mut ctx = TestCtx::signed_in(with_users).await;
    assert!(ctx.wait_for_label("Page 1 of 3").await);

    ctx.state_mut().users.table.set_search("nobody");
    assert!(ctx.wait_for_label("No users found.").await);
    assert!(ctx.harness().query_by_label("Page 1 of 1").is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_fetch_shows_error_and_retry_recovers() {
    let mut ctx = TestCtx::signed_in(|server| async move {
        Mock::given(method("GET"))
            .and(path("/admin/users"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "success": false,
                "message": "Database unavailable",
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        with_users(server).await
    })
    .await;

    assert!(ctx.wait_for_label("Database unavailable").await);
    assert!(ctx.harness().query_by_label("Page 1 of 3").is_none());

    ctx.harness_mut().get_by_label("Retry").click();
    assert!(ctx.wait_for_label("Page 1 of 3").await);
    assert!(ctx.harness().query_by_label("Database unavailable").is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_tippees_page() {
    let mut ctx = TestCtx::signed_in(|server| async move { server }).await;
    ctx.state_mut().navigate(Route::Tippees);

    assert!(ctx.wait_for_label("No tippees found.").await);
    assert!(ctx.harness().query_by_label("➕ Add New Tippee").is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_partner_button_opens_form() {
    let mut ctx = TestCtx::signed_in(|server| async move { server }).await;
    ctx.state_mut().navigate(Route::Partners);
    assert!(ctx.wait_for_label("No partners found.").await);

    ctx.harness_mut().get_by_label("➕ Add New Partner").click();
    assert!(ctx.wait_for_label("Create Partner").await);
    assert_eq!(ctx.state().route, Route::AddPartner);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_partner_validation_error() {
    let mut ctx = TestCtx::signed_in(|server| async move { server }).await;
    ctx.state_mut().navigate(Route::AddPartner);
    ctx.state_mut().add_partner.form.user_id = "u-1".to_owned();
    assert!(ctx.wait_for_label("Create Partner").await);

    ctx.harness_mut().get_by_label("Create Partner").click();
    assert!(ctx.wait_for_label("legalName: is required").await);
    assert!(!ctx.state().add_partner.submitting);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_created_partner_returns_to_list() {
    let mut ctx = TestCtx::signed_in(|server| async move {
        Mock::given(method("POST"))
            .and(path("/admin/businesses"))
            .respond_with(envelope(json!({
                "id": "b-9",
                "legalName": "Acme Private Limited",
                "brandName": "Acme",
            })))
            .expect(1)
            .mount(&server)
            .await;
        server
    })
    .await;
    ctx.state_mut().navigate(Route::AddPartner);
    {
        let form = &mut ctx.state_mut().add_partner.form;
        form.user_id = "u-1".to_owned();
        form.legal_name = "Acme Private Limited".to_owned();
        form.brand_name = "Acme".to_owned();
        form.business_type = "restaurant".to_owned();
        form.pan_number = "ABCDE1234F".to_owned();
    }
    assert!(ctx.wait_for_label("Create Partner").await);

    ctx.harness_mut().get_by_label("Create Partner").click();
    assert!(ctx.wait_for(|h| h.state().state().route == Route::Partners).await);
    assert!(ctx.wait_for_label("Partner Acme Private Limited created").await);
    assert!(ctx.state().add_partner.form.legal_name.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sign_out_returns_to_login() {
    let mut ctx = TestCtx::signed_in(|server| async move { server }).await;
    assert!(ctx.wait_for_label("Sign Out").await);

    ctx.harness_mut().get_by_label("Sign Out").click();
    assert!(ctx.wait_for_label("Sign In").await);
    assert!(!ctx.state().is_signed_in());
    assert_eq!(ctx.state().api().token(), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_response_from_ended_session_is_ignored() {
    let server = MockServer::start().await;
    let mut state = State::test(server.uri())
        .expect("state should build")
        .with_session(test_session());
    let ctx = egui::Context::default();

    state.users.set_fetching();
    let in_flight = state.tasks().sender();
    state.sign_out(&ctx);
    in_flight.send(TaskEvent::Users(Ok(vec![User {
        id: "old-session-row".to_owned(),
        ..User::default()
    }])));
    state.poll(&ctx);

    assert!(!state.is_signed_in());
    assert!(state.users.table.data().is_empty());
    assert!(state.users.needs_fetch());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_response_from_current_session_is_applied() {
    let server = MockServer::start().await;
    let mut state = State::test(server.uri())
        .expect("state should build")
        .with_session(test_session());
    let ctx = egui::Context::default();

    state.users.set_fetching();
    state.tasks().sender().send(TaskEvent::Users(Ok(vec![User::default()])));
    state.poll(&ctx);

    assert_eq!(state.users.table.data().len(), 1);
    assert!(state.users.is_loaded());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_token_expires_session() {
    let mut ctx = TestCtx::signed_in(|server| async move {
        Mock::given(method("GET"))
            .and(path("/admin/users"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "message": "Token expired",
            })))
            .mount(&server)
            .await;
        server
    })
    .await;

    assert!(
        ctx.wait_for_label("Your session has expired. Please sign in again.")
            .await
    );
    assert!(!ctx.state().is_signed_in());
}
