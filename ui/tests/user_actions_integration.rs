mod common;

use common::{TestCtx, envelope, users_json};
use kittest::Queryable;
use serde_json::json;
use tipdesk_business::entities::User;
use tipdesk_ui::widgets::Dialog;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn with_users(server: MockServer) -> MockServer {
    Mock::given(method("GET"))
        .and(path("/admin/users"))
        .respond_with(envelope(users_json(3)))
        .mount(&server)
        .await;
    server
}

async fn loaded_user(ctx: &mut TestCtx<'_, tipdesk_ui::TipdeskApp>, index: usize) -> User {
    assert!(ctx.wait_for_label("Page 1 of 1").await);
    ctx.state().users.table.data()[index].clone()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_user_confirms_and_refetches() {
    let mut ctx = TestCtx::signed_in(|server| async move {
        Mock::given(method("DELETE"))
            .and(path("/admin/users/u-3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "User deleted successfully",
            })))
            .expect(1)
            .mount(&server)
            .await;
        with_users(server).await
    })
    .await;

    let user = loaded_user(&mut ctx, 2).await;
    ctx.state_mut().dialog.open(Dialog::DeleteUser { user });
    assert!(ctx.wait_for_label("Delete User").await);

    ctx.harness_mut().get_by_label("Delete").click();
    assert!(ctx.wait_for_label("User deleted successfully").await);
    assert!(!ctx.state().dialog.is_open());
    assert!(ctx.harness().query_by_label("Delete User").is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_edit_status_sends_changed_flags() {
    let mut ctx = TestCtx::signed_in(|server| async move {
        Mock::given(method("PUT"))
            .and(path("/admin/users/u-1/status"))
            .and(body_json(json!({ "isActive": false, "isVerified": false })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "",
            })))
            .expect(1)
            .mount(&server)
            .await;
        with_users(server).await
    })
    .await;

    let user = loaded_user(&mut ctx, 0).await;
    ctx.state_mut().dialog.open(Dialog::edit_status(user));
    assert!(ctx.wait_for_label("Edit Status").await);

    assert!(ctx.harness().query_by_label("Save").is_some());
    if let Some(Dialog::EditStatus { is_active, .. }) = ctx.state_mut().dialog.current.as_mut() {
        *is_active = false;
    }
    ctx.harness_mut().step();
    ctx.harness_mut().get_by_label("Save").click();

    assert!(ctx.wait_for_label("User status updated").await);
    assert!(!ctx.state().dialog.is_open());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_mutation_keeps_dialog_open_with_error() {
    let mut ctx = TestCtx::signed_in(|server| async move {
        Mock::given(method("PUT"))
            .and(path("/admin/users/u-2/restore"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "success": false,
                "message": "User is not deleted",
            })))
            .mount(&server)
            .await;
        with_users(server).await
    })
    .await;

    let user = loaded_user(&mut ctx, 1).await;
    ctx.state_mut().dialog.open(Dialog::RestoreUser { user });
    assert!(ctx.wait_for_label("Restore User").await);

    ctx.harness_mut().get_by_label("Restore").click();
    assert!(ctx.wait_for_label("User is not deleted").await);
    assert!(ctx.state().dialog.is_open());
    assert!(!ctx.state().dialog.submitting);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_user_details_loads_record() {
    let mut ctx = TestCtx::signed_in(|server| async move {
        Mock::given(method("GET"))
            .and(path("/admin/users/u-1"))
            .respond_with(envelope(json!({
                "id": "u-1",
                "firstName": "Asha",
                "lastName": "Rao",
                "email": "asha@tipdesk.io",
                "userRoles": [
                    { "id": "r-1", "role": "tipper", "isPrimary": true }
                ],
            })))
            .mount(&server)
            .await;
        with_users(server).await
    })
    .await;
    assert!(ctx.wait_for_label("Page 1 of 1").await);

    let egui_ctx = ctx.harness().ctx.clone();
    ctx.state_mut().open_user_details("u-1", &egui_ctx);

    assert!(ctx.wait_for_label("asha@tipdesk.io").await);
    assert!(ctx.harness().query_by_label("★ tipper").is_some());
    ctx.harness_mut().get_by_label("Done").click();
    assert!(ctx.wait_for(|h| !h.state().state().dialog.is_open()).await);
}
