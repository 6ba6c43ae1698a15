use std::time::Duration;

use egui_kittest::Harness;
use kittest::Queryable;
use serde_json::{Value, json};
use tipdesk_business::Session;
use tipdesk_business::entities::AuthUser;
use tipdesk_ui::TipdeskApp;
use tipdesk_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a, T = State> {
    mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }

    #[allow(unused)]
    pub fn server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Steps frames until `done` holds, letting background requests finish
    /// in between.
    pub async fn wait_for(&mut self, mut done: impl FnMut(&Harness<'a, T>) -> bool) -> bool {
        for _ in 0..200 {
            self.harness.step();
            if done(&self.harness) {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        false
    }

    #[allow(unused)]
    pub async fn wait_for_label(&mut self, label: &str) -> bool {
        self.wait_for(|harness| harness.query_by_label(label).is_some())
            .await
    }
}

impl<'a> TestCtx<'a, TipdeskApp> {
    /// Login page against a server with the default list mocks.
    #[allow(unused)]
    pub async fn new_app() -> Self {
        let mock_server = start_server().await;
        let state = State::test(mock_server.uri()).expect("state should build");
        Self::with_state(mock_server, state)
    }

    /// Already signed in; lists come from whatever `mount` adds.
    #[allow(unused)]
    pub async fn signed_in<F, Fut>(mount: F) -> Self
    where
        F: FnOnce(MockServer) -> Fut,
        Fut: Future<Output = MockServer>,
    {
        let mock_server = mount(MockServer::start().await).await;
        let mock_server = mount_defaults(mock_server).await;
        let state = State::test(mock_server.uri())
            .expect("state should build")
            .with_session(test_session());
        Self::with_state(mock_server, state)
    }

    fn with_state(mock_server: MockServer, state: State) -> Self {
        let app = TipdeskApp::new(state);
        let harness = Harness::builder()
            .with_size(egui::vec2(1400.0, 900.0))
            .build_eframe(|_| app);
        Self {
            mock_server,
            harness,
        }
    }

    #[allow(unused)]
    pub fn state_mut(&mut self) -> &mut State {
        self.harness.state_mut().state_mut()
    }

    #[allow(unused)]
    pub fn state(&self) -> &State {
        self.harness.state().state()
    }
}

#[allow(unused)]
pub fn test_session() -> Session {
    Session {
        user: AuthUser {
            id: "admin-1".to_owned(),
            first_name: "Ada".to_owned(),
            last_name: "Admin".to_owned(),
            user_name: "ada".to_owned(),
            roles: vec!["admin".to_owned()],
            ..AuthUser::default()
        },
        token: "test_token".to_owned(),
    }
}

#[allow(unused)]
pub fn envelope(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "message": "ok",
        "data": data,
    }))
}

#[allow(unused)]
pub fn users_json(count: usize) -> Value {
    Value::Array(
        (1..=count)
            .map(|n| {
                json!({
                    "id": format!("u-{n}"),
                    "firstName": "User",
                    "lastName": n.to_string(),
                    "userName": format!("user{n}"),
                    "email": format!("user{n}@tipdesk.io"),
                    "isActive": true,
                    "userRoles": [],
                    "createdAt": "2024-03-01T10:00:00Z",
                })
            })
            .collect(),
    )
}

async fn start_server() -> MockServer {
    mount_defaults(MockServer::start().await).await
}

/// Empty lists for every endpoint not mocked by the test itself.
async fn mount_defaults(server: MockServer) -> MockServer {
    for list in [
        "/admin/users",
        "/admin/users/pending-approval",
        "/admin/businesses",
        "/admin/tippies",
    ] {
        Mock::given(method("GET"))
            .and(path(list))
            .respond_with(envelope(json!([])))
            .with_priority(10)
            .mount(&server)
            .await;
    }
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(envelope(Value::Null))
        .with_priority(10)
        .mount(&server)
        .await;
    server
}
