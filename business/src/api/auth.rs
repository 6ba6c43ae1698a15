use log::info;
use serde::{Deserialize, Serialize};

use super::{ApiClient, accept_json, execute, fetch, send, with_json};
use crate::entities::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::forms::SigninRequest;

/// `data` of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigninData {
    pub user: AuthUser,
    pub token: String,
}

/// A signed-in staff member and their bearer token.
pub type Session = SigninData;

impl ApiClient {
    /// `POST /auth/login`. Stores the token on success.
    pub async fn sign_in(&mut self, request: &SigninRequest) -> ApiResult<Session> {
        let builder = accept_json(self.http.post(self.config.url("/auth/login")));
        let builder = with_json(builder, request, "sign in")?;
        let session: Session = fetch(builder, "sign in").await?;
        info!("signed in as {}", request.identity());
        self.token = Some(session.token.clone());
        Ok(session)
    }

    /// `POST /auth/logout`. The local token is dropped even if the call fails.
    pub async fn sign_out(&mut self) -> ApiResult<()> {
        let builder = self.post("/auth/logout");
        self.token = None;
        execute(builder?, "sign out").await.map(|_| ())
    }

    /// `GET /auth/verify`. False when the server rejects the token.
    pub async fn verify_session(&self) -> ApiResult<bool> {
        let builder = self.get("/auth/verify")?;
        match send(builder, "verify session").await {
            Ok(response) => Ok(response
                .json::<serde_json::Value>()
                .ok()
                .and_then(|body| body.get("success").and_then(serde_json::Value::as_bool))
                .unwrap_or(true)),
            Err(ApiError::Status { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }
}
