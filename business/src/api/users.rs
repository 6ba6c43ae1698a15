use serde::Serialize;

use super::{ApiClient, execute, fetch, with_json, with_paging};
use crate::entities::{PendingUser, User, UserRole};
use crate::error::ApiResult;
use crate::query::{Paging, UserListQuery};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddRoleBody<'a> {
    role: &'a str,
    is_primary: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrimaryRoleBody<'a> {
    role_id: &'a str,
}

/// `PUT /admin/users/{id}/status` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusUpdate {
    pub is_active: bool,
    pub is_verified: bool,
}

impl ApiClient {
    /// `GET /admin/users`
    pub async fn list_users(&self, query: &UserListQuery) -> ApiResult<Vec<User>> {
        query.validate()?;
        let mut builder = with_paging(self.get("/admin/users")?, query.paging);
        if let Some(status) = query.status {
            builder = builder.query("status", status.as_str());
        }
        if let Some(role) = &query.role {
            builder = builder.query("role", role);
        }
        if let Some(search) = &query.search {
            builder = builder.query("search", search);
        }
        fetch(builder, "fetch users").await
    }

    /// `GET /admin/users/pending-approval`, first hundred only.
    pub async fn list_pending_users(&self) -> ApiResult<Vec<PendingUser>> {
        let builder = with_paging(
            self.get("/admin/users/pending-approval")?,
            Paging::new(1, 100),
        );
        fetch(builder, "fetch pending users").await
    }

    /// `GET /admin/users/{id}`
    pub async fn get_user(&self, user_id: &str) -> ApiResult<User> {
        fetch(self.get(&format!("/admin/users/{user_id}"))?, "fetch user").await
    }

    /// `GET /admin/users/{id}/roles`
    pub async fn list_user_roles(&self, user_id: &str) -> ApiResult<Vec<UserRole>> {
        let builder = self.get(&format!("/admin/users/{user_id}/roles"))?;
        fetch(builder, "fetch user roles").await
    }

    /// `POST /admin/users/{id}/roles`
    pub async fn add_user_role(
        &self,
        user_id: &str,
        role: &str,
        is_primary: bool,
    ) -> ApiResult<String> {
        let body = AddRoleBody { role, is_primary };
        let builder = self.post(&format!("/admin/users/{user_id}/roles"))?;
        execute(with_json(builder, &body, "add role")?, "add role").await
    }

    /// `DELETE /admin/users/{id}/roles/{roleId}`
    pub async fn remove_user_role(&self, user_id: &str, role_id: &str) -> ApiResult<String> {
        let builder = self.delete(&format!("/admin/users/{user_id}/roles/{role_id}"))?;
        execute(builder, "remove role").await
    }

    /// `PUT /admin/users/{id}/primary-role`
    pub async fn set_primary_role(&self, user_id: &str, role_id: &str) -> ApiResult<String> {
        let body = PrimaryRoleBody { role_id };
        let builder = self.put(&format!("/admin/users/{user_id}/primary-role"))?;
        execute(
            with_json(builder, &body, "set primary role")?,
            "set primary role",
        )
        .await
    }

    /// `PUT /admin/users/{id}/status`
    pub async fn update_user_status(
        &self,
        user_id: &str,
        update: UserStatusUpdate,
    ) -> ApiResult<String> {
        let builder = self.put(&format!("/admin/users/{user_id}/status"))?;
        execute(
            with_json(builder, &update, "update user status")?,
            "update user status",
        )
        .await
    }

    /// `DELETE /admin/users/{id}`
    pub async fn delete_user(&self, user_id: &str) -> ApiResult<String> {
        execute(self.delete(&format!("/admin/users/{user_id}"))?, "delete user").await
    }

    /// `PUT /admin/users/{id}/restore`
    pub async fn restore_user(&self, user_id: &str) -> ApiResult<String> {
        let builder = self.put(&format!("/admin/users/{user_id}/restore"))?;
        execute(builder, "restore user").await
    }
}
