use serde::Serialize;

use super::{ApiClient, execute, fetch, with_json, with_paging};
use crate::entities::Business;
use crate::error::ApiResult;
use crate::forms::CreateBusinessRequest;
use crate::query::BusinessListQuery;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyBody {
    is_verified: bool,
}

impl ApiClient {
    /// `GET /admin/businesses`
    pub async fn list_businesses(&self, query: &BusinessListQuery) -> ApiResult<Vec<Business>> {
        query.validate()?;
        let mut builder = with_paging(self.get("/admin/businesses")?, query.paging);
        if let Some(status) = query.status {
            builder = builder.query("status", status.as_str());
        }
        if let Some(search) = &query.search {
            builder = builder.query("search", search);
        }
        fetch(builder, "fetch businesses").await
    }

    /// `PUT /admin/businesses/{id}/verify`
    pub async fn set_business_verified(
        &self,
        business_id: &str,
        is_verified: bool,
    ) -> ApiResult<String> {
        let builder = self.put(&format!("/admin/businesses/{business_id}/verify"))?;
        let body = VerifyBody { is_verified };
        execute(
            with_json(builder, &body, "update business verification")?,
            "update business verification",
        )
        .await
    }

    /// `POST /admin/businesses`
    pub async fn create_business(&self, request: &CreateBusinessRequest) -> ApiResult<Business> {
        let builder = with_json(
            self.post("/admin/businesses")?,
            request,
            "create business",
        )?;
        fetch(builder, "create business").await
    }
}
