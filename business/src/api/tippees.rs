use super::{ApiClient, fetch, with_paging};
use crate::entities::Tippee;
use crate::error::ApiResult;
use crate::query::TippeeListQuery;

impl ApiClient {
    /// `GET /admin/tippies`
    pub async fn list_tippees(&self, query: &TippeeListQuery) -> ApiResult<Vec<Tippee>> {
        query.validate()?;
        let mut builder = with_paging(self.get("/admin/tippies")?, query.paging);
        if let Some(status) = query.status {
            builder = builder.query("status", status.as_str());
        }
        if let Some(search) = &query.search {
            builder = builder.query("search", search);
        }
        fetch(builder, "fetch tippees").await
    }
}
