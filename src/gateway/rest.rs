pub mod books;
pub mod reviews;

use crate::core::catalogue::{CatalogueError, CatalogueResult};
use crate::gateway::api::RemoteReply;

// drains a transported response into a reply the services can branch on
pub(crate) async fn read_reply(response: reqwest::Response) -> CatalogueResult<RemoteReply> {
    let status = response.status();
    let body = response.bytes().await.map_err(CatalogueError::from)?;
    Ok(RemoteReply::new(status, body.to_vec()))
}
