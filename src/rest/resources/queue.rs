//! Activity queue deletion.

use crate::clients::{ReqError, RestClient};
use crate::rest::resources::bool_str;
use crate::rest::{Endpoint, ResourceName};

/// The activity queue resource.
pub const QUEUE: ResourceName = ResourceName::new("queue");

/// Extra options when removing an item from the activity queue.
///
/// Passing `None` to [`delete_queue_item`] only sends
/// `removeFromClient=true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueDeleteOpts {
    /// Remove the download from the client. Defaults to `true` when `None`.
    pub remove_from_client: Option<bool>,
    pub block_list: bool,
    pub skip_redownload: bool,
    pub change_category: bool,
}

impl QueueDeleteOpts {
    /// Adds these options to `endpoint` as query parameters.
    #[must_use]
    pub fn apply(opts: Option<&Self>, endpoint: Endpoint) -> Endpoint {
        let endpoint = endpoint.query_param("removeFromClient", bool_str(true));
        let Some(opts) = opts else {
            return endpoint;
        };

        endpoint
            .set_query_param(
                "removeFromClient",
                bool_str(opts.remove_from_client.unwrap_or(true)),
            )
            .query_param("blocklist", bool_str(opts.block_list))
            .query_param("skipRedownload", bool_str(opts.skip_redownload))
            .query_param("changeCategory", bool_str(opts.change_category))
    }
}

/// Removes an item from the activity queue.
///
/// # Errors
///
/// Returns a not-found [`ReqError`] if the queue item does not exist.
pub async fn delete_queue_item(
    client: &RestClient,
    id: i64,
    opts: Option<&QueueDeleteOpts>,
) -> Result<(), ReqError> {
    let endpoint = QueueDeleteOpts::apply(opts, client.endpoint(QUEUE).id(id));
    client.delete(endpoint).await
}
