//! REST resource trait for typed CRUD operations.
//!
//! This module defines the [`RestResource`] trait. A resource names its
//! endpoint and its write type; the trait supplies `all()`, `find()`,
//! `add()`, `update()` and `delete()` bound to the generic request engine.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use starr::{ResourceName, RestResource};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! pub struct Tag {
//!     #[serde(default, skip_serializing_if = "is_zero")]
//!     pub id: i64,
//!     pub label: String,
//! }
//!
//! impl RestResource for Tag {
//!     type Input = Self;
//!
//!     const NAME: &'static str = "Tag";
//!     const PATH: ResourceName = ResourceName::new("tag");
//!
//!     fn input_id(input: &Self) -> i64 {
//!         input.id
//!     }
//! }
//!
//! // Usage:
//! let tags = Tag::all(&client).await?;
//! let tag = Tag::find(&client, 1).await?;
//! ```

use serde::{de::DeserializeOwned, Serialize};

use crate::clients::{ReqError, RestClient};
use crate::rest::resources::bool_str;
use crate::rest::{Endpoint, ResourceName};

/// Query parameter carrying the force-save flag.
pub const FORCE_SAVE_PARAM: &str = "forceSave";

/// A backend resource that can be listed, fetched, created, updated and
/// deleted.
///
/// Every method is a mechanical binding of a verb and the resource's path
/// to [`RestClient`]. The only variation is the force-save flag: resources
/// that set [`FORCE_SAVE`](Self::FORCE_SAVE) get `forceSave=true` on add
/// and `forceSave=<force>` on update.
///
/// # Associated Items
///
/// - `Input`: the write representation (often `Self`)
/// - `NAME`: human-readable name for diagnostics
/// - `PATH`: the resource segment, e.g. `rootFolder`
/// - `FORCE_SAVE`: whether writes carry the `forceSave` query flag
#[allow(async_fn_in_trait)]
pub trait RestResource: DeserializeOwned + Send + Sync + Sized {
    /// The body sent on add and update.
    type Input: Serialize + Send + Sync;

    /// The singular resource name (e.g., "Root Folder").
    const NAME: &'static str;

    /// The resource path segment.
    const PATH: ResourceName;

    /// Whether add and update send the `forceSave` query flag.
    const FORCE_SAVE: bool = false;

    /// Returns the id embedded in an input, used to build the update path.
    fn input_id(input: &Self::Input) -> i64;

    /// Returns the collection endpoint for this resource.
    #[must_use]
    fn endpoint(client: &RestClient) -> Endpoint {
        client.endpoint(Self::PATH)
    }

    /// Lists every entity of this resource.
    ///
    /// # Errors
    ///
    /// Returns [`ReqError`] on a non-2xx status, a transport failure or a
    /// body that is not a list of `Self`.
    async fn all(client: &RestClient) -> Result<Vec<Self>, ReqError> {
        client.get_many(Self::endpoint(client)).await
    }

    /// Fetches one entity by id.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`ReqError`] if the entity does not exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// match RootFolder::find(&client, 1).await {
    ///     Ok(folder) => println!("{}", folder.path),
    ///     Err(e) if e.is_not_found() => println!("gone"),
    ///     Err(e) => return Err(e.into()),
    /// }
    /// ```
    async fn find(client: &RestClient, id: i64) -> Result<Self, ReqError> {
        client.get_one(Self::endpoint(client).id(id)).await
    }

    /// Creates an entity and returns it as stored by the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ReqError`] if encoding, the request or decoding fails.
    async fn add(client: &RestClient, input: &Self::Input) -> Result<Self, ReqError> {
        let mut endpoint = Self::endpoint(client);
        if Self::FORCE_SAVE {
            endpoint = endpoint.query_param(FORCE_SAVE_PARAM, bool_str(true));
        }
        client.post(endpoint, input).await
    }

    /// Replaces an entity; the id comes from the input.
    ///
    /// Force-save resources send `forceSave=false`.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`ReqError`] if the entity does not exist.
    async fn update(client: &RestClient, input: &Self::Input) -> Result<Self, ReqError> {
        Self::update_with_force(client, input, false).await
    }

    /// Replaces an entity, choosing the `forceSave` value.
    ///
    /// `force` is ignored for resources without the flag.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`ReqError`] if the entity does not exist.
    async fn update_with_force(
        client: &RestClient,
        input: &Self::Input,
        force: bool,
    ) -> Result<Self, ReqError> {
        let mut endpoint = Self::endpoint(client).id(Self::input_id(input));
        if Self::FORCE_SAVE {
            endpoint = endpoint.query_param(FORCE_SAVE_PARAM, bool_str(force));
        }
        client.put(endpoint, input).await
    }

    /// Deletes an entity by id.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`ReqError`] if the entity does not exist;
    /// check [`ReqError::is_not_found`] for idempotent deletes.
    async fn delete(client: &RestClient, id: i64) -> Result<(), ReqError> {
        client.delete(Self::endpoint(client).id(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiVersion, StarrConfig};
    use serde::Deserialize;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct MockFolder {
        id: i64,
        path: String,
    }

    impl RestResource for MockFolder {
        type Input = Self;

        const NAME: &'static str = "Mock Folder";
        const PATH: ResourceName = ResourceName::new("mockFolder");

        fn input_id(input: &Self) -> i64 {
            input.id
        }
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct MockClient;

    impl RestResource for MockClient {
        type Input = Self;

        const NAME: &'static str = "Mock Client";
        const PATH: ResourceName = ResourceName::new("mockClient");
        const FORCE_SAVE: bool = true;

        fn input_id(_input: &Self) -> i64 {
            0
        }
    }

    fn client(version: ApiVersion) -> RestClient {
        let config = StarrConfig::new("key", "http://localhost:8686").unwrap();
        RestClient::new(&config, version).unwrap()
    }

    #[test]
    fn test_endpoint_uses_resource_path() {
        let client = client(ApiVersion::V1);
        assert_eq!(MockFolder::endpoint(&client).path(), "/api/v1/mockFolder");
    }

    #[test]
    fn test_force_save_defaults_to_false() {
        assert!(!MockFolder::FORCE_SAVE);
        assert!(MockClient::FORCE_SAVE);
    }

    #[test]
    fn test_input_id_reads_from_input() {
        let folder = MockFolder {
            id: 4,
            path: "/music".to_string(),
        };
        assert_eq!(MockFolder::input_id(&folder), 4);
    }
}
