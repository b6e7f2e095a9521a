//! Root folder resource.
//!
//! Root folders are the library locations an app imports media into.
//!
//! # Example
//!
//! ```rust,ignore
//! use starr::rest::resources::RootFolder;
//! use starr::rest::RestResource;
//!
//! let folders = RootFolder::all(&client).await?;
//! let added = RootFolder::add(&client, &RootFolder::new("/collections")).await?;
//! RootFolder::delete(&client, added.id).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::rest::fields::{deserialize_null_default, is_false, is_zero};
use crate::rest::resources::Path;
use crate::rest::{ResourceName, RestResource};

/// A library folder.
///
/// Only `path` is needed to add one; every other field is filled in by the
/// backend and left out of the request while unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RootFolder {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    pub path: String,
    #[serde(skip_serializing_if = "is_false")]
    pub accessible: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub free_space: i64,
    #[serde(
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub unmapped_folders: Vec<Path>,
}

impl RootFolder {
    /// Creates a root folder input for `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

impl RestResource for RootFolder {
    type Input = Self;

    const NAME: &'static str = "Root Folder";
    const PATH: ResourceName = ResourceName::new("rootFolder");

    fn input_id(input: &Self) -> i64 {
        input.id
    }
}
