//! Remote path mapping resource.

use serde::{Deserialize, Serialize};

use crate::rest::fields::is_zero;
use crate::rest::{ResourceName, RestResource};

/// Maps a path as seen by a download client on `host` to a local path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RemotePathMapping {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    pub host: String,
    pub remote_path: String,
    pub local_path: String,
}

impl RestResource for RemotePathMapping {
    type Input = Self;

    const NAME: &'static str = "Remote Path Mapping";
    const PATH: ResourceName = ResourceName::new("remotePathMapping");

    fn input_id(input: &Self) -> i64 {
        input.id
    }
}
