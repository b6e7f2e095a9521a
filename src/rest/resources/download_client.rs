//! Download client resource.
//!
//! Download clients are plugin-backed: their settings live in a `fields`
//! list described by the backend. Writes carry the `forceSave` flag so the
//! backend stores the client even when its connection test fails.
//!
//! # Example
//!
//! ```rust,ignore
//! use starr::rest::resources::{DownloadClientInput, DownloadClientOutput, Protocol};
//! use starr::rest::RestResource;
//! use starr::FieldInput;
//!
//! let input = DownloadClientInput {
//!     enable: true,
//!     priority: 1,
//!     config_contract: "TransmissionSettings".to_string(),
//!     implementation: "Transmission".to_string(),
//!     name: "Transmission".to_string(),
//!     protocol: Protocol::Torrent,
//!     fields: vec![FieldInput::new("host", "transmission"), FieldInput::new("port", 9091)],
//!     ..Default::default()
//! };
//!
//! // POST /api/v3/downloadClient?forceSave=true
//! let created = DownloadClientOutput::add(&client, &input).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::rest::fields::{deserialize_null_default, is_zero, FieldInput, FieldOutput};
use crate::rest::resources::Protocol;
use crate::rest::{ResourceName, RestResource};

/// A download client as sent on add and update.
///
/// This is the Radarr/Sonarr/Lidarr body. Readarr has no
/// `removeCompletedDownloads`/`removeFailedDownloads` settings and sends
/// `implementationName`; it ignores the two flags when they are present.
/// An empty `tags` list is sent as `[]`, not `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DownloadClientInput {
    pub enable: bool,
    pub remove_completed_downloads: bool,
    pub remove_failed_downloads: bool,
    pub priority: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    pub config_contract: String,
    pub implementation: String,
    pub name: String,
    pub protocol: Protocol,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub tags: Vec<i64>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub fields: Vec<FieldInput>,
}

/// A download client as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DownloadClientOutput {
    pub enable: bool,
    pub remove_completed_downloads: bool,
    pub remove_failed_downloads: bool,
    pub priority: i64,
    pub id: i64,
    pub config_contract: String,
    pub implementation: String,
    pub implementation_name: String,
    pub info_link: String,
    pub name: String,
    pub protocol: Protocol,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub tags: Vec<i64>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub fields: Vec<FieldOutput>,
}

impl DownloadClientOutput {
    /// Builds an input that re-submits this client unchanged.
    #[must_use]
    pub fn to_input(&self) -> DownloadClientInput {
        DownloadClientInput {
            enable: self.enable,
            remove_completed_downloads: self.remove_completed_downloads,
            remove_failed_downloads: self.remove_failed_downloads,
            priority: self.priority,
            id: self.id,
            config_contract: self.config_contract.clone(),
            implementation: self.implementation.clone(),
            name: self.name.clone(),
            protocol: self.protocol,
            tags: self.tags.clone(),
            fields: self.fields.iter().map(FieldOutput::to_input).collect(),
        }
    }
}

impl RestResource for DownloadClientOutput {
    type Input = DownloadClientInput;

    const NAME: &'static str = "Download Client";
    const PATH: ResourceName = ResourceName::new("downloadClient");
    const FORCE_SAVE: bool = true;

    fn input_id(input: &DownloadClientInput) -> i64 {
        input.id
    }
}
