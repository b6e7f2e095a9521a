//! Resource definitions bound through [`RestResource`](crate::rest::RestResource).
//!
//! The *arr apps share these shapes; the client's API version decides
//! whether a call goes to `/api/v1` or `/api/v3`.
//!
//! # Available Resources
//!
//! | Type | Path | `forceSave` |
//! |------|------|-------------|
//! | [`RootFolder`] | `rootFolder` | no |
//! | [`RemotePathMapping`] | `remotePathMapping` | no |
//! | [`Tag`] | `tag` | no |
//! | [`DownloadClientOutput`] | `downloadClient` | yes |
//! | [`NotificationOutput`] | `notification` | no |
//!
//! Queue items are removed with [`delete_queue_item`].
//!
//! # Example
//!
//! ```rust,ignore
//! use starr::rest::resources::{DownloadClientOutput, Tag};
//! use starr::rest::RestResource;
//!
//! let tags = Tag::all(&client).await?;
//!
//! let mut input = DownloadClientOutput::find(&client, 3).await?.to_input();
//! input.priority = 2;
//! // PUT /api/v3/downloadClient/3?forceSave=true
//! DownloadClientOutput::update_with_force(&client, &input, true).await?;
//! ```

mod common;
mod download_client;
mod notification;
mod queue;
mod remote_path_mapping;
mod root_folder;
mod tag;

pub use common::{
    bool_str, ApplyTags, BackupFile, BaseQuality, BulkIndexer, FormatItem, Image, IsLoaded,
    KeyValue, Link, OpenRatings, Path, PlayTime, Protocol, Quality, QualityRevision, Ratings,
    StatusMessage, TimeSpan, Value,
};
pub use download_client::{DownloadClientInput, DownloadClientOutput};
pub use notification::{NotificationInput, NotificationMessage, NotificationOutput};
pub use queue::{delete_queue_item, QueueDeleteOpts, QUEUE};
pub use remote_path_mapping::RemotePathMapping;
pub use root_folder::RootFolder;
pub use tag::Tag;
