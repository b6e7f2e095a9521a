//! REST layer for the *arr APIs.
//!
//! This module provides:
//!
//! - **[`Endpoint`] / [`ResourceName`]**: versioned path and query building
//! - **Field codec**: [`FieldValue`], [`FieldInput`], [`FieldOutput`] for
//!   plugin-defined settings
//! - **[`RestResource`] trait**: typed `all`/`find`/`add`/`update`/`delete`
//! - **[`resources`]**: shared value types and the bound resources
//!
//! # Example
//!
//! ```rust,ignore
//! use starr::{App, RestClient, StarrConfig};
//! use starr::rest::RestResource;
//! use starr::rest::resources::RootFolder;
//!
//! let config = StarrConfig::new("api-key", "http://localhost:7878")?;
//! let client = RestClient::for_app(&config, App::Radarr)?;
//!
//! match RootFolder::delete(&client, 2).await {
//!     Ok(()) => {}
//!     Err(e) if e.is_not_found() => {} // already gone
//!     Err(e) => return Err(e.into()),
//! }
//! ```

mod fields;
mod path;
mod resource;

pub mod resources;

pub use fields::{
    deserialize_null_default, find_field, FieldInput, FieldOutput, FieldValue, SelectOption,
};
pub use path::{Endpoint, ResourceName};
pub use resource::{RestResource, FORCE_SAVE_PARAM};
