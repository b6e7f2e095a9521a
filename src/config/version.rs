//! API version and backend app definitions.
//!
//! Every *arr app exposes the same `/api/{version}/...` layout. Radarr,
//! Sonarr and Whisparr serve `v3`; Lidarr, Readarr and Prowlarr serve `v1`.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// The first path segment of every API endpoint.
pub const API_ROOT: &str = "api";

/// The version segment of an API path.
///
/// # Example
///
/// ```rust
/// use starr::ApiVersion;
///
/// let version: ApiVersion = "v3".parse().unwrap();
/// assert_eq!(version, ApiVersion::V3);
/// assert_eq!(version.to_string(), "v3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// `v1`, served by Lidarr, Readarr and Prowlarr.
    V1,
    /// `v3`, served by Radarr, Sonarr and Whisparr.
    V3,
    /// Any other `v<digits>` segment.
    Custom(String),
}

impl ApiVersion {
    /// Returns the path segment for this version.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V1 => "v1",
            Self::V3 => "v3",
            Self::Custom(version) => version,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');
        let digits = trimmed
            .strip_prefix('v')
            .filter(|d| !d.is_empty() && d.chars().all(|c| c.is_ascii_digit()))
            .ok_or_else(|| ConfigError::InvalidApiVersion {
                version: s.to_string(),
            })?;

        Ok(match digits {
            "1" => Self::V1,
            "3" => Self::V3,
            _ => Self::Custom(trimmed.to_string()),
        })
    }
}

/// The backend applications sharing this client core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum App {
    /// Music collection manager.
    Lidarr,
    /// Indexer manager.
    Prowlarr,
    /// Movie collection manager.
    Radarr,
    /// Book collection manager.
    Readarr,
    /// TV series collection manager.
    Sonarr,
    /// Adult movie collection manager.
    Whisparr,
}

impl App {
    /// Returns the API version this app serves.
    #[must_use]
    pub const fn api_version(self) -> ApiVersion {
        match self {
            Self::Radarr | Self::Sonarr | Self::Whisparr => ApiVersion::V3,
            Self::Lidarr | Self::Readarr | Self::Prowlarr => ApiVersion::V1,
        }
    }

    /// Returns the lowercase app name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lidarr => "lidarr",
            Self::Prowlarr => "prowlarr",
            Self::Radarr => "radarr",
            Self::Readarr => "readarr",
            Self::Sonarr => "sonarr",
            Self::Whisparr => "whisparr",
        }
    }
}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for App {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lidarr" => Ok(Self::Lidarr),
            "prowlarr" => Ok(Self::Prowlarr),
            "radarr" => Ok(Self::Radarr),
            "readarr" => Ok(Self::Readarr),
            "sonarr" => Ok(Self::Sonarr),
            "whisparr" => Ok(Self::Whisparr),
            _ => Err(ConfigError::InvalidApp {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_versions_parse_to_variants() {
        assert_eq!("v1".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
        assert_eq!("/v3/".parse::<ApiVersion>().unwrap(), ApiVersion::V3);
    }

    #[test]
    fn test_unknown_version_is_custom() {
        let version: ApiVersion = "v5".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("v5".to_string()));
        assert_eq!(version.to_string(), "v5");
    }

    #[test]
    fn test_invalid_versions_are_rejected() {
        for bad in ["", "v", "3", "va", "v3beta"] {
            assert!(
                matches!(
                    bad.parse::<ApiVersion>(),
                    Err(ConfigError::InvalidApiVersion { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_app_versions() {
        assert_eq!(App::Radarr.api_version(), ApiVersion::V3);
        assert_eq!(App::Sonarr.api_version(), ApiVersion::V3);
        assert_eq!(App::Whisparr.api_version(), ApiVersion::V3);
        assert_eq!(App::Lidarr.api_version(), ApiVersion::V1);
        assert_eq!(App::Readarr.api_version(), ApiVersion::V1);
        assert_eq!(App::Prowlarr.api_version(), ApiVersion::V1);
    }

    #[test]
    fn test_app_parse_is_case_insensitive() {
        assert_eq!("Radarr".parse::<App>().unwrap(), App::Radarr);
        assert_eq!(" PROWLARR ".parse::<App>().unwrap(), App::Prowlarr);
        assert!(matches!(
            "plex".parse::<App>(),
            Err(ConfigError::InvalidApp { .. })
        ));
    }
}
