//! Per-version endpoint path tables

use crate::enums::ApiVersion;

/// Paths for one logical operation, keyed by API version
///
/// A `None` entry means the operation has no equivalent in that version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointSpec {
    v1_1: Option<&'static str>,
    v2_0: Option<&'static str>,
}

impl EndpointSpec {
    /// Operation available in both versions
    pub const fn both(v1_1: &'static str, v2_0: &'static str) -> Self {
        Self {
            v1_1: Some(v1_1),
            v2_0: Some(v2_0),
        }
    }

    /// Operation only available in v1.1
    pub const fn v1_1_only(path: &'static str) -> Self {
        Self {
            v1_1: Some(path),
            v2_0: None,
        }
    }

    /// Operation only available in v2.0
    pub const fn v2_0_only(path: &'static str) -> Self {
        Self {
            v1_1: None,
            v2_0: Some(path),
        }
    }

    /// Path for the given version, if the operation exists there
    pub fn path(&self, version: ApiVersion) -> Option<&'static str> {
        match version {
            ApiVersion::V1_1 => self.v1_1,
            ApiVersion::V2_0 => self.v2_0,
        }
    }

    /// Returns true if the operation exists in the given version
    pub fn supports(&self, version: ApiVersion) -> bool {
        self.path(version).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_lookup() {
        let spec = EndpointSpec::both("/public/getmarkets", "/pub/Markets/GetMarkets");
        assert_eq!(spec.path(ApiVersion::V1_1), Some("/public/getmarkets"));
        assert_eq!(spec.path(ApiVersion::V2_0), Some("/pub/Markets/GetMarkets"));
    }

    #[test]
    fn test_missing_version() {
        let spec = EndpointSpec::v1_1_only("/public/getticker");
        assert!(spec.supports(ApiVersion::V1_1));
        assert!(!spec.supports(ApiVersion::V2_0));
        assert_eq!(spec.path(ApiVersion::V2_0), None);
    }
}
