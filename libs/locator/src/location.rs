//! Location value types: the tenancy and region scope a resource lives in.
//!
//! These are opaque value types supplied by (or destined for) the resource
//! metadata system; this crate only reads and writes the fields below.

use serde::{Deserialize, Serialize};

/// A (provider, region) pair identifying where a resource is hosted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// The cloud vendor, e.g. `aws`.
    pub provider: String,

    /// The geographic or logical region within the vendor, e.g. `us-west-2`.
    pub region: String,
}

impl Region {
    /// Creates a region from a provider and a region name.
    #[must_use]
    pub fn new(provider: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            region: region.into(),
        }
    }
}

/// The tenancy scope (organization, project, region) of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// The organization that owns the resource.
    pub organization_id: String,

    /// The project within the organization.
    pub project_id: String,

    /// Where the resource is hosted.
    pub region: Region,
}

impl Location {
    /// Creates a location from its three parts.
    ///
    /// No validation happens here; emptiness is only checked when a link
    /// is serialized to its URL form.
    #[must_use]
    pub fn new(
        organization_id: impl Into<String>,
        project_id: impl Into<String>,
        region: Region,
    ) -> Self {
        Self {
            organization_id: organization_id.into(),
            project_id: project_id.into(),
            region,
        }
    }
}
