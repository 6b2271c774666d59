//! Resource links and the canonical URL codec.
//!
//! A [`Link`] combines a [`Location`] with a resource type and a
//! caller-supplied resource ID. Its URL form is a fixed template:
//!
//! ```text
//! /organization/{organization_id}/project/{project_id}/provider/{provider}/region/{region}/{resource_type}/{resource_id}
//! ```
//!
//! All six value segments are mandatory and must not contain `/`.

use crate::error::{FormatError, ValidationError};
use crate::location::{Location, Region};

/// Number of components a link URL splits into, counting the empty
/// component produced by the leading separator.
const URL_COMPONENTS: usize = 11;

/// The globally unique, human readable identity of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    /// The resource type, e.g. `cluster`.
    pub resource_type: String,

    /// The user specified resource ID.
    pub id: String,

    /// The tenancy scope the resource lives in. Serialization fails if
    /// this is absent.
    pub location: Option<Location>,
}

impl Link {
    /// Creates a link from a location, a resource type, and the user
    /// specified resource ID.
    ///
    /// No validation happens here: the location may be absent or
    /// incomplete, and the type and ID may be empty. Emptiness is only
    /// checked by [`Link::url`].
    #[must_use]
    pub fn new(
        location: impl Into<Option<Location>>,
        resource_type: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
            location: location.into(),
        }
    }

    /// Generates the canonical URL for this link.
    ///
    /// Fails if any required field is missing; validation stops at the
    /// first missing field. Field values are substituted literally, so
    /// callers must supply URL-path-safe values for the round trip
    /// through [`parse_link_url`] to hold.
    pub fn url(&self) -> Result<String, ValidationError> {
        let location = self
            .location
            .as_ref()
            .ok_or(ValidationError::MissingLocation)?;

        if location.project_id.is_empty() {
            return Err(ValidationError::MissingProjectId);
        }
        if location.organization_id.is_empty() {
            return Err(ValidationError::MissingOrganizationId);
        }
        if location.region.provider.is_empty() {
            return Err(ValidationError::MissingProvider);
        }
        if location.region.region.is_empty() {
            return Err(ValidationError::MissingRegion);
        }
        if self.resource_type.is_empty() {
            return Err(ValidationError::MissingResourceType);
        }
        if self.id.is_empty() {
            return Err(ValidationError::MissingResourceId);
        }

        Ok(format!(
            "/organization/{}/project/{}/provider/{}/region/{}/{}/{}",
            location.organization_id,
            location.project_id,
            location.region.provider,
            location.region.region,
            self.resource_type,
            self.id
        ))
    }
}

/// Generates the canonical URL for a possibly absent link.
///
/// Covers the nil-link case that [`Link::url`] cannot observe; otherwise
/// identical to it.
pub fn link_url(link: Option<&Link>) -> Result<String, ValidationError> {
    link.ok_or(ValidationError::NilLink)?.url()
}

/// Parses a link URL back into a [`Link`].
///
/// The string must match the fixed template exactly: eleven `/`-separated
/// components, the literal labels at their fixed positions, and no empty
/// value segment. Beyond excluding `/`, value segments are unconstrained;
/// parsing is purely syntactic.
pub fn parse_link_url(url: &str) -> Result<Link, FormatError> {
    let components: Vec<&str> = url.split('/').collect();

    if components.len() != URL_COMPONENTS || !components[0].is_empty() {
        return Err(FormatError);
    }
    if components[1] != "organization"
        || components[3] != "project"
        || components[5] != "provider"
        || components[7] != "region"
    {
        return Err(FormatError);
    }
    if [2usize, 4, 6, 8, 9, 10]
        .iter()
        .any(|&i| components[i].is_empty())
    {
        return Err(FormatError);
    }

    Ok(Link {
        resource_type: components[9].to_string(),
        id: components[10].to_string(),
        location: Some(Location {
            organization_id: components[2].to_string(),
            project_id: components[4].to_string(),
            region: Region {
                provider: components[6].to_string(),
                region: components[8].to_string(),
            },
        }),
    })
}

impl std::str::FromStr for Link {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_link_url(s)
    }
}

impl serde::Serialize for Link {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let url = self.url().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&url)
    }
}

impl<'de> serde::Deserialize<'de> for Link {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_link_url(&s).map_err(serde::de::Error::custom)
    }
}
