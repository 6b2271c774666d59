//! Error types for link validation and URL parsing.

use thiserror::Error;

/// Errors that can occur when serializing a link to its URL form.
///
/// Validation stops at the first missing field; errors are never
/// aggregated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// No link was supplied at all.
    #[error("nil link")]
    NilLink,

    /// The link has no location.
    #[error("link missing Location")]
    MissingLocation,

    /// The location has an empty project ID.
    #[error("link missing project ID")]
    MissingProjectId,

    /// The location has an empty organization ID.
    #[error("link missing organization ID")]
    MissingOrganizationId,

    /// The location's region has an empty provider.
    #[error("link missing provider")]
    MissingProvider,

    /// The location's region has an empty region name.
    #[error("link missing region")]
    MissingRegion,

    /// The link has an empty resource type.
    #[error("link missing resource type")]
    MissingResourceType,

    /// The link has an empty resource ID.
    #[error("link missing resource ID")]
    MissingResourceId,
}

/// Error returned when a string does not match the link URL template.
///
/// The message deliberately describes the expected template rather than
/// pinpointing which segment failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error(
    "url is not in the correct format: /organization/{{org_id}}/project/{{project_id}}/provider/{{provider}}/region/{{region}}/{{type}}/{{id}}"
)]
pub struct FormatError;
