//! # strato-locator
//!
//! Resource link construction and URL codec for the strato platform.
//!
//! ## Design Principles
//!
//! - A link is the globally unique, human readable identity of a resource
//! - The canonical URL form is a fixed template with six mandatory segments
//! - Links round-trip losslessly (build → url → parse) for `/`-free values
//! - No escaping or normalization; callers supply URL-path-safe values
//!
//! ## URL Format
//!
//! ```text
//! /organization/{organization_id}/project/{project_id}/provider/{provider}/region/{region}/{resource_type}/{resource_id}
//! ```
//!
//! Example:
//!
//! ```text
//! /organization/org1/project/proj1/provider/aws/region/us-west-2/cluster/c1
//! ```

mod error;
mod link;
mod location;

pub use error::{FormatError, ValidationError};
pub use link::{link_url, parse_link_url, Link};
pub use location::{Location, Region};
