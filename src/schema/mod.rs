//! Template boundary schema.
//!
//! The serde model mirrors the JSON records supplied by the template/project store. Validation
//! is split in two: a hard gate ([`validate::validate_template`]) that decides whether a template
//! can be composed at all, and lints that only report.

pub(crate) mod lenient;
pub(crate) mod model;
pub(crate) mod validate;
pub(crate) mod version;
