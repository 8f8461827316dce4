/// The only template schema version this engine composes.
pub const TEMPLATE_VERSION_STR: &str = "1.0";
