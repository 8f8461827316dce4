//! Prop merging and typed prop readers.

pub(crate) mod merge;
pub(crate) mod read;

pub(crate) use merge::nested_components;
