//! Composition: template + fills in, [`RenderTree`](tree::RenderTree) out, plus per-frame
//! evaluation of the tree.

pub(crate) mod compose;
pub(crate) mod fingerprint;
pub(crate) mod opts;
pub(crate) mod range;
pub(crate) mod tree;
