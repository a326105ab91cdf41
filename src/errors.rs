//! Error types
//!
//! Degenerate numeric input is *not* an error anywhere in the kernel: it propagates as
//! NaN/∞. The enums below cover the few places that report failure explicitly.

use crate::transform::NodeId;

/// Failures of vector/matrix algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// (ZeroLength) No direction can be derived from a zero-length vector
    #[error("(ZeroLength) cannot derive a direction from a zero-length vector")]
    ZeroLength,
}

/// Failures of the checked byte codec entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// (BufferTooShort) Fewer than `offset + needed` bytes were available
    #[error("(BufferTooShort) need {needed} bytes at offset {offset}, buffer holds {available}")]
    BufferTooShort {
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// (RaggedLength) A batch buffer is not a whole number of records
    #[error("(RaggedLength) {len} bytes is not a multiple of the {record}-byte record size")]
    RaggedLength { len: usize, record: usize },
}

/// Failures of transform hierarchy edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HierarchyError {
    /// (UnknownNode) The id does not belong to this tree
    #[error("(UnknownNode) node {0} does not exist in this tree")]
    UnknownNode(NodeId),
    /// (Cycle) The new parent is the node itself or one of its descendants
    #[error("(Cycle) making {parent} the parent of {child} would create a cycle")]
    Cycle { child: NodeId, parent: NodeId },
}
