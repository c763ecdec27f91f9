//! Error types for testspan-encode

/// Failure raised by an [`Inspect`](crate::Inspect) capability.
///
/// Encoding never propagates this error. The encoder catches it at the node
/// where it happened and records its display text instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct InspectError {
    /// Short error class, e.g. `AttributeError` or `PoisonError`
    pub kind: String,
    /// Human readable detail
    pub message: String,
}

impl InspectError {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_kind_and_message() {
        let err = InspectError::new("Exception", "side effect __repr__");
        assert_eq!(err.to_string(), "Exception: side effect __repr__");
    }
}
