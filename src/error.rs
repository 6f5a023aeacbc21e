//! Error types for timetabling operations.
//!
//! Every failure in this crate is deterministic: the same input always
//! produces the same error. There are no transient or retriable classes.

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TimetableError>;

/// Errors raised while registering meetings, coloring, or assigning slots.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimetableError {
    /// A meeting was registered with an empty identifier.
    #[error("Meeting identifier must not be empty")]
    EmptyMeetingId,

    /// The palette ran out before `node` could be colored.
    #[error(
        "Palette of {palette_size} colors exhausted at node {node} ('{label}'); \
         every color is already used by a neighbor"
    )]
    UnsatisfiableColoring {
        /// Index of the node that could not be colored.
        node: usize,
        /// Meeting label of that node.
        label: String,
        /// Size of the palette that was supplied.
        palette_size: usize,
    },

    /// The scheduling window is empty or inverted.
    #[error("Invalid window: end {end_ms} must be after start {start_ms}")]
    InvalidWindow {
        /// Window start (ms).
        start_ms: i64,
        /// Window end (ms).
        end_ms: i64,
    },

    /// There is nothing to lay out: the coloring uses no colors.
    #[error("No meetings to schedule")]
    NoMeetings,

    /// A deserialized conflict graph is internally inconsistent.
    #[error("Malformed conflict graph: {0}")]
    MalformedGraph(String),

    /// A strategy returned a coloring that is incomplete or improper.
    #[error("Strategy '{strategy}' produced an invalid coloring: {reason}")]
    InvalidColoring {
        /// Name of the offending strategy.
        strategy: String,
        /// First problem found.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = TimetableError::UnsatisfiableColoring {
            node: 3,
            label: "standup".into(),
            palette_size: 2,
        };
        let msg = e.to_string();
        assert!(msg.contains("standup"));
        assert!(msg.contains("2 colors"));

        let e = TimetableError::InvalidWindow {
            start_ms: 10,
            end_ms: 5,
        };
        assert!(e.to_string().contains("end 5"));

        let e = TimetableError::InvalidColoring {
            strategy: "bogus".into(),
            reason: "Nodes 0 and 1 conflict".into(),
        };
        assert!(e.to_string().contains("'bogus'"));
    }
}
