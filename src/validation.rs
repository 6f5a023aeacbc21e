//! Structural checks on registrations and colorings.
//!
//! Unlike the hard errors in [`crate::error`], these checks collect every
//! issue they find so a caller can report them together. Detects:
//! - Meetings without participants
//! - Participants listed twice in one meeting
//! - Nodes missing a color, or colors for nodes that do not exist
//! - Colors outside the palette
//! - Adjacent nodes sharing a color

use std::collections::HashSet;

use crate::coloring::{Coloring, Palette};
use crate::graph::ConflictGraph;
use crate::models::MeetingRegistry;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A meeting has no participants (it conflicts with nothing).
    EmptyMeeting,
    /// A participant appears more than once in a meeting.
    DuplicateParticipant,
    /// A graph node has no color.
    MissingColor,
    /// A color was given for a node index outside the graph.
    ExtraColor,
    /// A color index is not in the palette.
    ColorOutOfRange,
    /// Two conflicting meetings share a color.
    AdjacentConflict,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Reports suspicious registrations.
///
/// Neither issue prevents scheduling: empty meetings get any slot and
/// duplicate names collapse during graph construction.
pub fn validate_registry(registry: &MeetingRegistry) -> ValidationResult {
    let mut errors = Vec::new();

    for meeting in registry.meetings() {
        if meeting.participants.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyMeeting,
                format!("Meeting '{}' has no participants", meeting.id),
            ));
        }

        let mut seen = HashSet::new();
        for p in &meeting.participants {
            if !seen.insert(p.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateParticipant,
                    format!("Meeting '{}' lists '{}' more than once", meeting.id, p),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that `coloring` is a complete, proper coloring of `graph`
/// drawn from `palette`.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_coloring(
    graph: &ConflictGraph,
    coloring: &Coloring,
    palette: &Palette,
) -> ValidationResult {
    let mut errors = Vec::new();
    let n = graph.node_count();

    for node in coloring.len()..n {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingColor,
            format!("Node {node} has no color"),
        ));
    }
    if coloring.len() > n {
        errors.push(ValidationError::new(
            ValidationErrorKind::ExtraColor,
            format!("{} colors given for {n} nodes", coloring.len()),
        ));
    }

    for (node, &color) in coloring.colors().iter().enumerate() {
        if color >= palette.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::ColorOutOfRange,
                format!(
                    "Node {node} has color {color}, palette has {} colors",
                    palette.len()
                ),
            ));
        }
    }

    for edge in graph.edges() {
        if let (Some(ca), Some(cb)) = (coloring.color_of(edge.a), coloring.color_of(edge.b)) {
            if ca == cb {
                errors.push(ValidationError::new(
                    ValidationErrorKind::AdjacentConflict,
                    format!(
                        "Nodes {} and {} share color {ca} (common: {})",
                        edge.a,
                        edge.b,
                        edge.shared.join(", ")
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> ConflictGraph {
        let mut r = MeetingRegistry::new();
        r.add_participants("a", ["x", "y"]).unwrap();
        r.add_participants("b", ["y", "z"]).unwrap();
        r.add_participants("c", ["z", "x"]).unwrap();
        ConflictGraph::build(&r)
    }

    #[test]
    fn test_valid_coloring() {
        let g = triangle();
        let c = Coloring::new("manual", vec![0, 1, 2]);
        assert!(validate_coloring(&g, &c, &Palette::sized(3)).is_ok());
    }

    #[test]
    fn test_adjacent_conflict() {
        let g = triangle();
        let c = Coloring::new("manual", vec![0, 0, 1]);
        let errors = validate_coloring(&g, &c, &Palette::sized(3)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::AdjacentConflict);
        assert!(errors[0].message.contains("common: y"));
    }

    #[test]
    fn test_missing_and_out_of_range() {
        let g = triangle();
        let c = Coloring::new("manual", vec![5]);
        let errors = validate_coloring(&g, &c, &Palette::sized(3)).unwrap_err();
        let missing = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::MissingColor)
            .count();
        assert_eq!(missing, 2);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ColorOutOfRange));
    }

    #[test]
    fn test_extra_color() {
        let g = triangle();
        let c = Coloring::new("manual", vec![0, 1, 2, 0]);
        let errors = validate_coloring(&g, &c, &Palette::sized(3)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ExtraColor));
    }

    #[test]
    fn test_registry_checks() {
        let mut r = MeetingRegistry::new();
        r.add_participants("ok", ["Ana"]).unwrap();
        assert!(validate_registry(&r).is_ok());

        r.add_participants("empty", Vec::<String>::new()).unwrap();
        r.add_participants("dup", ["Bo", "Bo"]).unwrap();
        let errors = validate_registry(&r).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyMeeting));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateParticipant && e.message.contains("dup")));
    }
}
