use a2ui_types::{Component, Reference};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Category of structural problem found in a component graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationErrorKind {
    /// A component has an empty id.
    EmptyId,
    /// Two or more components share an id (reported once per id).
    DuplicateId,
    /// The surface root names no component.
    RootNotFound,
    /// A reference slot names a component that does not exist.
    DanglingReference,
}

/// One structural finding.
///
/// Findings are data: validation never fails, it returns every finding it can
/// detect and leaves the policy (reject, log, repair) to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Offending component; the root id for `RootNotFound`, empty for `EmptyId`
    pub component_id: String,
    /// Structural slot at fault, e.g. "ID", "Root", "Column.Children"
    pub field: String,
    pub message: String,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    fn empty_id(shape: &str) -> Self {
        Self {
            component_id: String::new(),
            field: "ID".to_string(),
            message: format!("{} component has an empty id", shape),
            kind: ValidationErrorKind::EmptyId,
        }
    }

    fn duplicate_id(id: &str) -> Self {
        Self {
            component_id: id.to_string(),
            field: "ID".to_string(),
            message: format!("duplicate component id \"{}\"", id),
            kind: ValidationErrorKind::DuplicateId,
        }
    }

    fn root_not_found(root: &str) -> Self {
        Self {
            component_id: root.to_string(),
            field: "Root".to_string(),
            message: format!("root component \"{}\" not found", root),
            kind: ValidationErrorKind::RootNotFound,
        }
    }

    fn dangling(id: &str, reference: Reference<'_>) -> Self {
        Self {
            component_id: id.to_string(),
            message: format!("references missing component \"{}\"", reference.target),
            field: reference.field,
            kind: ValidationErrorKind::DanglingReference,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.component_id.is_empty() {
            write!(f, "{}: {}", self.field, self.message)
        } else {
            write!(f, "{}.{}: {}", self.component_id, self.field, self.message)
        }
    }
}

/// Check referential integrity of a component list against `root`.
///
/// The first pass registers ids in order, flagging empty ids and reporting
/// each duplicated id once; the root must then be registered. The second pass
/// resolves every reference of every component with a non-empty id against
/// the registered set. Cycles and unreachable components are not errors.
pub fn validate_components(root: &str, components: &[Component]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::with_capacity(components.len());
    let mut reported: HashSet<&str> = HashSet::new();

    for component in components {
        let id = component.id.as_str();
        if id.is_empty() {
            errors.push(ValidationError::empty_id(component.name()));
            continue;
        }
        if !seen.insert(id) && reported.insert(id) {
            errors.push(ValidationError::duplicate_id(id));
        }
    }

    if !seen.contains(root) {
        errors.push(ValidationError::root_not_found(root));
    }

    for component in components.iter().filter(|c| !c.id.is_empty()) {
        for reference in component.references() {
            if !seen.contains(reference.target) {
                errors.push(ValidationError::dangling(&component.id, reference));
            }
        }
    }

    errors
}
