//! Field-addressed validation errors and the ordered error report.
//!
//! `validator` accumulates structural errors in hash maps, which loses the
//! field order callers rely on when rendering forms. This module flattens the
//! nested error tree into one ordered list of `{field, message}` pairs: fields
//! appear in the order the schema declares them, nested paths (struct fields,
//! list indices) are rendered with dotted/bracketed wire names, and
//! timezone/invariant errors are appended after the structural ones.

use serde::Serialize;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Classifies a field error for logging and tests. Not part of the wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing field, wrong format, or out-of-range value.
    Structural,
    /// Individually valid fields whose combination breaks a cross-field rule.
    Invariant,
    /// A zone string that does not resolve to a valid IANA timezone.
    Timezone,
}

/// One validation problem, addressed to a wire field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    #[serde(skip)]
    pub kind: ErrorKind,
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn structural(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Structural,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invariant(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Invariant,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn timezone(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Timezone,
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A rejected search request: every violated field, in schema order.
///
/// Serializes as a plain array of `{field, message}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("search request failed validation with {} field error(s)", .0.len())]
pub struct ValidationFailure(pub Vec<FieldError>);

impl ValidationFailure {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

/// Flattens `validator`'s nested error tree into ordered [`FieldError`]s.
///
/// `field_order` lists the schema's top-level wire field names; errors are
/// sorted by the rank of their root field in that list, then by full path, so
/// the report is deterministic regardless of hash iteration order.
pub fn flatten(errors: &ValidationErrors, field_order: &[&str]) -> Vec<FieldError> {
    let mut flat = Vec::new();
    collect(errors, "", &mut flat);

    flat.sort_by(|a, b| {
        let rank_a = root_rank(&a.field, field_order);
        let rank_b = root_rank(&b.field, field_order);
        rank_a.cmp(&rank_b).then_with(|| a.field.cmp(&b.field))
    });

    flat
}

/// Walks one level of the error tree, prefixing nested paths.
fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let path = join_path(prefix, &wire_name(field.as_ref()));

        match kind {
            ValidationErrorsKind::Field(violations) => {
                for violation in violations {
                    let message = violation
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| default_message(&violation.code));
                    out.push(FieldError::structural(path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let indexed = format!("{path}[{index}]");
                    collect(nested, &indexed, out);
                }
            }
        }
    }
}

fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}

/// Maps a Rust field name to its camelCase wire name.
///
/// The DTOs use `#[serde(rename_all = "camelCase")]`, but `validator` reports
/// Rust identifiers; error reports must address the names clients sent.
fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Rank of an error's root field within the schema's declared order.
/// Unknown roots sort last.
fn root_rank(path: &str, field_order: &[&str]) -> usize {
    let root = path
        .split(['.', '['])
        .next()
        .unwrap_or(path);
    field_order
        .iter()
        .position(|f| *f == root)
        .unwrap_or(field_order.len())
}

/// Fallback message for validator codes raised without an explicit message.
fn default_message(code: &str) -> String {
    match code {
        "required" => "is required".to_string(),
        "length" => "has an invalid length".to_string(),
        "range" => "is out of range".to_string(),
        "regex" => "has an invalid format".to_string(),
        other => format!("failed the {other} check"),
    }
}
