use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use super::app_error::ValidationIssue;

pub(super) fn collect_validation_issues(
    prefix: Option<&str>,
    errors: &ValidationErrors,
    out: &mut Vec<ValidationIssue>,
) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|error| ValidationIssue {
                    field: path.clone(),
                    message: describe(&path, error),
                    code: error.code.to_string(),
                }));
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_validation_issues(Some(&path), nested, out);
            }
            ValidationErrorsKind::List(nested_items) => {
                for (index, nested) in nested_items {
                    collect_validation_issues(Some(&format!("{path}[{index}]")), nested, out);
                }
            }
        }
    }
}

/// Explicit messages win; otherwise `range` and `length` failures spell out
/// their bounds.
fn describe(path: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    let min = error.params.get("min");
    let max = error.params.get("max");
    match (error.code.as_ref(), min, max) {
        ("range", Some(min), Some(max)) => format!("{path} must be between {min} and {max}"),
        ("length", Some(min), Some(max)) => {
            format!("{path} must be between {min} and {max} characters long")
        }
        ("length", Some(min), None) => format!("{path} must be at least {min} characters long"),
        _ => format!("{path} is invalid"),
    }
}
