use super::app_error::AppError;

/// Only the SQLSTATEs this schema can actually raise are translated;
/// everything else stays a generic database error.
pub(super) fn map_database_error(code: Option<&str>, constraint: Option<&str>) -> Option<AppError> {
    match code {
        Some("23505") => Some(AppError::Conflict(
            conflict_message_from_constraint(constraint).to_string(),
        )),
        Some("08001") | Some("08006") => Some(AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: "Unable to connect to database. Please try again later.".to_string(),
        }),
        Some("53300") => Some(AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: "Service temporarily unavailable. Please try again later.".to_string(),
        }),
        _ => None,
    }
}

pub(super) fn conflict_message_from_constraint(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some("addresses_pkey") => "address already exists",
        _ => "resource already exists",
    }
}
