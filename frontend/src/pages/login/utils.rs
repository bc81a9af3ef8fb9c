use validator::{Validate, ValidationErrors};

use crate::api::LoginRequest;

/// Order in which field errors are reported.
pub const VALIDATED_FIELDS: [&str; 2] = ["email", "password"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// At most one error per field, email before password.
pub fn validate_credentials(request: &LoginRequest) -> Result<(), Vec<FieldError>> {
    request
        .validate()
        .map_err(|errors| first_error_per_field(&errors))
}

fn first_error_per_field(errors: &ValidationErrors) -> Vec<FieldError> {
    let by_field = errors.field_errors();
    VALIDATED_FIELDS
        .iter()
        .filter_map(|field| {
            let first = by_field.get(*field)?.first()?;
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| first.code.to_string());
            Some(FieldError {
                field: *field,
                message,
            })
        })
        .collect()
}
