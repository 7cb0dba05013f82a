//! Input validation glue.

use validator::Validate;

use portfolio_core::error::AppError;

/// Run `validator` rules on `input`, reporting failures as a `Validation` error.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), AppError> {
    input.validate().map_err(|errors| {
        let details = serde_json::to_value(&errors).unwrap_or(serde_json::Value::Null);
        AppError::validation(format!("Invalid request body: {errors}")).with_details(details)
    })
}
