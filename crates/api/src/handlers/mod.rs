//! Request handlers, one module per resource.

pub mod auth;
pub mod movies;
pub mod recommendations;
pub mod reviews;
pub mod users;
pub mod watchlist;

use cinelog_core::error::CoreError;
use validator::Validate;

use crate::error::AppError;

/// Run derive-based validation on a request body, mapping failures to 400.
pub(crate) fn validate_input<T: Validate>(input: &T) -> Result<(), AppError> {
    input
        .validate()
        .map_err(|errors| AppError::Core(CoreError::Validation(errors.to_string())))
}
