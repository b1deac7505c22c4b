//! Handler for the number classification endpoint.

use axum::{Json, extract::Query};
use tracing::debug;

use crate::api::dto::classify::{ClassificationResponse, ClassifyParams};
use crate::domain::classification::{Parity, digit_sum, is_armstrong, is_perfect, is_prime};
use crate::error::AppError;
use crate::utils::number_parser::parse_number;

/// Classifies an integer by its arithmetic properties.
///
/// # Endpoint
///
/// `GET /api/classify-number?number=<value>`
///
/// # Query Parameters
///
/// - `number` (required): the value to classify. Plain integer syntax is
///   accepted, as are decimal-formatted values like `4.0`, which are
///   truncated toward zero.
///
/// # Response
///
/// ```json
/// {
///   "number": 153,
///   "is_prime": false,
///   "is_perfect": false,
///   "properties": ["odd", "armstrong"],
///   "digit_sum": 9,
///   "fun_fact": "153 is an interesting number!"
/// }
/// ```
///
/// `properties` always leads with the parity tag; `"armstrong"` is appended
/// only when the number is an Armstrong number.
///
/// # Errors
///
/// Returns 400 Bad Request with `{"number": "<raw input>", "error": true}`
/// when the parameter is missing, empty, or unparsable. The raw input is
/// echoed back verbatim (empty string when missing).
pub async fn classify_number_handler(
    Query(params): Query<ClassifyParams>,
) -> Result<Json<ClassificationResponse>, AppError> {
    let raw = params.number.unwrap_or_default();
    if raw.is_empty() {
        return Err(AppError::MissingNumber);
    }

    let number = parse_number(&raw).ok_or_else(|| {
        debug!(input = %raw, "rejecting unparsable number");
        AppError::unparsable(raw)
    })?;

    Ok(Json(classify(number)))
}

/// Builds the response object for a parsed number.
fn classify(number: i64) -> ClassificationResponse {
    let mut properties = vec![Parity::of(number).as_str().to_string()];
    if is_armstrong(number) {
        properties.push("armstrong".to_string());
    }

    ClassificationResponse {
        number,
        is_prime: is_prime(number),
        is_perfect: is_perfect(number),
        properties,
        digit_sum: digit_sum(number),
        fun_fact: format!("{number} is an interesting number!"),
    }
}
