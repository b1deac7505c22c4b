//! DTOs for the number classification endpoint.

use serde::{Deserialize, Serialize};

/// Query parameters for `GET /api/classify-number`.
///
/// `number` stays a raw string here: the parse step is part of the endpoint's
/// contract (strict integer first, decimal fallback), and failed input must be
/// echoed back byte-for-byte in the error response. A missing parameter and
/// `?number=` both surface as an absent/empty value.
#[derive(Debug, Deserialize)]
pub struct ClassifyParams {
    #[serde(default)]
    pub number: Option<String>,
}

/// Successful classification of a single integer.
///
/// Every field is present in every response; `properties` always starts with
/// the parity tag, followed by `"armstrong"` when it applies.
#[derive(Debug, Serialize)]
pub struct ClassificationResponse {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<String>,
    pub digit_sum: u32,
    pub fun_fact: String,
}
