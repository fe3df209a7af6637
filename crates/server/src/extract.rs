use axum::extract::FromRequest;

use crate::error::ApiError;

/// Strict JSON body extractor. Malformed bodies, unknown or extra fields,
/// and invalid enum values are rejected with a 400 rather than axum's
/// default 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);
