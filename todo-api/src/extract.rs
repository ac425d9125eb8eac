/// Request extractors that reject with the API error envelope
///
/// axum's own `Json` and `Path` extractors answer malformed input with a
/// plain-text body. These wrappers route the rejection through [`ApiError`]
/// so clients always receive `{ "status": false, "message": ... }`.

use crate::error::ApiError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON body extractor
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
