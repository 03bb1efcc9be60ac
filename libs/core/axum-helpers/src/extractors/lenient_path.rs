//! Path parameter extractor that never rejects on a parse failure.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use std::str::FromStr;

/// Extractor for typed path parameters that tolerates malformed input.
///
/// Parses the single path parameter as `T`. A value that does not parse
/// becomes `None` instead of a 400, so handlers can treat it as "no match"
/// (e.g. `/items/abc` is simply an item that does not exist).
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::LenientPath;
///
/// async fn get_item(LenientPath(id): LenientPath<u64>) -> String {
///     match id {
///         Some(id) => format!("Item ID: {}", id),
///         None => "no such item".to_string(),
///     }
/// }
///
/// let app = Router::new().route("/items/{id}", get(get_item));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LenientPath<T>(pub Option<T>);

impl<T, S> FromRequestParts<S> for LenientPath<T>
where
    T: FromStr + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        Ok(LenientPath(raw.trim().parse::<T>().ok()))
    }
}
