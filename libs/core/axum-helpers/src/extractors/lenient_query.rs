//! Query string extractor that never rejects.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::convert::Infallible;

/// Extractor for query strings where every parameter is optional text.
///
/// A repeated key keeps its first value (`?page=2&page=3` reads as page 2).
/// If the pairs still do not fit `T`, the handler gets `T::default()`
/// rather than a 400. Fields of `T` should be `Option<String>` and be
/// coerced by the handler.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::LenientQuery;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Search {
///     q: Option<String>,
/// }
///
/// async fn search(LenientQuery(search): LenientQuery<Search>) -> String {
///     search.q.unwrap_or_default()
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LenientQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for LenientQuery<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => pairs,
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Unreadable query string, using defaults");
                Vec::new()
            }
        };

        let mut fields = Map::new();
        for (key, value) in pairs {
            fields.entry(key).or_insert(Value::String(value));
        }

        let value = serde_json::from_value(Value::Object(fields)).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Query parameters did not fit, using defaults");
            T::default()
        });
        Ok(LenientQuery(value))
    }
}
