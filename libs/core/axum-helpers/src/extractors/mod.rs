//! Custom extractors for Axum handlers.
//!
//! These keep rejection responses in the standard `ErrorResponse` shape.

pub mod json_body;
pub mod lenient_path;
pub mod lenient_query;

pub use json_body::JsonBody;
pub use lenient_path::LenientPath;
pub use lenient_query::LenientQuery;
