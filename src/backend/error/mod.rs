//! Backend Error Module
//!
//! - **`types`** - `ApiError` definition and constructors
//! - **`conversion`** - `IntoResponse` implementation

pub mod conversion;
pub mod types;

pub use types::ApiError;
