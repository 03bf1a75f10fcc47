//! Error Handling
//!
//! One error type covers every infrastructure failure a handler can hit:
//! database, password hashing, session tokens, outbound mail. Business-rule
//! rejections (duplicate email, wrong password) are *not* errors — handlers
//! surface those as flash messages and redirects.
//!
//! - **`types`** - `AppError` and its status-code mapping
//! - **`conversion`** - `IntoResponse` so handlers can return `Result<_, AppError>`

pub mod conversion;
pub mod types;

pub use types::AppError;
