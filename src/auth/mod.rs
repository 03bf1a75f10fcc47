//! Authentication Module
//!
//! Credential hashing, session tokens, and per-request identity resolution.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports
//! ├── password.rs  - One-way salted hashing and verification
//! ├── sessions.rs  - Signed session tokens and the cookies that carry them
//! └── identity.rs  - The Identity sum type and its axum extractor
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register / Login**: credentials verified → signed token minted →
//!    stored in an HttpOnly session cookie
//! 2. **Every request**: the `Identity` extractor reads the cookie, verifies
//!    the token, and resolves the embedded user id back to a `User` row.
//!    Anything short of a valid token for an existing user is `Anonymous`.
//! 3. **Logout**: the session cookie is removed; the token simply stops
//!    being presented.

pub mod identity;
pub mod password;
pub mod sessions;

pub use identity::{Identity, ADMIN_USER_ID};
