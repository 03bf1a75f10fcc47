//! Request Middleware
//!
//! - **`admin`** - the admin-only guard wrapped around post management routes

pub mod admin;
