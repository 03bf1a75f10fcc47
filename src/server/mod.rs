//! Server Construction
//!
//! - **`config`** - environment-driven configuration, collected once
//! - **`state`** - the application state handed to every handler
//! - **`init`** - wiring: store, mailer, router

pub mod config;
pub mod init;
pub mod state;
