//! Inkpress — a small multi-user blog server.
//!
//! Visitors read posts, registered users comment, the admin (user id 1)
//! manages posts, and a contact form mails the site owner. Handlers produce
//! response descriptors (a view name plus a JSON context, a redirect with
//! one-shot flash messages, or a bare status); HTML rendering itself is left
//! to whatever consumes those descriptors.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── auth/        - password hashing, session tokens, identity extraction
//! ├── error/       - AppError and its HTTP conversion
//! ├── handlers/    - one handler per route
//! ├── mailer/      - outbound SMTP for the contact form
//! ├── middleware/  - admin-only guard
//! ├── routes/      - router assembly
//! ├── server/      - configuration, state, app construction
//! └── store/       - users, posts, comments tables and queries
//! ```

pub mod auth;
pub mod error;
pub mod handlers;
pub mod mailer;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod store;
