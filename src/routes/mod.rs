/**
 * Router Configuration
 *
 * Assembles all routes into a single Axum router.
 *
 * # Routes
 *
 * ## Public
 * - `GET /` - post list
 * - `GET|POST /register` - registration
 * - `GET|POST /login` - login
 * - `GET /logout` - logout
 * - `GET|POST /post/{id}` - post page and comment submission
 * - `GET /about` - about page
 * - `GET|POST /contact` - contact form
 *
 * ## Admin-only (behind the admin guard)
 * - `GET|POST /new-post`
 * - `GET|POST /edit-post/{id}`
 * - `GET /delete/{id}`
 *
 * Static assets are served from the `static` directory under `/static`;
 * unknown routes get a bare 404.
 */

use axum::{http::StatusCode, middleware::from_fn_with_state, routing::get, Router};
use tower_http::services::ServeDir;

use crate::handlers::{auth, pages, posts};
use crate::middleware::admin::admin_only;
use crate::server::state::AppState;

/// Create the router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/new-post", get(posts::new_post_page).post(posts::new_post))
        .route(
            "/edit-post/{id}",
            get(posts::edit_post_page).post(posts::edit_post),
        )
        .route("/delete/{id}", get(posts::delete_post))
        .route_layer(from_fn_with_state(state.clone(), admin_only));

    Router::new()
        .route("/", get(posts::get_all_posts))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route(
            "/post/{id}",
            get(posts::show_post).post(posts::submit_comment),
        )
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact_page).post(pages::contact))
        .merge(admin_routes)
        .nest_service("/static", ServeDir::new("static"))
        .fallback(|| async { StatusCode::NOT_FOUND })
        .with_state(state)
}
