/**
 * Post Handlers
 *
 * The public post list and post page, comment submission, and the
 * admin-only post management handlers. The management handlers sit behind
 * the admin guard; by the time they run, the admin's `User` row is in the
 * request extensions.
 *
 * # Post Page
 *
 * The post page resolves the path id to a post (404 when it does not
 * exist) and carries the post's comments, each joined with its author's
 * name. Comment submission by an anonymous visitor is answered with a
 * flash message and a redirect to the login page; an authenticated
 * submission inserts the comment and re-renders the same page.
 */

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Extension, Form,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde_json::json;

use crate::auth::Identity;
use crate::error::AppError;
use crate::handlers::{set_flash, take_flash, Page};
use crate::server::state::AppState;
use crate::store::users::User;
use crate::store::{comments, posts};

/// Post form fields, used by both create and edit.
#[derive(Debug, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub img_url: String,
}

impl From<PostForm> for posts::PostContent {
    fn from(form: PostForm) -> Self {
        Self {
            title: form.title,
            subtitle: form.subtitle,
            body: form.body,
            img_url: form.img_url,
        }
    }
}

/// Comment form fields.
#[derive(Debug, Deserialize)]
pub struct CommentForm {
    pub text: String,
}

/// Server date in the display format posts carry, e.g. "August 25, 2026".
fn today() -> String {
    chrono::Utc::now().format("%B %d, %Y").to_string()
}

/// GET /
pub async fn get_all_posts(
    State(state): State<AppState>,
    identity: Identity,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let all_posts = posts::list_posts(&state.pool).await?;
    let (jar, flash) = take_flash(jar);

    let page = Page::new(
        "index",
        json!({ "all_posts": all_posts, "current_user": identity }),
    )
    .with_flash(flash);

    Ok((jar, page).into_response())
}

/// Render the post page: the post itself plus its comments.
async fn post_page(
    state: &AppState,
    identity: &Identity,
    post_id: i64,
    flash: Option<String>,
) -> Result<Page, AppError> {
    let post = posts::get_post_by_id(&state.pool, post_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let comments = comments::list_comments_for_post(&state.pool, post_id).await?;

    Ok(Page::new(
        "post",
        json!({ "post": post, "comments": comments, "current_user": identity }),
    )
    .with_flash(flash))
}

/// GET /post/{id}
pub async fn show_post(
    State(state): State<AppState>,
    identity: Identity,
    jar: CookieJar,
    Path(post_id): Path<i64>,
) -> Result<Response, AppError> {
    let (jar, flash) = take_flash(jar);
    let page = post_page(&state, &identity, post_id, flash).await?;
    Ok((jar, page).into_response())
}

/// POST /post/{id} — comment submission
pub async fn submit_comment(
    State(state): State<AppState>,
    identity: Identity,
    jar: CookieJar,
    Path(post_id): Path<i64>,
    Form(form): Form<CommentForm>,
) -> Result<Response, AppError> {
    let Some(user) = identity.user() else {
        tracing::warn!("anonymous comment attempt on post {}", post_id);
        let jar = set_flash(jar, "You need to login or register to comment");
        return Ok((jar, Redirect::to("/login")).into_response());
    };

    // The post must still exist for the comment to attach to.
    posts::get_post_by_id(&state.pool, post_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let comment = comments::create_comment(&state.pool, user.id, post_id, &form.text).await?;
    tracing::info!("user {} commented on post {} ({})", user.id, post_id, comment.id);

    let page = post_page(&state, &identity, post_id, None).await?;
    Ok(page.into_response())
}

/// GET /new-post (admin)
pub async fn new_post_page(identity: Identity) -> Page {
    Page::new(
        "make-post",
        json!({ "is_edit": false, "current_user": identity }),
    )
}

/// POST /new-post (admin)
pub async fn new_post(
    State(state): State<AppState>,
    Extension(admin): Extension<User>,
    Form(form): Form<PostForm>,
) -> Result<Redirect, AppError> {
    let post = posts::create_post(&state.pool, admin.id, &today(), &form.into()).await?;
    tracing::info!("created post {} \"{}\"", post.id, post.title);

    Ok(Redirect::to("/"))
}

/// GET /edit-post/{id} (admin)
pub async fn edit_post_page(
    State(state): State<AppState>,
    identity: Identity,
    Path(post_id): Path<i64>,
) -> Result<Page, AppError> {
    let post = posts::get_post_by_id(&state.pool, post_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Page::new(
        "make-post",
        json!({ "is_edit": true, "post": post, "current_user": identity }),
    ))
}

/// POST /edit-post/{id} (admin)
///
/// Overwrites title, subtitle, body and image URL; author and date are not
/// mutable after creation.
pub async fn edit_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    Form(form): Form<PostForm>,
) -> Result<Redirect, AppError> {
    let post = posts::update_post(&state.pool, post_id, &form.into())
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!("edited post {} \"{}\"", post.id, post.title);

    Ok(Redirect::to(&format!("/post/{}", post.id)))
}

/// GET /delete/{id} (admin)
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<Redirect, AppError> {
    if !posts::delete_post(&state.pool, post_id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!("deleted post {}", post_id);

    Ok(Redirect::to("/"))
}
