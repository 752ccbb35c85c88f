/**
 * API Routes
 *
 * This module binds every `/api` endpoint to its handler. Paths here are
 * relative; `create_router` nests the result under `/api`.
 *
 * # Routes
 *
 * ## Users
 * - `POST /users/register` - Register
 * - `POST /users/login` - Login
 * - `GET /users/me` - Current user (protected)
 *
 * ## Projects
 * - `GET /projects`, `GET /projects/{id}` - Public reads
 * - `POST /projects` - Create (protected)
 * - `PUT /projects/{id}`, `DELETE /projects/{id}` - Owner only
 *
 * ## Blog
 * - `GET /blog`, `GET /blog/{id}` - Public reads
 * - `POST /blog` - Create (protected)
 * - `PUT /blog/{id}`, `DELETE /blog/{id}` - Author only
 * - `GET /blog/{id}/comments` - Public
 * - `POST /blog/{id}/comments` - Comment (protected)
 *
 * ## Contact
 * - `POST /contact` - Submit (public)
 * - `GET /contact` - List (protected)
 *
 * # Authentication
 *
 * Public and protected methods share paths, so the auth guard is layered
 * onto each protected handler rather than onto whole routes.
 */

use axum::{
    handler::Handler,
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth;
use crate::backend::blog::handlers as blog;
use crate::backend::contact::handlers as contact;
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::projects::handlers as projects;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `state` - Application state, handed to the auth guard
///
/// # Returns
///
/// Router with every API endpoint, still expecting `AppState`
pub fn configure_api_routes(state: &AppState) -> Router<AppState> {
    let guard = middleware::from_fn_with_state(state.clone(), auth_middleware);

    Router::new()
        // Users
        .route("/users/register", post(auth::register))
        .route("/users/login", post(auth::login))
        .route("/users/me", get(auth::get_me.layer(guard.clone())))
        // Projects
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project.layer(guard.clone())),
        )
        .route(
            "/projects/{id}",
            get(projects::get_project)
                .put(projects::update_project.layer(guard.clone()))
                .delete(projects::delete_project.layer(guard.clone())),
        )
        // Blog
        .route(
            "/blog",
            get(blog::list_posts).post(blog::create_post.layer(guard.clone())),
        )
        .route(
            "/blog/{id}",
            get(blog::get_post)
                .put(blog::update_post.layer(guard.clone()))
                .delete(blog::delete_post.layer(guard.clone())),
        )
        .route(
            "/blog/{id}/comments",
            get(blog::list_comments).post(blog::create_comment.layer(guard.clone())),
        )
        // Contact
        .route(
            "/contact",
            post(contact::submit_message).get(contact::list_messages.layer(guard)),
        )
}
