/**
 * API Route Configuration
 *
 * This module wires up the `/api` endpoints, including:
 * - Authentication endpoints (signup, login, get current user)
 * - Messaging endpoints (send, thread, conversations)
 * - Contact endpoints (add, list, remove)
 *
 * # Routes
 *
 * Signup and login are public. Everything else under `/api` sits behind
 * the bearer-token middleware.
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{login, me, signup};
use crate::backend::contacts::handlers::{
    handle_add_contact, handle_list_contacts, handle_remove_contact,
};
use crate::backend::messaging::handlers::{
    handle_delete_thread, handle_get_thread, handle_list_conversations, handle_send_message,
};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::server::state::AppState;

/// Add the `/api` routes to the router
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/messages", post(handle_send_message))
        .route(
            "/api/messages/thread",
            get(handle_get_thread).delete(handle_delete_thread),
        )
        .route("/api/messages/conversations", get(handle_list_conversations))
        .route(
            "/api/contacts",
            post(handle_add_contact)
                .get(handle_list_contacts)
                .delete(handle_remove_contact),
        )
        .route("/api/users/me", get(me))
        .route_layer(middleware::from_fn(auth_middleware));

    router
        .route("/api/users/signup", post(signup))
        .route("/api/users/login", post(login))
        .merge(protected)
}
