use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use models::user::Role;
use service::access::{self, AccessDecision};

use crate::routes::auth::ServerState;

/// Middleware: any authenticated identity may pass.
pub async fn require_user(State(state): State<ServerState>, req: Request, next: Next) -> Response {
    apply(state, &[], req, next).await
}

/// Middleware: administrators only.
pub async fn require_admin(State(state): State<ServerState>, req: Request, next: Next) -> Response {
    apply(state, &[Role::Admin], req, next).await
}

/// Re-evaluates the guard on every request: load the live account behind
/// the session, run the pure decision function, and either stash the
/// identity for the handler or redirect. A role mismatch is a silent
/// redirect home, never an error.
async fn apply(state: ServerState, required: &[Role], mut req: Request, next: Next) -> Response {
    let user = state.sessions.current_user().await;
    match (access::evaluate(user.as_ref(), required), user) {
        (AccessDecision::Permit, Some(user)) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        (AccessDecision::RedirectToHome, _) => Redirect::to("/dashboard").into_response(),
        (AccessDecision::RedirectToLogin, _) | (AccessDecision::Permit, None) => {
            Redirect::to("/login").into_response()
        }
    }
}
