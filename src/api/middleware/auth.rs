//! Resolves the bearer token on `/api/*` requests to the calling [`User`].

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::{domain::entities::User, error::AppError, state::AppState};

/// Route layer that admits only requests carrying a live API token.
///
/// The token is looked up through
/// [`AuthService::authenticate`](crate::application::services::AuthService::authenticate)
/// and the owning [`User`] is stored in the request extensions. Handlers that
/// need the caller (creating a blog, deleting one's own blog) take
/// `Extension<User>`.
///
/// A missing or malformed `Authorization` header, and an unknown or revoked
/// token, all end in `401` with `WWW-Authenticate: Bearer`.
///
/// Installed with `route_layer` in [`crate::routes::app_router`] so unmatched
/// paths still 404 instead of 401.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let user: User = st.auth_service.authenticate(&token).await?;
    tracing::debug!(user_id = user.id, "Authenticated request");

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
