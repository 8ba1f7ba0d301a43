use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use crate::auth::jwt::{verify_token, Role};
use crate::error::AppError;
use crate::state::AppState;

#[derive(Clone, Debug)]
pub struct AuthContext {
    pub operator: String,
    pub role: Role,
}

impl AuthContext {
    pub fn require_manager(&self, action: &str) -> Result<(), AppError> {
        if self.role != Role::Manager {
            return Err(AppError::forbidden(format!("Only managers can {action}")));
        }
        Ok(())
    }
}

pub async fn require_auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let auth_header = match req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok()) {
        Some(h) => h,
        None => return AppError::unauthorized("Missing Authorization header").into_response(),
    };

    // Expect "Bearer <token>"
    let token = match auth_header.strip_prefix("Bearer ") {
        Some(t) => t,
        None => return AppError::unauthorized("Invalid Authorization format").into_response(),
    };

    let claims = match verify_token(token, &state.jwt_secret) {
        Ok(c) => c,
        Err(e) => return e.into_response(),
    };

    // Attach context
    req.extensions_mut().insert(AuthContext {
        operator: claims.sub,
        role: claims.role,
    });

    next.run(req).await
}
