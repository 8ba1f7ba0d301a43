//! Operator tokens for the inventory API.
//!
//! Tokens are HS256 JWTs naming the operator and the role they act under.
//! They are minted out of band (`sign_token`) and checked by `require_auth`.

use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const TOKEN_TTL_HOURS: i64 = 8;

/// What an operator may do. Managers maintain the catalogue; clerks may only
/// read it and run stock checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Clerk,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Manager => f.write_str("manager"),
            Role::Clerk => f.write_str("clerk"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OperatorClaims {
    /// Operator name, shown in request spans.
    pub sub: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

pub fn sign_token(operator: &str, role: Role, secret: &str) -> Result<String, AppError> {
    let issued = Utc::now();
    let claims = OperatorClaims {
        sub: operator.to_string(),
        role,
        iat: issued.timestamp(),
        exp: (issued + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(format!("Token signing failed: {e}")))
}

/// Rejects bad signatures, expired tokens and unknown roles alike.
pub fn verify_token(token: &str, secret: &str) -> Result<OperatorClaims, AppError> {
    let data = decode::<OperatorClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|e| AppError::unauthorized(format!("Invalid or expired token: {e}")))?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_token_verifies_with_same_secret() {
        let token = sign_token("alice", Role::Manager, "secret").unwrap();
        let claims = verify_token(&token, "secret").unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, Role::Manager);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_HOURS * 3600);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = sign_token("alice", Role::Clerk, "secret").unwrap();
        assert!(matches!(verify_token(&token, "other"), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn unknown_role_is_rejected() {
        let claims = serde_json::json!({
            "sub": "mallory",
            "role": "owner",
            "iat": Utc::now().timestamp(),
            "exp": (Utc::now() + Duration::hours(1)).timestamp(),
        });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        assert!(matches!(verify_token(&token, "secret"), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn roles_use_lowercase_names() {
        assert_eq!(serde_json::to_string(&Role::Clerk).unwrap(), "\"clerk\"");
        assert_eq!(Role::Manager.to_string(), "manager");
    }
}
