// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session tokens for HTTP clients.
//!
//! A token maps to a [`Session`] held in server memory only. Tokens are
//! issued on room creation and join and removed on logout.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use shift_room_api::Session;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::AppState;

/// Live sessions by token.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<String, Session>>>,
}

impl SessionRegistry {
    /// Stores `session` under a fresh token and returns the token.
    pub async fn issue(&self, session: Session) -> String {
        let token: String = format!(
            "session_{}_{:016x}",
            session.room_id(),
            rand::random::<u64>()
        );
        self.sessions.lock().await.insert(token.clone(), session);
        token
    }

    pub async fn lookup(&self, token: &str) -> Option<Session> {
        self.sessions.lock().await.get(token).cloned()
    }

    pub async fn revoke(&self, token: &str) -> Option<Session> {
        self.sessions.lock().await.remove(token)
    }
}

/// Extractor for the caller's session.
///
/// Reads `Authorization: Bearer <token>` and resolves it in the registry.
///
/// # Errors
///
/// Returns HTTP 401 Unauthorized if the header is missing or malformed or
/// the token is unknown.
pub struct SessionUser(pub Session, pub String);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .ok_or_else(|| {
                debug!("Missing Authorization header");
                SessionError::MissingAuthorizationHeader
            })?
            .to_str()
            .map_err(|_| {
                warn!("Invalid Authorization header encoding");
                SessionError::InvalidAuthorizationHeader
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            warn!("Authorization header does not start with 'Bearer '");
            SessionError::InvalidAuthorizationHeader
        })?;

        let session: Session = state.sessions.lookup(token).await.ok_or_else(|| {
            warn!("Unknown session token");
            SessionError::UnknownSession
        })?;

        debug!(room_id = %session.room_id(), name = session.name(), "Session resolved");
        Ok(Self(session, token.to_string()))
    }
}

/// Session extraction errors.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header is missing.
    MissingAuthorizationHeader,
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
    /// The token does not name a live session.
    UnknownSession,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let message: &str = match self {
            Self::MissingAuthorizationHeader => "Missing Authorization header",
            Self::InvalidAuthorizationHeader => {
                "Invalid Authorization header format. Expected: 'Bearer <token>'"
            }
            Self::UnknownSession => "Unknown or expired session",
        };
        (StatusCode::UNAUTHORIZED, message).into_response()
    }
}
