//! Authentication context and session server functions

mod context;
mod server_fns;

pub use context::*;
pub use server_fns::*;

use serde::{Deserialize, Serialize};

/// Identity decoded from the API's bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub user_id: String,
    pub email: String,
    pub is_admin: bool,
}

/// An established session: the bearer credential plus the user behind it.
/// Threaded explicitly into remote calls that need authorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: AuthUser,
}
