//! Session / Authorization Guard
//!
//! Decides, for every protected request, whether the current session may
//! proceed. Evaluated from the cookie on each request; nothing is cached.

use thiserror::Error;

use crate::domain::entity::auth_session::AuthSession;

/// Access level a route requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    RequiresLogin,
    RequiresAdmin,
}

/// Why a request was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Denial {
    #[error("login required")]
    LoginRequired,

    #[error("admin role required")]
    AdminRequired,
}

pub fn authorize(access: Access, session: Option<&AuthSession>) -> Result<(), Denial> {
    match (access, session) {
        (Access::Public, _) => Ok(()),
        (_, None) => Err(Denial::LoginRequired),
        (Access::RequiresLogin, Some(_)) => Ok(()),
        (Access::RequiresAdmin, Some(session)) if session.is_admin() => Ok(()),
        (Access::RequiresAdmin, Some(_)) => Err(Denial::AdminRequired),
    }
}
