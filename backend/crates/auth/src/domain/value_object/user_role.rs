use std::fmt;

/// Role stored in `users.role`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Strict parse, for values this application signed itself
    #[inline]
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "user" => Some(UserRole::User),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }

    /// Lenient parse for stored rows: anything unknown gets the least privilege
    pub fn from_code(code: &str) -> Self {
        Self::parse(code).unwrap_or_else(|| {
            tracing::warn!(role = %code, "Unknown UserRole code, treating as user");
            UserRole::User
        })
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
