//! Application Configuration
//!
//! Read once at startup from the process environment (after `.env` has been
//! loaded). Every value has a development default except the ones that must
//! never be guessed; malformed values abort startup.

use std::fmt;
use std::net::SocketAddr;

use auth::AuthConfig;
use auth::application::SeedUser;
use auth::domain::UserRole;
use platform::crypto::{from_base64, random_secret};
use platform::password::ClearTextPassword;
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://example.db?mode=rwc";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub session_secret: [u8; 32],
    /// True when no `SESSION_SECRET` was configured
    pub session_secret_generated: bool,
    pub cookie_secure: bool,
    pub password_pepper: Option<Vec<u8>>,
    /// Create tables and seed users at startup
    pub provision: bool,
    pub seed_users: Vec<SeedUser>,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &self.database_url)
            .field("database_max_connections", &self.database_max_connections)
            .field("bind_addr", &self.bind_addr)
            .field("session_secret", &"[REDACTED]")
            .field("session_secret_generated", &self.session_secret_generated)
            .field("cookie_secure", &self.cookie_secure)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .field("provision", &self.provision)
            .field("seed_users", &self.seed_users.len())
            .finish()
    }
}

impl AppConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ConfigError::invalid("DATABASE_MAX_CONNECTIONS", "expected a positive integer")
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::invalid("BIND_ADDR", e.to_string()))?;

        let (session_secret, session_secret_generated) = match get("SESSION_SECRET") {
            Some(raw) => (parse_secret(raw.trim())?, false),
            None => (random_secret(), true),
        };

        let cookie_secure = parse_bool("COOKIE_SECURE", get("COOKIE_SECURE"), false)?;
        let provision = parse_bool("DATABASE_PROVISION", get("DATABASE_PROVISION"), true)?;

        let password_pepper = get("PASSWORD_PEPPER").map(String::into_bytes);

        let seed_users = match get("SEED_USERS") {
            Some(raw) => parse_seed_users(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            session_secret,
            session_secret_generated,
            cookie_secure,
            password_pepper,
            provision,
            seed_users,
        })
    }

    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig {
            session_secret: self.session_secret,
            cookie_secure: self.cookie_secure,
            password_pepper: self.password_pepper.clone(),
            ..AuthConfig::default()
        }
    }
}

fn parse_secret(raw: &str) -> Result<[u8; 32], ConfigError> {
    let bytes = from_base64(raw)
        .map_err(|e| ConfigError::invalid("SESSION_SECRET", format!("invalid base64: {e}")))?;

    <[u8; 32]>::try_from(bytes.as_slice()).map_err(|_| {
        ConfigError::invalid(
            "SESSION_SECRET",
            format!("expected 32 bytes, got {}", bytes.len()),
        )
    })
}

fn parse_bool(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::invalid(
            key,
            format!("expected a boolean, got {other:?}"),
        )),
    }
}

/// `name:password:role,...`; the password may itself contain `:`
fn parse_seed_users(raw: &str) -> Result<Vec<SeedUser>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (username, rest) = entry
                .split_once(':')
                .ok_or_else(|| ConfigError::invalid("SEED_USERS", "expected name:password:role"))?;
            let (password, role) = rest
                .rsplit_once(':')
                .ok_or_else(|| ConfigError::invalid("SEED_USERS", "expected name:password:role"))?;

            if username.is_empty() {
                return Err(ConfigError::invalid("SEED_USERS", "empty user name"));
            }
            let user_role = UserRole::parse(role).ok_or_else(|| {
                ConfigError::invalid("SEED_USERS", format!("unknown role {role:?}"))
            })?;

            Ok(SeedUser {
                username: username.to_string(),
                password: ClearTextPassword::new(password.to_string()),
                user_role,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_addr.port(), 5000);
        assert_eq!(config.database_max_connections, 5);
        assert!(config.session_secret_generated);
        assert!(!config.cookie_secure);
        assert!(config.provision);
        assert!(config.password_pepper.is_none());
        assert!(config.seed_users.is_empty());
    }

    #[test]
    fn test_session_secret_must_be_32_bytes() {
        let ok = platform::crypto::to_base64(&[5u8; 32]);
        let config = load(&[("SESSION_SECRET", &ok)]).unwrap();
        assert_eq!(config.session_secret, [5u8; 32]);
        assert!(!config.session_secret_generated);

        let short = platform::crypto::to_base64(&[5u8; 16]);
        assert!(load(&[("SESSION_SECRET", &short)]).is_err());
        assert!(load(&[("SESSION_SECRET", "not base64!")]).is_err());
    }

    #[test]
    fn test_booleans() {
        let config = load(&[("COOKIE_SECURE", "TRUE"), ("DATABASE_PROVISION", "0")]).unwrap();
        assert!(config.cookie_secure);
        assert!(!config.provision);

        assert!(load(&[("COOKIE_SECURE", "maybe")]).is_err());
    }

    #[test]
    fn test_bind_addr() {
        let config = load(&[("BIND_ADDR", "127.0.0.1:8080")]).unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");

        assert!(load(&[("BIND_ADDR", "localhost")]).is_err());
    }

    #[test]
    fn test_seed_users() {
        let config = load(&[("SEED_USERS", "alice:pw123:user, root:a:b:c:admin ,")]).unwrap();

        assert_eq!(config.seed_users.len(), 2);
        assert_eq!(config.seed_users[0].username, "alice");
        assert_eq!(config.seed_users[0].user_role, UserRole::User);
        assert_eq!(config.seed_users[1].username, "root");
        assert_eq!(config.seed_users[1].user_role, UserRole::Admin);
        assert_eq!(
            config.seed_users[1].password.digest(None),
            ClearTextPassword::new("a:b:c".to_string()).digest(None)
        );
    }

    #[test]
    fn test_bad_seed_users() {
        assert!(load(&[("SEED_USERS", "alice")]).is_err());
        assert!(load(&[("SEED_USERS", "alice:pw")]).is_err());
        assert!(load(&[("SEED_USERS", "alice:pw:superuser")]).is_err());
        assert!(load(&[("SEED_USERS", ":pw:user")]).is_err());
    }

    #[test]
    fn test_auth_config_and_debug_redaction() {
        let config = load(&[
            ("PASSWORD_PEPPER", "s3cr3t-pepper"),
            ("SEED_USERS", "a:secretpw:user"),
        ])
        .unwrap();
        let auth = config.auth_config();
        assert_eq!(auth.pepper(), Some(&b"s3cr3t-pepper"[..]));
        assert_eq!(auth.session_secret, config.session_secret);

        let debug = format!("{config:?}");
        assert!(!debug.contains("s3cr3t"));
        assert!(!debug.contains("secretpw"));
    }
}
