use std::env;

use crate::auth::{DEFAULT_SESSION_KEY, TokenPolicy};

/// AppConfig
///
/// Immutable configuration loaded once at startup and shared with handlers
/// through the application state.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Selects the log format.
    pub env: Env,
    // Base URL the SPA is served under (history mode base).
    pub base_url: String,
    // Address the HTTP server binds to.
    pub bind_addr: String,
    // Storage key (cookie name) holding the session token.
    pub session_key: String,
    // What counts as "logged in".
    pub token_policy: TokenPolicy,
}

/// Env
///
/// Runtime context: local development or production.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

const LOCAL_JWT_SECRET: &str = "super-secure-test-secret-value-local";

impl Default for AppConfig {
    /// Safe values for tests; no environment variables required.
    fn default() -> Self {
        Self {
            env: Env::Local,
            base_url: "/".to_string(),
            bind_addr: "127.0.0.1:3000".to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
            token_policy: TokenPolicy::Presence,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads the configuration from environment variables.
    ///
    /// # Panics
    /// Panics in production when `TOKEN_POLICY=jwt` and `JWT_SECRET` is not set,
    /// or when `TOKEN_POLICY` holds an unknown value.
    pub fn load() -> Self {
        let env = match env::var("APP_ENV").as_deref() {
            Ok("production") => Env::Production,
            _ => Env::Local,
        };

        let token_policy = match env::var("TOKEN_POLICY").as_deref() {
            Err(_) | Ok("presence") => TokenPolicy::Presence,
            Ok("jwt") => {
                let secret = match env {
                    Env::Production => env::var("JWT_SECRET")
                        .expect("FATAL: JWT_SECRET must be set in production with TOKEN_POLICY=jwt."),
                    Env::Local => {
                        env::var("JWT_SECRET").unwrap_or_else(|_| LOCAL_JWT_SECRET.to_string())
                    }
                };
                TokenPolicy::Jwt { secret }
            }
            Ok(other) => panic!("FATAL: unknown TOKEN_POLICY `{other}` (expected presence or jwt)."),
        };

        Self {
            env,
            base_url: env::var("BASE_URL").unwrap_or_else(|_| "/".to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            session_key: env::var("SESSION_KEY")
                .unwrap_or_else(|_| DEFAULT_SESSION_KEY.to_string()),
            token_policy,
        }
    }
}
