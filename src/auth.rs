use std::{collections::HashMap, convert::Infallible};

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderMap, header, request::Parts},
};
use jsonwebtoken::{DecodingKey, Validation, decode, errors::ErrorKind};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

/// Storage key under which the session token is kept.
pub const DEFAULT_SESSION_KEY: &str = "jwt_token";

/// Claims
///
/// Payload of the access tokens issued by the portal API. Only inspected when
/// the JWT token policy is active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (sub): the numeric user id.
    pub sub: i64,
    /// Expiration Time (exp).
    pub exp: usize,
    /// Issued At (iat).
    pub iat: usize,
}

/// KeyValueStore
///
/// Persistent client-side storage as seen by the navigation layer: a read-only
/// `get`. Writing tokens belongs to the authentication service.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
}

/// SessionProvider
///
/// Injected session state consulted by the navigation guard.
pub trait SessionProvider {
    /// The stored token, with empty values treated as absent.
    fn token(&self) -> Option<String>;

    fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }
}

/// In-memory storage, used by bootstraps without a browser and by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// RequestStorage
///
/// Read-only view of the storage an HTTP client carries with each request.
/// Cookies are consulted first; for the session key an `Authorization` header
/// with the `Bearer` scheme (any case) is accepted as a fallback.
#[derive(Debug, Clone)]
pub struct RequestStorage<'a> {
    headers: &'a HeaderMap,
    bearer_key: &'a str,
}

impl<'a> RequestStorage<'a> {
    pub fn new(headers: &'a HeaderMap, bearer_key: &'a str) -> Self {
        Self { headers, bearer_key }
    }

    fn cookie(&self, key: &str) -> Option<String> {
        self.headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|cookies| cookies.split(';'))
            .find_map(|cookie| {
                let (name, value) = cookie.trim().split_once('=')?;
                (name == key).then(|| value.to_string())
            })
    }

    fn bearer(&self) -> Option<String> {
        self.headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().split_once(char::is_whitespace))
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
            .map(|(_, token)| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }
}

impl KeyValueStore for RequestStorage<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.cookie(key).or_else(|| {
            if key == self.bearer_key {
                self.bearer()
            } else {
                None
            }
        })
    }
}

/// TokenPolicy
///
/// What counts as "logged in". `Presence` only checks that a value exists;
/// `Jwt` also requires a well-signed, unexpired HS256 token.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TokenPolicy {
    #[default]
    Presence,
    Jwt { secret: String },
}

impl TokenPolicy {
    /// Applies the policy to a raw token.
    pub fn accepts(&self, token: &str) -> bool {
        match self {
            TokenPolicy::Presence => true,
            TokenPolicy::Jwt { secret } => {
                let decoding_key = DecodingKey::from_secret(secret.as_bytes());
                let mut validation = Validation::default();
                validation.validate_exp = true;

                match decode::<Claims>(token, &decoding_key, &validation) {
                    Ok(data) => {
                        tracing::trace!(user_id = data.claims.sub, "session token accepted");
                        true
                    }
                    Err(e) => {
                        match e.kind() {
                            ErrorKind::ExpiredSignature => {
                                tracing::debug!("session token expired")
                            }
                            _ => tracing::debug!(error = %e, "session token rejected"),
                        }
                        false
                    }
                }
            }
        }
    }
}

/// SessionState
///
/// The standard `SessionProvider`: a storage, the key the token lives under,
/// and the policy deciding whether a stored value counts.
#[derive(Debug, Clone)]
pub struct SessionState<S> {
    store: S,
    key: String,
    policy: TokenPolicy,
}

impl<S: KeyValueStore> SessionState<S> {
    pub fn new(store: S, key: impl Into<String>, policy: TokenPolicy) -> Self {
        Self {
            store,
            key: key.into(),
            policy,
        }
    }

    /// Presence-only session reading the default key.
    pub fn presence(store: S) -> Self {
        Self::new(store, DEFAULT_SESSION_KEY, TokenPolicy::Presence)
    }
}

impl<S: KeyValueStore> SessionProvider for SessionState<S> {
    fn token(&self) -> Option<String> {
        self.store
            .get(&self.key)
            .filter(|token| !token.is_empty())
            .filter(|token| self.policy.accepts(token))
    }
}

/// ClientSession
///
/// Session of the client behind an HTTP request, resolved from its cookies (or
/// bearer header) with the configured key and token policy. Never rejects:
/// a missing token simply means "not logged in".
#[derive(Debug, Clone)]
pub struct ClientSession {
    token: Option<String>,
}

impl SessionProvider for ClientSession {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }
}

impl<S> FromRequestParts<S> for ClientSession
where
    S: Send + Sync,
    AppConfig: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AppConfig::from_ref(state);
        let storage = RequestStorage::new(&parts.headers, &config.session_key);
        let session = SessionState::new(storage, config.session_key.as_str(), config.token_policy);

        Ok(ClientSession {
            token: session.token(),
        })
    }
}
