use crate::{auth::SessionProvider, models::Route};

use super::table::LOGIN_PATH;

/// GuardDecision
///
/// The only two outcomes of a guard run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    /// Navigate to this app-relative path instead.
    Redirect(String),
}

/// NavigationGuard
///
/// Evaluated before every navigation. Routes flagged `requires_auth` are only
/// reachable while the session holds a token; everything else proceeds.
///
/// This gating is advisory UX. The API validates tokens on its own.
#[derive(Debug, Clone)]
pub struct NavigationGuard {
    login_path: String,
}

impl NavigationGuard {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn before_each(
        &self,
        to: &Route,
        from: Option<&Route>,
        session: &dyn SessionProvider,
    ) -> GuardDecision {
        if to.meta.requires_auth && !session.is_logged_in() {
            tracing::debug!(
                to = %to.path,
                from = from.map(|r| r.path.as_str()).unwrap_or("-"),
                "no session token, redirecting to login"
            );
            return GuardDecision::Redirect(self.login_path.clone());
        }

        tracing::debug!(to = %to.path, "navigation allowed");
        GuardDecision::Proceed
    }
}

impl Default for NavigationGuard {
    fn default() -> Self {
        Self::new(LOGIN_PATH)
    }
}
