use crate::{
    auth::SessionProvider,
    models::{Navigation, Route},
};

use super::{
    guard::{GuardDecision, NavigationGuard},
    history::WebHistory,
    table::{RouteTable, RouteTableError},
};

/// NavigationRouter
///
/// The router instance handed to the application bootstrap. Immutable once
/// built, so a single instance is shared by every request behind an `Arc`.
#[derive(Debug, Clone)]
pub struct NavigationRouter {
    history: WebHistory,
    table: RouteTable,
    guard: NavigationGuard,
}

impl NavigationRouter {
    /// Assembles a router. The guard's redirect target must resolve to a
    /// public route, which rules out redirect loops up front.
    pub fn new(
        history: WebHistory,
        table: RouteTable,
        guard: NavigationGuard,
    ) -> Result<Self, RouteTableError> {
        let login = table
            .resolve(guard.login_path())
            .ok_or_else(|| RouteTableError::UnknownLoginRoute(guard.login_path().to_string()))?;

        if login.meta.requires_auth {
            return Err(RouteTableError::LoginRequiresAuth(login.path.clone()));
        }

        Ok(Self {
            history,
            table,
            guard,
        })
    }

    /// The portal router: standard table under the given base URL.
    pub fn standard(base_url: &str) -> Result<Self, RouteTableError> {
        Self::new(
            WebHistory::new(base_url)?,
            RouteTable::standard(),
            NavigationGuard::default(),
        )
    }

    pub fn history(&self) -> &WebHistory {
        &self.history
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Routes as published to the SPA bootstrap.
    pub fn manifest(&self) -> Vec<Route> {
        self.table.iter().cloned().collect()
    }

    /// Navigates to a URL. `from` is the URL currently shown, if any.
    pub fn push(&self, url: &str, from: Option<&str>, session: &dyn SessionProvider) -> Navigation {
        let Some(path) = self.history.location(url) else {
            return Navigation::NotFound {
                path: url.to_string(),
            };
        };

        let Some(to) = self.table.resolve(&path) else {
            tracing::debug!(%path, "no route matched");
            return Navigation::NotFound { path };
        };

        self.guarded(to, &path, from, session)
    }

    /// Navigates to a route by name.
    pub fn push_named(
        &self,
        name: &str,
        from: Option<&str>,
        session: &dyn SessionProvider,
    ) -> Navigation {
        match self.table.by_name(name) {
            Some(to) => self.guarded(to, &to.path, from, session),
            None => Navigation::NotFound {
                path: name.to_string(),
            },
        }
    }

    fn guarded(
        &self,
        to: &Route,
        requested: &str,
        from: Option<&str>,
        session: &dyn SessionProvider,
    ) -> Navigation {
        let from = from
            .and_then(|url| self.history.location(url))
            .and_then(|path| self.table.resolve(&path));

        match self.guard.before_each(to, from, session) {
            GuardDecision::Proceed => Navigation::Rendered { route: to.clone() },
            GuardDecision::Redirect(target) => {
                // Checked in `new`: the target resolves and is public.
                match self.table.resolve(&target) {
                    Some(route) => {
                        tracing::info!(requested, redirect = %route.path, "navigation redirected");
                        Navigation::Redirected {
                            requested: requested.to_string(),
                            route: route.clone(),
                        }
                    }
                    None => Navigation::NotFound { path: target },
                }
            }
        }
    }
}
