use std::borrow::Cow;

use super::table::RouteTableError;

/// WebHistory
///
/// HTML5 history mode: app paths live directly in the URL path, under an
/// optional base (e.g. `/portal/`). The base is always stored with a leading
/// and trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebHistory {
    base: String,
}

impl WebHistory {
    pub fn new(base: &str) -> Result<Self, RouteTableError> {
        if base.contains(['?', '#']) {
            return Err(RouteTableError::InvalidBase(base.to_string()));
        }

        let trimmed = base.trim().trim_matches('/');
        let base = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        };

        Ok(Self { base })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Maps a URL onto an app-relative path, dropping query and hash and
    /// percent-decoding the rest. Returns `None` when the URL lies outside the base.
    pub fn location(&self, url: &str) -> Option<String> {
        let raw = url.split(['?', '#']).next().unwrap_or_default();
        // Malformed escapes are matched as written.
        let path = urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw));
        let path = if path.starts_with('/') {
            path.into_owned()
        } else {
            format!("/{path}")
        };

        if self.base == "/" {
            return Some(path);
        }

        // `/portal` is the root of a `/portal/` base.
        let bare_base = &self.base[..self.base.len() - 1];
        if path.eq_ignore_ascii_case(bare_base) {
            return Some("/".to_string());
        }

        let prefix = path.get(..self.base.len())?;
        if prefix.eq_ignore_ascii_case(&self.base) {
            Some(format!("/{}", &path[self.base.len()..]))
        } else {
            None
        }
    }

    /// Full URL for an app-relative path.
    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }
}

impl Default for WebHistory {
    fn default() -> Self {
        Self {
            base: "/".to_string(),
        }
    }
}
