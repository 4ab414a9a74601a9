//! Bearer-token credentials for a client instance.

use std::fmt;
use std::sync::Arc;

/// Whether requests carry an `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// No credential; private and viewer-only fields fail server-side.
    Anonymous,
    /// Every request carries `Authorization: Bearer <token>`.
    Authenticated,
}

/// The credential held by an [`AniListClient`](crate::AniListClient).
///
/// Fixed at construction. Surrounding whitespace is trimmed, so a token read
/// from a file or environment variable may end with a newline. An absent or
/// blank token yields a permanently anonymous context; there is no way to authenticate an
/// existing context later, build a new client instead.
///
/// Cloning is cheap and clones share the token, so one context can be read
/// from any number of concurrent calls.
#[derive(Clone, Default)]
pub struct AuthContext {
    token: Option<Arc<str>>,
}

impl AuthContext {
    /// Create a context from an optional token.
    pub fn new<T: Into<String>>(token: Option<T>) -> Self {
        let token = token
            .map(Into::into)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .map(Arc::from);
        Self { token }
    }

    /// Create an anonymous context.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Create a context from a token.
    ///
    /// A blank token still produces an anonymous context.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::new(Some(token))
    }

    /// The mode every request from this context is sent in.
    pub fn mode(&self) -> AuthMode {
        if self.token.is_some() {
            AuthMode::Authenticated
        } else {
            AuthMode::Anonymous
        }
    }

    /// Shorthand for `mode() == AuthMode::Authenticated`.
    pub fn is_authenticated(&self) -> bool {
        self.mode() == AuthMode::Authenticated
    }

    pub(crate) fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

// Never print the token itself.
impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("mode", &self.mode())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_anonymous() {
        let auth = AuthContext::new(None::<String>);
        assert_eq!(auth.mode(), AuthMode::Anonymous);
        assert_eq!(auth.token(), None);
        assert_eq!(AuthContext::anonymous().mode(), AuthMode::Anonymous);
    }

    #[test]
    fn test_blank_token_is_anonymous() {
        assert!(!AuthContext::bearer("").is_authenticated());
        assert!(!AuthContext::bearer("   ").is_authenticated());
    }

    #[test]
    fn test_token_is_authenticated() {
        let auth = AuthContext::bearer("abc");
        assert_eq!(auth.mode(), AuthMode::Authenticated);
        assert_eq!(auth.token(), Some("abc"));
    }

    #[test]
    fn test_token_is_trimmed() {
        assert_eq!(AuthContext::bearer("abc\n").token(), Some("abc"));
        assert_eq!(AuthContext::bearer("\t abc \r\n").token(), Some("abc"));
        assert!(!AuthContext::bearer("\n").is_authenticated());
    }

    #[test]
    fn test_clones_share_token() {
        let auth = AuthContext::bearer("abc");
        let clone = auth.clone();
        assert_eq!(clone.token(), Some("abc"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let text = format!("{:?}", AuthContext::bearer("super-secret"));
        assert!(!text.contains("super-secret"));
        assert!(text.contains("Authenticated"));
    }
}
