//! Route table and the navigation capability handed to screens.
//!
//! Screens never see the router. They receive a [`NavigationHandle`] and ask
//! it to move to a [`ScreenId`]; the shell decides how that request resolves.
//! Targets are a closed enum, so a request for an undeclared screen does not
//! compile. Identifiers that arrive as text go through [`ScreenId::from_str`].

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::ShellError;

/// Screens known to the navigation shell.
///
/// None of them accept parameters. `Login` and `Register` are reserved names
/// with no implemented screen yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenId {
    PreLogin,
    Login,
    Register,
}

impl ScreenId {
    /// Every entry of the route table, in declaration order.
    pub const ALL: [ScreenId; 3] = [ScreenId::PreLogin, ScreenId::Login, ScreenId::Register];

    /// The screen mounted when the shell starts.
    pub const INITIAL: ScreenId = ScreenId::PreLogin;

    /// Literal route identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenId::PreLogin => "PreLogin",
            ScreenId::Login => "Login",
            ScreenId::Register => "Register",
        }
    }

    /// Whether a real screen backs this identifier.
    pub fn is_implemented(&self) -> bool {
        matches!(self, ScreenId::PreLogin)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenId {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScreenId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ShellError::UnknownScreen(s.to_string()))
    }
}

/// A single forward navigation request.
///
/// Carries no parameters because no screen in the table takes any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target: ScreenId,
}

/// Something that can resolve navigation requests.
pub trait Navigate {
    fn request_navigation(&self, request: NavigationRequest);
}

/// Navigation capability injected into a screen.
///
/// Cheap to clone. Two handles compare equal when they share the same
/// navigator, which is what component props need.
#[derive(Clone)]
pub struct NavigationHandle {
    inner: Rc<dyn Navigate>,
}

impl NavigationHandle {
    pub fn new(navigator: impl Navigate + 'static) -> Self {
        Self {
            inner: Rc::new(navigator),
        }
    }

    /// Ask the shell to move to `target`.
    ///
    /// Every call issues a request; repeated calls are not collapsed.
    pub fn request_navigation(&self, target: ScreenId) {
        tracing::info!(target = %target, "navigation requested");
        self.inner.request_navigation(NavigationRequest { target });
    }
}

impl PartialEq for NavigationHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for NavigationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationHandle").finish_non_exhaustive()
    }
}

/// Navigator that only records what it was asked to do.
///
/// Clones share the same log, so a test can keep one clone and hand the other
/// to a [`NavigationHandle`].
#[derive(Clone, Debug, Default)]
pub struct NavigationLog {
    requests: Arc<Mutex<Vec<NavigationRequest>>>,
}

impl NavigationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every request received so far, oldest first.
    pub fn requests(&self) -> Vec<NavigationRequest> {
        self.requests.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.lock().is_empty()
    }
}

impl Navigate for NavigationLog {
    fn request_navigation(&self, request: NavigationRequest) {
        self.requests.lock().push(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_unique() {
        for (i, a) in ScreenId::ALL.iter().enumerate() {
            for b in &ScreenId::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn identifiers_round_trip() {
        for id in ScreenId::ALL {
            assert_eq!(id.to_string().parse::<ScreenId>().unwrap(), id);
        }
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = "Dashboard".parse::<ScreenId>().unwrap_err();
        assert!(matches!(err, ShellError::UnknownScreen(ref s) if s == "Dashboard"));
        // Identifiers are case-sensitive literals
        assert!("login".parse::<ScreenId>().is_err());
    }

    #[test]
    fn only_pre_login_is_implemented() {
        assert_eq!(ScreenId::INITIAL, ScreenId::PreLogin);
        assert!(ScreenId::PreLogin.is_implemented());
        assert!(!ScreenId::Login.is_implemented());
        assert!(!ScreenId::Register.is_implemented());
    }

    #[test]
    fn serde_uses_literal_identifiers() {
        let json = serde_json::to_string(&ScreenId::Register).unwrap();
        assert_eq!(json, "\"Register\"");
        let back: ScreenId = serde_json::from_str("\"Login\"").unwrap();
        assert_eq!(back, ScreenId::Login);
    }

    #[test]
    fn repeated_requests_are_all_delivered() {
        let log = NavigationLog::new();
        let handle = NavigationHandle::new(log.clone());

        for _ in 0..3 {
            handle.request_navigation(ScreenId::Login);
        }

        let requests = log.requests();
        assert_eq!(requests.len(), 3);
        assert!(requests
            .iter()
            .all(|r| *r == NavigationRequest { target: ScreenId::Login }));
        assert!(requests.iter().all(|r| r.target.as_str() == "Login"));
    }

    #[test]
    fn handles_compare_by_navigator() {
        let a = NavigationHandle::new(NavigationLog::new());
        let b = a.clone();
        let c = NavigationHandle::new(NavigationLog::new());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
