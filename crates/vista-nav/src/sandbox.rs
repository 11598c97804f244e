//! Collaborator ports: the embedded browsing context and the host environment.

use std::fmt;

use serde::{Deserialize, Serialize};
use vista_common::AccessDenied;

/// Tag attached to every load the widget initiates.
///
/// Tokens increase monotonically per widget, so a completion carrying an
/// older token belongs to a superseded request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LoadToken(pub u64);

impl LoadToken {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for LoadToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "load-{}", self.0)
    }
}

/// A "content finished loading" notification from the sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadCompletion {
    /// Completion of a load the widget requested with this token.
    Requested(LoadToken),
    /// Completion of a navigation started inside the sandbox (link click,
    /// history step) that carries no token.
    Untracked,
}

/// The isolated browsing context the widget drives.
///
/// Every method may fail with [`AccessDenied`] when the loaded content's
/// origin differs from the host's. That is the only error the sandbox
/// reports; load completion arrives separately through the host loop.
pub trait NavigationSandbox {
    /// Start loading `url`. The completion must carry `token`.
    fn load(&mut self, url: &str, token: LoadToken) -> Result<(), AccessDenied>;

    /// Step back one entry in the sandbox's own history.
    fn step_back(&mut self) -> Result<(), AccessDenied>;

    /// Step forward one entry in the sandbox's own history.
    fn step_forward(&mut self) -> Result<(), AccessDenied>;

    /// Reload whatever resource the sandbox is currently displaying.
    fn reload_current(&mut self, token: LoadToken) -> Result<(), AccessDenied>;

    /// Number of entries in the sandbox's session history.
    fn query_history_length(&self) -> Result<usize, AccessDenied>;
}

/// The host application around the widget.
pub trait HostEnvironment {
    /// Open `url` in a new top-level browsing context.
    ///
    /// Fire-and-forget: non-blocking, not cancelable, no completion signal.
    fn open_in_new_context(&self, url: &str);
}

impl<T: NavigationSandbox + ?Sized> NavigationSandbox for Box<T> {
    fn load(&mut self, url: &str, token: LoadToken) -> Result<(), AccessDenied> {
        (**self).load(url, token)
    }

    fn step_back(&mut self) -> Result<(), AccessDenied> {
        (**self).step_back()
    }

    fn step_forward(&mut self) -> Result<(), AccessDenied> {
        (**self).step_forward()
    }

    fn reload_current(&mut self, token: LoadToken) -> Result<(), AccessDenied> {
        (**self).reload_current(token)
    }

    fn query_history_length(&self) -> Result<usize, AccessDenied> {
        (**self).query_history_length()
    }
}

impl<T: HostEnvironment + ?Sized> HostEnvironment for Box<T> {
    fn open_in_new_context(&self, url: &str) {
        (**self).open_in_new_context(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_increase() {
        let t = LoadToken(1);
        assert!(t.next() > t);
        assert_eq!(t.next().next(), LoadToken(3));
    }

    #[test]
    fn token_display() {
        assert_eq!(LoadToken(7).to_string(), "load-7");
    }
}
