//! Per-page navigation feedback for the sign-in/sign-up links.
//!
//! DESIGN
//! ======
//! "Is navigating" and "navigating to" collapse into one `Option`, so a
//! target can never be set while idle. There is no way back to idle: the
//! navigation unmounts the page and the state goes with it.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Fixed destinations offered to signed-out visitors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Login,
    Register,
}

impl NavTarget {
    pub const ALL: [Self; 2] = [Self::Login, Self::Register];

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/auth/login",
            Self::Register => "/auth/register",
        }
    }

    /// Label shown while idle.
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Create Account",
        }
    }
}

/// Label shown on a link whose navigation is pending.
pub const PENDING_LABEL: &str = "Loading...";

/// Local UI state owned by the landing page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationUiState {
    navigating_to: Option<NavTarget>,
}

impl NavigationUiState {
    pub fn is_navigating(&self) -> bool {
        self.navigating_to.is_some()
    }

    pub fn navigating_to(&self) -> Option<NavTarget> {
        self.navigating_to
    }

    /// Mark `target` as the pending navigation. The latest click wins.
    pub fn begin(&mut self, target: NavTarget) {
        self.navigating_to = Some(target);
    }

    pub fn is_pending(&self, target: NavTarget) -> bool {
        self.navigating_to == Some(target)
    }

    pub fn label_for(&self, target: NavTarget) -> &'static str {
        if self.is_pending(target) { PENDING_LABEL } else { target.label() }
    }
}
