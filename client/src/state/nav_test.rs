use super::*;

// =============================================================
// NavTarget
// =============================================================

#[test]
fn nav_target_paths() {
    assert_eq!(NavTarget::Login.path(), "/auth/login");
    assert_eq!(NavTarget::Register.path(), "/auth/register");
}

#[test]
fn nav_target_labels() {
    assert_eq!(NavTarget::Login.label(), "Sign In");
    assert_eq!(NavTarget::Register.label(), "Create Account");
}

// =============================================================
// NavigationUiState
// =============================================================

#[test]
fn default_state_is_idle() {
    let state = NavigationUiState::default();
    assert!(!state.is_navigating());
    assert_eq!(state.navigating_to(), None);
    for target in NavTarget::ALL {
        assert!(!state.is_pending(target));
        assert_eq!(state.label_for(target), target.label());
    }
}

#[test]
fn begin_login_leaves_register_idle() {
    let mut state = NavigationUiState::default();
    state.begin(NavTarget::Login);
    assert!(state.is_navigating());
    assert!(state.is_pending(NavTarget::Login));
    assert!(!state.is_pending(NavTarget::Register));
    assert_eq!(state.label_for(NavTarget::Login), "Loading...");
    assert_eq!(state.label_for(NavTarget::Register), "Create Account");
}

#[test]
fn begin_register_leaves_login_idle() {
    let mut state = NavigationUiState::default();
    state.begin(NavTarget::Register);
    assert_eq!(state.navigating_to(), Some(NavTarget::Register));
    assert_eq!(state.label_for(NavTarget::Login), "Sign In");
    assert_eq!(state.label_for(NavTarget::Register), "Loading...");
}

#[test]
fn later_click_moves_pending_target() {
    let mut state = NavigationUiState::default();
    state.begin(NavTarget::Login);
    state.begin(NavTarget::Register);
    assert!(!state.is_pending(NavTarget::Login));
    assert!(state.is_pending(NavTarget::Register));
}

#[test]
fn repeated_click_stays_navigating() {
    let mut state = NavigationUiState::default();
    state.begin(NavTarget::Login);
    state.begin(NavTarget::Login);
    assert!(state.is_navigating());
    assert_eq!(state.navigating_to(), Some(NavTarget::Login));
}
