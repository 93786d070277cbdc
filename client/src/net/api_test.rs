use super::*;

#[test]
fn endpoint_same_origin_keeps_path() {
    assert_eq!(endpoint("", PROFILE_PATH), "/api/auth/profile/");
}

#[test]
fn endpoint_trims_trailing_slash_from_base() {
    assert_eq!(
        endpoint("http://localhost:8000/", LOGOUT_PATH),
        "http://localhost:8000/api/auth/logout/"
    );
    assert_eq!(endpoint("https://api.example.com//", CSRF_PATH), "https://api.example.com/api/auth/csrf/");
}

#[test]
fn api_base_joins_with_paths() {
    let url = endpoint(api_base(), PROFILE_PATH);
    assert!(url.ends_with(PROFILE_PATH));
}

#[test]
fn csrf_failed_message_formats_status() {
    assert_eq!(csrf_failed_message(403), "csrf request failed: 403");
}

#[test]
fn logout_failed_message_formats_status() {
    assert_eq!(logout_failed_message(401), "logout failed: 401");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_logout_is_unavailable() {
    let result = futures::executor::block_on(logout());
    assert_eq!(result, Err("not available on server".to_owned()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_has_no_current_user() {
    assert_eq!(futures::executor::block_on(fetch_current_user()), None);
}
