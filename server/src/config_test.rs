use super::*;

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.addr(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ServerConfig::from_values(Some("   "), Some("")).unwrap();
    assert_eq!(config, ServerConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
}

#[test]
fn custom_host_and_port() {
    let config = ServerConfig::from_values(Some(" 127.0.0.1 "), Some(" 8080 ")).unwrap();
    assert_eq!(config.addr(), "127.0.0.1:8080");
}

#[test]
fn non_numeric_port_rejected() {
    assert_eq!(
        ServerConfig::from_values(None, Some("http")),
        Err(ConfigError::InvalidPort("http".to_owned()))
    );
}

#[test]
fn out_of_range_port_rejected() {
    assert!(ServerConfig::from_values(None, Some("70000")).is_err());
}

#[test]
fn zero_port_rejected() {
    assert_eq!(
        ServerConfig::from_values(None, Some("0")),
        Err(ConfigError::InvalidPort("0".to_owned()))
    );
}

#[test]
fn invalid_port_message_names_value() {
    let err = ServerConfig::from_values(None, Some("abc")).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: \"abc\"");
}
