use std::time::Duration;

use nowplaying::{config, error::ConfigError};

// Environment is process wide, so everything lives in a single test.
#[test]
fn test_config_from_environment() {
    unsafe {
        std::env::remove_var("SPOTIFY_API_AUTH_CLIENT_ID");
        std::env::set_var("SPOTIFY_API_AUTH_CLIENT_SECRET", "secret");
        std::env::set_var("SPOTIFY_API_REFRESH_TOKEN", "refresh");
    }
    assert_eq!(
        config::credentials().unwrap_err(),
        ConfigError::Missing("SPOTIFY_API_AUTH_CLIENT_ID")
    );

    unsafe { std::env::set_var("SPOTIFY_API_AUTH_CLIENT_ID", "  ") };
    assert_eq!(
        config::credentials().unwrap_err(),
        ConfigError::Empty("SPOTIFY_API_AUTH_CLIENT_ID")
    );

    unsafe { std::env::set_var("SPOTIFY_API_AUTH_CLIENT_ID", "client") };
    let credentials = config::credentials().unwrap();
    assert_eq!(credentials.client_id, "client");
    assert_eq!(credentials.client_secret, "secret");
    assert_eq!(credentials.refresh_token, "refresh");

    unsafe { std::env::set_var("SPOTIFY_API_REFRESH_TOKEN", "") };
    assert_eq!(
        config::credentials().unwrap_err(),
        ConfigError::Empty("SPOTIFY_API_REFRESH_TOKEN")
    );

    // Defaults
    unsafe {
        std::env::remove_var("SPOTIFY_API_TOKEN_URL");
        std::env::remove_var("SPOTIFY_API_URL");
        std::env::remove_var("REFRESH_INTERVAL_SECS");
        std::env::remove_var("USER_AGENT");
    }
    assert_eq!(config::spotify_apitoken_url(), config::DEFAULT_TOKEN_URL);
    assert_eq!(config::spotify_apiurl(), config::DEFAULT_API_URL);
    assert_eq!(
        config::refresh_interval().unwrap(),
        Duration::from_secs(config::DEFAULT_REFRESH_INTERVAL_SECS)
    );
    assert!(config::user_agent().starts_with("nowplaying/"));

    // Refresh interval validation
    unsafe { std::env::set_var("REFRESH_INTERVAL_SECS", "60") };
    assert_eq!(config::refresh_interval().unwrap(), Duration::from_secs(60));

    unsafe { std::env::set_var("REFRESH_INTERVAL_SECS", "0") };
    assert!(matches!(
        config::refresh_interval(),
        Err(ConfigError::Invalid { var: "REFRESH_INTERVAL_SECS", .. })
    ));

    unsafe { std::env::set_var("REFRESH_INTERVAL_SECS", "hourly") };
    assert!(config::refresh_interval().is_err());

    unsafe { std::env::set_var("STORE_PATH", "/tmp/nowplaying-test/store.json") };
    assert_eq!(
        config::store_path(),
        std::path::PathBuf::from("/tmp/nowplaying-test/store.json")
    );
}
