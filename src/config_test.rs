use std::sync::Mutex;

use super::*;

// Env vars are process-global; every test that touches them holds this lock.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers must hold `ENV_LOCK`.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("TMDB_API_KEY");
        std::env::remove_var("TMDB_BASE_URL");
        std::env::remove_var("TMDB_LANGUAGE");
        std::env::remove_var("TMDB_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("TMDB_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.tmdb.api_key, None);
    assert_eq!(cfg.tmdb.base_url, DEFAULT_TMDB_BASE_URL);
    assert_eq!(cfg.tmdb.language, DEFAULT_TMDB_LANGUAGE);
    assert_eq!(
        cfg.tmdb.timeouts,
        TmdbTimeouts {
            request_secs: DEFAULT_TMDB_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_TMDB_CONNECT_TIMEOUT_SECS
        }
    );
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("TMDB_API_KEY", " secret ");
        std::env::set_var("TMDB_BASE_URL", "https://example.test/3/");
        std::env::set_var("TMDB_LANGUAGE", "de-DE");
        std::env::set_var("TMDB_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("TMDB_CONNECT_TIMEOUT_SECS", "7");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.tmdb.api_key.as_deref(), Some("secret"));
    assert_eq!(cfg.tmdb.base_url, "https://example.test/3");
    assert_eq!(cfg.tmdb.language, "de-DE");
    assert_eq!(cfg.tmdb.timeouts, TmdbTimeouts { request_secs: 42, connect_secs: 7 });

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "not-a-port");
    }

    let err = ServerConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid PORT"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_ignores_unparseable_timeouts() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("TMDB_REQUEST_TIMEOUT_SECS", "soon");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.tmdb.timeouts.request_secs, DEFAULT_TMDB_REQUEST_TIMEOUT_SECS);

    unsafe { clear_server_env() };
}

#[test]
fn blank_api_key_counts_as_missing() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("TMDB_API_KEY", "   ");
    }

    let cfg = ServerConfig::from_env().unwrap();
    let err = cfg.tmdb.require_api_key().unwrap_err();
    assert!(matches!(err, ConfigError::MissingApiKey { var: "TMDB_API_KEY" }));

    unsafe { clear_server_env() };
}

#[test]
fn timeouts_convert_to_durations() {
    let timeouts = TmdbTimeouts { request_secs: 3, connect_secs: 1 };
    assert_eq!(timeouts.request(), Duration::from_secs(3));
    assert_eq!(timeouts.connect(), Duration::from_secs(1));
}
