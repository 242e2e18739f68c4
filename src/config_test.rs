use std::sync::Mutex;

use super::*;

/// Serializes tests that mutate the process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers must hold `ENV_LOCK`.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("LEPTOS_SITE_ROOT");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.site_root, None);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_env_reads_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
        std::env::set_var("LEPTOS_SITE_ROOT", "dist/site");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.site_root.as_deref(), Some("dist/site"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "eighty");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert!(matches!(err, ServerError::InvalidPort(ref raw) if raw == "eighty"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_bind_addr() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("BIND_ADDR", "localhost:80");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert!(matches!(err, ServerError::InvalidBindAddr(_)));

    unsafe { clear_server_env() };
}

#[test]
fn parse_port_edges() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some(" 4000 ")).unwrap(), 4000);
    assert!(parse_port(Some("70000")).is_err());
    assert!(parse_port(Some("-1")).is_err());
}

#[test]
fn parse_bind_addr_accepts_ipv6() {
    assert_eq!(parse_bind_addr(Some("::1")).unwrap().to_string(), "::1");
}

#[test]
fn blank_site_root_is_ignored() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("LEPTOS_SITE_ROOT", "   ");
    }

    assert_eq!(ServerConfig::from_env().unwrap().site_root, None);

    unsafe { clear_server_env() };
}

#[test]
fn missing_env_file_is_not_reported() {
    let missing = std::io::Error::new(std::io::ErrorKind::NotFound, ".env");
    assert!(env_file_problem(Err(dotenvy::Error::Io(missing))).is_none());
    assert!(env_file_problem(Ok(PathBuf::from(".env"))).is_none());
}

#[test]
fn malformed_env_file_is_reported() {
    let problem = env_file_problem(Err(dotenvy::Error::LineParse("PORT 3000".to_owned(), 5)));
    assert!(matches!(problem, Some(dotenvy::Error::LineParse(_, 5))));

    let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, ".env");
    assert!(env_file_problem(Err(dotenvy::Error::Io(denied))).is_some());
}
