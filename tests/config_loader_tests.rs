use marketplace::config::ConfigLoader;
use std::{
    env, fs,
    sync::{Mutex, MutexGuard, OnceLock},
};
use tempfile::TempDir;

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn env_guard() -> MutexGuard<'static, ()> {
    env_lock()
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}

fn clear_env() {
    unsafe {
        env::remove_var("MARKET_PROFILE");
        env::remove_var("MARKET_API_BIND_ADDR");
        env::remove_var("MARKET_LOG_LEVEL");
        env::remove_var("MARKET_DATABASE_URL");
        env::remove_var("MARKET_DB_MAX_CONNECTIONS");
    }
}

fn write_env_file(dir: &TempDir, name: &str, contents: &str) {
    let path = dir.path().join(name);
    fs::write(path, contents).unwrap();
}

#[test]
fn loads_defaults_when_no_env_present() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::with_base_dir(temp_dir.path().to_path_buf());
    let cfg = loader.load().expect("config loads with defaults");

    assert_eq!(cfg.profile, "local");
    assert_eq!(cfg.api_bind_addr, "0.0.0.0:8080");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.db_max_connections, 10);
    cfg.bind_addr().expect("default bind addr parses");
    clear_env();
}

#[test]
fn layered_env_files_apply_in_order() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "MARKET_API_BIND_ADDR=127.0.0.1:3000\n");
    write_env_file(
        &temp_dir,
        ".env.test",
        "MARKET_API_BIND_ADDR=192.168.0.10:5000\n",
    );
    write_env_file(
        &temp_dir,
        ".env.test.local",
        "MARKET_API_BIND_ADDR=10.0.0.5:6000\n",
    );

    // Select profile via .env.local before profile-specific files load.
    write_env_file(
        &temp_dir,
        ".env.local",
        "MARKET_PROFILE=test\nMARKET_API_BIND_ADDR=127.0.0.1:4000\n",
    );

    let loader = ConfigLoader::with_base_dir(temp_dir.path().to_path_buf());
    let cfg = loader.load().expect("layered config loads");

    assert_eq!(cfg.profile, "test");
    // The most specific layer (.env.test.local) wins.
    assert_eq!(cfg.api_bind_addr, "10.0.0.5:6000");
    clear_env();
}

#[test]
fn process_environment_overrides_files() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "MARKET_API_BIND_ADDR=127.0.0.1:3000\n");

    unsafe {
        env::set_var("MARKET_API_BIND_ADDR", "127.0.0.1:9999");
        env::set_var("MARKET_DB_MAX_CONNECTIONS", "3");
    }

    let loader = ConfigLoader::with_base_dir(temp_dir.path().to_path_buf());
    let cfg = loader.load().expect("config loads with overrides");

    assert_eq!(cfg.api_bind_addr, "127.0.0.1:9999");
    assert_eq!(cfg.db_max_connections, 3);
    clear_env();
}

#[test]
fn unparseable_numeric_values_fall_back_to_defaults() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(
        &temp_dir,
        ".env",
        "MARKET_DB_MAX_CONNECTIONS=not-a-number\n",
    );

    let loader = ConfigLoader::with_base_dir(temp_dir.path().to_path_buf());
    let cfg = loader.load().expect("config loads");

    assert_eq!(cfg.db_max_connections, 10);
    clear_env();
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "MARKET_API_BIND_ADDR=not-an-addr\n");

    let loader = ConfigLoader::with_base_dir(temp_dir.path().to_path_buf());
    let result = loader.load();

    assert!(result.is_err());
    clear_env();
}
