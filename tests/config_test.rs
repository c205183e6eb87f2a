use moodshelf::config::Config;
use moodshelf::infrastructure::AppState;
use serial_test::serial;
use std::time::Duration;

const KEYS: &[&str] = &[
    "PORT",
    "CATALOG_URL",
    "CATALOG_FILE",
    "HISTORY_LIMIT",
    "SELECTION_SEED",
    "AUDIT_LOG_PATH",
    "AUDIT_WEBHOOK_URL",
    "THINKING_DELAY_MS",
    "SESSION_TTL_SECS",
];

fn clear_env() {
    for key in KEYS {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
#[serial]
fn test_config_reads_environment() {
    clear_env();
    unsafe {
        std::env::set_var("PORT", "9200");
        std::env::set_var("HISTORY_LIMIT", "1");
        std::env::set_var("CATALOG_FILE", "/tmp/books.csv");
    }

    let config = Config::from_env();
    clear_env();

    assert_eq!(config.port, 9200);
    assert_eq!(config.history_limit, 1);
    assert_eq!(
        config.catalog_file.as_deref(),
        Some(std::path::Path::new("/tmp/books.csv"))
    );
    assert_eq!(config.catalog_ttl, Duration::from_secs(60));
}

#[tokio::test]
#[serial]
async fn test_state_from_default_config_uses_builtin_catalog() {
    clear_env();
    unsafe { std::env::set_var("SELECTION_SEED", "7") };

    let config = Config::from_env();
    clear_env();

    let state = AppState::from_config(&config).unwrap();
    let categories = state.recommendations.categories().await;

    assert!(!categories.is_empty());
    let rec = state
        .recommendations
        .recommend("s1", &categories[0])
        .await
        .unwrap();
    assert_eq!(rec.book.category, categories[0]);
}
