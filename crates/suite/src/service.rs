use facesdk_core::infrastructure::http_face_sdk::HttpFaceSdk;
use facesdk_core::shared::client_config::{ClientConfig, ConfigError};
use facesdk_core::shared::page::Metadata;

/// Routes `log` output through the test harness's captured stdout.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Client for the service selected by `ServiceLink`.
pub fn connect() -> Result<HttpFaceSdk, ConfigError> {
    init_logging();
    let config = ClientConfig::from_env();
    log::info!("Testing against {}", config.service_url);
    HttpFaceSdk::new(&config)
}

/// Metadata map holding a single `description` entry.
pub fn description(text: &str) -> Metadata {
    let mut metadata = Metadata::new();
    metadata.insert("description".to_string(), serde_json::Value::from(text));
    metadata
}

/// Sorted copy, for order-insensitive comparisons of listings.
pub fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut items = items.to_vec();
    items.sort();
    items
}
