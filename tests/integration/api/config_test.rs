//! Config resolver integration tests
//!
//! Effective flags and settings against a mock admin API.

#[cfg(feature = "ssr")]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::http::StatusCode;
    use droobi::backend::ConfigResolver;
    use droobi::shared::modules::flag_keys;
    use droobi::shared::{AppSettings, FeatureFlags, PlatformConfig};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::common::*;

    fn resolver(config: PlatformConfig) -> ConfigResolver {
        ConfigResolver::new(Arc::new(config), reqwest::Client::new())
    }

    fn env_settings() -> AppSettings {
        let mut settings = AppSettings::default();
        settings.brand_name = "Droobi Qatar".to_string();
        settings.support_email = "help@droobi.test".to_string();
        settings.social.twitter = "https://x.com/droobi".to_string();
        settings
    }

    #[tokio::test]
    async fn test_env_flags_only_when_remote_disabled() {
        let api = start_admin_api().await;
        expect_no_requests(&api, FLAGS_PATH).await;

        let config = PlatformConfig::builder()
            .api_url(api.uri())
            .default_flags(FeatureFlags::from_env_spec("lexicon:1,directory:0"))
            .build()
            .unwrap();

        let flags = resolver(config).resolve_flags().await;

        for key in flag_keys() {
            assert_eq!(flags.is_enabled(key), key == "lexicon", "flag {}", key);
        }
        assert_eq!(flags.len(), flag_keys().count());
    }

    #[tokio::test]
    async fn test_remote_flags_win_per_key() {
        let api = start_admin_api().await;
        mock_json(&api, FLAGS_PATH, 200, json!({ "directory": true, "tv": true, "lexicon": false })).await;

        let config = PlatformConfig::builder()
            .api_url(api.uri())
            .remote_flags(true)
            .default_flags(FeatureFlags::from_env_spec("lexicon:1,projects:1"))
            .build()
            .unwrap();

        let flags = resolver(config).resolve_flags().await;

        assert!(!flags.is_enabled("lexicon"));
        assert!(flags.is_enabled("directory"));
        assert!(flags.is_enabled("tv"));
        assert!(flags.is_enabled("projects"));
        assert!(!flags.is_enabled("lounge"));
        for key in flag_keys() {
            assert!(flags.iter().any(|(k, _)| k == key), "missing flag {}", key);
        }
    }

    #[tokio::test]
    async fn test_remote_flags_fall_back_on_server_error() {
        let api = start_admin_api().await;
        mock_json(&api, FLAGS_PATH, 500, json!({ "tv": true })).await;

        let defaults = FeatureFlags::from_env_spec("lexicon:1");
        let config = PlatformConfig::builder()
            .api_url(api.uri())
            .remote_flags(true)
            .default_flags(defaults.clone())
            .build()
            .unwrap();

        assert_eq!(resolver(config).resolve_flags().await, defaults);
    }

    #[tokio::test]
    async fn test_remote_flags_fall_back_on_malformed_body() {
        let api = start_admin_api().await;
        mock_text(&api, FLAGS_PATH, 200, "lexicon=1").await;

        let config = PlatformConfig::builder()
            .api_url(api.uri())
            .remote_flags(true)
            .build()
            .unwrap();

        assert_eq!(resolver(config).resolve_flags().await, FeatureFlags::baseline());
    }

    #[tokio::test]
    async fn test_remote_flags_fall_back_on_network_error() {
        // Nothing listens on port 1
        let config = PlatformConfig::builder()
            .api_url("http://127.0.0.1:1")
            .remote_flags(true)
            .default_flags(FeatureFlags::from_env_spec("tv:1"))
            .build()
            .unwrap();

        assert_eq!(
            resolver(config).resolve_flags().await,
            FeatureFlags::from_env_spec("tv:1")
        );
    }

    #[tokio::test]
    async fn test_slow_remote_is_bounded_by_timeout() {
        let api = start_admin_api().await;
        mock_slow(&api, FLAGS_PATH, json!({ "tv": true }), Duration::from_secs(2)).await;

        let config = PlatformConfig::builder()
            .api_url(api.uri())
            .remote_flags(true)
            .fetch_timeout(Duration::from_millis(100))
            .build()
            .unwrap();

        let started = std::time::Instant::now();
        let flags = resolver(config).resolve_flags().await;

        assert_eq!(flags, FeatureFlags::baseline());
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_remote_settings_override_single_field() {
        let api = start_admin_api().await;
        mock_json(&api, SETTINGS_PATH, 200, json!({ "brandName": "Acme" })).await;

        let config = PlatformConfig::builder()
            .api_url(api.uri())
            .remote_settings(true)
            .default_settings(env_settings())
            .build()
            .unwrap();

        let settings = resolver(config).resolve_settings().await;

        let mut expected = env_settings();
        expected.brand_name = "Acme".to_string();
        assert_eq!(settings, expected);
    }

    #[tokio::test]
    async fn test_remote_settings_fall_back() {
        let api = start_admin_api().await;
        mock_json(&api, SETTINGS_PATH, 503, json!({})).await;

        let config = PlatformConfig::builder()
            .api_url(api.uri())
            .remote_settings(true)
            .default_settings(env_settings())
            .build()
            .unwrap();

        assert_eq!(resolver(config).resolve_settings().await, env_settings());
    }

    #[tokio::test]
    async fn test_remote_settings_skip_wrong_typed_keys() {
        let api = start_admin_api().await;
        mock_json(&api, SETTINGS_PATH, 200, json!({ "brandName": "Acme", "footerLinks": 7 })).await;

        let config = PlatformConfig::builder()
            .api_url(api.uri())
            .remote_settings(true)
            .default_settings(env_settings())
            .build()
            .unwrap();

        let settings = resolver(config).resolve_settings().await;

        let mut expected = env_settings();
        expected.brand_name = "Acme".to_string();
        assert_eq!(settings, expected);
    }

    #[tokio::test]
    async fn test_env_settings_only_when_remote_disabled() {
        let api = start_admin_api().await;
        expect_no_requests(&api, SETTINGS_PATH).await;

        let config = PlatformConfig::builder()
            .api_url(api.uri())
            .default_settings(env_settings())
            .build()
            .unwrap();

        assert_eq!(resolver(config).resolve_settings().await, env_settings());
    }

    #[tokio::test]
    async fn test_effective_endpoints() {
        let seeds = TestSeeds::new();
        let config = seeds
            .config()
            .default_flags(FeatureFlags::from_env_spec("tv:1,lexicon:1"))
            .default_settings(env_settings())
            .build()
            .unwrap();
        let app = test_app(config);

        let (status, flags) = get(&app, "/flags").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(flags["tv"], json!(true));
        assert_eq!(flags["lounge"], json!(false));

        let (status, settings) = get(&app, "/app-settings").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(settings["brandName"], json!("Droobi Qatar"));
        assert_eq!(settings["social"]["twitter"], json!("https://x.com/droobi"));

        let (status, modules) = get(&app, "/modules").await;
        assert_eq!(status, StatusCode::OK);
        let keys: Vec<_> = modules
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["key"].as_str().unwrap())
            .collect();
        assert_eq!(keys, vec!["lexicon", "tv"]);
    }
}
