//! Admin API integration tests
//!
//! Seed-backed flag and settings endpoints, and a resolver fed by a live
//! instance of the same server.

#[cfg(feature = "ssr")]
mod tests {
    use std::sync::Arc;

    use axum::http::{Method, StatusCode};
    use droobi::backend::ConfigResolver;
    use droobi::shared::PlatformConfig;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::common::{get, put, send_raw, test_app, TestSeeds};

    #[tokio::test]
    async fn test_put_then_get_flags() {
        let seeds = TestSeeds::new();
        let app = test_app(seeds.config().build().unwrap());

        let (status, body) = get(&app, "/admin/flags").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));

        let (status, body) = put(&app, "/admin/flags", json!({ "lexicon": true, "tv": false })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "lexicon": true, "tv": false }));

        let (_, body) = get(&app, "/admin/flags").await;
        assert_eq!(body, json!({ "lexicon": true, "tv": false }));
        assert!(seeds.path().join("flags.json").is_file());
    }

    #[tokio::test]
    async fn test_put_rejects_non_boolean_flags() {
        let seeds = TestSeeds::new();
        let app = test_app(seeds.config().build().unwrap());

        let (status, body) = put(&app, "/admin/flags", json!({ "lexicon": "yes" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], json!(400));
        crate::assert_contains!(body["error"].as_str().unwrap(), "lexicon");
        assert!(!seeds.path().join("flags.json").exists());
    }

    #[tokio::test]
    async fn test_put_rejects_non_object() {
        let seeds = TestSeeds::new();
        let app = test_app(seeds.config().build().unwrap());

        let (status, _) = put(&app, "/admin/flags", json!(["lexicon"])).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_put_rejects_invalid_json_syntax() {
        let seeds = TestSeeds::new();
        let app = test_app(seeds.config().build().unwrap());

        let (status, body) =
            send_raw(&app, Method::PUT, "/admin/flags", Some("application/json"), "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], json!(400));
        assert!(body["error"].is_string());
        assert!(!seeds.path().join("flags.json").exists());
    }

    #[tokio::test]
    async fn test_put_without_content_type_is_bad_request() {
        let seeds = TestSeeds::new();
        let app = test_app(seeds.config().build().unwrap());

        let (status, body) =
            send_raw(&app, Method::PUT, "/admin/flags", None, r#"{"lexicon":true}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], json!(400));
        assert!(body["error"].is_string());
        assert!(!seeds.path().join("flags.json").exists());
    }

    #[tokio::test]
    async fn test_public_app_settings_serves_seed() {
        let seeds = TestSeeds::new();
        let app = test_app(seeds.config().build().unwrap());

        let (status, body) = get(&app, "/public/app-settings").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));

        seeds.write("app-settings.json", r#"{"brandName": "Acme", "tagline": "Build together"}"#);
        let (_, body) = get(&app, "/public/app-settings").await;
        assert_eq!(body, json!({ "brandName": "Acme", "tagline": "Build together" }));
    }

    #[tokio::test]
    async fn test_resolver_against_live_admin_api() {
        let seeds = TestSeeds::new();
        seeds.write("flags.json", r#"{"tv": true}"#);
        seeds.write("app-settings.json", r#"{"brandName": "Acme"}"#);
        let admin = test_app(seeds.config().build().unwrap());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, admin).await.unwrap();
        });

        let config = PlatformConfig::builder()
            .api_url(format!("http://{}", addr))
            .remote_flags(true)
            .remote_settings(true)
            .build()
            .unwrap();
        let resolver = ConfigResolver::new(Arc::new(config), reqwest::Client::new());

        let flags = resolver.resolve_flags().await;
        assert!(flags.is_enabled("tv"));
        assert!(!flags.is_enabled("lexicon"));

        let settings = resolver.resolve_settings().await;
        assert_eq!(settings.brand_name, "Acme");
        assert_eq!(settings.tagline, droobi::shared::AppSettings::default().tagline);
    }
}
