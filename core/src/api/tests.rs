use super::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_config(host: &str) -> ApiConfig {
    ApiConfig {
        host: host.to_string(),
        key: "22444f78447824223cefc48062".to_string(),
        version: ApiVersion::V2,
    }
}

fn posts_api(host: &str) -> ContentApi {
    ContentApi::new(api_config(host), "posts", BrowseParams::default())
}

mod endpoint {
    use super::*;

    fn query_pairs(api: &ContentApi) -> Vec<(String, String)> {
        let url = api.endpoint().unwrap();
        url.query_pairs()
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect()
    }

    #[test]
    fn test_endpoint_path_includes_version_and_resource() {
        let api = posts_api("https://demo.ghost.io");

        let url = api.endpoint().unwrap();

        assert_eq!(url.path(), "/ghost/api/v2/content/posts/");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let api = posts_api("https://demo.ghost.io/");

        let url = api.endpoint().unwrap();

        assert_eq!(url.path(), "/ghost/api/v2/content/posts/");
    }

    #[test]
    fn test_endpoint_forwards_only_non_empty_parameters() {
        let api = posts_api("https://demo.ghost.io");

        let pairs = query_pairs(&api);
        let names: Vec<&str> = pairs.iter().map(|(name, _)| name.as_str()).collect();

        assert_eq!(names, ["key", "limit", "fields"]);
    }

    #[test]
    fn test_endpoint_joins_fields_with_commas() {
        let api = posts_api("https://demo.ghost.io");

        let pairs = query_pairs(&api);

        assert!(pairs.contains(&("fields".to_string(), "title,slug".to_string())));
    }

    #[test]
    fn test_endpoint_includes_configured_filter() {
        let params = BrowseParams {
            filter: "tag:getting-started".to_string(),
            ..BrowseParams::default()
        };
        let api = ContentApi::new(api_config("https://demo.ghost.io"), "posts", params);

        let pairs = query_pairs(&api);

        assert!(pairs.contains(&("filter".to_string(), "tag:getting-started".to_string())));
    }

    #[test]
    fn test_endpoint_rejects_invalid_host() {
        let api = posts_api("not a url");

        assert!(matches!(api.endpoint(), Err(FetchError::Endpoint(_))));
    }
}

mod browse {
    use super::*;

    #[tokio::test]
    async fn test_browse_unwraps_resource_collection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ghost/api/v2/content/posts/"))
            .and(query_param("key", "22444f78447824223cefc48062"))
            .and(query_param("limit", "all"))
            .and(query_param("fields", "title,slug"))
            .and(query_param_is_missing("filter"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "posts": [
                    { "title": "Alpha", "slug": "alpha" },
                    { "title": "Beta", "slug": "beta" }
                ]
            })))
            .mount(&server)
            .await;

        let records = posts_api(&server.uri()).browse().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text("title"), Some("Alpha"));
        assert_eq!(records[1].text("slug"), Some("beta"));
    }

    #[tokio::test]
    async fn test_browse_missing_collection_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "pages": [] })))
            .mount(&server)
            .await;

        let err = posts_api(&server.uri()).browse().await.unwrap_err();

        assert!(matches!(err, FetchError::MissingCollection(resource) if resource == "posts"));
    }

    #[tokio::test]
    async fn test_browse_auth_failure_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let result = posts_api(&server.uri()).browse().await;

        assert!(matches!(result, Err(FetchError::Http(_))));
    }

    #[tokio::test]
    async fn test_browse_non_object_record_is_a_payload_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "posts": [42] })))
            .mount(&server)
            .await;

        let result = posts_api(&server.uri()).browse().await;

        assert!(matches!(result, Err(FetchError::Payload(_))));
    }
}
