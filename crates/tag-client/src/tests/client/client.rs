use crate::Client;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:3333/", "/tags");
    assert_eq!(client.base_url, "http://localhost:3333");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:3333", "/tags");
    assert_eq!(client.base_url, "http://localhost:3333");
}

#[test]
fn test_tags_url_joins_base_and_path() {
    let client = Client::new("http://localhost:3333/", "/tags");
    assert_eq!(client.tags_url(), "http://localhost:3333/tags");
}

#[test]
fn test_from_config_uses_api_section() {
    let mut config = tag_config::Config::default();
    config.api.base_url = "http://tags.example.com".to_string();
    config.api.tags_path = "/v1/tags".to_string();

    let client = Client::from_config(&config);
    assert_eq!(client.tags_url(), "http://tags.example.com/v1/tags");
}
