use super::*;

#[test]
fn endpoint_url_same_origin() {
    assert_eq!(endpoint_url("", CHAT_PATH), "/chat");
}

#[test]
fn endpoint_url_trims_trailing_slash() {
    assert_eq!(endpoint_url("https://companion.local/", MEMORY_PATH), "https://companion.local/memory");
    assert_eq!(endpoint_url("http://127.0.0.1:5000", WORLD_PATH), "http://127.0.0.1:5000/world");
}

#[test]
fn http_api_builds_urls_from_base() {
    let api = HttpCompanionApi::new("/api");
    assert_eq!(api.url(ADVENTURE_PATH), "/api/adventure");
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Status(500).to_string(), "server error: 500");
    assert_eq!(ApiError::Transport("offline".into()).to_string(), "request failed: offline");
    assert_eq!(ApiError::Decode("eof".into()).to_string(), "invalid response body: eof");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_off_browser() {
    let api = HttpCompanionApi::default();
    let result = futures::executor::block_on(api.memory());
    assert_eq!(result, Err(ApiError::Unavailable));
}
