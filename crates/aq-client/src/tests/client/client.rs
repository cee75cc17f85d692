use crate::ServiceClient;

use std::time::Duration;

#[test]
fn test_service_url_trailing_slash_trimmed() {
    let client = ServiceClient::new("http://localhost:8080/t/identity/");
    assert_eq!(client.service_url, "http://localhost:8080/t/identity");
}

#[test]
fn test_service_url_no_trailing_slash() {
    let client = ServiceClient::new("http://localhost:8080/t/identity");
    assert_eq!(client.service_url, "http://localhost:8080/t/identity");
}

#[test]
fn test_with_timeout_trims_service_url() {
    let client =
        ServiceClient::with_timeout("http://localhost:8080/t/identity//", Duration::from_secs(5))
            .unwrap();
    assert_eq!(client.service_url, "http://localhost:8080/t/identity");
}
