use crate::LoginUrl;

#[test]
fn test_parse_splits_service_and_short_uid() {
    let url = LoginUrl::parse("https://acquire.example.org/t/identity/s?id=a0b1c2").unwrap();

    assert_eq!(url.identity_service, "https://acquire.example.org/t/identity");
    assert_eq!(url.short_uid, "a0b1c2");
}

#[test]
fn test_parse_without_query_uses_last_segment() {
    let url = LoginUrl::parse("identity/a0b1c2").unwrap();

    assert_eq!(url.identity_service, "identity");
    assert_eq!(url.short_uid, "a0b1c2");
}

#[test]
fn test_parse_rejects_url_without_separator() {
    assert!(LoginUrl::parse("a0b1c2").is_none());
}

#[test]
fn test_parse_rejects_empty_short_uid() {
    assert!(LoginUrl::parse("https://acquire.example.org/t/identity/s?id=").is_none());
    assert!(LoginUrl::parse("https://acquire.example.org/t/identity/").is_none());
}
