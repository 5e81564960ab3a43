use portal_navigation::navigation::{RouteTableError, WebHistory};

#[test]
fn test_base_is_normalized() {
    assert_eq!(WebHistory::new("").unwrap().base(), "/");
    assert_eq!(WebHistory::new("/").unwrap().base(), "/");
    assert_eq!(WebHistory::new("portal").unwrap().base(), "/portal/");
    assert_eq!(WebHistory::new("/portal/").unwrap().base(), "/portal/");
    assert_eq!(WebHistory::default().base(), "/");
}

#[test]
fn test_base_with_query_or_hash_is_rejected() {
    assert_eq!(
        WebHistory::new("/portal?x=1").unwrap_err(),
        RouteTableError::InvalidBase("/portal?x=1".to_string())
    );
    assert!(WebHistory::new("/#/").is_err());
}

#[test]
fn test_location_strips_query_and_hash() {
    let history = WebHistory::default();
    assert_eq!(history.location("/login?next=/").as_deref(), Some("/login"));
    assert_eq!(history.location("/#top").as_deref(), Some("/"));
    assert_eq!(history.location("login").as_deref(), Some("/login"));
}

#[test]
fn test_location_under_base() {
    let history = WebHistory::new("/portal/").unwrap();
    assert_eq!(history.location("/portal/").as_deref(), Some("/"));
    assert_eq!(history.location("/portal").as_deref(), Some("/"));
    assert_eq!(history.location("/portal/login").as_deref(), Some("/login"));
    assert_eq!(history.location("/Portal/login").as_deref(), Some("/login"));
    assert_eq!(history.location("/login"), None);
    assert_eq!(history.location("/portalx"), None);
}

#[test]
fn test_href() {
    assert_eq!(WebHistory::default().href("/login"), "/login");
    let history = WebHistory::new("/portal").unwrap();
    assert_eq!(history.href("/login"), "/portal/login");
    assert_eq!(history.href("/"), "/portal/");
}

#[test]
fn test_location_percent_decodes_path() {
    let history = WebHistory::default();
    assert_eq!(history.location("/log%69n").as_deref(), Some("/login"));
    assert_eq!(history.location("/log%69n?next=%2F").as_deref(), Some("/login"));

    let history = WebHistory::new("/portal/").unwrap();
    assert_eq!(history.location("/portal/log%69n").as_deref(), Some("/login"));
}

#[test]
fn test_location_keeps_malformed_escapes() {
    let history = WebHistory::default();
    assert_eq!(history.location("/login%ff").as_deref(), Some("/login%ff"));
}
