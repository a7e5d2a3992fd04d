use super::*;

#[test]
fn error_banner_has_no_detail() {
    let m = BannerMessage::error("Login failed. Please try again.");
    assert_eq!(m.kind, BannerKind::Error);
    assert_eq!(m.detail, None);
    assert_eq!(m.class(), "banner banner--error");
}

#[test]
fn success_banner_keeps_detail() {
    let m = BannerMessage::success("Registration successful!", Some("Redirecting to login..."));
    assert_eq!(m.class(), "banner banner--success");
    assert_eq!(m.detail.as_deref(), Some("Redirecting to login..."));
}
