use super::*;
use serde_json::json;

#[test]
fn export_keeps_unmodelled_fields() {
    let user: UserRecord = serde_json::from_value(json!({ "fullName": "Asha", "_id": "u1" })).unwrap();
    let exported: serde_json::Value = serde_json::from_str(&export_json(&user).unwrap()).unwrap();
    assert_eq!(exported["fullName"], "Asha");
    assert_eq!(exported["_id"], "u1");
}

#[cfg(not(feature = "csr"))]
#[test]
fn data_url_has_json_mime_type() {
    assert_eq!(json_data_url("{}"), "data:application/json;charset=utf-8,{}");
}
