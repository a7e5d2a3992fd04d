use super::*;

#[test]
fn persona_default_is_rider() {
    assert_eq!(Persona::default(), Persona::Rider);
}

#[test]
fn rider_routes() {
    assert_eq!(Persona::Rider.login_path(), "/user/login");
    assert_eq!(Persona::Rider.register_path(), "/user/register");
    assert_eq!(Persona::Rider.profile_path(), "/user/profile");
    assert_eq!(Persona::Rider.home_path(), "/map");
    assert_eq!(Persona::Rider.api_segment(), "users");
}

#[test]
fn driver_routes() {
    assert_eq!(Persona::Driver.login_path(), "/driver/login");
    assert_eq!(Persona::Driver.register_path(), "/driver/register");
    assert_eq!(Persona::Driver.home_path(), "/driver/profile");
    assert_eq!(Persona::Driver.api_segment(), "drivers");
}

#[test]
fn persona_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Persona::Driver).unwrap(), "\"driver\"");
}
