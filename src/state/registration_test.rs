use super::*;
use time::macros::date;

const TODAY: Date = date!(2026 - 10 - 17);

fn valid_account() -> AccountFields {
    AccountFields {
        name: "Ravi Menon".to_owned(),
        email: "ravi@example.com".to_owned(),
        phone: "98765-43210".to_owned(),
        password: "Secret123".to_owned(),
        confirm_password: "Secret123".to_owned(),
        agreement: true,
    }
}

fn certificate() -> FileMeta {
    FileMeta { name: "licence.pdf".to_owned(), mime_type: "application/pdf".to_owned() }
}

fn valid_driver() -> DriverDraft {
    DriverDraft {
        account: valid_account(),
        license_number: "KL07 20200001234".to_owned(),
        address: "Kakkanad, Kochi".to_owned(),
        experience: "6".to_owned(),
        blood_group: "O+".to_owned(),
        date_of_birth: "1990-04-12".to_owned(),
        emergency_contact: "9123456780".to_owned(),
        languages: "Malayalam, English".to_owned(),
        profile_image: None,
        certificate_of_driving: Some(certificate()),
    }
}

fn valid_rider() -> RiderDraft {
    RiderDraft {
        account: valid_account(),
        address: "MG Road, Kochi".to_owned(),
        latitude: "9.9312".to_owned(),
        longitude: "76.2673".to_owned(),
        privacy_agreement: true,
    }
}

fn error_fields(errors: &FieldErrors) -> Vec<Field> {
    errors.fields().collect()
}

// =============================================================
// Valid drafts
// =============================================================

#[test]
fn valid_driver_passes() {
    let errors = RegistrationDraft::Driver(valid_driver()).validate(TODAY);
    assert!(errors.is_valid(), "unexpected errors: {errors:?}");
}

#[test]
fn valid_rider_passes() {
    let errors = RegistrationDraft::Rider(valid_rider()).validate(TODAY);
    assert!(errors.is_valid(), "unexpected errors: {errors:?}");
}

// =============================================================
// Common fields
// =============================================================

#[test]
fn missing_name_is_invalid_for_both_personas() {
    let mut driver = valid_driver();
    driver.account.name.clear();
    let errors = RegistrationDraft::Driver(driver).validate(TODAY);
    assert_eq!(errors.message(Field::Name), Some("Name is required"));
    assert!(!errors.is_valid());

    let mut rider = valid_rider();
    rider.account.name = "   ".to_owned();
    let errors = RegistrationDraft::Rider(rider).validate(TODAY);
    assert_eq!(error_fields(&errors), vec![Field::Name]);
}

#[test]
fn all_errors_reported_at_once() {
    let errors = RegistrationDraft::empty(Persona::Rider).validate(TODAY);
    assert_eq!(
        error_fields(&errors),
        vec![
            Field::Name,
            Field::Email,
            Field::Phone,
            Field::Password,
            Field::ConfirmPassword,
            Field::Address,
            Field::Latitude,
            Field::Longitude,
            Field::PrivacyAgreement,
            Field::Agreement,
        ]
    );
}

#[test]
fn empty_driver_reports_driver_fields_only() {
    let errors = RegistrationDraft::empty(Persona::Driver).validate(TODAY);
    assert!(errors.contains(Field::CertificateOfDriving));
    assert!(errors.contains(Field::DrivingLicenseNo));
    assert!(!errors.contains(Field::Latitude));
    assert!(!errors.contains(Field::PrivacyAgreement));
    assert!(!errors.contains(Field::ProfileImage));
    assert_eq!(errors.fields().count(), 14);
}

#[test]
fn mismatched_confirmation_is_reported() {
    let mut rider = valid_rider();
    rider.account.confirm_password = "Secret124".to_owned();
    let errors = RegistrationDraft::Rider(rider).validate(TODAY);
    assert_eq!(errors.message(Field::ConfirmPassword), Some("Passwords do not match"));
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn driver_without_certificate_is_blocked_on_certificate_only() {
    let mut driver = valid_driver();
    driver.certificate_of_driving = None;
    let draft = RegistrationDraft::Driver(driver);
    let errors = draft.prepare_submission(TODAY).unwrap_err();
    assert_eq!(error_fields(&errors), vec![Field::CertificateOfDriving]);
    assert_eq!(errors.message(Field::CertificateOfDriving), Some("Driving certificate is required"));
}

#[test]
fn rider_without_agreement_is_blocked_on_agreement_only() {
    let mut rider = valid_rider();
    rider.account.agreement = false;
    let errors = RegistrationDraft::Rider(rider).prepare_submission(TODAY).unwrap_err();
    assert_eq!(error_fields(&errors), vec![Field::Agreement]);
    assert_eq!(errors.get(Field::Agreement), Some(&FieldError::Flag));
}

#[test]
fn rider_without_privacy_agreement_is_flagged() {
    let mut rider = valid_rider();
    rider.privacy_agreement = false;
    let errors = RegistrationDraft::Rider(rider).validate(TODAY);
    assert_eq!(errors.get(Field::PrivacyAgreement), Some(&FieldError::Flag));
    assert_eq!(errors.message(Field::PrivacyAgreement), None);
}

#[test]
fn driver_born_today_is_rejected() {
    let mut driver = valid_driver();
    driver.date_of_birth = "2026-10-17".to_owned();
    let errors = RegistrationDraft::Driver(driver).validate(TODAY);
    assert_eq!(errors.message(Field::DateOfBirth), Some("Please enter a valid date of birth"));
}

#[test]
fn rider_latitude_boundaries() {
    for (lat, ok) in [("-90", true), ("90", true), ("-90.0001", false), ("90.0001", false)] {
        let mut rider = valid_rider();
        rider.latitude = lat.to_owned();
        let errors = RegistrationDraft::Rider(rider).validate(TODAY);
        assert_eq!(errors.is_valid(), ok, "latitude {lat}");
    }
}

#[test]
fn clear_removes_single_error() {
    let mut errors = RegistrationDraft::empty(Persona::Rider).validate(TODAY);
    errors.clear(Field::Email);
    assert!(!errors.contains(Field::Email));
    assert!(errors.contains(Field::Name));
}

// =============================================================
// Payloads
// =============================================================

#[test]
fn driver_payload_uses_wire_field_names() {
    let mut driver = valid_driver();
    driver.profile_image = Some(FileMeta { name: "me.png".to_owned(), mime_type: "image/png".to_owned() });
    let RegistrationPayload::Driver(body) = RegistrationDraft::Driver(driver).prepare_submission(TODAY).unwrap() else {
        panic!("expected driver payload");
    };
    assert_eq!(body.field("username"), Some("Ravi Menon"));
    assert_eq!(body.field("drivinglicenseNo"), Some("KL07 20200001234"));
    assert_eq!(body.field("agreement"), Some("true"));
    assert_eq!(body.field("address"), Some("Kakkanad, Kochi"));
    assert_eq!(body.field("experience"), Some("6"));
    assert_eq!(body.field("emergencyContact"), Some("9123456780"));
    let file_fields: Vec<&str> = body.files.iter().map(|f| f.field).collect();
    assert_eq!(file_fields, vec!["profileImage", "certificateOfDriving"]);
}

#[test]
fn rider_payload_parses_location() {
    let RegistrationPayload::Rider(body) = RegistrationDraft::Rider(valid_rider()).prepare_submission(TODAY).unwrap() else {
        panic!("expected rider payload");
    };
    assert_eq!(body.location, GeoPoint { lat: 9.9312, long: 76.2673 });
    assert!(body.privacy_agreement);
    assert_eq!(body.username, "Ravi Menon");
}

#[test]
fn file_meta_detects_images() {
    assert!(FileMeta { name: "a.jpg".to_owned(), mime_type: "image/jpeg".to_owned() }.is_image());
    assert!(!certificate().is_image());
}

// =============================================================
// Input binding
// =============================================================

#[test]
fn set_text_routes_by_field_key() {
    let mut draft = RegistrationDraft::empty(Persona::Driver);
    draft.set_text(Field::Name, "Ravi".to_owned());
    draft.set_text(Field::DrivingLicenseNo, "KL07".to_owned());
    draft.set_text(Field::Latitude, "9.9".to_owned());
    assert_eq!(draft.text(Field::Name), "Ravi");
    assert_eq!(draft.text(Field::DrivingLicenseNo), "KL07");
    assert_eq!(draft.text(Field::Latitude), "");
    assert_eq!(draft.account().name, "Ravi");
}

#[test]
fn rider_ignores_driver_inputs() {
    let mut draft = RegistrationDraft::empty(Persona::Rider);
    draft.set_text(Field::BloodGroup, "O+".to_owned());
    draft.set_file(Field::ProfileImage, Some(certificate()));
    draft.set_text(Field::Longitude, "76.2".to_owned());
    assert_eq!(draft, RegistrationDraft::Rider(RiderDraft { longitude: "76.2".to_owned(), ..RiderDraft::default() }));
}

#[test]
fn flags_and_files_round_trip() {
    let mut rider = RegistrationDraft::empty(Persona::Rider);
    rider.set_flag(Field::PrivacyAgreement, true);
    rider.set_flag(Field::Agreement, true);
    assert!(rider.flag(Field::PrivacyAgreement));
    assert!(rider.flag(Field::Agreement));

    let mut driver = RegistrationDraft::empty(Persona::Driver);
    driver.set_flag(Field::PrivacyAgreement, true);
    assert!(!driver.flag(Field::PrivacyAgreement));
    driver.set_file(Field::CertificateOfDriving, Some(certificate()));
    assert_eq!(driver.file(Field::CertificateOfDriving), Some(&certificate()));
    driver.set_file(Field::CertificateOfDriving, None);
    assert!(driver.file(Field::CertificateOfDriving).is_none());
}
