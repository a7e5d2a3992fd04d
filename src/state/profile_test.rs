use super::*;
use serde_json::json;

fn driver_with_contact() -> ProfileRecord {
    ProfileRecord {
        name: "Ravi Menon".to_owned(),
        email: "ravi@example.com".to_owned(),
        phone: "9876543210".to_owned(),
        address: "Kakkanad".to_owned(),
        persona: PersonaProfile::Driver { license_number: "KL07 2020".to_owned(), profile_image: None },
        personal_info: PersonalInfo {
            blood_group: "A+".to_owned(),
            date_of_birth: "1990-04-12".to_owned(),
            languages: vec!["Malayalam".to_owned(), "English".to_owned()],
            certificates: vec!["LMV".to_owned()],
            emergency_contact: EmergencyContact {
                name: "Anu".to_owned(),
                phone: "9123456780".to_owned(),
                relationship: "Sister".to_owned(),
            },
        },
    }
}

// =============================================================
// merge_personal_info
// =============================================================

#[test]
fn merge_blood_group_only_leaves_emergency_contact_unchanged() {
    let current = driver_with_contact();
    let update = PersonalInfoUpdate { blood_group: "O+".to_owned(), ..PersonalInfoUpdate::default() };
    let merged = merge_personal_info(&current, &update);
    assert_eq!(merged.personal_info.blood_group, "O+");
    assert_eq!(merged.personal_info.emergency_contact, current.personal_info.emergency_contact);
    assert_eq!(merged.personal_info.languages, current.personal_info.languages);
    assert_eq!(merged.address, current.address);
    assert_eq!(merged.name, current.name);
}

#[test]
fn merge_empty_update_is_identity() {
    let current = driver_with_contact();
    assert_eq!(merge_personal_info(&current, &PersonalInfoUpdate::default()), current);
}

#[test]
fn merge_partial_emergency_contact_falls_back_per_field() {
    let current = driver_with_contact();
    let update = PersonalInfoUpdate {
        emergency_contact: Some(EmergencyContactUpdate { phone: "9000000001".to_owned(), ..EmergencyContactUpdate::default() }),
        ..PersonalInfoUpdate::default()
    };
    let merged = merge_personal_info(&current, &update);
    let contact = &merged.personal_info.emergency_contact;
    assert_eq!(contact.name, "Anu");
    assert_eq!(contact.phone, "9000000001");
    assert_eq!(contact.relationship, "Sister");
}

#[test]
fn merge_replaces_lists_only_when_non_empty() {
    let current = driver_with_contact();
    let update = PersonalInfoUpdate {
        languages: vec!["Hindi".to_owned()],
        certifications: Vec::new(),
        address: "Edappally".to_owned(),
        ..PersonalInfoUpdate::default()
    };
    let merged = merge_personal_info(&current, &update);
    assert_eq!(merged.personal_info.languages, vec!["Hindi".to_owned()]);
    assert_eq!(merged.personal_info.certificates, vec!["LMV".to_owned()]);
    assert_eq!(merged.address, "Edappally");
}

#[test]
fn merge_into_empty_record_fills_contact() {
    let current = ProfileRecord::empty(Persona::Driver);
    let update = PersonalInfoUpdate {
        emergency_contact: Some(EmergencyContactUpdate {
            name: "Anu".to_owned(),
            phone: String::new(),
            relation: "Sister".to_owned(),
        }),
        ..PersonalInfoUpdate::default()
    };
    let merged = merge_personal_info(&current, &update);
    assert_eq!(
        merged.personal_info.emergency_contact,
        EmergencyContact { name: "Anu".to_owned(), phone: String::new(), relationship: "Sister".to_owned() }
    );
}

#[test]
fn update_seeded_from_profile_round_trips_through_merge() {
    let current = driver_with_contact();
    let update = PersonalInfoUpdate::from_profile(&current);
    assert_eq!(merge_personal_info(&current, &update), current);
}

// =============================================================
// hydration / write-back
// =============================================================

#[test]
fn from_user_defaults_missing_fields() {
    let user: UserRecord = serde_json::from_value(json!({ "fullName": "Asha" })).unwrap();
    let profile = ProfileRecord::from_user(&user, Persona::Driver);
    assert_eq!(profile.name, "Asha");
    assert_eq!(profile.license_number(), "");
    assert_eq!(profile.profile_image(), None);
    assert_eq!(profile.personal_info, PersonalInfo::default());
}

#[test]
fn from_user_rider_keeps_location() {
    let user: UserRecord = serde_json::from_value(json!({ "location": { "lat": 9.9312, "long": 76.2673 } })).unwrap();
    let profile = ProfileRecord::from_user(&user, Persona::Rider);
    assert_eq!(profile.persona.persona(), Persona::Rider);
    assert_eq!(profile.location_text(), "9.9312, 76.2673");
}

#[test]
fn from_user_drops_blank_profile_image() {
    let user: UserRecord = serde_json::from_value(json!({ "profileImage": "" })).unwrap();
    let profile = ProfileRecord::from_user(&user, Persona::Driver);
    assert_eq!(profile.profile_image(), None);
}

#[test]
fn write_editable_into_only_touches_address_and_personal_info() {
    let mut user: UserRecord =
        serde_json::from_value(json!({ "fullName": "Ravi", "email": "ravi@example.com", "_id": "x1" })).unwrap();
    let profile = driver_with_contact();
    profile.write_editable_into(&mut user);
    assert_eq!(user.full_name, "Ravi");
    assert_eq!(user.address, "Kakkanad");
    assert_eq!(user.personal_info.dob, "1990-04-12");
    assert_eq!(user.personal_info.emergency_contact.relationship, "Sister");
    assert_eq!(user.extra.get("_id"), Some(&json!("x1")));
}

#[test]
fn display_or_not_set_uses_placeholder_for_blank() {
    assert_eq!(display_or_not_set(""), NOT_SET);
    assert_eq!(display_or_not_set("  "), NOT_SET);
    assert_eq!(display_or_not_set("O+"), "O+");
    assert_eq!(ProfileRecord::empty(Persona::Rider).location_text(), NOT_SET);
}
