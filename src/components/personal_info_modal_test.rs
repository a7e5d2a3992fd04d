use super::*;
use crate::state::persona::Persona;
use crate::state::profile::merge_personal_info;
use time::macros::date;

const TODAY: Date = date!(2026 - 10 - 17);

fn driver_profile() -> ProfileRecord {
    let mut p = ProfileRecord::empty(Persona::Driver);
    p.address = "Kakkanad".to_owned();
    p.personal_info.blood_group = "A+".to_owned();
    p.personal_info.languages = vec!["Malayalam".to_owned(), "English".to_owned()];
    p.personal_info.emergency_contact.name = "Anu".to_owned();
    p.personal_info.emergency_contact.phone = "9123456780".to_owned();
    p.personal_info.emergency_contact.relationship = "Sister".to_owned();
    p
}

#[test]
fn form_seeds_from_profile() {
    let form = PersonalInfoForm::from_profile(&driver_profile());
    assert_eq!(form.languages, "Malayalam, English");
    assert_eq!(form.contact_relation, "Sister");
    assert_eq!(form.blood_group, "A+");
}

#[test]
fn unchanged_form_merges_to_same_profile() {
    let profile = driver_profile();
    let update = PersonalInfoForm::from_profile(&profile).to_update(TODAY).unwrap();
    assert_eq!(merge_personal_info(&profile, &update), profile);
}

#[test]
fn blood_group_only_edit_keeps_contact() {
    let profile = driver_profile();
    let form = PersonalInfoForm { blood_group: "O+".to_owned(), ..PersonalInfoForm::default() };
    let update = form.to_update(TODAY).unwrap();
    assert_eq!(update.emergency_contact, None);

    let merged = merge_personal_info(&profile, &update);
    assert_eq!(merged.personal_info.blood_group, "O+");
    assert_eq!(merged.personal_info.emergency_contact, profile.personal_info.emergency_contact);
    assert_eq!(merged.personal_info.languages, profile.personal_info.languages);
}

#[test]
fn lists_split_on_commas() {
    let form = PersonalInfoForm { languages: "Hindi, , Tamil ".to_owned(), ..PersonalInfoForm::default() };
    assert_eq!(form.to_update(TODAY).unwrap().languages, vec!["Hindi".to_owned(), "Tamil".to_owned()]);
}

#[test]
fn malformed_inputs_are_rejected() {
    let bad_date = PersonalInfoForm { date_of_birth: "2030-01-01".to_owned(), ..PersonalInfoForm::default() };
    assert_eq!(bad_date.to_update(TODAY), Err("Please enter a valid date of birth"));
    let bad_phone = PersonalInfoForm { contact_phone: "12345".to_owned(), ..PersonalInfoForm::default() };
    assert_eq!(bad_phone.to_update(TODAY), Err("Please enter a valid 10-digit phone number"));
}
