//! Profile data model for the signed-in persona and the personal-info edit
//! merge.
//!
//! SYSTEM CONTEXT
//! ==============
//! Profile pages hydrate a [`ProfileRecord`] from the session's current-user
//! snapshot at mount. The personal-info modal produces a
//! [`PersonalInfoUpdate`]; [`merge_personal_info`] folds it in and the page
//! mirrors the result back through the session context.
//!
//! INVARIANTS
//! ==========
//! Optional text, list, and sub-record fields are never absent: they default
//! to empty and render as [`NOT_SET`].

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::{EmergencyContactRecord, GeoPoint, PersonalInfoRecord, UserRecord};
use crate::state::persona::Persona;

/// Placeholder shown for empty profile values.
pub const NOT_SET: &str = "Not set";

/// Choices offered by blood-group selects.
pub const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersonalInfo {
    pub blood_group: String,
    pub date_of_birth: String,
    pub languages: Vec<String>,
    pub certificates: Vec<String>,
    pub emergency_contact: EmergencyContact,
}

/// Fields only one persona carries.
#[derive(Clone, Debug, PartialEq)]
pub enum PersonaProfile {
    Rider { location: Option<GeoPoint> },
    Driver { license_number: String, profile_image: Option<String> },
}

impl PersonaProfile {
    #[must_use]
    pub fn empty(persona: Persona) -> Self {
        match persona {
            Persona::Rider => Self::Rider { location: None },
            Persona::Driver => Self::Driver { license_number: String::new(), profile_image: None },
        }
    }

    #[must_use]
    pub fn persona(&self) -> Persona {
        match self {
            Self::Rider { .. } => Persona::Rider,
            Self::Driver { .. } => Persona::Driver,
        }
    }
}

/// In-memory profile owned by a profile page for its lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub persona: PersonaProfile,
    pub personal_info: PersonalInfo,
}

impl ProfileRecord {
    /// Empty record used between mount and hydration.
    #[must_use]
    pub fn empty(persona: Persona) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            persona: PersonaProfile::empty(persona),
            personal_info: PersonalInfo::default(),
        }
    }

    /// Hydrate from the current-user snapshot.
    #[must_use]
    pub fn from_user(user: &UserRecord, persona: Persona) -> Self {
        let persona = match persona {
            Persona::Rider => PersonaProfile::Rider { location: user.location },
            Persona::Driver => PersonaProfile::Driver {
                license_number: user.driver_license_number.clone(),
                profile_image: user.profile_image.clone().filter(|s| !s.is_empty()),
            },
        };
        let info = &user.personal_info;
        Self {
            name: user.full_name.clone(),
            email: user.email.clone(),
            phone: user.phone_number.clone(),
            address: user.address.clone(),
            persona,
            personal_info: PersonalInfo {
                blood_group: info.blood_group.clone(),
                date_of_birth: info.dob.clone(),
                languages: info.languages.clone(),
                certificates: info.certificates.clone(),
                emergency_contact: EmergencyContact {
                    name: info.emergency_contact.name.clone(),
                    phone: info.emergency_contact.phone.clone(),
                    relationship: info.emergency_contact.relationship.clone(),
                },
            },
        }
    }

    /// Copy the editable fields (address and personal info) onto a stored
    /// user record, leaving everything else as it was.
    pub fn write_editable_into(&self, user: &mut UserRecord) {
        let info = &self.personal_info;
        user.address.clone_from(&self.address);
        user.personal_info = PersonalInfoRecord {
            blood_group: info.blood_group.clone(),
            dob: info.date_of_birth.clone(),
            languages: info.languages.clone(),
            certificates: info.certificates.clone(),
            emergency_contact: EmergencyContactRecord {
                name: info.emergency_contact.name.clone(),
                phone: info.emergency_contact.phone.clone(),
                relationship: info.emergency_contact.relationship.clone(),
            },
        };
    }

    #[must_use]
    pub fn profile_image(&self) -> Option<&str> {
        match &self.persona {
            PersonaProfile::Driver { profile_image, .. } => profile_image.as_deref(),
            PersonaProfile::Rider { .. } => None,
        }
    }

    #[must_use]
    pub fn license_number(&self) -> &str {
        match &self.persona {
            PersonaProfile::Driver { license_number, .. } => license_number,
            PersonaProfile::Rider { .. } => "",
        }
    }

    /// Rider location as display text.
    #[must_use]
    pub fn location_text(&self) -> String {
        match &self.persona {
            PersonaProfile::Rider { location: Some(p) } => format!("{:.4}, {:.4}", p.lat, p.long),
            _ => NOT_SET.to_owned(),
        }
    }
}

/// Emergency-contact portion of an edit; any field may be blank.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmergencyContactUpdate {
    pub name: String,
    pub phone: String,
    pub relation: String,
}

/// Values submitted by the personal-info modal. Blank strings and empty lists
/// mean "keep the current value".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersonalInfoUpdate {
    pub date_of_birth: String,
    pub blood_group: String,
    pub address: String,
    pub languages: Vec<String>,
    pub certifications: Vec<String>,
    pub emergency_contact: Option<EmergencyContactUpdate>,
}

impl PersonalInfoUpdate {
    /// Seed the modal with the record's current values.
    #[must_use]
    pub fn from_profile(profile: &ProfileRecord) -> Self {
        let info = &profile.personal_info;
        Self {
            date_of_birth: info.date_of_birth.clone(),
            blood_group: info.blood_group.clone(),
            address: profile.address.clone(),
            languages: info.languages.clone(),
            certifications: info.certificates.clone(),
            emergency_contact: Some(EmergencyContactUpdate {
                name: info.emergency_contact.name.clone(),
                phone: info.emergency_contact.phone.clone(),
                relation: info.emergency_contact.relationship.clone(),
            }),
        }
    }
}

fn pick_str(update: &str, current: &str) -> String {
    if update.is_empty() { current.to_owned() } else { update.to_owned() }
}

fn pick_list(update: &[String], current: &[String]) -> Vec<String> {
    if update.is_empty() { current.to_vec() } else { update.to_vec() }
}

/// Fold an edit into `current`. Present values win; absent ones keep the
/// current value. A supplied emergency contact is rebuilt as a whole, each of
/// its three fields falling back to the current one when blank.
#[must_use]
pub fn merge_personal_info(current: &ProfileRecord, update: &PersonalInfoUpdate) -> ProfileRecord {
    let info = &current.personal_info;
    let emergency_contact = match &update.emergency_contact {
        Some(contact) => EmergencyContact {
            name: pick_str(&contact.name, &info.emergency_contact.name),
            phone: pick_str(&contact.phone, &info.emergency_contact.phone),
            relationship: pick_str(&contact.relation, &info.emergency_contact.relationship),
        },
        None => info.emergency_contact.clone(),
    };

    ProfileRecord {
        address: pick_str(&update.address, &current.address),
        personal_info: PersonalInfo {
            blood_group: pick_str(&update.blood_group, &info.blood_group),
            date_of_birth: pick_str(&update.date_of_birth, &info.date_of_birth),
            languages: pick_list(&update.languages, &info.languages),
            certificates: pick_list(&update.certifications, &info.certificates),
            emergency_contact,
        },
        ..current.clone()
    }
}

/// `value`, or [`NOT_SET`] when blank.
#[must_use]
pub fn display_or_not_set(value: &str) -> &str {
    if value.trim().is_empty() { NOT_SET } else { value }
}
