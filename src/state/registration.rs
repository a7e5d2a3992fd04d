//! Registration drafts for both personas and their validation.
//!
//! DESIGN
//! ======
//! Persona-specific requirements live in the variant itself
//! ([`RegistrationDraft::Driver`] / [`RegistrationDraft::Rider`]) instead of
//! one record full of optional fields. Validation is pure: the caller passes
//! `today` so date-of-birth checks are deterministic.
//!
//! ERROR HANDLING
//! ==============
//! Validation never fails with `Err`; it yields a [`FieldErrors`] map. Only
//! [`RegistrationDraft::prepare_submission`] returns `Result`, and its `Ok`
//! payload is the only thing the network layer accepts.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use std::collections::BTreeMap;

use time::Date;

use crate::net::types::{DriverRegistration, FilePart, GeoPoint, UserRegistration};
use crate::state::persona::Persona;
use crate::util::validate;

/// Draft input fields, named by their form/wire keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    DrivingLicenseNo,
    DriverAddress,
    DriverExperience,
    BloodGroup,
    CertificateOfDriving,
    ProfileImage,
    DateOfBirth,
    EmergencyContact,
    Languages,
    Address,
    Latitude,
    Longitude,
    PrivacyAgreement,
    Agreement,
}

impl Field {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::DrivingLicenseNo => "drivinglicenseNo",
            Self::DriverAddress => "driverAddress",
            Self::DriverExperience => "driverExperience",
            Self::BloodGroup => "bloodGroup",
            Self::CertificateOfDriving => "certificateOfDriving",
            Self::ProfileImage => "profileImage",
            Self::DateOfBirth => "dateOfBirth",
            Self::EmergencyContact => "emergencyContact",
            Self::Languages => "languages",
            Self::Address => "address",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::PrivacyAgreement => "privacyAgreement",
            Self::Agreement => "agreement",
        }
    }
}

/// A field's problem: a message for text inputs, a bare flag for checkboxes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    Message(String),
    Flag,
}

impl FieldError {
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(m) => Some(m),
            Self::Flag => None,
        }
    }
}

/// Invalid fields for one validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    #[must_use]
    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).and_then(FieldError::message)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Fields with an error, in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    /// Drop a field's error, as when the user edits that input.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub(crate) fn check(&mut self, field: Field, outcome: Result<impl Sized, &'static str>) {
        if let Err(message) = outcome {
            self.0.insert(field, FieldError::Message(message.to_owned()));
        }
    }

    pub(crate) fn flag_unless(&mut self, field: Field, checked: bool) {
        if !checked {
            self.0.insert(field, FieldError::Flag);
        }
    }
}

/// Metadata for a file picked in the form. The browser keeps the `File`
/// itself alongside the draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime_type: String,
}

impl FileMeta {
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// Fields every persona fills in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub agreement: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriverDraft {
    pub account: AccountFields,
    pub license_number: String,
    pub address: String,
    pub experience: String,
    pub blood_group: String,
    pub date_of_birth: String,
    /// Emergency contact phone number.
    pub emergency_contact: String,
    /// Comma-separated list.
    pub languages: String,
    pub profile_image: Option<FileMeta>,
    pub certificate_of_driving: Option<FileMeta>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RiderDraft {
    pub account: AccountFields,
    pub address: String,
    pub latitude: String,
    pub longitude: String,
    pub privacy_agreement: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrationDraft {
    Driver(DriverDraft),
    Rider(RiderDraft),
}

/// A validated submission ready for the auth service.
#[derive(Clone, Debug, PartialEq)]
pub enum RegistrationPayload {
    Driver(DriverRegistration),
    Rider(UserRegistration),
}

impl RegistrationDraft {
    #[must_use]
    pub fn empty(persona: Persona) -> Self {
        match persona {
            Persona::Driver => Self::Driver(DriverDraft::default()),
            Persona::Rider => Self::Rider(RiderDraft::default()),
        }
    }

    #[must_use]
    pub fn persona(&self) -> Persona {
        match self {
            Self::Driver(_) => Persona::Driver,
            Self::Rider(_) => Persona::Rider,
        }
    }

    #[must_use]
    pub fn account(&self) -> &AccountFields {
        match self {
            Self::Driver(d) => &d.account,
            Self::Rider(r) => &r.account,
        }
    }

    pub fn account_mut(&mut self) -> &mut AccountFields {
        match self {
            Self::Driver(d) => &mut d.account,
            Self::Rider(r) => &mut r.account,
        }
    }

    /// Current value of a text input; empty for fields the persona lacks.
    #[must_use]
    pub fn text(&self, field: Field) -> &str {
        let account = self.account();
        match (self, field) {
            (_, Field::Name) => &account.name,
            (_, Field::Email) => &account.email,
            (_, Field::Phone) => &account.phone,
            (_, Field::Password) => &account.password,
            (_, Field::ConfirmPassword) => &account.confirm_password,
            (Self::Driver(d), Field::DrivingLicenseNo) => &d.license_number,
            (Self::Driver(d), Field::DriverAddress) => &d.address,
            (Self::Driver(d), Field::DriverExperience) => &d.experience,
            (Self::Driver(d), Field::BloodGroup) => &d.blood_group,
            (Self::Driver(d), Field::DateOfBirth) => &d.date_of_birth,
            (Self::Driver(d), Field::EmergencyContact) => &d.emergency_contact,
            (Self::Driver(d), Field::Languages) => &d.languages,
            (Self::Rider(r), Field::Address) => &r.address,
            (Self::Rider(r), Field::Latitude) => &r.latitude,
            (Self::Rider(r), Field::Longitude) => &r.longitude,
            _ => "",
        }
    }

    /// Store a text input's value. Fields the persona lacks are ignored.
    pub fn set_text(&mut self, field: Field, value: String) {
        let slot = match (self, field) {
            (this, Field::Name) => &mut this.account_mut().name,
            (this, Field::Email) => &mut this.account_mut().email,
            (this, Field::Phone) => &mut this.account_mut().phone,
            (this, Field::Password) => &mut this.account_mut().password,
            (this, Field::ConfirmPassword) => &mut this.account_mut().confirm_password,
            (Self::Driver(d), Field::DrivingLicenseNo) => &mut d.license_number,
            (Self::Driver(d), Field::DriverAddress) => &mut d.address,
            (Self::Driver(d), Field::DriverExperience) => &mut d.experience,
            (Self::Driver(d), Field::BloodGroup) => &mut d.blood_group,
            (Self::Driver(d), Field::DateOfBirth) => &mut d.date_of_birth,
            (Self::Driver(d), Field::EmergencyContact) => &mut d.emergency_contact,
            (Self::Driver(d), Field::Languages) => &mut d.languages,
            (Self::Rider(r), Field::Address) => &mut r.address,
            (Self::Rider(r), Field::Latitude) => &mut r.latitude,
            (Self::Rider(r), Field::Longitude) => &mut r.longitude,
            _ => return,
        };
        *slot = value;
    }

    #[must_use]
    pub fn flag(&self, field: Field) -> bool {
        match (self, field) {
            (this, Field::Agreement) => this.account().agreement,
            (Self::Rider(r), Field::PrivacyAgreement) => r.privacy_agreement,
            _ => false,
        }
    }

    /// Store a checkbox. Fields the persona lacks are ignored.
    pub fn set_flag(&mut self, field: Field, checked: bool) {
        match (self, field) {
            (this, Field::Agreement) => this.account_mut().agreement = checked,
            (Self::Rider(r), Field::PrivacyAgreement) => r.privacy_agreement = checked,
            _ => {}
        }
    }

    #[must_use]
    pub fn file(&self, field: Field) -> Option<&FileMeta> {
        match (self, field) {
            (Self::Driver(d), Field::ProfileImage) => d.profile_image.as_ref(),
            (Self::Driver(d), Field::CertificateOfDriving) => d.certificate_of_driving.as_ref(),
            _ => None,
        }
    }

    /// Attach or detach a file. Fields the persona lacks are ignored.
    pub fn set_file(&mut self, field: Field, file: Option<FileMeta>) {
        match (self, field) {
            (Self::Driver(d), Field::ProfileImage) => d.profile_image = file,
            (Self::Driver(d), Field::CertificateOfDriving) => d.certificate_of_driving = file,
            _ => {}
        }
    }

    /// Check every field; all failures are reported together.
    #[must_use]
    pub fn validate(&self, today: Date) -> FieldErrors {
        let mut errors = FieldErrors::default();
        let account = self.account();

        errors.check(Field::Name, validate::name(&account.name));
        errors.check(Field::Email, validate::email(&account.email));
        errors.check(Field::Phone, validate::phone(&account.phone));
        errors.check(Field::Password, validate::password(&account.password));
        errors.check(Field::ConfirmPassword, validate::confirm_password(&account.password, &account.confirm_password));

        match self {
            Self::Driver(d) => {
                errors.check(
                    Field::DrivingLicenseNo,
                    validate::required(&d.license_number, "Driving license number is required for drivers"),
                );
                errors.check(Field::DriverAddress, validate::required(&d.address, "Address is required for drivers"));
                errors.check(Field::DriverExperience, validate::experience_years(&d.experience));
                errors.check(Field::BloodGroup, validate::required(&d.blood_group, "Blood group is required"));
                if d.certificate_of_driving.is_none() {
                    errors.check(Field::CertificateOfDriving, Err::<(), _>("Driving certificate is required"));
                }
                errors.check(Field::DateOfBirth, validate::date_of_birth(&d.date_of_birth, today));
                errors.check(Field::EmergencyContact, validate::emergency_phone(&d.emergency_contact));
                errors.check(Field::Languages, validate::required(&d.languages, "Please list at least one language"));
            }
            Self::Rider(r) => {
                errors.check(Field::Address, validate::required(&r.address, "Address is required"));
                errors.check(Field::Latitude, validate::latitude(&r.latitude));
                errors.check(Field::Longitude, validate::longitude(&r.longitude));
                errors.flag_unless(Field::PrivacyAgreement, r.privacy_agreement);
            }
        }

        errors.flag_unless(Field::Agreement, account.agreement);
        errors
    }

    /// Validate, and on success build the wire payload.
    ///
    /// # Errors
    ///
    /// Returns the full [`FieldErrors`] map when any field is invalid; no
    /// payload exists in that case, so nothing can be sent.
    pub fn prepare_submission(&self, today: Date) -> Result<RegistrationPayload, FieldErrors> {
        let errors = self.validate(today);
        if !errors.is_valid() {
            return Err(errors);
        }
        Ok(match self {
            Self::Driver(d) => RegistrationPayload::Driver(driver_payload(d)),
            Self::Rider(r) => RegistrationPayload::Rider(rider_payload(r)),
        })
    }
}

fn driver_payload(d: &DriverDraft) -> DriverRegistration {
    let mut body = DriverRegistration::default();
    body.push("username", d.account.name.clone());
    body.push("email", d.account.email.clone());
    body.push("phone", d.account.phone.clone());
    body.push("password", d.account.password.clone());
    body.push("drivinglicenseNo", d.license_number.clone());
    body.push("agreement", d.account.agreement.to_string());
    body.push_non_empty("address", &d.address);
    body.push_non_empty("experience", &d.experience);
    body.push_non_empty("bloodGroup", &d.blood_group);
    body.push_non_empty("dateOfBirth", &d.date_of_birth);
    body.push_non_empty("emergencyContact", &d.emergency_contact);
    body.push_non_empty("languages", &d.languages);
    if let Some(file) = &d.profile_image {
        body.files.push(FilePart { field: "profileImage", file_name: file.name.clone() });
    }
    if let Some(file) = &d.certificate_of_driving {
        body.files.push(FilePart { field: "certificateOfDriving", file_name: file.name.clone() });
    }
    body
}

fn rider_payload(r: &RiderDraft) -> UserRegistration {
    UserRegistration {
        username: r.account.name.clone(),
        email: r.account.email.clone(),
        password: r.account.password.clone(),
        phone: r.account.phone.clone(),
        address: r.address.clone(),
        location: GeoPoint {
            lat: validate::latitude(&r.latitude).unwrap_or_default(),
            long: validate::longitude(&r.longitude).unwrap_or_default(),
        },
        privacy_agreement: r.privacy_agreement,
    }
}
