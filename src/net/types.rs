//! Wire DTOs exchanged with the authentication service and mirrored into
//! local storage.
//!
//! DESIGN
//! ======
//! Every field decodes with a default so records written by older builds (or
//! trimmed by the service) still load; an explicit `null` reads the same as a
//! missing key. Unknown keys are kept in `extra` and written back untouched.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Decode `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Latitude/longitude pair as the service spells it (`lat`, `long`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoPoint {
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub long: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmergencyContactRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub relationship: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfoRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub blood_group: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dob: String,
    #[serde(deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub certificates: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub emergency_contact: EmergencyContactRecord,
}

/// The current-user snapshot stored under the `"user"` local-storage key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub driver_license_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    pub profile_image: Option<String>,
    pub location: Option<GeoPoint>,
    #[serde(deserialize_with = "null_as_default")]
    pub personal_info: PersonalInfoRecord,
    /// Fields this client does not model, preserved on write-back.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub user: Option<UserRecord>,
    pub message: Option<String>,
}

/// JSON body for rider registration.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub address: String,
    pub location: GeoPoint,
    pub privacy_agreement: bool,
}

/// A binary part of a driver registration, identified by the draft field it
/// came from. The browser layer resolves it to the selected `File`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePart {
    pub field: &'static str,
    pub file_name: String,
}

/// Multipart body for driver registration: ordered text fields plus file parts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriverRegistration {
    pub fields: Vec<(&'static str, String)>,
    pub files: Vec<FilePart>,
}

impl DriverRegistration {
    /// Append a text field unconditionally.
    pub fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.fields.push((name, value.into()));
    }

    /// Append a text field only when it carries a value.
    pub fn push_non_empty(&mut self, name: &'static str, value: &str) {
        if !value.is_empty() {
            self.fields.push((name, value.to_owned()));
        }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }
}

/// Error envelope the service returns on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub message: Option<String>,
}
