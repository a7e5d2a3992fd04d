//! Driver vehicles added from the vehicles tab.
//!
//! Vehicles live only in page memory; the auth service has no vehicle
//! endpoint for this client.

#[cfg(test)]
#[path = "vehicles_test.rs"]
mod vehicles_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    /// Registration plate, upper-cased with inner whitespace collapsed.
    pub plate: String,
}

impl Vehicle {
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VehicleDraft {
    pub make: String,
    pub model: String,
    pub plate: String,
}

impl VehicleDraft {
    /// # Errors
    ///
    /// Returns the first problem found, in form order.
    pub fn validate(&self) -> Result<Vehicle, &'static str> {
        let make = self.make.trim();
        let model = self.model.trim();
        let plate = self.plate.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase();
        if make.is_empty() {
            return Err("Vehicle make is required");
        }
        if model.is_empty() {
            return Err("Vehicle model is required");
        }
        if plate.is_empty() {
            return Err("Registration number is required");
        }
        Ok(Vehicle { make: make.to_owned(), model: model.to_owned(), plate })
    }
}

/// Add `vehicle` unless its plate is already listed.
///
/// # Errors
///
/// Returns a message when the plate is a duplicate.
pub fn add_vehicle(list: &mut Vec<Vehicle>, vehicle: Vehicle) -> Result<(), &'static str> {
    if list.iter().any(|v| v.plate == vehicle.plate) {
        return Err("This vehicle is already added");
    }
    list.push(vehicle);
    Ok(())
}
