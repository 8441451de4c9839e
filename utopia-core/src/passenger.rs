use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind};
use crate::filter::{FieldAccessor, Filterable};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub passenger_id: i32,
    pub passenger_booking_id: i32,
    pub passenger_passport_id: String,
    pub passenger_first_name: String,
    pub passenger_last_name: String,
    pub passenger_date_of_birth: String,
    pub passenger_sex: String,
    pub passenger_address: String,
    pub passenger_is_veteran: bool,
}

/// Business fields of a passenger, without identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerFields {
    pub booking_id: i32,
    pub passport_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub sex: String,
    pub address: String,
    pub is_veteran: bool,
}

impl Passenger {
    pub fn from_fields(passenger_id: i32, fields: PassengerFields) -> Self {
        Self {
            passenger_id,
            passenger_booking_id: fields.booking_id,
            passenger_passport_id: fields.passport_id,
            passenger_first_name: fields.first_name,
            passenger_last_name: fields.last_name,
            passenger_date_of_birth: fields.date_of_birth,
            passenger_sex: fields.sex,
            passenger_address: fields.address,
            passenger_is_veteran: fields.is_veteran,
        }
    }
}

impl Entity for Passenger {
    const KIND: EntityKind = EntityKind::Passenger;
    const UNIQUE_FIELD: &'static str = "passengerPassportId";

    fn id(&self) -> i32 {
        self.passenger_id
    }

    fn unique_value(&self) -> &str {
        &self.passenger_passport_id
    }
}

impl Filterable for Passenger {
    const FIELDS: &'static [(&'static str, FieldAccessor<Self>)] = &[
        ("passengerId", |p: &Passenger| p.passenger_id.to_string()),
        ("passengerBookingId", |p: &Passenger| p.passenger_booking_id.to_string()),
        ("passengerPassportId", |p: &Passenger| p.passenger_passport_id.clone()),
        ("passengerFirstName", |p: &Passenger| p.passenger_first_name.clone()),
        ("passengerLastName", |p: &Passenger| p.passenger_last_name.clone()),
        ("passengerDateOfBirth", |p: &Passenger| p.passenger_date_of_birth.clone()),
        ("passengerSex", |p: &Passenger| p.passenger_sex.clone()),
        ("passengerAddress", |p: &Passenger| p.passenger_address.clone()),
        ("passengerIsVeteran", |p: &Passenger| p.passenger_is_veteran.to_string()),
    ];
}
