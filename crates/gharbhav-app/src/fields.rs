// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldId {
    State,
    City,
    PropertyType,
    Bhk,
    SizeInSqFt,
    YearBuilt,
    FloorNo,
    TotalFloors,
    FurnishedStatus,
    Facing,
    NearbySchools,
    NearbyHospitals,
    PublicTransportAccessibility,
    AmenitiesScore,
    ParkingSpace,
    Security,
    OwnerType,
    AvailabilityStatus,
    AgeOfProperty,
}

pub const PROPERTY_TYPES: [&str; 4] = ["apartment", "independent_house", "villa", "penthouse"];
pub const FURNISHED_STATUSES: [&str; 3] = ["unfurnished", "semi_furnished", "fully_furnished"];
pub const TRANSPORT_TIERS: [&str; 4] = ["poor", "average", "good", "excellent"];
pub const PARKING_CHOICES: [&str; 2] = ["yes", "no"];
pub const SECURITY_TIERS: [&str; 3] = ["low", "medium", "high"];
pub const FACINGS: [&str; 4] = ["north", "south", "east", "west"];
pub const OWNER_TYPES: [&str; 3] = ["owner", "builder", "broker"];
pub const AVAILABILITY_STATUSES: [&str; 2] = ["ready", "under_construction"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    Region,
    Locality,
    Choice(&'static [&'static str]),
    Numeric,
    Derived,
}

impl FieldId {
    pub const ALL: [Self; 19] = [
        Self::State,
        Self::City,
        Self::PropertyType,
        Self::Bhk,
        Self::SizeInSqFt,
        Self::YearBuilt,
        Self::FloorNo,
        Self::TotalFloors,
        Self::FurnishedStatus,
        Self::Facing,
        Self::NearbySchools,
        Self::NearbyHospitals,
        Self::PublicTransportAccessibility,
        Self::AmenitiesScore,
        Self::ParkingSpace,
        Self::Security,
        Self::OwnerType,
        Self::AvailabilityStatus,
        Self::AgeOfProperty,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::State => "State",
            Self::City => "City",
            Self::PropertyType => "Property_Type",
            Self::Bhk => "BHK",
            Self::SizeInSqFt => "Size_in_SqFt",
            Self::YearBuilt => "Year_Built",
            Self::FloorNo => "Floor_No",
            Self::TotalFloors => "Total_Floors",
            Self::FurnishedStatus => "Furnished_Status",
            Self::Facing => "Facing",
            Self::NearbySchools => "Nearby_Schools",
            Self::NearbyHospitals => "Nearby_Hospitals",
            Self::PublicTransportAccessibility => "Public_Transport_Accessibility",
            Self::AmenitiesScore => "Amenities_Score",
            Self::ParkingSpace => "Parking_Space",
            Self::Security => "Security",
            Self::OwnerType => "Owner_Type",
            Self::AvailabilityStatus => "Availability_Status",
            Self::AgeOfProperty => "Age_of_Property",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == value)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::State => "state",
            Self::City => "city",
            Self::PropertyType => "property type",
            Self::Bhk => "BHK",
            Self::SizeInSqFt => "size (sq ft)",
            Self::YearBuilt => "year built",
            Self::FloorNo => "floor no",
            Self::TotalFloors => "total floors",
            Self::FurnishedStatus => "furnishing",
            Self::Facing => "facing",
            Self::NearbySchools => "nearby schools",
            Self::NearbyHospitals => "nearby hospitals",
            Self::PublicTransportAccessibility => "transit access",
            Self::AmenitiesScore => "amenities score",
            Self::ParkingSpace => "parking",
            Self::Security => "security",
            Self::OwnerType => "owner type",
            Self::AvailabilityStatus => "availability",
            Self::AgeOfProperty => "age (derived)",
        }
    }

    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Bhk
                | Self::SizeInSqFt
                | Self::YearBuilt
                | Self::FloorNo
                | Self::TotalFloors
                | Self::NearbySchools
                | Self::NearbyHospitals
                | Self::AmenitiesScore
                | Self::AgeOfProperty
        )
    }

    pub const fn input(self) -> FieldInput {
        match self {
            Self::State => FieldInput::Region,
            Self::City => FieldInput::Locality,
            Self::PropertyType => FieldInput::Choice(&PROPERTY_TYPES),
            Self::FurnishedStatus => FieldInput::Choice(&FURNISHED_STATUSES),
            Self::Facing => FieldInput::Choice(&FACINGS),
            Self::PublicTransportAccessibility => FieldInput::Choice(&TRANSPORT_TIERS),
            Self::ParkingSpace => FieldInput::Choice(&PARKING_CHOICES),
            Self::Security => FieldInput::Choice(&SECURITY_TIERS),
            Self::OwnerType => FieldInput::Choice(&OWNER_TYPES),
            Self::AvailabilityStatus => FieldInput::Choice(&AVAILABILITY_STATUSES),
            Self::AgeOfProperty => FieldInput::Derived,
            Self::Bhk
            | Self::SizeInSqFt
            | Self::YearBuilt
            | Self::FloorNo
            | Self::TotalFloors
            | Self::NearbySchools
            | Self::NearbyHospitals
            | Self::AmenitiesScore => FieldInput::Numeric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldId, FieldInput};

    #[test]
    fn wire_keys_round_trip() {
        for field in FieldId::ALL {
            assert_eq!(FieldId::parse(field.as_str()), Some(field));
        }
        assert_eq!(FieldId::parse("Bedroom_Count"), None);
    }

    #[test]
    fn numeric_set_matches_service_contract() {
        let numeric: Vec<&str> = FieldId::ALL
            .into_iter()
            .filter(|field| field.is_numeric())
            .map(FieldId::as_str)
            .collect();
        assert_eq!(
            numeric,
            vec![
                "BHK",
                "Size_in_SqFt",
                "Year_Built",
                "Floor_No",
                "Total_Floors",
                "Nearby_Schools",
                "Nearby_Hospitals",
                "Amenities_Score",
                "Age_of_Property",
            ],
        );
    }

    #[test]
    fn every_numeric_field_except_age_is_editable() {
        for field in FieldId::ALL {
            if field.is_numeric() && field != FieldId::AgeOfProperty {
                assert_eq!(field.input(), FieldInput::Numeric, "{}", field.as_str());
            }
        }
        assert_eq!(FieldId::AgeOfProperty.input(), FieldInput::Derived);
    }

    #[test]
    fn choice_fields_have_non_empty_option_lists() {
        for field in FieldId::ALL {
            if let FieldInput::Choice(options) = field.input() {
                assert!(!options.is_empty(), "{}", field.as_str());
            }
        }
    }
}
