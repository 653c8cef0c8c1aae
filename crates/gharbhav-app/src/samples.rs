// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::fields::FieldId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: &'static [(FieldId, &'static str)],
}

impl SampleProfile {
    pub fn value_of(&self, field: FieldId) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, value)| *value)
    }
}

pub const SAMPLE_PROFILES: [SampleProfile; 2] = [
    SampleProfile {
        name: "mumbai",
        description: "luxury 3BHK apartment in Bandra West",
        fields: &[
            (FieldId::State, "maharashtra"),
            (FieldId::City, "mumbai"),
            (FieldId::PropertyType, "apartment"),
            (FieldId::Bhk, "3"),
            (FieldId::SizeInSqFt, "1200"),
            (FieldId::YearBuilt, "2018"),
            (FieldId::FloorNo, "15"),
            (FieldId::TotalFloors, "25"),
            (FieldId::FurnishedStatus, "fully_furnished"),
            (FieldId::NearbySchools, "8"),
            (FieldId::NearbyHospitals, "5"),
            (FieldId::PublicTransportAccessibility, "excellent"),
            (FieldId::ParkingSpace, "yes"),
            (FieldId::Security, "high"),
            (FieldId::AmenitiesScore, "9"),
            (FieldId::Facing, "south"),
            (FieldId::OwnerType, "owner"),
            (FieldId::AvailabilityStatus, "ready"),
        ],
    },
    SampleProfile {
        name: "bangalore",
        description: "independent 4BHK villa in Whitefield",
        fields: &[
            (FieldId::State, "karnataka"),
            (FieldId::City, "bangalore"),
            (FieldId::PropertyType, "villa"),
            (FieldId::Bhk, "4"),
            (FieldId::SizeInSqFt, "2800"),
            (FieldId::YearBuilt, "2015"),
            (FieldId::FloorNo, "0"),
            (FieldId::TotalFloors, "2"),
            (FieldId::FurnishedStatus, "semi_furnished"),
            (FieldId::NearbySchools, "12"),
            (FieldId::NearbyHospitals, "7"),
            (FieldId::PublicTransportAccessibility, "good"),
            (FieldId::ParkingSpace, "yes"),
            (FieldId::Security, "high"),
            (FieldId::AmenitiesScore, "8"),
            (FieldId::Facing, "east"),
            (FieldId::OwnerType, "owner"),
            (FieldId::AvailabilityStatus, "ready"),
        ],
    },
];

pub fn sample_profile(name: &str) -> Option<&'static SampleProfile> {
    SAMPLE_PROFILES
        .iter()
        .find(|profile| profile.name == name)
}
