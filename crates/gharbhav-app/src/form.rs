// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeMap;

use crate::fields::FieldId;
use crate::locations;

pub const DEFAULT_AGE_YEARS: i32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalityOption {
    pub value: String,
    pub label: String,
}

/// The form is the sole mutable source of truth for current input. Values are
/// raw strings until submission; the locality value is constrained to the
/// option list rebuilt by `set_region`, and the age field is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    current_year: i32,
    values: BTreeMap<FieldId, String>,
    locality_options: Vec<LocalityOption>,
}

impl FormState {
    pub fn new(current_year: i32) -> Self {
        let mut form = Self {
            current_year,
            values: FieldId::ALL
                .into_iter()
                .map(|field| (field, String::new()))
                .collect(),
            locality_options: Vec::new(),
        };
        form.recompute_age();
        form
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn get(&self, field: FieldId) -> &str {
        self.values
            .get(&field)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn set(&mut self, field: FieldId, value: &str) {
        match field {
            FieldId::State => self.set_region(value),
            FieldId::City => self.set_locality(value),
            FieldId::YearBuilt => self.set_year_built(value),
            // Derived; only the synchronizer writes it.
            FieldId::AgeOfProperty => {}
            _ => {
                self.values.insert(field, value.to_owned());
            }
        }
    }

    pub fn set_region(&mut self, region: &str) {
        self.values.insert(FieldId::State, region.to_owned());
        self.values.insert(FieldId::City, String::new());
        self.locality_options = match locations::localities(region) {
            Some(list) => list
                .iter()
                .map(|locality| LocalityOption {
                    value: (*locality).to_owned(),
                    label: locations::humanize(locality),
                })
                .collect(),
            None => Vec::new(),
        };
    }

    pub fn set_locality(&mut self, locality: &str) {
        let known = self
            .locality_options
            .iter()
            .any(|option| option.value == locality);
        if locality.is_empty() || known {
            self.values.insert(FieldId::City, locality.to_owned());
        }
    }

    pub fn set_year_built(&mut self, raw: &str) {
        self.values.insert(FieldId::YearBuilt, raw.to_owned());
        self.recompute_age();
    }

    fn recompute_age(&mut self) {
        let age = match self.get(FieldId::YearBuilt).trim().parse::<i32>() {
            Ok(year) => (self.current_year - year).max(0),
            Err(_) => DEFAULT_AGE_YEARS,
        };
        self.values.insert(FieldId::AgeOfProperty, age.to_string());
    }

    pub fn locality_options(&self) -> &[LocalityOption] {
        &self.locality_options
    }

    pub fn reset(&mut self) {
        for field in FieldId::ALL {
            self.values.insert(field, String::new());
        }
        self.locality_options.clear();
        self.recompute_age();
    }

    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            fields: FieldId::ALL
                .into_iter()
                .map(|field| (field, self.get(field).to_owned()))
                .collect(),
        }
    }
}

/// Transient capture of the form at submit time; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub fields: Vec<(FieldId, String)>,
}

impl ProfileSnapshot {
    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.fields
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, value)| value.as_str())
    }
}
