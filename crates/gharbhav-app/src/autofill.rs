// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::fields::FieldId;
use crate::form::FormState;
use crate::samples::{self, SampleProfile};

/// Applies a named sample profile to the form. Unknown names are a silent
/// no-op. The locality is written in a second phase: its option list only
/// exists after the region write has re-run the synchronizer.
pub fn apply_profile(form: &mut FormState, name: &str) -> Option<&'static SampleProfile> {
    let profile = samples::sample_profile(name)?;

    for (field, value) in profile.fields {
        if *field == FieldId::City {
            continue;
        }
        form.set(*field, value);
    }

    if let Some(locality) = profile.value_of(FieldId::City) {
        form.set(FieldId::City, locality);
    }

    Some(profile)
}

#[cfg(test)]
mod tests {
    use super::apply_profile;
    use crate::fields::FieldId;
    use crate::form::FormState;

    const YEAR: i32 = 2026;

    #[test]
    fn unknown_preset_is_a_silent_no_op() {
        let mut form = FormState::new(YEAR);
        let before = form.clone();
        assert!(apply_profile(&mut form, "jaipur").is_none());
        assert_eq!(form, before);
    }

    #[test]
    fn mumbai_profile_fills_every_field_including_the_locality() {
        let mut form = FormState::new(YEAR);
        let profile = apply_profile(&mut form, "mumbai").expect("known preset");

        for (field, value) in profile.fields {
            assert_eq!(form.get(*field), *value, "{}", field.as_str());
        }
        assert_eq!(form.get(FieldId::City), "mumbai");
        assert_eq!(form.get(FieldId::AgeOfProperty), "8");
        assert_eq!(form.locality_options().len(), 5);
    }

    #[test]
    fn autofill_over_a_previous_region_swaps_the_option_list() {
        let mut form = FormState::new(YEAR);
        apply_profile(&mut form, "mumbai").expect("known preset");
        apply_profile(&mut form, "bangalore").expect("known preset");

        assert_eq!(form.get(FieldId::State), "karnataka");
        assert_eq!(form.get(FieldId::City), "bangalore");
        assert!(
            form.locality_options()
                .iter()
                .all(|option| option.value != "mumbai"),
        );
    }
}
