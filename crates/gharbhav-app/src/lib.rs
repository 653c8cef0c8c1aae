// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod autofill;
pub mod fields;
pub mod form;
pub mod locations;
pub mod notify;
pub mod samples;
pub mod state;

pub use autofill::*;
pub use fields::*;
pub use form::*;
pub use notify::*;
pub use samples::*;
pub use state::*;
