//! Receipt domain: the data model, its validation and the scoring rules.

pub mod points;
pub mod ports;
pub mod receipt;
pub mod validation;
