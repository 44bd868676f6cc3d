// Core algorithm exports
pub mod assessment;
pub mod bmi;
pub mod locator;
pub mod questions;
pub mod recommendations;
pub mod scoring;
pub mod validation;

pub use assessment::Assessor;
pub use bmi::{assess_bmi, body_mass_index, categorize};
pub use locator::{GeolocationError, Locator, MapSearch, PlaceType, PlaceTypeError, PositionSource};
pub use questions::{Domain, Question, QUESTIONS};
pub use recommendations::recommendations;
pub use scoring::{overall_status, tally};
pub use validation::{field_mark, validate_form, FieldMark, FormField, ValidationFailure};
