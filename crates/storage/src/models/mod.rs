mod measurement;

pub use measurement::{MeasurementRecord, NutritionalStatus, Sex};
