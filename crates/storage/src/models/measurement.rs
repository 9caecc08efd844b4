use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Biological sex, as used by the Broca adjustment.
///
/// Serialized with the storage display strings ("Pria"/"Wanita") so the same
/// representation appears in the CSV file and over the wire; internal code
/// only ever matches on the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Sex {
    #[serde(rename = "Pria")]
    Male,
    #[serde(rename = "Wanita")]
    Female,
}

impl Sex {
    /// Flat fraction subtracted from `height_cm - 100` by the Broca formula.
    pub fn broca_reduction(&self) -> Decimal {
        match self {
            Sex::Male => dec!(0.10),
            Sex::Female => dec!(0.15),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "Pria"),
            Sex::Female => write!(f, "Wanita"),
        }
    }
}

/// Nutritional-status bucket derived from actual vs ideal weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum NutritionalStatus {
    #[serde(rename = "Kurus")]
    Underweight,
    #[serde(rename = "Gemuk")]
    Overweight,
    #[serde(rename = "Ideal")]
    Ideal,
}

impl fmt::Display for NutritionalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NutritionalStatus::Underweight => write!(f, "Kurus"),
            NutritionalStatus::Overweight => write!(f, "Gemuk"),
            NutritionalStatus::Ideal => write!(f, "Ideal"),
        }
    }
}

/// One persisted measurement.
///
/// `ideal_weight_kg` and `status` are derived from the other fields by
/// `services::classification`; nothing else may set them. Serde renames pin
/// the exact CSV column names and order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MeasurementRecord {
    #[serde(rename = "Tanggal")]
    pub date: NaiveDate,
    #[serde(rename = "Tinggi (cm)")]
    pub height_cm: i32,
    #[serde(rename = "Jenis Kelamin")]
    pub sex: Sex,
    #[serde(rename = "Berat Aktual")]
    pub actual_weight_kg: Decimal,
    #[serde(rename = "Berat Ideal (kg)")]
    pub ideal_weight_kg: Decimal,
    #[serde(rename = "Status Gizi")]
    pub status: NutritionalStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_strings_match_storage_format() {
        assert_eq!(Sex::Male.to_string(), "Pria");
        assert_eq!(Sex::Female.to_string(), "Wanita");
        assert_eq!(NutritionalStatus::Underweight.to_string(), "Kurus");
        assert_eq!(NutritionalStatus::Overweight.to_string(), "Gemuk");
        assert_eq!(NutritionalStatus::Ideal.to_string(), "Ideal");
    }

    #[test]
    fn test_broca_reduction_per_sex() {
        assert_eq!(Sex::Male.broca_reduction(), dec!(0.10));
        assert_eq!(Sex::Female.broca_reduction(), dec!(0.15));
    }
}
