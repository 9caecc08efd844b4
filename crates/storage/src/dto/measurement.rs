use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{MeasurementRecord, NutritionalStatus, Sex};

/// Request payload for recording a new measurement. The ranges mirror the
/// input widget bounds of the form this API serves.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMeasurementRequest {
    #[validate(range(
        min = 100,
        max = 250,
        message = "Height must be between 100 and 250 cm"
    ))]
    pub height_cm: i32,

    #[validate(custom(
        function = "validate_actual_weight",
        message = "Weight must be between 30.0 and 200.0 kg"
    ))]
    pub actual_weight_kg: Decimal,

    pub sex: Sex,

    /// Measurement date; defaults to today when omitted. Any calendar date
    /// is accepted, past or future.
    pub date: Option<NaiveDate>,
}

fn validate_actual_weight(weight: &Decimal) -> Result<(), validator::ValidationError> {
    if *weight < dec!(30.0) || *weight > dec!(200.0) {
        return Err(validator::ValidationError::new("actual_weight_out_of_range"));
    }
    Ok(())
}

/// One measurement as exposed over the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MeasurementResponse {
    pub date: NaiveDate,
    pub height_cm: i32,
    pub sex: Sex,
    pub actual_weight_kg: Decimal,
    pub ideal_weight_kg: Decimal,
    pub status: NutritionalStatus,
}

impl From<MeasurementRecord> for MeasurementResponse {
    fn from(record: MeasurementRecord) -> Self {
        Self {
            date: record.date,
            height_cm: record.height_cm,
            sex: record.sex,
            actual_weight_kg: record.actual_weight_kg,
            ideal_weight_kg: record.ideal_weight_kg,
            status: record.status,
        }
    }
}

/// Response to a successful record: the freshly computed measurement plus the
/// updated history in display order.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecordMeasurementResponse {
    pub measurement: MeasurementResponse,
    pub history: Vec<MeasurementResponse>,
}

/// One point of the weight-over-time chart series.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub actual_weight_kg: Decimal,
}

impl From<&MeasurementRecord> for ChartPoint {
    fn from(record: &MeasurementRecord) -> Self {
        Self {
            date: record.date,
            actual_weight_kg: record.actual_weight_kg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    /// Display order by measurement date. The history table shows newest
    /// first by default.
    #[serde(default)]
    pub order: SortOrder,
}
