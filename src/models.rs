use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============ Row Models ============

/// A row from the `patients` table, as selected by the patient endpoints.
/// Field names match the selected columns exactly; serialization must not
/// add, drop, or rename keys.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Patient {
    pub patient_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

/// A row from the `providers` table. The queries never select an id column.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Provider {
    pub first_name: String,
    pub last_name: String,
    pub provider_specialty: String,
}

// ============ Query Parameters ============

/// Query string for GET /patients/filter. The field is optional so that
/// extraction never rejects; the handler produces the 400 for an absent or
/// empty value.
#[derive(Debug, Deserialize)]
pub struct PatientFilter {
    pub first_name: Option<String>,
}

/// Query string for GET /providers/specialty.
#[derive(Debug, Deserialize)]
pub struct SpecialtyFilter {
    pub specialty: Option<String>,
}
