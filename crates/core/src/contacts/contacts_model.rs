use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Someone to call when things go wrong on the road.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmergencyContact {
    pub id: String,
    pub trip_id: String,
    pub name: String,
    pub relationship: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NewEmergencyContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub trip_id: String,
    pub name: String,
    pub relationship: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl NewEmergencyContact {
    pub fn validate(&self) -> Result<()> {
        validate_contact_fields(&self.name, &self.phone)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContactUpdate {
    pub id: String,
    pub name: String,
    pub relationship: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl EmergencyContactUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_contact_fields(&self.name, &self.phone)
    }
}

fn validate_contact_fields(name: &str, phone: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField("name".to_string()).into());
    }
    if phone.trim().is_empty() {
        return Err(ValidationError::MissingField("phone".to_string()).into());
    }
    Ok(())
}
