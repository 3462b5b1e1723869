use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub description: String,
    pub origin_country: String,
    /// Certification labels as entered by the admin; not validated against
    /// any registry.
    pub certifications: Vec<String>,
    pub image_url: String,
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("brand name required".into()));
    }
    Ok(())
}
