use super::*;
use cod_core::Unique;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Deserialize)]
pub struct NewLocation {
    pub name: String,
    pub building: String,
    #[serde(default)]
    pub floor: Option<String>,
    pub description: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Serialize)]
pub struct LocationInfo {
    pub id: i64,
    pub name: String,
    pub building: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    pub description: String,
    pub active: bool,
}

impl From<&Location> for LocationInfo {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id().inner(),
            name: location.name().to_string(),
            building: location.building().to_string(),
            floor: location.floor().map(str::to_string),
            description: location.description().to_string(),
            active: location.active(),
        }
    }
}
