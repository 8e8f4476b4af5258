//! Domain Records
//!
//! Wire types returned by the fleet REST API. Keys are camelCase on the wire.
//! The backend (json-server) emits ids as strings or numbers depending on how
//! a record was created, so ids are normalized to strings on the way in.

use serde::{Deserialize, Deserializer, Serialize};

/// Capacity statistic rendered as a doughnut chart
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStat {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub label: String,
    #[serde(deserialize_with = "number_or_zero")]
    pub used: f64,
    #[serde(deserialize_with = "number_or_zero")]
    pub total: f64,
}

/// Plain count shown as a summary tile
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountStat {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "number_or_zero")]
    pub count: f64,
    pub label: String,
}

/// One row of the afternoon shift table
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AfternoonShiftVehicle {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub vehicle: String,
    pub plate_num: String,
    pub odometer: String,
    pub gps: String,
    pub device: String,
    pub sim: String,
    pub fleet: String,
    /// Free text, not an enum
    pub status: String,
}

/// Toolbar action applicable to the shift table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
}

impl Action {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Status actions offered by the shift table toolbar
    pub fn status_actions() -> Vec<Action> {
        vec![
            Action::new("Active"),
            Action::new("Non-active"),
            Action::new("Pending"),
        ]
    }
}

/// User managed by the add-user form
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub rfid: String,
    pub role: String,
    pub department: String,
    pub fleet: String,
    /// Data URI of the profile picture, empty when none was uploaded
    pub image: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Department {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    })
}

fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}
