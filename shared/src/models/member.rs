//! Member Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Gender as recorded on the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

/// Member category
///
/// Workers (`Trabalhador`) take part in events and pay monthly dues;
/// consultants (`Consulente`) attend therapies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MemberType {
    #[default]
    Consulente,
    Trabalhador,
}

impl MemberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Consulente => "Consulente",
            Self::Trabalhador => "Trabalhador",
        }
    }
}

/// Member entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub phone: String,
    #[serde(rename = "type")]
    pub member_type: MemberType,
    pub created_at: DateTime<Utc>,
}

impl Member {
    pub fn is_worker(&self) -> bool {
        self.member_type == MemberType::Trabalhador
    }
}

/// Create member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCreate {
    pub name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub phone: String,
    #[serde(rename = "type", default)]
    pub member_type: MemberType,
}
