use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

// ============================================================================
// Enumerations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecognitionKind {
    Academico,
    Publico,
    Privado,
}

impl RecognitionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecognitionKind::Academico => "academico",
            RecognitionKind::Publico => "publico",
            RecognitionKind::Privado => "privado",
        }
    }
}

impl fmt::Display for RecognitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecognitionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "academico" => Ok(RecognitionKind::Academico),
            "publico" => Ok(RecognitionKind::Publico),
            "privado" => Ok(RecognitionKind::Privado),
            other => Err(format!("unknown recognition kind '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemCondition {
    Bueno,
    Regular,
}

impl ItemCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCondition::Bueno => "bueno",
            ItemCondition::Regular => "regular",
        }
    }
}

impl fmt::Display for ItemCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bueno" => Ok(ItemCondition::Bueno),
            "regular" => Ok(ItemCondition::Regular),
            other => Err(format!("unknown item condition '{other}'")),
        }
    }
}

// ============================================================================
// Work experience
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperienceData {
    pub profile_id: i32,
    pub position: String,
    pub company_name: String,
    pub company_location: String,
    pub company_email: Option<String>,
    pub company_website: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub responsibilities: String,
    pub certificate_url: Option<String>,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WorkExperience {
    pub id: i32,
    pub profile_id: i32,
    pub position: String,
    pub company_name: String,
    pub company_location: String,
    pub company_email: Option<String>,
    pub company_website: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub responsibilities: String,
    pub certificate_url: Option<String>,
    pub visible: bool,
}

// ============================================================================
// Recognition
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionData {
    pub profile_id: i32,
    pub kind: RecognitionKind,
    pub awarded_on: NaiveDate,
    pub description: String,
    pub sponsor: String,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub certificate_url: Option<String>,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recognition {
    pub id: i32,
    pub profile_id: i32,
    pub kind: RecognitionKind,
    pub awarded_on: NaiveDate,
    pub description: String,
    pub sponsor: String,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub certificate_url: Option<String>,
    pub visible: bool,
}

// ============================================================================
// Completed course
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedCourseData {
    pub profile_id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_hours: i32,
    pub description: String,
    pub sponsor: String,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub sponsor_email: Option<String>,
    pub certificate_url: Option<String>,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CompletedCourse {
    pub id: i32,
    pub profile_id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_hours: i32,
    pub description: String,
    pub sponsor: String,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub sponsor_email: Option<String>,
    pub certificate_url: Option<String>,
    pub visible: bool,
}

// ============================================================================
// Academic product
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicProductData {
    pub profile_id: i32,
    pub resource_name: String,
    pub classifier: String,
    pub description: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AcademicProduct {
    pub id: i32,
    pub profile_id: i32,
    pub resource_name: String,
    pub classifier: String,
    pub description: String,
    pub visible: bool,
}

// ============================================================================
// Work product
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkProductData {
    pub profile_id: i32,
    pub product_name: String,
    pub produced_on: NaiveDate,
    pub description: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WorkProduct {
    pub id: i32,
    pub profile_id: i32,
    pub product_name: String,
    pub produced_on: NaiveDate,
    pub description: String,
    pub visible: bool,
}

// ============================================================================
// Garage sale item
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarageSaleItemData {
    pub profile_id: i32,
    pub product_name: String,
    pub condition: ItemCondition,
    pub description: String,
    pub value: Decimal,
    pub published_on: NaiveDate,
    pub available: bool,
    pub image_url: Option<String>,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GarageSaleItem {
    pub id: i32,
    pub profile_id: i32,
    pub product_name: String,
    pub condition: ItemCondition,
    pub description: String,
    #[schema(value_type = String, example = "25.50")]
    pub value: Decimal,
    pub published_on: NaiveDate,
    pub available: bool,
    pub image_url: Option<String>,
    pub visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_value(RecognitionKind::Academico).unwrap(),
            "academico"
        );
        assert_eq!(
            serde_json::from_str::<ItemCondition>("\"regular\"").unwrap(),
            ItemCondition::Regular
        );
        assert!("nuevo".parse::<ItemCondition>().is_err());
        assert_eq!("privado".parse::<RecognitionKind>().unwrap(), RecognitionKind::Privado);
    }
}
