use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Sex {
    H,
    M,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::H => "H",
            Sex::M => "M",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => Ok(Sex::H),
            "M" => Ok(Sex::M),
            other => Err(format!("unknown sex code '{other}'")),
        }
    }
}

/// Persisted shape of a profile, without its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData {
    pub description: String,
    pub active_flag: i32,
    pub last_names: String,
    pub first_names: String,
    pub nationality: String,
    pub birthplace: String,
    pub birth_date: NaiveDate,
    pub national_id: String,
    pub sex: Sex,
    pub marital_status: String,
    pub driver_license: String,
    pub landline_phone: String,
    pub phone: String,
    pub work_address: String,
    pub home_address: String,
    pub website: String,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub id: i32,
    pub description: String,
    pub active_flag: i32,
    pub last_names: String,
    pub first_names: String,
    pub nationality: String,
    pub birthplace: String,
    pub birth_date: NaiveDate,
    pub national_id: String,
    pub sex: Sex,
    pub marital_status: String,
    pub driver_license: String,
    pub landline_phone: String,
    pub phone: String,
    pub work_address: String,
    pub home_address: String,
    pub website: String,
    pub photo_url: Option<String>,
}

impl Profile {
    pub fn from_data(id: i32, data: ProfileData) -> Self {
        Self {
            id,
            description: data.description,
            active_flag: data.active_flag,
            last_names: data.last_names,
            first_names: data.first_names,
            nationality: data.nationality,
            birthplace: data.birthplace,
            birth_date: data.birth_date,
            national_id: data.national_id,
            sex: data.sex,
            marital_status: data.marital_status,
            driver_license: data.driver_license,
            landline_phone: data.landline_phone,
            phone: data.phone,
            work_address: data.work_address,
            home_address: data.home_address,
            website: data.website,
            photo_url: data.photo_url,
        }
    }

    /// A zero activity flag keeps the profile off the public site.
    pub fn is_published(&self) -> bool {
        self.active_flag > 0
    }
}

/// The CV sections whose public rendering can be switched off per profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CareerSection {
    WorkExperience,
    Courses,
    Recognitions,
    AcademicProducts,
    WorkProducts,
    GarageSale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SectionVisibility {
    pub profile_id: i32,
    pub show_work_experience: bool,
    pub show_courses: bool,
    pub show_recognitions: bool,
    pub show_academic_products: bool,
    pub show_work_products: bool,
    pub show_garage_sale: bool,
}

impl SectionVisibility {
    pub fn all_visible(profile_id: i32) -> Self {
        Self::from_flags(profile_id, SectionVisibilityFlags::default())
    }

    pub fn from_flags(profile_id: i32, flags: SectionVisibilityFlags) -> Self {
        Self {
            profile_id,
            show_work_experience: flags.show_work_experience,
            show_courses: flags.show_courses,
            show_recognitions: flags.show_recognitions,
            show_academic_products: flags.show_academic_products,
            show_work_products: flags.show_work_products,
            show_garage_sale: flags.show_garage_sale,
        }
    }

    pub fn shows(&self, section: CareerSection) -> bool {
        match section {
            CareerSection::WorkExperience => self.show_work_experience,
            CareerSection::Courses => self.show_courses,
            CareerSection::Recognitions => self.show_recognitions,
            CareerSection::AcademicProducts => self.show_academic_products,
            CareerSection::WorkProducts => self.show_work_products,
            CareerSection::GarageSale => self.show_garage_sale,
        }
    }
}

/// Admin edit of the six flags. Omitted flags default to shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SectionVisibilityFlags {
    pub show_work_experience: bool,
    pub show_courses: bool,
    pub show_recognitions: bool,
    pub show_academic_products: bool,
    pub show_work_products: bool,
    pub show_garage_sale: bool,
}

impl Default for SectionVisibilityFlags {
    fn default() -> Self {
        Self {
            show_work_experience: true,
            show_courses: true,
            show_recognitions: true,
            show_academic_products: true,
            show_work_products: true,
            show_garage_sale: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_visible_shows_every_section() {
        let v = SectionVisibility::all_visible(7);
        assert_eq!(v.profile_id, 7);
        for section in [
            CareerSection::WorkExperience,
            CareerSection::Courses,
            CareerSection::Recognitions,
            CareerSection::AcademicProducts,
            CareerSection::WorkProducts,
            CareerSection::GarageSale,
        ] {
            assert!(v.shows(section));
        }
    }

    #[test]
    fn shows_reads_matching_flag() {
        let flags = SectionVisibilityFlags {
            show_garage_sale: false,
            ..Default::default()
        };
        let v = SectionVisibility::from_flags(1, flags);

        assert!(!v.shows(CareerSection::GarageSale));
        assert!(v.shows(CareerSection::Courses));
    }

    #[test]
    fn flags_default_to_true_when_omitted() {
        let flags: SectionVisibilityFlags =
            serde_json::from_str(r#"{"show_courses": false}"#).unwrap();
        assert!(!flags.show_courses);
        assert!(flags.show_recognitions);
    }

    #[test]
    fn sex_round_trips_through_str() {
        assert_eq!("H".parse::<Sex>().unwrap(), Sex::H);
        assert_eq!(Sex::M.as_str(), "M");
        assert!("X".parse::<Sex>().is_err());
    }
}
