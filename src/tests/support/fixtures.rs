use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use crate::modules::career::application::domain::entities::{
    GarageSaleItem, ItemCondition, Recognition, RecognitionKind,
};
use crate::modules::career::application::forms::{
    CompletedCourseForm, GarageSaleItemForm, RecognitionForm, WorkExperienceForm,
};
use crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles;
use crate::modules::profile::application::domain::entities::{Profile, ProfileData, Sex};
use crate::modules::profile::application::forms::ProfileForm;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Profile
// ============================================================================

pub fn valid_profile_form() -> ProfileForm {
    ProfileForm {
        description: "Desarrollador backend".to_string(),
        active_flag: Some(1),
        last_names: "Pérez Gómez".to_string(),
        first_names: "Ana María".to_string(),
        nationality: "Ecuatoriana".to_string(),
        birthplace: "Manta".to_string(),
        birth_date: Some(date(2000, 5, 1)),
        national_id: "1312345678".to_string(),
        sex: Some(Sex::M),
        marital_status: "Soltera".to_string(),
        driver_license: "B".to_string(),
        landline_phone: "052123456".to_string(),
        phone: "0991234567".to_string(),
        work_address: "Av. Universitaria".to_string(),
        home_address: "Calle 13".to_string(),
        website: "https://ana.dev".to_string(),
        photo_url: None,
        photo_upload: None,
    }
}

/// Same profile as `valid_profile_form`, as the admin client would post it.
pub fn valid_profile_json() -> Value {
    json!({
        "description": "Desarrollador backend",
        "active_flag": 1,
        "last_names": "Pérez Gómez",
        "first_names": "Ana María",
        "nationality": "Ecuatoriana",
        "birthplace": "Manta",
        "birth_date": "2000-05-01",
        "national_id": "1312345678",
        "sex": "M",
        "marital_status": "Soltera",
        "driver_license": "B",
        "landline_phone": "052123456",
        "phone": "0991234567",
        "work_address": "Av. Universitaria",
        "home_address": "Calle 13",
        "website": "https://ana.dev"
    })
}

pub fn sample_profile_data() -> ProfileData {
    ProfileData {
        description: "Desarrollador backend".to_string(),
        active_flag: 1,
        last_names: "Pérez Gómez".to_string(),
        first_names: "Ana María".to_string(),
        nationality: "Ecuatoriana".to_string(),
        birthplace: "Manta".to_string(),
        birth_date: date(2000, 5, 1),
        national_id: "1312345678".to_string(),
        sex: Sex::M,
        marital_status: "Soltera".to_string(),
        driver_license: "B".to_string(),
        landline_phone: "052123456".to_string(),
        phone: "0991234567".to_string(),
        work_address: "Av. Universitaria".to_string(),
        home_address: "Calle 13".to_string(),
        website: "https://ana.dev".to_string(),
        photo_url: None,
    }
}

pub fn sample_profile(id: i32) -> Profile {
    Profile::from_data(id, sample_profile_data())
}

pub fn sample_profile_model(id: i32) -> profiles::Model {
    let data = sample_profile_data();

    profiles::Model {
        id,
        description: data.description,
        active_flag: data.active_flag,
        last_names: data.last_names,
        first_names: data.first_names,
        nationality: data.nationality,
        birthplace: data.birthplace,
        birth_date: data.birth_date,
        national_id: data.national_id,
        sex: data.sex.as_str().to_string(),
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

// ============================================================================
// Career facts
// ============================================================================

pub fn valid_work_experience_form() -> WorkExperienceForm {
    WorkExperienceForm {
        profile_id: Some(1),
        position: "Analista de sistemas".to_string(),
        company_name: "Corporación Manabita".to_string(),
        company_location: "Portoviejo".to_string(),
        company_email: Some("rrhh@manabita.ec".to_string()),
        company_website: Some("https://manabita.ec".to_string()),
        contact_name: Some("Luis Vera".to_string()),
        contact_phone: Some("0987654321".to_string()),
        start_date: Some(date(2020, 1, 6)),
        end_date: Some(date(2023, 8, 31)),
        responsibilities: "Mantenimiento de sistemas internos".to_string(),
        certificate_url: None,
        visible: true,
    }
}

pub fn valid_recognition_form() -> RecognitionForm {
    RecognitionForm {
        profile_id: Some(1),
        kind: Some(RecognitionKind::Academico),
        awarded_on: Some(date(2019, 7, 15)),
        description: "Mejor promedio de la promoción".to_string(),
        sponsor: "ULEAM".to_string(),
        contact_name: None,
        contact_phone: None,
        certificate_url: None,
        certificate_upload: None,
        visible: true,
    }
}

pub fn valid_completed_course_form() -> CompletedCourseForm {
    CompletedCourseForm {
        profile_id: Some(1),
        name: "Rust para servicios web".to_string(),
        start_date: Some(date(2022, 1, 10)),
        end_date: Some(date(2022, 3, 10)),
        total_hours: Some(40),
        description: "Curso práctico de backend".to_string(),
        sponsor: "ESPAM".to_string(),
        contact_name: None,
        contact_phone: None,
        sponsor_email: Some("cursos@espam.edu.ec".to_string()),
        certificate_url: Some("https://cdn/certificates/old.pdf".to_string()),
        certificate_upload: None,
        visible: true,
    }
}

pub fn valid_garage_sale_item_form() -> GarageSaleItemForm {
    GarageSaleItemForm {
        profile_id: Some(1),
        product_name: "Silla de escritorio".to_string(),
        condition: Some(ItemCondition::Bueno),
        description: "Ergonómica, poco uso".to_string(),
        value: Some(Decimal::new(2550, 2)),
        published_on: Some(date(2024, 6, 1)),
        available: true,
        image_url: None,
        image_upload: None,
        visible: true,
    }
}

pub fn sample_recognition(id: i32, profile_id: i32) -> Recognition {
    Recognition {
        id,
        profile_id,
        kind: RecognitionKind::Academico,
        awarded_on: date(2019, 7, 15),
        description: "Mejor promedio de la promoción".to_string(),
        sponsor: "ULEAM".to_string(),
        contact_name: None,
        contact_phone: None,
        certificate_url: Some("https://cdn/certificates/cert.pdf".to_string()),
        visible: true,
    }
}

pub fn sample_garage_sale_item(id: i32) -> GarageSaleItem {
    GarageSaleItem {
        id,
        profile_id: 1,
        product_name: "Silla de escritorio".to_string(),
        condition: ItemCondition::Bueno,
        description: "Ergonómica, poco uso".to_string(),
        value: Decimal::new(2550, 2),
        published_on: date(2024, 6, 1),
        available: true,
        image_url: None,
        visible: true,
    }
}
