use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::modules::admin::application::admin_form::AdminForm;
use crate::modules::career::application::domain::entities::{
    AcademicProduct, AcademicProductData, CompletedCourse, CompletedCourseData, GarageSaleItem,
    GarageSaleItemData, Recognition, RecognitionData, WorkExperience, WorkExperienceData,
    WorkProduct, WorkProductData,
};
use crate::modules::career::application::forms::{
    AcademicProductForm, CompletedCourseForm, GarageSaleItemForm, RecognitionForm,
    WorkExperienceForm, WorkProductForm,
};
use crate::modules::profile::application::domain::entities::CareerSection;

/// A career fact: a record attached to one profile, individually publishable
/// through its `visible` flag and grouped under one CV section.
pub trait CareerRecord: Clone + Serialize + Send + Sync + 'static {
    type Data: Clone + Send + Sync + 'static;
    type Form: AdminForm<Data = Self::Data> + DeserializeOwned + 'static;

    const SECTION: CareerSection;

    fn id(&self) -> i32;
    fn profile_id(&self) -> i32;
    fn is_visible(&self) -> bool;
    fn from_data(id: i32, data: Self::Data) -> Self;
}

impl CareerRecord for WorkExperience {
    type Data = WorkExperienceData;
    type Form = WorkExperienceForm;

    const SECTION: CareerSection = CareerSection::WorkExperience;

    fn id(&self) -> i32 {
        self.id
    }

    fn profile_id(&self) -> i32 {
        self.profile_id
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn from_data(id: i32, d: WorkExperienceData) -> Self {
        Self {
            id,
            profile_id: d.profile_id,
            position: d.position,
            company_name: d.company_name,
            company_location: d.company_location,
            company_email: d.company_email,
            company_website: d.company_website,
            contact_name: d.contact_name,
            contact_phone: d.contact_phone,
            start_date: d.start_date,
            end_date: d.end_date,
            responsibilities: d.responsibilities,
            certificate_url: d.certificate_url,
            visible: d.visible,
        }
    }
}

impl CareerRecord for Recognition {
    type Data = RecognitionData;
    type Form = RecognitionForm;

    const SECTION: CareerSection = CareerSection::Recognitions;

    fn id(&self) -> i32 {
        self.id
    }

    fn profile_id(&self) -> i32 {
        self.profile_id
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn from_data(id: i32, d: RecognitionData) -> Self {
        Self {
            id,
            profile_id: d.profile_id,
            kind: d.kind,
            awarded_on: d.awarded_on,
            description: d.description,
            sponsor: d.sponsor,
            contact_name: d.contact_name,
            contact_phone: d.contact_phone,
            certificate_url: d.certificate_url,
            visible: d.visible,
        }
    }
}

impl CareerRecord for CompletedCourse {
    type Data = CompletedCourseData;
    type Form = CompletedCourseForm;

    const SECTION: CareerSection = CareerSection::Courses;

    fn id(&self) -> i32 {
        self.id
    }

    fn profile_id(&self) -> i32 {
        self.profile_id
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn from_data(id: i32, d: CompletedCourseData) -> Self {
        Self {
            id,
            profile_id: d.profile_id,
            name: d.name,
            start_date: d.start_date,
            end_date: d.end_date,
            total_hours: d.total_hours,
            description: d.description,
            sponsor: d.sponsor,
            contact_name: d.contact_name,
            contact_phone: d.contact_phone,
            sponsor_email: d.sponsor_email,
            certificate_url: d.certificate_url,
            visible: d.visible,
        }
    }
}

impl CareerRecord for AcademicProduct {
    type Data = AcademicProductData;
    type Form = AcademicProductForm;

    const SECTION: CareerSection = CareerSection::AcademicProducts;

    fn id(&self) -> i32 {
        self.id
    }

    fn profile_id(&self) -> i32 {
        self.profile_id
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn from_data(id: i32, d: AcademicProductData) -> Self {
        Self {
            id,
            profile_id: d.profile_id,
            resource_name: d.resource_name,
            classifier: d.classifier,
            description: d.description,
            visible: d.visible,
        }
    }
}

impl CareerRecord for WorkProduct {
    type Data = WorkProductData;
    type Form = WorkProductForm;

    const SECTION: CareerSection = CareerSection::WorkProducts;

    fn id(&self) -> i32 {
        self.id
    }

    fn profile_id(&self) -> i32 {
        self.profile_id
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn from_data(id: i32, d: WorkProductData) -> Self {
        Self {
            id,
            profile_id: d.profile_id,
            product_name: d.product_name,
            produced_on: d.produced_on,
            description: d.description,
            visible: d.visible,
        }
    }
}

impl CareerRecord for GarageSaleItem {
    type Data = GarageSaleItemData;
    type Form = GarageSaleItemForm;

    const SECTION: CareerSection = CareerSection::GarageSale;

    fn id(&self) -> i32 {
        self.id
    }

    fn profile_id(&self) -> i32 {
        self.profile_id
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn from_data(id: i32, d: GarageSaleItemData) -> Self {
        Self {
            id,
            profile_id: d.profile_id,
            product_name: d.product_name,
            condition: d.condition,
            description: d.description,
            value: d.value,
            published_on: d.published_on,
            available: d.available,
            image_url: d.image_url,
            visible: d.visible,
        }
    }
}
