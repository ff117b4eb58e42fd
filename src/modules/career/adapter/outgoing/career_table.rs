use sea_orm::{EntityTrait, NotSet, Set};

use crate::modules::career::adapter::outgoing::sea_orm_entity::{
    academic_products, completed_courses, garage_sale_items, recognitions, work_experiences,
    work_products,
};
use crate::modules::career::application::domain::entities::{
    AcademicProduct, AcademicProductData, CompletedCourse, CompletedCourseData, GarageSaleItem,
    GarageSaleItemData, ItemCondition, Recognition, RecognitionData, RecognitionKind,
    WorkExperience, WorkExperienceData, WorkProduct, WorkProductData,
};
use crate::modules::career::application::domain::CareerRecord;
use crate::modules::career::application::ports::outgoing::CareerRepositoryError;

type ActiveModelOf<T> = <<T as CareerTable>::Entity as EntityTrait>::ActiveModel;
type ModelOf<T> = <<T as CareerTable>::Entity as EntityTrait>::Model;
type ColumnOf<T> = <<T as CareerTable>::Entity as EntityTrait>::Column;

/// Binds a career record type to its table and row mapping.
pub trait CareerTable: CareerRecord {
    type Entity: EntityTrait;

    fn id_column() -> ColumnOf<Self>;
    fn profile_column() -> ColumnOf<Self>;
    fn visible_column() -> ColumnOf<Self>;

    /// Row to write. The id is left unset so it works for insert and update.
    fn to_active_model(data: Self::Data) -> ActiveModelOf<Self>;

    fn from_model(model: ModelOf<Self>) -> Result<Self, CareerRepositoryError>;
}

// ============================================================================
// Work experience
// ============================================================================

impl CareerTable for WorkExperience {
    type Entity = work_experiences::Entity;

    fn id_column() -> work_experiences::Column {
        work_experiences::Column::Id
    }

    fn profile_column() -> work_experiences::Column {
        work_experiences::Column::ProfileId
    }

    fn visible_column() -> work_experiences::Column {
        work_experiences::Column::Visible
    }

    fn to_active_model(d: WorkExperienceData) -> work_experiences::ActiveModel {
        work_experiences::ActiveModel {
            id: NotSet,
            profile_id: Set(d.profile_id),
            position: Set(d.position),
            company_name: Set(d.company_name),
            company_location: Set(d.company_location),
            company_email: Set(d.company_email),
            company_website: Set(d.company_website),
            contact_name: Set(d.contact_name),
            contact_phone: Set(d.contact_phone),
            start_date: Set(d.start_date),
            end_date: Set(d.end_date),
            responsibilities: Set(d.responsibilities),
            certificate_url: Set(d.certificate_url),
            visible: Set(d.visible),
        }
    }

    fn from_model(m: work_experiences::Model) -> Result<Self, CareerRepositoryError> {
        Ok(WorkExperience {
            id: m.id,
            profile_id: m.profile_id,
            position: m.position,
            company_name: m.company_name,
            company_location: m.company_location,
            company_email: m.company_email,
            company_website: m.company_website,
            contact_name: m.contact_name,
            contact_phone: m.contact_phone,
            start_date: m.start_date,
            end_date: m.end_date,
            responsibilities: m.responsibilities,
            certificate_url: m.certificate_url,
            visible: m.visible,
        })
    }
}

// ============================================================================
// Recognition
// ============================================================================

impl CareerTable for Recognition {
    type Entity = recognitions::Entity;

    fn id_column() -> recognitions::Column {
        recognitions::Column::Id
    }

    fn profile_column() -> recognitions::Column {
        recognitions::Column::ProfileId
    }

    fn visible_column() -> recognitions::Column {
        recognitions::Column::Visible
    }

    fn to_active_model(d: RecognitionData) -> recognitions::ActiveModel {
        recognitions::ActiveModel {
            id: NotSet,
            profile_id: Set(d.profile_id),
            kind: Set(d.kind.as_str().to_string()),
            awarded_on: Set(d.awarded_on),
            description: Set(d.description),
            sponsor: Set(d.sponsor),
            contact_name: Set(d.contact_name),
            contact_phone: Set(d.contact_phone),
            certificate_url: Set(d.certificate_url),
            visible: Set(d.visible),
        }
    }

    fn from_model(m: recognitions::Model) -> Result<Self, CareerRepositoryError> {
        let kind = m
            .kind
            .parse::<RecognitionKind>()
            .map_err(CareerRepositoryError::DatabaseError)?;

        Ok(Recognition {
            id: m.id,
            profile_id: m.profile_id,
            kind,
            awarded_on: m.awarded_on,
            description: m.description,
            sponsor: m.sponsor,
            contact_name: m.contact_name,
            contact_phone: m.contact_phone,
            certificate_url: m.certificate_url,
            visible: m.visible,
        })
    }
}

// ============================================================================
// Completed course
// ============================================================================

impl CareerTable for CompletedCourse {
    type Entity = completed_courses::Entity;

    fn id_column() -> completed_courses::Column {
        completed_courses::Column::Id
    }

    fn profile_column() -> completed_courses::Column {
        completed_courses::Column::ProfileId
    }

    fn visible_column() -> completed_courses::Column {
        completed_courses::Column::Visible
    }

    fn to_active_model(d: CompletedCourseData) -> completed_courses::ActiveModel {
        completed_courses::ActiveModel {
            id: NotSet,
            profile_id: Set(d.profile_id),
            name: Set(d.name),
            start_date: Set(d.start_date),
            end_date: Set(d.end_date),
            total_hours: Set(d.total_hours),
            description: Set(d.description),
            sponsor: Set(d.sponsor),
            contact_name: Set(d.contact_name),
            contact_phone: Set(d.contact_phone),
            sponsor_email: Set(d.sponsor_email),
            certificate_url: Set(d.certificate_url),
            visible: Set(d.visible),
        }
    }

    fn from_model(m: completed_courses::Model) -> Result<Self, CareerRepositoryError> {
        Ok(CompletedCourse {
            id: m.id,
            profile_id: m.profile_id,
            name: m.name,
            start_date: m.start_date,
            end_date: m.end_date,
            total_hours: m.total_hours,
            description: m.description,
            sponsor: m.sponsor,
            contact_name: m.contact_name,
            contact_phone: m.contact_phone,
            sponsor_email: m.sponsor_email,
            certificate_url: m.certificate_url,
            visible: m.visible,
        })
    }
}

// ============================================================================
// Academic product
// ============================================================================

impl CareerTable for AcademicProduct {
    type Entity = academic_products::Entity;

    fn id_column() -> academic_products::Column {
        academic_products::Column::Id
    }

    fn profile_column() -> academic_products::Column {
        academic_products::Column::ProfileId
    }

    fn visible_column() -> academic_products::Column {
        academic_products::Column::Visible
    }

    fn to_active_model(d: AcademicProductData) -> academic_products::ActiveModel {
        academic_products::ActiveModel {
            id: NotSet,
            profile_id: Set(d.profile_id),
            resource_name: Set(d.resource_name),
            classifier: Set(d.classifier),
            description: Set(d.description),
            visible: Set(d.visible),
        }
    }

    fn from_model(m: academic_products::Model) -> Result<Self, CareerRepositoryError> {
        Ok(AcademicProduct {
            id: m.id,
            profile_id: m.profile_id,
            resource_name: m.resource_name,
            classifier: m.classifier,
            description: m.description,
            visible: m.visible,
        })
    }
}

// ============================================================================
// Work product
// ============================================================================

impl CareerTable for WorkProduct {
    type Entity = work_products::Entity;

    fn id_column() -> work_products::Column {
        work_products::Column::Id
    }

    fn profile_column() -> work_products::Column {
        work_products::Column::ProfileId
    }

    fn visible_column() -> work_products::Column {
        work_products::Column::Visible
    }

    fn to_active_model(d: WorkProductData) -> work_products::ActiveModel {
        work_products::ActiveModel {
            id: NotSet,
            profile_id: Set(d.profile_id),
            product_name: Set(d.product_name),
            produced_on: Set(d.produced_on),
            description: Set(d.description),
            visible: Set(d.visible),
        }
    }

    fn from_model(m: work_products::Model) -> Result<Self, CareerRepositoryError> {
        Ok(WorkProduct {
            id: m.id,
            profile_id: m.profile_id,
            product_name: m.product_name,
            produced_on: m.produced_on,
            description: m.description,
            visible: m.visible,
        })
    }
}

// ============================================================================
// Garage sale item
// ============================================================================

impl CareerTable for GarageSaleItem {
    type Entity = garage_sale_items::Entity;

    fn id_column() -> garage_sale_items::Column {
        garage_sale_items::Column::Id
    }

    fn profile_column() -> garage_sale_items::Column {
        garage_sale_items::Column::ProfileId
    }

    fn visible_column() -> garage_sale_items::Column {
        garage_sale_items::Column::Visible
    }

    fn to_active_model(d: GarageSaleItemData) -> garage_sale_items::ActiveModel {
        garage_sale_items::ActiveModel {
            id: NotSet,
            profile_id: Set(d.profile_id),
            product_name: Set(d.product_name),
            condition: Set(d.condition.as_str().to_string()),
            description: Set(d.description),
            value: Set(d.value),
            published_on: Set(d.published_on),
            available: Set(d.available),
            image_url: Set(d.image_url),
            visible: Set(d.visible),
        }
    }

    fn from_model(m: garage_sale_items::Model) -> Result<Self, CareerRepositoryError> {
        let condition = m
            .condition
            .parse::<ItemCondition>()
            .map_err(CareerRepositoryError::DatabaseError)?;

        Ok(GarageSaleItem {
            id: m.id,
            profile_id: m.profile_id,
            product_name: m.product_name,
            condition,
            description: m.description,
            value: m.value,
            published_on: m.published_on,
            available: m.available,
            image_url: m.image_url,
            visible: m.visible,
        })
    }
}
