use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::profile::application::domain::entities::{Profile, ProfileData, Sex};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn create(&self, data: ProfileData) -> Result<Profile, ProfileRepositoryError> {
        let model = to_active_model(data);

        let result = model
            .insert(&*self.db)
            .await
            .map_err(map_national_id_error)?;

        model_to_profile(result)
    }

    async fn update(&self, id: i32, data: ProfileData) -> Result<Profile, ProfileRepositoryError> {
        let results = Entity::update_many()
            .set(to_active_model(data))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_national_id_error)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProfileRepositoryError::NotFound)?;

        model_to_profile(result)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Profile>, ProfileRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_profile)
            .transpose()
    }

    async fn list(&self) -> Result<Vec<Profile>, ProfileRepositoryError> {
        Entity::find()
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_profile)
            .collect()
    }

    async fn delete(&self, id: i32) -> Result<(), ProfileRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProfileRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn to_active_model(data: ProfileData) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        description: Set(data.description),
        active_flag: Set(data.active_flag),
        last_names: Set(data.last_names),
        first_names: Set(data.first_names),
        nationality: Set(data.nationality),
        birthplace: Set(data.birthplace),
        birth_date: Set(data.birth_date),
        national_id: Set(data.national_id),
        sex: Set(data.sex.as_str().to_string()),
        marital_status: Set(data.marital_status),
        driver_license: Set(data.driver_license),
        landline_phone: Set(data.landline_phone),
        phone: Set(data.phone),
        work_address: Set(data.work_address),
        home_address: Set(data.home_address),
        website: Set(data.website),
        photo_url: Set(data.photo_url),
    }
}

fn model_to_profile(model: profiles::Model) -> Result<Profile, ProfileRepositoryError> {
    let sex = model
        .sex
        .parse::<Sex>()
        .map_err(ProfileRepositoryError::DatabaseError)?;

    Ok(Profile {
        id: model.id,
        description: model.description,
        active_flag: model.active_flag,
        last_names: model.last_names,
        first_names: model.first_names,
        nationality: model.nationality,
        birthplace: model.birthplace,
        birth_date: model.birth_date,
        national_id: model.national_id,
        sex,
        marital_status: model.marital_status,
        driver_license: model.driver_license,
        landline_phone: model.landline_phone,
        phone: model.phone,
        work_address: model.work_address,
        home_address: model.home_address,
        website: model.website,
        photo_url: model.photo_url,
    })
}

fn map_national_id_error(e: DbErr) -> ProfileRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("national_id")
    {
        ProfileRepositoryError::NationalIdAlreadyExists
    } else {
        ProfileRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
