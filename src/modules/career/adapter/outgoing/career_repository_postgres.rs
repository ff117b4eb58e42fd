use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder,
};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::modules::career::adapter::outgoing::career_table::CareerTable;
use crate::modules::career::application::ports::outgoing::{
    CareerRepository, CareerRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

/// Postgres storage for one career fact table. Rows come back ordered by id.
pub struct CareerRepositoryPostgres<T> {
    db: Arc<DatabaseConnection>,
    _record: PhantomData<fn() -> T>,
}

impl<T> CareerRepositoryPostgres<T> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _record: PhantomData,
        }
    }
}

impl<T> Clone for CareerRepositoryPostgres<T> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.db))
    }
}

#[async_trait]
impl<T> CareerRepository<T> for CareerRepositoryPostgres<T>
where
    T: CareerTable,
    <T::Entity as EntityTrait>::Model:
        IntoActiveModel<<T::Entity as EntityTrait>::ActiveModel> + Send + Sync,
    <T::Entity as EntityTrait>::ActiveModel: Send + Sync,
{
    async fn create(&self, data: T::Data) -> Result<T, CareerRepositoryError> {
        let model = T::to_active_model(data)
            .insert(&*self.db)
            .await
            .map_err(map_write_err)?;

        T::from_model(model)
    }

    async fn update(&self, id: i32, data: T::Data) -> Result<T, CareerRepositoryError> {
        let results = <T::Entity as EntityTrait>::update_many()
            .set(T::to_active_model(data))
            .filter(T::id_column().eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_write_err)?;

        let model = results
            .into_iter()
            .next()
            .ok_or(CareerRepositoryError::NotFound)?;

        T::from_model(model)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<T>, CareerRepositoryError> {
        <T::Entity as EntityTrait>::find()
            .filter(T::id_column().eq(id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(T::from_model)
            .transpose()
    }

    async fn list(&self, profile_id: Option<i32>) -> Result<Vec<T>, CareerRepositoryError> {
        let mut query = <T::Entity as EntityTrait>::find();
        if let Some(profile_id) = profile_id {
            query = query.filter(T::profile_column().eq(profile_id));
        }

        query
            .order_by_asc(T::id_column())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(T::from_model)
            .collect()
    }

    async fn list_visible_for_profile(
        &self,
        profile_id: i32,
    ) -> Result<Vec<T>, CareerRepositoryError> {
        <T::Entity as EntityTrait>::find()
            .filter(T::profile_column().eq(profile_id))
            .filter(T::visible_column().eq(true))
            .order_by_asc(T::id_column())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(T::from_model)
            .collect()
    }

    async fn delete(&self, id: i32) -> Result<(), CareerRepositoryError> {
        let result = <T::Entity as EntityTrait>::delete_many()
            .filter(T::id_column().eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CareerRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_write_err(e: DbErr) -> CareerRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("foreign key") || msg.contains("23503") {
        CareerRepositoryError::ProfileNotFound
    } else {
        CareerRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> CareerRepositoryError {
    CareerRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
