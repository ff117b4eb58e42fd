use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter, Set,
};
use std::sync::Arc;
use tracing::debug;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::section_visibilities::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::profile::application::domain::entities::{
    SectionVisibility, SectionVisibilityFlags,
};
use crate::modules::profile::application::ports::outgoing::{
    SectionVisibilityRepository, SectionVisibilityRepositoryError,
};

#[derive(Clone)]
pub struct SectionVisibilityRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SectionVisibilityRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn insert(
        &self,
        profile_id: i32,
        flags: SectionVisibilityFlags,
    ) -> Result<section_visibilities::Model, DbErr> {
        ActiveModel {
            id: NotSet,
            profile_id: Set(profile_id),
            show_work_experience: Set(flags.show_work_experience),
            show_courses: Set(flags.show_courses),
            show_recognitions: Set(flags.show_recognitions),
            show_academic_products: Set(flags.show_academic_products),
            show_work_products: Set(flags.show_work_products),
            show_garage_sale: Set(flags.show_garage_sale),
        }
        .insert(&*self.db)
        .await
    }
}

#[async_trait]
impl SectionVisibilityRepository for SectionVisibilityRepositoryPostgres {
    async fn get_or_create(
        &self,
        profile_id: i32,
    ) -> Result<SectionVisibility, SectionVisibilityRepositoryError> {
        if let Some(existing) = self.find_by_profile(profile_id).await? {
            return Ok(existing);
        }

        match self
            .insert(profile_id, SectionVisibilityFlags::default())
            .await
        {
            Ok(model) => Ok(model_to_visibility(model)),
            // Lost a race against a concurrent create: the unique profile_id
            // guarantees the other row is the one to return.
            Err(e) if is_unique_violation(&e) => {
                debug!(profile_id, "section visibility created concurrently");
                self.find_by_profile(profile_id)
                    .await?
                    .ok_or_else(|| SectionVisibilityRepositoryError::DatabaseError(e.to_string()))
            }
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn find_by_profile(
        &self,
        profile_id: i32,
    ) -> Result<Option<SectionVisibility>, SectionVisibilityRepositoryError> {
        let model = Entity::find()
            .filter(Column::ProfileId.eq(profile_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(model_to_visibility))
    }

    async fn update(
        &self,
        profile_id: i32,
        flags: SectionVisibilityFlags,
    ) -> Result<SectionVisibility, SectionVisibilityRepositoryError> {
        let changes = ActiveModel {
            show_work_experience: Set(flags.show_work_experience),
            show_courses: Set(flags.show_courses),
            show_recognitions: Set(flags.show_recognitions),
            show_academic_products: Set(flags.show_academic_products),
            show_work_products: Set(flags.show_work_products),
            show_garage_sale: Set(flags.show_garage_sale),
            ..Default::default()
        };

        let updated = Entity::update_many()
            .set(changes)
            .filter(Column::ProfileId.eq(profile_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        if let Some(model) = updated.into_iter().next() {
            return Ok(model_to_visibility(model));
        }

        let model = self.insert(profile_id, flags).await.map_err(map_db_err)?;
        Ok(model_to_visibility(model))
    }
}

fn model_to_visibility(model: section_visibilities::Model) -> SectionVisibility {
    SectionVisibility {
        profile_id: model.profile_id,
        show_work_experience: model.show_work_experience,
        show_courses: model.show_courses,
        show_recognitions: model.show_recognitions,
        show_academic_products: model.show_academic_products,
        show_work_products: model.show_work_products,
        show_garage_sale: model.show_garage_sale,
    }
}

fn is_unique_violation(e: &DbErr) -> bool {
    let msg = e.to_string().to_lowercase();
    msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505")
}

fn map_db_err(e: DbErr) -> SectionVisibilityRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("foreign key") || msg.contains("23503") {
        SectionVisibilityRepositoryError::ProfileNotFound
    } else {
        SectionVisibilityRepositoryError::DatabaseError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn model(profile_id: i32, show_courses: bool) -> section_visibilities::Model {
        section_visibilities::Model {
            id: 10,
            profile_id,
            show_work_experience: true,
            show_courses,
            show_recognitions: true,
            show_academic_products: true,
            show_work_products: true,
            show_garage_sale: true,
        }
    }

    fn repo(db: MockDatabase) -> SectionVisibilityRepositoryPostgres {
        SectionVisibilityRepositoryPostgres::new(Arc::new(db.into_connection()))
    }

    #[tokio::test]
    async fn get_or_create_returns_existing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(4, false)]]);

        let row = repo(db).get_or_create(4).await.unwrap();

        assert!(!row.show_courses);
    }

    #[tokio::test]
    async fn get_or_create_inserts_all_visible_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<section_visibilities::Model>::new()])
            .append_query_results(vec![vec![model(4, true)]]);

        let row = repo(db).get_or_create(4).await.unwrap();

        assert_eq!(row, SectionVisibility::all_visible(4));
    }

    #[tokio::test]
    async fn get_or_create_refetches_after_concurrent_insert() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<section_visibilities::Model>::new()])
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint".to_string(),
            )])
            .append_query_results(vec![vec![model(4, true)]]);

        let row = repo(db).get_or_create(4).await.unwrap();

        assert_eq!(row.profile_id, 4);
    }

    #[tokio::test]
    async fn get_or_create_unknown_profile() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<section_visibilities::Model>::new()])
            .append_query_errors(vec![DbErr::Custom(
                "insert violates foreign key constraint \"fk_section_visibilities_profile\""
                    .to_string(),
            )]);

        assert_eq!(
            repo(db).get_or_create(4).await.unwrap_err(),
            SectionVisibilityRepositoryError::ProfileNotFound
        );
    }

    #[tokio::test]
    async fn update_existing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(2, false)]]);

        let flags = SectionVisibilityFlags {
            show_courses: false,
            ..Default::default()
        };
        let row = repo(db).update(2, flags).await.unwrap();

        assert!(!row.show_courses);
    }

    #[tokio::test]
    async fn update_creates_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<section_visibilities::Model>::new()])
            .append_query_results(vec![vec![model(2, false)]]);

        let flags = SectionVisibilityFlags {
            show_courses: false,
            ..Default::default()
        };
        let row = repo(db).update(2, flags).await.unwrap();

        assert_eq!(row.profile_id, 2);
        assert!(!row.show_courses);
    }
}
