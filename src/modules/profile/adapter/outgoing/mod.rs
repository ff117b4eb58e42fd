mod profile_repository_postgres;
pub mod sea_orm_entity;
mod section_visibility_repository_postgres;

pub use profile_repository_postgres::ProfileRepositoryPostgres;
pub use section_visibility_repository_postgres::SectionVisibilityRepositoryPostgres;
