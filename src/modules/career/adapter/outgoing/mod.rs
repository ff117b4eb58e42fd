mod career_repository_postgres;
mod career_table;
pub mod sea_orm_entity;

pub use career_repository_postgres::CareerRepositoryPostgres;
pub use career_table::CareerTable;
