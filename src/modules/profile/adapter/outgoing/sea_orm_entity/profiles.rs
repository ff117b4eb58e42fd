use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(string_len = 50)]
    pub description: String,

    pub active_flag: i32,

    #[sea_orm(string_len = 60)]
    pub last_names: String,

    #[sea_orm(string_len = 60)]
    pub first_names: String,

    #[sea_orm(string_len = 20)]
    pub nationality: String,

    #[sea_orm(string_len = 60)]
    pub birthplace: String,

    pub birth_date: Date,

    #[sea_orm(string_len = 10, unique)]
    pub national_id: String,

    // "H" | "M"
    #[sea_orm(string_len = 1)]
    pub sex: String,

    #[sea_orm(string_len = 50)]
    pub marital_status: String,

    #[sea_orm(string_len = 6)]
    pub driver_license: String,

    #[sea_orm(string_len = 15)]
    pub landline_phone: String,

    #[sea_orm(string_len = 15)]
    pub phone: String,

    #[sea_orm(string_len = 50)]
    pub work_address: String,

    #[sea_orm(string_len = 50)]
    pub home_address: String,

    #[sea_orm(string_len = 60)]
    pub website: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub photo_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_one = "crate::modules::profile::adapter::outgoing::sea_orm_entity::section_visibilities::Entity"
    )]
    SectionVisibilities,
}

impl Related<super::section_visibilities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SectionVisibilities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
