use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "work_experiences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(indexed)]
    pub profile_id: i32,

    #[sea_orm(string_len = 100)]
    pub position: String,

    #[sea_orm(string_len = 50)]
    pub company_name: String,

    #[sea_orm(string_len = 50)]
    pub company_location: String,

    #[sea_orm(string_len = 100, nullable)]
    pub company_email: Option<String>,

    #[sea_orm(string_len = 100, nullable)]
    pub company_website: Option<String>,

    #[sea_orm(string_len = 100, nullable)]
    pub contact_name: Option<String>,

    #[sea_orm(string_len = 60, nullable)]
    pub contact_phone: Option<String>,

    pub start_date: Date,

    #[sea_orm(nullable)]
    pub end_date: Option<Date>,

    #[sea_orm(string_len = 100)]
    pub responsibilities: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub certificate_url: Option<String>,

    pub visible: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::Entity",
        from = "Column::ProfileId",
        to = "crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Profiles,
}

impl Related<crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
