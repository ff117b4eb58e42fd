use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "garage_sale_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(indexed)]
    pub profile_id: i32,

    #[sea_orm(string_len = 100)]
    pub product_name: String,

    // "bueno" | "regular"
    #[sea_orm(string_len = 10)]
    pub condition: String,

    #[sea_orm(string_len = 100)]
    pub description: String,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub value: Decimal,

    pub published_on: Date,
    pub available: bool,

    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,

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
