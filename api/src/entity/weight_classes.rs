use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "weight_classes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub min_weight_kg: i32,
    pub max_weight_kg: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fighters::Entity")]
    Fighters,
    #[sea_orm(has_many = "super::rankings::Entity")]
    Rankings,
}

impl Related<super::fighters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fighters.def()
    }
}

impl Related<super::rankings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rankings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
