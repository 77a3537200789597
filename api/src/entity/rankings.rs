use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "rankings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub fighter_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub weight_class_id: Uuid,
    pub points: i32,
    pub rank: i32,
    pub last_updated: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fighters::Entity",
        from = "Column::FighterId",
        to = "super::fighters::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Fighters,
    #[sea_orm(
        belongs_to = "super::weight_classes::Entity",
        from = "Column::WeightClassId",
        to = "super::weight_classes::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    WeightClasses,
}

impl Related<super::fighters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fighters.def()
    }
}

impl Related<super::weight_classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeightClasses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
