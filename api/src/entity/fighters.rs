use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "fighters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
    pub birthdate: Option<Date>,
    pub nationality: Option<String>,
    pub height_cm: Option<i32>,
    pub weight_kg: Option<i32>,
    pub reach_cm: Option<i32>,
    pub stance: Option<String>,
    pub gym: Option<String>,
    pub weight_class_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::weight_classes::Entity",
        from = "Column::WeightClassId",
        to = "super::weight_classes::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    WeightClasses,
}

impl Related<super::weight_classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeightClasses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
