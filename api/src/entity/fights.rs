use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "fights")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub event_id: Option<Uuid>,
    pub fighter_red_id: Uuid,
    pub fighter_blue_id: Uuid,
    pub winner_id: Option<Uuid>,
    pub is_draw: bool,
    pub method: Option<String>,
    pub round: Option<i32>,
    pub time: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub result_details: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::events::Entity",
        from = "Column::EventId",
        to = "super::events::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Events,
    #[sea_orm(
        belongs_to = "super::fighters::Entity",
        from = "Column::FighterRedId",
        to = "super::fighters::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FighterRed,
    #[sea_orm(
        belongs_to = "super::fighters::Entity",
        from = "Column::FighterBlueId",
        to = "super::fighters::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FighterBlue,
    #[sea_orm(
        belongs_to = "super::fighters::Entity",
        from = "Column::WinnerId",
        to = "super::fighters::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Winner,
}

// Three paths lead to fighters, so only the event relation gets a `Related` impl
impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Events.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
