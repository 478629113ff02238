use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "feedbacks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub from_employee: i32,
    pub to_employee: i32,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub submitted_on: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::FromEmployee",
        to = "super::employee::Column::Id",
        on_delete = "Cascade"
    )]
    Sender,
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::ToEmployee",
        to = "super::employee::Column::Id",
        on_delete = "Cascade"
    )]
    Recipient,
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Default, Deserialize)]
pub struct NewFeedback {
    pub from_employee: Option<i32>,
    pub to_employee: Option<i32>,
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeedbackChanges {
    pub message: Option<String>,
}
