use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "attendance_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub employee_id: i32,
    pub date: Date,
    pub check_in: Option<Time>,
    pub check_out: Option<Time>,
    pub status: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id",
        on_delete = "Cascade"
    )]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Default, Deserialize)]
pub struct NewAttendanceLog {
    pub employee_id: Option<i32>,
    pub date: Option<Date>,
    pub check_in: Option<Time>,
    pub check_out: Option<Time>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AttendanceLogChanges {
    pub check_in: Option<Time>,
    pub check_out: Option<Time>,
    pub status: Option<String>,
}
