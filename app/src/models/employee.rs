use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub date_of_joining: Option<Date>,
    pub department_id: Option<i32>,
    pub designation: Option<String>,
    pub salary: Option<f64>,
    pub pf_enabled: bool,
    pub tds_enabled: bool,
    /// Defaults to "Active" in the store.
    pub status: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id",
        on_delete = "SetNull"
    )]
    Department,
    #[sea_orm(has_many = "super::leave::Entity")]
    Leave,
    #[sea_orm(has_many = "super::leave_balance::Entity")]
    LeaveBalance,
    #[sea_orm(has_many = "super::attendance_log::Entity")]
    AttendanceLog,
    #[sea_orm(has_many = "super::timesheet::Entity")]
    Timesheet,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::leave::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Leave.def()
    }
}

impl Related<super::leave_balance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeaveBalance.def()
    }
}

impl Related<super::attendance_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceLog.def()
    }
}

impl Related<super::timesheet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Timesheet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Default, Deserialize)]
pub struct NewEmployee {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_joining: Option<Date>,
    pub department_id: Option<i32>,
    pub designation: Option<String>,
    pub salary: Option<f64>,
    pub pf_enabled: Option<bool>,
    pub tds_enabled: Option<bool>,
}

/// Only the contact fields are editable once an employee exists.
#[derive(Debug, Default, Deserialize)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub phone: Option<String>,
}
