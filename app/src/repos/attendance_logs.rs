use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::{
    models::attendance_log::{
        self, ActiveModel, AttendanceLogChanges, Entity, Model as AttendanceLog, NewAttendanceLog,
    },
    repos::crud::CrudRepo,
    utils::fields::{provided, provided_nullable, replaced},
};

pub type AttendanceLogsRepo = CrudRepo<Entity>;

impl AttendanceLogsRepo {
    pub async fn create(&self, payload: NewAttendanceLog) -> Result<AttendanceLog, DbErr> {
        let log = ActiveModel {
            employee_id: provided(payload.employee_id),
            date: provided(payload.date),
            check_in: provided_nullable(payload.check_in),
            check_out: provided_nullable(payload.check_out),
            status: provided_nullable(payload.status),
            ..Default::default()
        };

        log.insert(&self.db).await
    }

    pub async fn update(
        &self,
        id: i32,
        payload: AttendanceLogChanges,
    ) -> Result<AttendanceLog, DbErr> {
        let log = ActiveModel {
            id: Unchanged(id),
            check_in: replaced(payload.check_in),
            check_out: replaced(payload.check_out),
            status: replaced(payload.status),
            ..Default::default()
        };

        log.update(&self.db).await
    }

    /// Rows for one employee with `date` in `[start, end]`.
    pub async fn get_by_employee_between(
        &self,
        employee_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AttendanceLog>, DbErr> {
        Entity::find()
            .filter(attendance_log::Column::EmployeeId.eq(employee_id))
            .filter(attendance_log::Column::Date.between(start, end))
            .all(&self.db)
            .await
    }
}
