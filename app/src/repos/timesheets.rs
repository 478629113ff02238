use chrono::{Days, NaiveDate};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::{
    models::timesheet::{
        self, ActiveModel, Entity, Model as Timesheet, NewTimesheet, TimesheetChanges,
    },
    repos::crud::CrudRepo,
    utils::fields::{provided, provided_nullable, replaced},
};

pub type TimesheetsRepo = CrudRepo<Entity>;

/// Last day of the seven-day window starting at `start`.
pub fn week_end(start: NaiveDate) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(6))
}

impl TimesheetsRepo {
    pub async fn create(&self, payload: NewTimesheet) -> Result<Timesheet, DbErr> {
        let timesheet = ActiveModel {
            employee_id: provided(payload.employee_id),
            project_id: provided(payload.project_id),
            log_date: provided(payload.log_date),
            hours: provided(payload.hours),
            notes: provided_nullable(payload.notes),
            ..Default::default()
        };

        timesheet.insert(&self.db).await
    }

    pub async fn update(&self, id: i32, payload: TimesheetChanges) -> Result<Timesheet, DbErr> {
        let timesheet = ActiveModel {
            id: Unchanged(id),
            project_id: provided(payload.project_id),
            log_date: provided(payload.log_date),
            hours: provided(payload.hours),
            notes: replaced(payload.notes),
            ..Default::default()
        };

        timesheet.update(&self.db).await
    }

    pub async fn get_by_employee(&self, employee_id: i32) -> Result<Vec<Timesheet>, DbErr> {
        Entity::find()
            .filter(timesheet::Column::EmployeeId.eq(employee_id))
            .all(&self.db)
            .await
    }

    /// Rows for one employee with `log_date` in `[start, end]`.
    pub async fn get_by_employee_between(
        &self,
        employee_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Timesheet>, DbErr> {
        Entity::find()
            .filter(timesheet::Column::EmployeeId.eq(employee_id))
            .filter(timesheet::Column::LogDate.between(start, end))
            .all(&self.db)
            .await
    }

    pub async fn get_by_employee_on(
        &self,
        employee_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<Timesheet>, DbErr> {
        Entity::find()
            .filter(timesheet::Column::EmployeeId.eq(employee_id))
            .filter(timesheet::Column::LogDate.eq(date))
            .all(&self.db)
            .await
    }
}
