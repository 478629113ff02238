use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    models::{
        attendance_log,
        employee::{self, ActiveModel, EmployeeChanges, Entity, Model as Employee, NewEmployee},
    },
    repos::crud::CrudRepo,
    utils::fields::{provided, provided_nullable, replaced},
};

pub type EmployeesRepo = CrudRepo<Entity>;

impl EmployeesRepo {
    pub async fn create(&self, payload: NewEmployee) -> Result<Employee, DbErr> {
        let employee = ActiveModel {
            name: provided(payload.name),
            email: provided(payload.email),
            phone: provided_nullable(payload.phone),
            date_of_joining: provided_nullable(payload.date_of_joining),
            department_id: provided_nullable(payload.department_id),
            designation: provided_nullable(payload.designation),
            salary: provided_nullable(payload.salary),
            pf_enabled: provided(payload.pf_enabled),
            tds_enabled: provided(payload.tds_enabled),
            ..Default::default()
        };

        employee.insert(&self.db).await
    }

    pub async fn update(&self, id: i32, payload: EmployeeChanges) -> Result<Employee, DbErr> {
        let employee = ActiveModel {
            id: Unchanged(id),
            name: provided(payload.name),
            phone: replaced(payload.phone),
            ..Default::default()
        };

        employee.update(&self.db).await
    }

    pub async fn get_by_department(&self, department_id: i32) -> Result<Vec<Employee>, DbErr> {
        Entity::find()
            .filter(employee::Column::DepartmentId.eq(department_id))
            .all(&self.db)
            .await
    }

    /// Employees without any attendance row on `date`. A row with only a
    /// check-in still counts as present.
    pub async fn get_missing_attendance(&self, date: chrono::NaiveDate) -> Result<Vec<Employee>, DbErr> {
        let present = Query::select()
            .column(attendance_log::Column::EmployeeId)
            .from(attendance_log::Entity)
            .and_where(attendance_log::Column::Date.eq(date))
            .to_owned();

        Entity::find()
            .filter(employee::Column::Id.not_in_subquery(present))
            .all(&self.db)
            .await
    }
}
