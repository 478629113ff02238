use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    models::leave::{self, ActiveModel, Entity, LeaveChanges, Model as Leave, NewLeave},
    repos::crud::CrudRepo,
    utils::fields::provided,
};

pub type LeavesRepo = CrudRepo<Entity>;

impl LeavesRepo {
    pub async fn create(&self, payload: NewLeave) -> Result<Leave, DbErr> {
        let leave = ActiveModel {
            employee_id: provided(payload.employee_id),
            leave_type: provided(payload.leave_type),
            start_date: provided(payload.start_date),
            end_date: provided(payload.end_date),
            ..Default::default()
        };

        leave.insert(&self.db).await
    }

    pub async fn update(&self, id: i32, payload: LeaveChanges) -> Result<Leave, DbErr> {
        let leave = ActiveModel {
            id: Unchanged(id),
            leave_type: provided(payload.leave_type),
            start_date: provided(payload.start_date),
            end_date: provided(payload.end_date),
            status: provided(payload.status),
            ..Default::default()
        };

        leave.update(&self.db).await
    }

    pub async fn get_by_employee(&self, employee_id: i32) -> Result<Vec<Leave>, DbErr> {
        Entity::find()
            .filter(leave::Column::EmployeeId.eq(employee_id))
            .all(&self.db)
            .await
    }

    /// Overwrites the status whatever it currently is. Returns the
    /// affected-row count.
    pub async fn set_status(&self, id: i32, status: &str) -> Result<u64, DbErr> {
        let result = Entity::update_many()
            .col_expr(leave::Column::Status, Expr::value(status))
            .filter(leave::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
