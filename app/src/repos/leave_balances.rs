use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::{
    models::leave_balance::{
        self, ActiveModel, Entity, LeaveBalanceChanges, Model as LeaveBalance, NewLeaveBalance,
    },
    repos::crud::CrudRepo,
    utils::fields::provided,
};

pub type LeaveBalancesRepo = CrudRepo<Entity>;

impl LeaveBalancesRepo {
    pub async fn create(&self, payload: NewLeaveBalance) -> Result<LeaveBalance, DbErr> {
        let balance = ActiveModel {
            employee_id: provided(payload.employee_id),
            leave_type: provided(payload.leave_type),
            balance: provided(payload.balance),
            ..Default::default()
        };

        balance.insert(&self.db).await
    }

    pub async fn update(
        &self,
        id: i32,
        payload: LeaveBalanceChanges,
    ) -> Result<LeaveBalance, DbErr> {
        let balance = ActiveModel {
            id: Unchanged(id),
            leave_type: provided(payload.leave_type),
            balance: provided(payload.balance),
            ..Default::default()
        };

        balance.update(&self.db).await
    }

    pub async fn get_by_employee(&self, employee_id: i32) -> Result<Vec<LeaveBalance>, DbErr> {
        Entity::find()
            .filter(leave_balance::Column::EmployeeId.eq(employee_id))
            .all(&self.db)
            .await
    }
}
