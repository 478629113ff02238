use sea_orm::{ActiveModelTrait, ActiveValue::Unchanged, DbErr};

use crate::{
    models::leave_policy::{ActiveModel, Entity, LeavePolicyPayload, Model as LeavePolicy},
    repos::crud::CrudRepo,
    utils::fields::provided,
};

pub type LeavePoliciesRepo = CrudRepo<Entity>;

impl LeavePoliciesRepo {
    pub async fn create(&self, payload: LeavePolicyPayload) -> Result<LeavePolicy, DbErr> {
        let policy = ActiveModel {
            policy_name: provided(payload.policy_name),
            max_leaves: provided(payload.max_leaves),
            carry_forward: provided(payload.carry_forward),
            ..Default::default()
        };

        policy.insert(&self.db).await
    }

    pub async fn update(
        &self,
        id: i32,
        payload: LeavePolicyPayload,
    ) -> Result<LeavePolicy, DbErr> {
        let policy = ActiveModel {
            id: Unchanged(id),
            policy_name: provided(payload.policy_name),
            max_leaves: provided(payload.max_leaves),
            carry_forward: provided(payload.carry_forward),
        };

        policy.update(&self.db).await
    }
}
