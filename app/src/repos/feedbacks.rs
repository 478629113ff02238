use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, Condition, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    models::feedback::{self, ActiveModel, Entity, FeedbackChanges, Model as Feedback, NewFeedback},
    repos::crud::CrudRepo,
    utils::fields::provided,
};

pub type FeedbacksRepo = CrudRepo<Entity>;

impl FeedbacksRepo {
    pub async fn create(&self, payload: NewFeedback) -> Result<Feedback, DbErr> {
        let feedback = ActiveModel {
            from_employee: provided(payload.from_employee),
            to_employee: provided(payload.to_employee),
            message: provided(payload.message),
            ..Default::default()
        };

        feedback.insert(&self.db).await
    }

    pub async fn update(&self, id: i32, payload: FeedbackChanges) -> Result<Feedback, DbErr> {
        let feedback = ActiveModel {
            id: Unchanged(id),
            message: provided(payload.message),
            ..Default::default()
        };

        feedback.update(&self.db).await
    }

    /// Feedback the employee either gave or received.
    pub async fn get_by_employee(&self, employee_id: i32) -> Result<Vec<Feedback>, DbErr> {
        Entity::find()
            .filter(
                Condition::any()
                    .add(feedback::Column::FromEmployee.eq(employee_id))
                    .add(feedback::Column::ToEmployee.eq(employee_id)),
            )
            .all(&self.db)
            .await
    }
}
