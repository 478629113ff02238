use sea_orm::{ActiveModelTrait, ActiveValue::Unchanged, DbErr};

use crate::{
    models::department::{ActiveModel, DepartmentPayload, Entity, Model as Department},
    repos::crud::CrudRepo,
    utils::fields::provided,
};

pub type DepartmentsRepo = CrudRepo<Entity>;

impl DepartmentsRepo {
    pub async fn create(&self, payload: DepartmentPayload) -> Result<Department, DbErr> {
        let department = ActiveModel {
            name: provided(payload.name),
            ..Default::default()
        };

        department.insert(&self.db).await
    }

    pub async fn update(&self, id: i32, payload: DepartmentPayload) -> Result<Department, DbErr> {
        let department = ActiveModel {
            id: Unchanged(id),
            name: provided(payload.name),
        };

        department.update(&self.db).await
    }
}
