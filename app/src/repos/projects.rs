use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QuerySelect, RelationTrait,
};

use crate::{
    models::{
        project::{self, ActiveModel, Entity, Model as Project, ProjectPayload},
        project_assignment,
    },
    repos::crud::CrudRepo,
    utils::fields::{provided, provided_nullable, replaced},
};

pub type ProjectsRepo = CrudRepo<Entity>;

impl ProjectsRepo {
    pub async fn create(&self, payload: ProjectPayload) -> Result<Project, DbErr> {
        let project = ActiveModel {
            name: provided(payload.name),
            client: provided_nullable(payload.client),
            ..Default::default()
        };

        project.insert(&self.db).await
    }

    pub async fn update(&self, id: i32, payload: ProjectPayload) -> Result<Project, DbErr> {
        let project = ActiveModel {
            id: Unchanged(id),
            name: provided(payload.name),
            client: replaced(payload.client),
        };

        project.update(&self.db).await
    }

    pub async fn get_assigned(&self, employee_id: i32) -> Result<Vec<Project>, DbErr> {
        Entity::find()
            .join(JoinType::InnerJoin, project::Relation::ProjectAssignment.def())
            .filter(project_assignment::Column::EmployeeId.eq(employee_id))
            .all(&self.db)
            .await
    }
}
