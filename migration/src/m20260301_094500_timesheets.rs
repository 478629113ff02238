use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_090000_organization::{Employees, Projects};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectAssignments::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectAssignments::Id))
                    .col(integer(ProjectAssignments::EmployeeId))
                    .col(integer(ProjectAssignments::ProjectId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_assignments_employees")
                            .from(ProjectAssignments::Table, ProjectAssignments::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_assignments_projects")
                            .from(ProjectAssignments::Table, ProjectAssignments::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Timesheets::Table)
                    .if_not_exists()
                    .col(pk_auto(Timesheets::Id))
                    .col(integer(Timesheets::EmployeeId))
                    .col(integer(Timesheets::ProjectId))
                    .col(date(Timesheets::LogDate))
                    .col(double(Timesheets::Hours))
                    .col(text_null(Timesheets::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timesheets_employees")
                            .from(Timesheets::Table, Timesheets::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timesheets_projects")
                            .from(Timesheets::Table, Timesheets::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_timesheets_employee_log_date")
                    .table(Timesheets::Table)
                    .col(Timesheets::EmployeeId)
                    .col(Timesheets::LogDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Timesheets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectAssignments::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ProjectAssignments {
    Table,
    Id,
    EmployeeId,
    ProjectId,
}

#[derive(DeriveIden)]
enum Timesheets {
    Table,
    Id,
    EmployeeId,
    ProjectId,
    LogDate,
    Hours,
    Notes,
}
