use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // departments
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(pk_auto(Departments::Id))
                    .col(string(Departments::Name))
                    .to_owned(),
            )
            .await?;

        // employees
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(pk_auto(Employees::Id))
                    .col(string(Employees::Name))
                    .col(string(Employees::Email).unique_key())
                    .col(string_null(Employees::Phone))
                    .col(date_null(Employees::DateOfJoining))
                    .col(integer_null(Employees::DepartmentId))
                    .col(string_null(Employees::Designation))
                    .col(double_null(Employees::Salary))
                    .col(boolean(Employees::PfEnabled).default(false))
                    .col(boolean(Employees::TdsEnabled).default(false))
                    .col(string(Employees::Status).default("Active"))
                    .col(
                        timestamp(Employees::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_departments")
                            .from(Employees::Table, Employees::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // projects
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(pk_auto(Projects::Id))
                    .col(string(Projects::Name))
                    .col(string_null(Projects::Client))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Departments {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Employees {
    Table,
    Id,
    Name,
    Email,
    Phone,
    DateOfJoining,
    DepartmentId,
    Designation,
    Salary,
    PfEnabled,
    TdsEnabled,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Projects {
    Table,
    Id,
    Name,
    Client,
}
