use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_090000_organization::Employees;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // attendance_logs: no uniqueness on (employee_id, date), duplicates are allowed
        manager
            .create_table(
                Table::create()
                    .table(AttendanceLogs::Table)
                    .if_not_exists()
                    .col(pk_auto(AttendanceLogs::Id))
                    .col(integer(AttendanceLogs::EmployeeId))
                    .col(date(AttendanceLogs::Date))
                    .col(time_null(AttendanceLogs::CheckIn))
                    .col(time_null(AttendanceLogs::CheckOut))
                    .col(string_null(AttendanceLogs::Status))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_logs_employees")
                            .from(AttendanceLogs::Table, AttendanceLogs::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_logs_date")
                    .table(AttendanceLogs::Table)
                    .col(AttendanceLogs::Date)
                    .to_owned(),
            )
            .await?;

        // feedbacks
        manager
            .create_table(
                Table::create()
                    .table(Feedbacks::Table)
                    .if_not_exists()
                    .col(pk_auto(Feedbacks::Id))
                    .col(integer(Feedbacks::FromEmployee))
                    .col(integer(Feedbacks::ToEmployee))
                    .col(text(Feedbacks::Message))
                    .col(timestamp(Feedbacks::SubmittedOn).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedbacks_from_employee")
                            .from(Feedbacks::Table, Feedbacks::FromEmployee)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedbacks_to_employee")
                            .from(Feedbacks::Table, Feedbacks::ToEmployee)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Feedbacks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AttendanceLogs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AttendanceLogs {
    Table,
    Id,
    EmployeeId,
    Date,
    CheckIn,
    CheckOut,
    Status,
}

#[derive(DeriveIden)]
enum Feedbacks {
    Table,
    Id,
    FromEmployee,
    ToEmployee,
    Message,
    SubmittedOn,
}
