use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_090000_organization::Employees;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // leave_policies is standalone, policies are not tied to employees
        manager
            .create_table(
                Table::create()
                    .table(LeavePolicies::Table)
                    .if_not_exists()
                    .col(pk_auto(LeavePolicies::Id))
                    .col(string(LeavePolicies::PolicyName))
                    .col(integer(LeavePolicies::MaxLeaves))
                    .col(boolean(LeavePolicies::CarryForward).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Leaves::Table)
                    .if_not_exists()
                    .col(pk_auto(Leaves::Id))
                    .col(integer(Leaves::EmployeeId))
                    .col(string(Leaves::LeaveType))
                    .col(date(Leaves::StartDate))
                    .col(date(Leaves::EndDate))
                    .col(string(Leaves::Status).default("Pending"))
                    .col(timestamp(Leaves::AppliedOn).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leaves_employees")
                            .from(Leaves::Table, Leaves::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LeaveBalances::Table)
                    .if_not_exists()
                    .col(pk_auto(LeaveBalances::Id))
                    .col(integer(LeaveBalances::EmployeeId))
                    .col(string(LeaveBalances::LeaveType))
                    .col(double(LeaveBalances::Balance).default(0.0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leave_balances_employees")
                            .from(LeaveBalances::Table, LeaveBalances::EmployeeId)
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
            .drop_table(Table::drop().table(LeaveBalances::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Leaves::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LeavePolicies::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LeavePolicies {
    Table,
    Id,
    PolicyName,
    MaxLeaves,
    CarryForward,
}

#[derive(DeriveIden)]
enum Leaves {
    Table,
    Id,
    EmployeeId,
    LeaveType,
    StartDate,
    EndDate,
    Status,
    AppliedOn,
}

#[derive(DeriveIden)]
enum LeaveBalances {
    Table,
    Id,
    EmployeeId,
    LeaveType,
    Balance,
}
