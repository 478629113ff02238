pub use sea_orm_migration::prelude::*;

mod m20260301_090000_organization;
mod m20260301_091500_leaves;
mod m20260301_093000_attendance_and_feedback;
mod m20260301_094500_timesheets;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_090000_organization::Migration),
            Box::new(m20260301_091500_leaves::Migration),
            Box::new(m20260301_093000_attendance_and_feedback::Migration),
            Box::new(m20260301_094500_timesheets::Migration),
        ]
    }
}
