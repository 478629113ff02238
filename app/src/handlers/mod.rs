pub mod attendance_logs;
pub mod departments;
pub mod docs;
pub mod employees;
pub mod feedbacks;
pub mod leave_balances;
pub mod leave_policies;
pub mod leaves;
pub mod projects;
pub mod timesheets;
