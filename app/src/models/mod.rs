pub mod attendance_log;
pub mod department;
pub mod employee;
pub mod feedback;
pub mod leave;
pub mod leave_balance;
pub mod leave_policy;
pub mod project;
pub mod project_assignment;
pub mod timesheet;
