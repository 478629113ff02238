use serde::Serialize;

use crate::utils::extract::Json;

#[derive(Debug, Serialize)]
pub struct RouteDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
}

const fn route(method: &'static str, path: &'static str, summary: &'static str) -> RouteDoc {
    RouteDoc {
        method,
        path,
        summary,
    }
}

/// Served at `/api-docs`. Keep in step with `routes::create_routers`.
pub const ROUTES: &[RouteDoc] = &[
    route("GET", "/departments", "List departments"),
    route("POST", "/departments", "Create a department"),
    route("GET", "/departments/:id", "Get a department"),
    route("PUT", "/departments/:id", "Update a department"),
    route("DELETE", "/departments/:id", "Delete a department"),
    route("GET", "/departments/:id/employees", "Employees in a department"),
    route("GET", "/employees", "List employees"),
    route("POST", "/employees", "Create an employee"),
    route("GET", "/employees/:id", "Get an employee"),
    route("PUT", "/employees/:id", "Update an employee's name and phone"),
    route("DELETE", "/employees/:id", "Delete an employee"),
    route("GET", "/employees/:id/leave-balances", "Leave balances of an employee"),
    route("GET", "/employees/:id/attendance", "Attendance of an employee between ?start and ?end"),
    route("GET", "/employees/:id/leaves", "Leaves of an employee"),
    route("GET", "/employees/:id/feedbacks", "Feedback given or received by an employee"),
    route("GET", "/employees/:id/timesheets", "Timesheets of an employee"),
    route("GET", "/leave-policies", "List leave policies"),
    route("POST", "/leave-policies", "Create a leave policy"),
    route("GET", "/leave-policies/:id", "Get a leave policy"),
    route("PUT", "/leave-policies/:id", "Update a leave policy"),
    route("DELETE", "/leave-policies/:id", "Delete a leave policy"),
    route("GET", "/leaves", "List leaves"),
    route("POST", "/leaves", "Apply for leave"),
    route("GET", "/leaves/:id", "Get a leave"),
    route("PUT", "/leaves/:id", "Update a leave"),
    route("DELETE", "/leaves/:id", "Delete a leave"),
    route("PUT", "/leave/approve/:id", "Approve a leave"),
    route("PUT", "/leave/reject/:id", "Reject a leave"),
    route("DELETE", "/leave/cancel/:id", "Cancel a leave"),
    route("GET", "/leave-balances", "List leave balances"),
    route("POST", "/leave-balances", "Create a leave balance"),
    route("GET", "/leave-balances/:id", "Get a leave balance"),
    route("PUT", "/leave-balances/:id", "Update a leave balance"),
    route("DELETE", "/leave-balances/:id", "Delete a leave balance"),
    route("GET", "/attendance", "List attendance logs"),
    route("POST", "/attendance", "Record attendance"),
    route("GET", "/attendance/:id", "Get an attendance log"),
    route("PUT", "/attendance/:id", "Update an attendance log"),
    route("DELETE", "/attendance/:id", "Delete an attendance log"),
    route("GET", "/attendance/missing/:date", "Employees with no attendance on a date"),
    route("GET", "/feedbacks", "List feedback"),
    route("POST", "/feedbacks", "Submit feedback"),
    route("GET", "/feedbacks/:id", "Get feedback"),
    route("PUT", "/feedbacks/:id", "Update feedback"),
    route("DELETE", "/feedbacks/:id", "Delete feedback"),
    route("GET", "/projects", "List projects"),
    route("POST", "/projects", "Create a project"),
    route("GET", "/projects/:id", "Get a project"),
    route("PUT", "/projects/:id", "Update a project"),
    route("DELETE", "/projects/:id", "Delete a project"),
    route("GET", "/projects/assigned/:employee_id", "Projects assigned to an employee"),
    route("GET", "/timesheets", "List timesheets"),
    route("POST", "/timesheets", "Log time"),
    route("GET", "/timesheets/:id", "Get a timesheet"),
    route("PUT", "/timesheets/:id", "Update a timesheet"),
    route("DELETE", "/timesheets/:id", "Delete a timesheet"),
    route("GET", "/timesheets/week/:employee_id", "Timesheets for the week starting ?start"),
    route("GET", "/timesheets/day/:employee_id", "Timesheets on ?date"),
];

pub async fn api_docs() -> Json<&'static [RouteDoc]> {
    Json(ROUTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_routes_are_unique() {
        let mut seen = HashSet::new();
        for doc in ROUTES {
            assert!(
                seen.insert((doc.method, doc.path)),
                "duplicate route {} {}",
                doc.method,
                doc.path
            );
        }
    }
}
