use axum::http::StatusCode;
use sea_orm::DbErr;

use crate::utils::{
    extract::Json,
    response::{APIError, APIResponse},
};

/// How a resource group answers get, update and delete requests.
///
/// Every table goes through the same handler shape; the differences between
/// groups live here as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceContract {
    /// Label used in `"<entity> not found"` and `"<entity> deleted successfully"`.
    pub entity: &'static str,
    pub delete_status: StatusCode,
    pub check_exists_on_update: bool,
    pub check_exists_on_delete: bool,
}

impl ResourceContract {
    pub const fn standard(entity: &'static str) -> Self {
        Self {
            entity,
            delete_status: StatusCode::OK,
            check_exists_on_update: true,
            check_exists_on_delete: true,
        }
    }

    pub fn not_found(&self) -> APIError {
        APIError::NotFound(format!("{} not found", self.entity))
    }

    pub fn found<M>(&self, row: Option<M>) -> Result<Json<M>, APIError> {
        row.map(Json).ok_or_else(|| self.not_found())
    }

    /// Maps the outcome of an `UPDATE ... RETURNING *`. A miss is a 404 unless
    /// the contract skips the existence check, in which case the body is `null`.
    pub fn updated<M>(&self, outcome: Result<M, DbErr>) -> Result<Json<Option<M>>, APIError> {
        match outcome {
            Ok(row) => Ok(Json(Some(row))),
            Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_)) => {
                if self.check_exists_on_update {
                    Err(self.not_found())
                } else {
                    Ok(Json(None))
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn deleted(&self, rows_affected: u64) -> Result<APIResponse, APIError> {
        if rows_affected == 0 && self.check_exists_on_delete {
            return Err(self.not_found());
        }

        if self.delete_status == StatusCode::NO_CONTENT {
            return Ok(APIResponse::NoContent);
        }

        Ok(APIResponse::Message(
            self.delete_status,
            format!("{} deleted successfully", self.entity),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    const LENIENT: ResourceContract = ResourceContract {
        entity: "Employee",
        delete_status: StatusCode::NO_CONTENT,
        check_exists_on_update: false,
        check_exists_on_delete: false,
    };

    #[test]
    fn test_found_and_missing_rows() {
        let contract = ResourceContract::standard("Department");

        assert!(matches!(contract.found(Some(7)), Ok(Json(7))));
        match contract.found::<i32>(None) {
            Err(APIError::NotFound(msg)) => assert_eq!(msg, "Department not found"),
            _ => panic!("expected not found"),
        }
    }

    #[test]
    fn test_update_miss_depends_on_contract() {
        let standard = ResourceContract::standard("Leave");

        match standard.updated::<i32>(Err(DbErr::RecordNotUpdated)) {
            Err(APIError::NotFound(msg)) => assert_eq!(msg, "Leave not found"),
            _ => panic!("expected not found"),
        }
        assert!(matches!(
            LENIENT.updated::<i32>(Err(DbErr::RecordNotUpdated)),
            Ok(Json(None))
        ));
    }

    #[test]
    fn test_update_store_failure_is_not_a_miss() {
        let result = LENIENT.updated::<i32>(Err(DbErr::Custom("boom".into())));
        assert!(matches!(result, Err(APIError::Store(_))));
    }

    #[test]
    fn test_delete_statuses() {
        let standard = ResourceContract::standard("Timesheet");

        assert!(matches!(standard.deleted(0), Err(APIError::NotFound(_))));

        let response = standard.deleted(1).unwrap().into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let response = LENIENT.deleted(0).unwrap().into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
