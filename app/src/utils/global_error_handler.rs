use crate::utils::response::APIError;

pub async fn global_error_handler() -> APIError {
    APIError::NotFound("Not Found".to_string())
}
