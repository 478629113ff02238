pub mod contract;
pub mod extract;
pub mod fields;
pub mod global_error_handler;
pub mod response;
