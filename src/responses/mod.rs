pub mod errors;
pub mod html;
pub mod json;
pub mod static_files;
pub mod xlsx;

pub use crate::errors::ResultResp;
pub use errors::html_error_response;

pub use html::{html_response, redirect};
pub use json::{json_error_response, json_response};
pub use static_files::stylesheet_response;
pub use xlsx::xlsx_response;
