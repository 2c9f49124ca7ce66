// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::ParsedNavtex;
pub use requests::UploadedFile;
pub use responses::{ApiResponse, HealthResponse, ErrorResponse};
