//! Request and response DTOs.

pub mod request;
pub mod response;

pub use request::{SearchParams, SigninRequest, SignupRequest};
pub use response::{
    ApiResponse, DeletedResponse, HealthResponse, MessageResponse, SessionResponse,
    SignedInResponse,
};
