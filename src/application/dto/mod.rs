/// Data Transfer Objects for application layer
mod set_helm_version_request;
mod set_helm_version_response;

pub use set_helm_version_request::SetHelmVersionRequest;
pub use set_helm_version_response::SetHelmVersionResponse;
