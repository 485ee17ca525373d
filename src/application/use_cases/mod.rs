/// Use cases module containing application business logic orchestration
mod set_helm_version;

pub use set_helm_version::SetHelmVersionUseCase;
