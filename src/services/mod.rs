pub mod engineer_service;
pub mod portfolio_service;
pub mod proposal_service;
pub mod service_service;
pub mod user_service;
