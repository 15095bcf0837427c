pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    engineer_service::EngineerService, portfolio_service::PortfolioService,
    proposal_service::ProposalService, service_service::ServiceService,
    user_service::UserService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub user_service: UserService,
    pub engineer_service: EngineerService,
    pub service_service: ServiceService,
    pub proposal_service: ProposalService,
    pub portfolio_service: PortfolioService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();

        let user_service = UserService::new(pool.clone());
        let engineer_service = EngineerService::new(pool.clone(), config.media());
        let service_service = ServiceService::new(pool.clone());
        let proposal_service = ProposalService::new(pool.clone());
        let portfolio_service = PortfolioService::new(pool.clone());

        Self {
            pool,
            user_service,
            engineer_service,
            service_service,
            proposal_service,
            portfolio_service,
        }
    }
}
