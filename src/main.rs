use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
    Router,
};
use marketplace_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware, routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let engineer_api = Router::new()
        .route("/engineers/all", get(routes::engineer::list_engineers))
        .route("/engineers/savejob", post(routes::engineer::save_job))
        .route("/engineers/removejob", post(routes::engineer::remove_job))
        .route(
            "/engineers/addeducation/:user_id",
            put(routes::engineer::add_education),
        )
        .route(
            "/engineers/education/:user_id",
            get(routes::engineer::get_education),
        )
        .route(
            "/engineers/addskill/:user_id",
            post(routes::engineer::add_skill),
        )
        .route(
            "/engineers/addoverview/:user_id",
            put(routes::engineer::add_overview),
        )
        .route(
            "/engineers/addtitle/:user_id",
            put(routes::engineer::add_title),
        )
        .route(
            "/engineers/engineerId/:engineer_id",
            get(routes::engineer::get_engineer_by_engineer_id),
        )
        .route(
            "/engineers/:user_id/certificates",
            get(routes::portfolio::list_certificates).post(routes::portfolio::add_certificate),
        )
        .route(
            "/engineers/:user_id/portfolios",
            get(routes::portfolio::list_portfolios).post(routes::portfolio::add_portfolio),
        )
        .route(
            "/engineers/:user_id",
            get(routes::engineer::get_engineer_by_user),
        )
        .route(
            "/certificates/:id",
            axum::routing::delete(routes::portfolio::delete_certificate),
        )
        .route(
            "/portfolios/:id",
            axum::routing::delete(routes::portfolio::delete_portfolio),
        );

    let service_api = Router::new()
        .route(
            "/services",
            get(routes::service::list_services).post(routes::service::create_service),
        )
        .route(
            "/services/:id",
            get(routes::service::get_service)
                .patch(routes::service::update_service)
                .delete(routes::service::delete_service),
        );

    let proposal_api = Router::new()
        .route("/proposals", post(routes::proposal::submit_proposal))
        .route(
            "/proposals/:proposal_id/accept",
            patch(routes::proposal::accept_proposal),
        )
        .route(
            "/proposals/engineer/:engineer_id",
            get(routes::proposal::get_proposals_by_engineer),
        )
        .route(
            "/proposals/service/:id",
            get(routes::proposal::get_proposals_by_service),
        );

    let user_api = Router::new()
        .route("/users/signup", post(routes::user::signup))
        .route("/users/login", post(routes::user::login))
        .route(
            "/users/pending-verification",
            get(routes::user::pending_verification),
        )
        .route("/users/getUser/:id", get(routes::user::get_user));

    let protected_api = Router::new()
        .route("/engineers/savedjobs", get(routes::engineer::saved_jobs))
        .route(
            "/proposals/:proposal_id",
            put(routes::proposal::update_proposal),
        )
        .route("/users/updateMe", patch(routes::user::update_me))
        .layer(axum::middleware::from_fn(middleware::auth::protect));

    let admin_api = Router::new()
        .route("/users/verifyUser/:id", patch(routes::user::verify_user))
        .route(
            "/users/deleteUser/:id",
            axum::routing::delete(routes::user::delete_user),
        )
        .layer(axum::middleware::from_fn(middleware::auth::require_admin));

    info!("Serving uploads from: {}", config.uploads_dir);

    let app = base_routes
        .merge(engineer_api)
        .merge(service_api)
        .merge(proposal_api)
        .merge(user_api)
        .merge(protected_api)
        .merge(admin_api)
        .nest_service("/my-uploads", ServeDir::new(&config.uploads_dir))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
