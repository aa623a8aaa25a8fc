use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenvy::dotenv;
use log::info;

use hl_api::app::configure_api;
use hl_api::middleware::cors::create_cors;
use hl_api::state::AppState;
use hl_core::services::admin::AdminUserService;
use hl_core::services::auth::{AuthService, AuthServiceConfig};
use hl_core::services::password::BcryptPasswordHasher;
use hl_core::services::token::{TokenService, TokenServiceConfig};
use hl_infra::database::connection::DatabasePool;
use hl_infra::database::mysql::MySqlUserRepository;
use hl_infra::mail::SmtpMailService;
use hl_shared::config::{DatabaseConfig, JwtConfig, ServerConfig, SmtpConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting HeartLink API server");

    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();
    let jwt_config = JwtConfig::from_env();
    let smtp_config = SmtpConfig::from_env();

    let pool = DatabasePool::new(database_config)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let mail_service = Arc::new(
        SmtpMailService::new(smtp_config)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
    );
    let password_hasher = Arc::new(BcryptPasswordHasher::new());
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(jwt_config)));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        mail_service,
        password_hasher,
        token_service,
        AuthServiceConfig::default(),
    ));
    let admin_service = Arc::new(AdminUserService::new(Arc::clone(&user_repository)));

    let app_state = web::Data::new(AppState::new(auth_service, admin_service));

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .wrap(create_cors())
            .configure(
                configure_api::<MySqlUserRepository, SmtpMailService, BcryptPasswordHasher>,
            )
    })
    .bind(&bind_address)?
    .run()
    .await
}
