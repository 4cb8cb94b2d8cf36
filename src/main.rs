use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use lapstore_backend::config::{
    CorsConfig, DatabaseConfig, Environment, JwtConfig, PaymentConfig, ServerConfig, StoreBackend,
};
use lapstore_backend::db::{DocumentStore, MemoryStore, MongoStore};
use lapstore_backend::errors::{AppResult, ErrorContext};
use lapstore_backend::routes::configure_all_routes;
use lapstore_backend::services::auth::TokenService;
use lapstore_backend::services::payments::StripeGateway;
use lapstore_backend::state::AppState;

/// 시작 시 한 번 읽는 전체 설정
struct Settings {
    server: ServerConfig,
    database: DatabaseConfig,
    jwt: JwtConfig,
    payment: PaymentConfig,
    cors: CorsConfig,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 LapStore 서버 시작중...");

    let (settings, state, tokens) = match bootstrap().await {
        Ok(ready) => ready,
        Err(e) => {
            error!("❌ 서버 초기화 실패: {}", e);
            std::process::exit(1);
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(settings, state, tokens).await
}

async fn bootstrap() -> AppResult<(Settings, AppState, Arc<TokenService>)> {
    let settings = load_settings()?;

    info!("📡 문서 저장소 연결 중...");
    let store = connect_store(&settings.database).await?;

    let tokens = Arc::new(TokenService::new(&settings.jwt));
    let gateway = Arc::new(StripeGateway::new(&settings.payment));
    let state = AppState::new(store, tokens.clone(), gateway, &settings.payment);

    if let Err(e) = state.create_indexes().await {
        warn!("고유 인덱스 생성 실패, 중복 방지는 조회 후 삽입으로만 동작합니다: {}", e);
    }

    Ok((settings, state, tokens))
}

fn load_settings() -> AppResult<Settings> {
    let environment = Environment::current();
    info!("실행 환경: {:?}", environment);

    Ok(Settings {
        server: ServerConfig::from_env().context("서버 설정 로드 실패")?,
        database: DatabaseConfig::from_env().context("데이터베이스 설정 로드 실패")?,
        jwt: JwtConfig::from_env(&environment).context("JWT 설정 로드 실패")?,
        payment: PaymentConfig::from_env().context("결제 설정 로드 실패")?,
        cors: CorsConfig::from_env(),
    })
}

async fn connect_store(config: &DatabaseConfig) -> AppResult<Arc<dyn DocumentStore>> {
    match config.backend {
        StoreBackend::Mongo => Ok(Arc::new(MongoStore::connect(config).await?)),
        StoreBackend::Memory => {
            warn!("⚠️ 메모리 저장소 사용 중: 재시작하면 모든 데이터가 사라집니다");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

async fn start_http_server(
    settings: Settings,
    state: AppState,
    tokens: Arc<TokenService>,
) -> std::io::Result<()> {
    let bind_address = settings.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);

    let state = web::Data::new(state);
    let tokens = web::Data::from(tokens);
    let cors_config = settings.cors;

    HttpServer::new(move || {
        let cors = configure_cors(&cors_config);

        App::new()
            .app_data(state.clone())
            .app_data(tokens.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(settings.server.workers)
        .run()
        .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(_) => {
                dotenv().ok();
            }
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

fn configure_cors(config: &CorsConfig) -> Cors {
    let cors = if config.allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        config
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .supports_credentials()
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
