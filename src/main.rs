//! 소셜 OAuth 인증 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 네 개 OAuth 프로바이더 클라이언트를 구성하고 JWT 인증 기반의
//! REST API를 제공합니다.

use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use social_auth_backend::config::{
    AppleOAuthConfig, GoogleOAuthConfig, HttpClientConfig, JwtConfig, KakaoOAuthConfig,
    NaverOAuthConfig, OAuthConfig, ServerConfig,
};
use social_auth_backend::routes::configure_all_routes;
use social_auth_backend::services::auth::{AuthService, TokenService};
use social_auth_backend::services::oauth::{
    build_http_client, AppleOAuthClient, GoogleOAuthClient, KakaoOAuthClient, NaverOAuthClient,
    OAuthClient, StateManager,
};
use social_auth_backend::services::users::IdentityService;
use social_auth_backend::store::memory::MemoryStore;
use social_auth_backend::store::AuthStore;

/// 블랙리스트 정리 주기 (초)
///
/// 리프레시 토큰 만료(7일)보다 오래된 블랙리스트 항목을 이 주기로
/// 정리합니다. 항목은 만료 후 어차피 서명 검증에서 거부되므로
/// 정리 주기가 정확할 필요는 없습니다.
const BLACKLIST_SWEEP_INTERVAL_SECS: u64 = 3600;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 소셜 OAuth 인증 서비스 시작중...");

    // 서비스 구성 (저장소, 토큰, 프로바이더 클라이언트)
    let (auth_service, identity_service) = build_services();

    let auth_data = web::Data::new(auth_service);
    let identity_data = web::Data::from(identity_service);

    // 블랙리스트 정리 백그라운드 작업
    spawn_blacklist_sweeper(auth_data.clone());

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(auth_data, identity_data).await
}

/// 모든 서비스를 구성합니다
///
/// 환경 변수에서 설정을 로드하고 저장소, 토큰 서비스, 계정 서비스,
/// 네 개 OAuth 프로바이더 클라이언트를 생성자 주입으로 묶습니다.
///
/// # Panics
///
/// * 필수 프로바이더 환경 변수 누락 시 (각 설정 구조체의 `from_env`)
/// * Apple 개인키 파일을 읽을 수 없는 경우
fn build_services() -> (AuthService, Arc<IdentityService>) {
    let store: Arc<dyn AuthStore> = Arc::new(MemoryStore::new());
    let identity = Arc::new(IdentityService::new(store.clone()));

    let jwt_config = JwtConfig::from_env();
    let oauth_config = OAuthConfig::from_env();
    let state = StateManager::new(&oauth_config);

    // 프로바이더로 나가는 모든 요청이 공유하는 HTTP 클라이언트
    let http = build_http_client(HttpClientConfig::timeout_secs());

    let clients: Vec<Arc<dyn OAuthClient>> = vec![
        Arc::new(GoogleOAuthClient::new(
            GoogleOAuthConfig::from_env(),
            http.clone(),
        )),
        Arc::new(
            AppleOAuthClient::new(AppleOAuthConfig::from_env(), http.clone())
                .expect("Apple OAuth 클라이언트 초기화 실패"),
        ),
        Arc::new(NaverOAuthClient::new(
            NaverOAuthConfig::from_env(),
            state.clone(),
            http.clone(),
        )),
        Arc::new(KakaoOAuthClient::new(KakaoOAuthConfig::from_env(), http)),
    ];

    info!("✅ OAuth 프로바이더 {}개 등록됨", clients.len());

    let auth = AuthService::new(
        store,
        TokenService::new(jwt_config),
        identity.clone(),
        state,
        clients,
    );

    (auth, identity)
}

/// 블랙리스트 정리 작업을 백그라운드로 실행합니다
///
/// 보존 기간이 지난 블랙리스트 항목을 주기적으로 정리하여 메모리
/// 사용량이 로그아웃 횟수에 비례해 무한히 증가하지 않도록 합니다.
fn spawn_blacklist_sweeper(auth: web::Data<AuthService>) {
    actix_web::rt::spawn(async move {
        let mut interval =
            actix_web::rt::time::interval(Duration::from_secs(BLACKLIST_SWEEP_INTERVAL_SECS));

        loop {
            interval.tick().await;
            match auth.prune_blacklist().await {
                Ok(0) => {}
                Ok(removed) => info!("블랙리스트 정리: {}개 항목 제거", removed),
                Err(e) => error!("블랙리스트 정리 실패: {}", e),
            }
        }
    });
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Actix-web 기반 HTTP 서버를 설정하고 실행합니다.
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Returns
///
/// * `Ok(())` - 서버가 정상적으로 종료됨
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    auth_data: web::Data<AuthService>,
    identity_data: web::Data<IdentityService>,
) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API 엔드포인트: http://{}/api", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .unwrap();

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            // 기존 미들웨어들
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 서비스 주입
            .app_data(auth_data.clone())
            .app_data(identity_data.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4) // 워커 스레드 수
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// 개발환경과 운영환경을 구분하여 설정을 관리합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// # 개발 환경
/// PROFILE=dev cargo run
///
/// # 운영 환경
/// PROFILE=prod cargo run
/// ```
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
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// # Examples
///
/// ```bash
/// # 전체 debug 모드
/// RUST_LOG=debug cargo run
///
/// # 특정 모듈만 debug
/// RUST_LOG=social_auth_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드와의 통신을 위한 CORS(Cross-Origin Resource Sharing) 설정을 구성합니다.
/// 허용 Origin은 환경 변수로 재정의할 수 있으며, 기본값은 로컬 개발
/// 환경의 주소들입니다.
///
/// # Environment Variables
///
/// * `CORS_ALLOWED_ORIGINS` - 쉼표로 구분된 허용 Origin 목록
///
/// # Returns
///
/// * `Cors` - 구성된 CORS 미들웨어
fn configure_cors() -> Cors {
    let origins = std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| {
        "http://localhost:3000,http://127.0.0.1:3000,http://localhost:8080".to_string()
    });

    let mut cors = Cors::default()
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // 자격 증명(쿠키 등) 지원
        .supports_credentials()

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600);

    // 허용할 Origin 설정
    for origin in origins.split(',').map(str::trim).filter(|o| !o.is_empty()) {
        cors = cors.allowed_origin(origin);
    }

    cors
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// 환경변수에서 다음 설정을 읽어옵니다:
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
///
/// # Returns
///
/// * `RateLimitConfig` - 로드된 Rate Limiting 설정
///
/// # Examples
///
/// ```bash
/// # .env.dev (개발 환경)
/// RATE_LIMIT_PER_SECOND=20
/// RATE_LIMIT_BURST_SIZE=40
///
/// # .env.prod (운영 환경)
/// RATE_LIMIT_PER_SECOND=500
/// RATE_LIMIT_BURST_SIZE=1000
/// ```
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
