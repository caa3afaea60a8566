//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - 서버 바인딩, 실행 환경, HTTP 클라이언트 설정
//! - [`auth_config`] - 인증, OAuth, JWT 관련 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 기동 시점 로드 (Load Once)
//!
//! 인증 관련 설정 구조체는 `main`에서 `from_env()`로 한 번 로드되어
//! 서비스 생성자에 주입됩니다. 전역 상태나 요청 중 환경 변수 조회가
//! 없으므로 테스트에서 임의의 설정값을 자유롭게 구성할 수 있습니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전하며 사용 시 경고 로그 출력
//! - 프로덕션에서는 필수 설정값 누락 시 기동 단계에서 패닉
//!
//! ### 3. 실제 엔드포인트 기본값
//!
//! 프로바이더 엔드포인트 URI는 실제 서비스 주소를 기본값으로 가지며,
//! 테스트나 스테이징에서만 재정의합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, JwtConfig};
//!
//! // 현재 환경 확인
//! let env = Environment::current();
//! println!("Current environment: {:?}", env);
//!
//! // 서버 설정
//! let host = ServerConfig::host();
//! let port = ServerConfig::port();
//!
//! // JWT 설정 로드 후 서비스에 주입
//! let jwt = JwtConfig::from_env();
//! ```

pub mod auth_config;
pub mod server_config;

pub use auth_config::*;
pub use server_config::*;
