//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 인증 오케스트레이션, OAuth 클라이언트    ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Store - AuthStore 트레이트 (메모리 구현)         ← Persistence Layer
//! ├─────────────────────────────────────────────┤
//!   Domain - User, TokenClaims, DTO              ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 주요 특징
//!
//! ### 1. 비동기 처리
//! - **Future 기반**: 모든 핸들러가 `async/await` 사용
//! - **논블로킹 I/O**: 프로바이더 API 호출 시 블로킹 없음
//!
//! ### 2. 타입 안전성
//! - **컴파일 타임 검증**: 요청/응답 타입 검증
//! - **자동 직렬화**: JSON ↔ Rust 구조체 자동 변환
//! - **검증 통합**: validator 크레이트로 입력 검증
//!
//! ### 3. 에러 처리
//! - **Result 패턴**: 모든 핸들러가 `Result<HttpResponse, AuthError>` 반환
//! - **자동 변환**: `?` 연산자로 에러 자동 전파
//! - **통합 에러 타입**: `AuthError`의 `ResponseError` 구현이 상태 코드 결정
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 인증 관련 엔드포인트
//!   - OAuth 로그인 시작 (`GET /api/auth/{provider}`)
//!   - OAuth 콜백 (`GET /api/auth/{provider}/callback`, `POST /api/auth/apple/callback`)
//!   - 토큰 갱신 (`POST /api/auth/refresh`)
//!   - 로그아웃 (`POST /api/auth/logout`)
//!   - 내 프로필 (`GET`/`PUT /api/auth/me`)
//!
//! - **`users`**: 사용자 조회 엔드포인트 (인증 필요)
//!   - 사용자 목록 (`GET /api/users`)
//!   - 사용자 조회 (`GET /api/users/{email}`)
//!
//! 핸들러는 서비스 인스턴스를 `web::Data`로 주입받습니다. 서비스 구성은
//! `main.rs`에서 한 번 일어나며, 핸들러는 상태를 갖지 않습니다.

pub mod auth;
pub mod users;
