//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 인증 도메인의 데이터 규칙을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── users  - 사용자 엔티티와 타입드 업데이트
//! ├── token  - JWT 클레임, 토큰 종류, 토큰 쌍
//! ├── oauth  - 프로바이더 와이어 모델과 정규화 계약
//! └── dto    - HTTP 요청/응답 데이터 전송 객체
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Store)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`users`] - 핵심 도메인 엔티티
//!
//! OAuth 로그인으로 생성되는 사용자 엔티티입니다. 프로필 변경은
//! 변경 가능한 필드만 나열한 `UserUpdate`를 통해서만 가능합니다.
//!
//! ### [`token`] - 토큰 도메인
//!
//! `{sub, type, exp}` 세 클레임으로 구성된 JWT 페이로드와
//! 액세스/리프레시 토큰 쌍을 정의합니다.
//!
//! ### [`oauth`] - 프로바이더 통합 모델
//!
//! 네 프로바이더의 응답 와이어 형식과, 모든 클라이언트가 충족해야
//! 하는 정규화 계약 `ProviderUserInfo`를 정의합니다.
//!
//! ### [`dto`] - API 계약
//!
//! HTTP 경계의 요청/응답 구조체입니다.

pub mod dto;
pub mod oauth;
pub mod token;
pub mod users;
