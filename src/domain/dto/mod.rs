//! # DTO (Data Transfer Object) 모듈
//!
//! HTTP 계층과 서비스 계층 사이를 오가는 요청/응답 구조체를 정의합니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! - 요청 DTO는 `validator` 파생 매크로로 선언적으로 검증합니다.
//! - 응답 DTO는 도메인 엔티티를 그대로 노출하지 않아야 할 때만
//!   별도 구조체를 둡니다. `User` 엔티티는 민감 필드가 없으므로
//!   직접 직렬화됩니다.

pub mod request;
pub mod response;
