//! 사용자 도메인 모듈

pub mod user;
