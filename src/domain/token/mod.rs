//! 토큰 도메인 모듈

pub mod token;
