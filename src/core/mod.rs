//! # 핵심 모듈
//!
//! 컬럼 비트 분해기와 레이어 ADC 해상도 추정기

pub mod column;
pub mod estimator;

pub use column::*;
pub use estimator::*;
