//! RRAM 크로스바 ADC 해상도 추정 라이브러리
//!
//! 양자화된 합성곱 레이어 가중치를 2비트 셀 네 개로 나누어 크로스바에 매핑할
//! 때, 각 컬럼의 누적 합을 무손실로 읽기 위해 ADC가 몇 비트여야 하는지
//! 반복 샘플링으로 추정한다.

pub mod config;
pub mod core;
pub mod error;
pub mod model_tools;
pub mod pipeline;
pub mod quantization;
pub mod report;

// 핵심 모듈들 재수출
pub use crate::core::{
    decompose, estimate, AdcResolutionEstimator, Column, ColumnKey, ColumnTable, EstimatorConfig,
    LayerResolutionResult, QuantizedWeightTensor, Sign,
};
pub use config::AnalysisConfig;
pub use error::{AdcError, Result};
pub use pipeline::{LayerOutcome, LayerReport, ModelAdcAnalyzer, ModelReport, SkippedLayer};
pub use report::{AggregateResolution, ReportSink};
