//! 레이어 결과 보고 (콘솔 막대 그래프, JSON 차트 산출물) 및 레이어 간 집계

pub mod aggregate;
pub mod artifact;
pub mod console;
pub mod sink;

#[cfg(test)]
mod __tests__;

pub use aggregate::AggregateResolution;
pub use artifact::{layer_artifact_name, ChartArtifact, JsonArtifactSink, AGGREGATE_ARTIFACT_NAME};
pub use console::ConsoleSink;
pub use sink::{FanOutSink, NullSink, ReportSink};
