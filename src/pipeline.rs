//! # 모델 단위 ADC 분석 파이프라인
//!
//! 합성곱 레이어마다 int8 양자화 → 해상도 추정 → 보고를 수행하고 마지막에
//! 레이어 간 평균을 낸다. 가중치가 부족한 레이어는 기록만 하고 건너뛴다.

use crate::config::AnalysisConfig;
use crate::core::estimator::{AdcResolutionEstimator, EstimatorConfig, LayerResolutionResult};
use crate::error::{AdcError, Result};
use crate::model_tools::{LayerSource, ModelLayer};
use crate::quantization::quantize_int8;
use crate::report::{AggregateResolution, ConsoleSink, FanOutSink, JsonArtifactSink, ReportSink};
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// 분석된 레이어 하나
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerReport {
    pub name: String,
    pub shape: Vec<usize>,
    pub total_weights: usize,
    /// int8 양자화 스케일
    pub scale: f32,
    pub result: LayerResolutionResult,
}

/// 건너뛴 레이어
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedLayer {
    pub name: String,
    pub total_weights: usize,
    pub reason: String,
}

/// 레이어 하나의 처리 결과
#[derive(Debug, Clone, PartialEq)]
pub enum LayerOutcome {
    Analyzed(LayerReport),
    Skipped(SkippedLayer),
}

/// 모델 전체 분석 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelReport {
    pub model_name: String,
    pub generated_at: DateTime<Utc>,
    pub estimator: EstimatorConfig,
    pub layers: Vec<LayerReport>,
    pub skipped: Vec<SkippedLayer>,
    pub aggregate: Option<AggregateResolution>,
    pub elapsed_secs: f64,
}

impl ModelReport {
    pub fn results(&self) -> Vec<LayerResolutionResult> {
        self.layers.iter().map(|l| l.result.clone()).collect()
    }

    pub fn save_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!("Saved model report {}", path.display());
        Ok(())
    }

    pub fn load_json(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn print_summary(&self) {
        println!("\n🏆 === ADC 해상도 분석 요약: {} ===", self.model_name);
        println!("분석 레이어: {}개, 스킵: {}개", self.layers.len(), self.skipped.len());
        println!(
            "반복 횟수: {}, 크로스바 행: {}, 기본 시드: {}",
            self.estimator.num_iterations, self.estimator.crossbar_rows, self.estimator.base_seed
        );
        for layer in &self.layers {
            let (widest, bits) = layer.result.widest();
            println!(
                "  {}: {:?} → 최대 {} {:.2} bits ({}-bit ADC)",
                layer.name,
                layer.shape,
                widest,
                bits,
                layer.result.worst_case_bits()
            );
        }
        for skipped in &self.skipped {
            println!("  ⏭️ {} ({} weights): {}", skipped.name, skipped.total_weights, skipped.reason);
        }
        println!("소요 시간: {:.2}초", self.elapsed_secs);
    }
}

pub struct ModelAdcAnalyzer {
    config: AnalysisConfig,
    estimator: AdcResolutionEstimator,
}

impl ModelAdcAnalyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        let estimator = AdcResolutionEstimator::new(config.estimator.clone())?;
        Ok(Self { config, estimator })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// 설정에 따라 콘솔/JSON 수신자를 묶은 기본 수신자
    pub fn default_sink(&self) -> FanOutSink {
        let mut sink = FanOutSink::new();
        if self.config.print_charts {
            sink = sink.with(ConsoleSink);
        }
        if self.config.write_artifacts {
            sink = sink.with(JsonArtifactSink::new(&self.config.output_dir));
        }
        sink
    }

    /// 레이어 하나 분석. 가중치가 부족하면 `Skipped`
    pub fn analyze_layer(&self, layer: &ModelLayer) -> Result<LayerOutcome> {
        let quantized = quantize_int8(&layer.name, &layer.weights)?;
        let tensor = quantized.to_weight_tensor()?;

        match self.estimator.try_estimate(&tensor, &layer.name) {
            Ok(result) => Ok(LayerOutcome::Analyzed(LayerReport {
                name: layer.name.clone(),
                shape: layer.shape().to_vec(),
                total_weights: layer.total_weights(),
                scale: quantized.scale,
                result,
            })),
            Err(e @ AdcError::InsufficientData { .. }) => {
                warn!("{}; skipping layer", e);
                Ok(LayerOutcome::Skipped(SkippedLayer {
                    name: layer.name.clone(),
                    total_weights: layer.total_weights(),
                    reason: e.to_string(),
                }))
            }
            Err(e) => Err(e),
        }
    }

    pub fn analyze(&self, source: &dyn LayerSource, sink: &mut dyn ReportSink) -> Result<ModelReport> {
        let start_time = Instant::now();
        let layers = source.conv_layers()?;
        info!("Analyzing {} conv layers of {}", layers.len(), source.name());

        let progress = self.progress_bar(layers.len());
        let mut reports = Vec::new();
        let mut skipped = Vec::new();

        for layer in &layers {
            progress.set_message(layer.name.clone());

            match self.analyze_layer(layer)? {
                LayerOutcome::Analyzed(report) => {
                    // 보고 실패는 수치 결과에 영향을 주지 않음
                    if let Err(e) = progress.suspend(|| sink.report(&report.name, &report.result)) {
                        warn!("Failed to report {}: {}", report.name, e);
                    }
                    reports.push(report);
                }
                LayerOutcome::Skipped(layer) => skipped.push(layer),
            }
            progress.inc(1);
        }
        progress.finish_with_message("분석 완료!");

        let results: Vec<LayerResolutionResult> = reports.iter().map(|r| r.result.clone()).collect();
        let aggregate = AggregateResolution::from_results(&results);
        if let Some(aggregate) = &aggregate {
            if let Err(e) = sink.report_aggregate(aggregate) {
                warn!("Failed to report aggregate: {}", e);
            }
        }

        Ok(ModelReport {
            model_name: source.name().to_string(),
            generated_at: Utc::now(),
            estimator: self.config.estimator.clone(),
            layers: reports,
            skipped,
            aggregate,
            elapsed_secs: start_time.elapsed().as_secs_f64(),
        })
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len as u64);
        let style = ProgressStyle::default_bar()
            .template("📐 ADC 분석: [{elapsed_precise}] [{bar:40.green/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        pb.set_style(style);
        pb
    }
}
