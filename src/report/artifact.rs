//! JSON 차트 산출물
//!
//! 픽셀 렌더링 대신 막대 라벨과 높이를 JSON으로 남긴다. 파일 이름은
//! `<layerLabel>_average_adc_resolution.json`, 집계는
//! `average_adc_bits_per_column_all_layers.json`.

use super::aggregate::AggregateResolution;
use super::sink::ReportSink;
use crate::core::column::ColumnTable;
use crate::core::estimator::LayerResolutionResult;
use crate::error::Result;
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const AGGREGATE_ARTIFACT_NAME: &str = "average_adc_bits_per_column_all_layers";

pub fn layer_artifact_name(layer_label: &str) -> String {
    format!("{}_average_adc_resolution", layer_label)
}

/// 막대 그래프 하나
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartArtifact {
    pub name: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub generated_at: DateTime<Utc>,
}

impl ChartArtifact {
    pub fn from_table(name: String, title: String, table: &ColumnTable<f64>) -> Self {
        let (labels, values) = table.iter().map(|(key, bits)| (key.to_string(), bits)).unzip();
        Self {
            name,
            title,
            x_label: "Column".to_string(),
            y_label: "Average ADC Bits".to_string(),
            labels,
            values,
            generated_at: Utc::now(),
        }
    }

    pub fn for_layer(result: &LayerResolutionResult) -> Self {
        Self::from_table(
            layer_artifact_name(&result.layer_label),
            format!(
                "Average ADC Resolution per Column - {} ({} iterations)",
                result.layer_label, result.num_iterations
            ),
            &result.average_bits,
        )
    }

    pub fn for_aggregate(aggregate: &AggregateResolution) -> Self {
        Self::from_table(
            AGGREGATE_ARTIFACT_NAME.to_string(),
            format!("Average ADC Bits per Column - All Layers ({} layers)", aggregate.num_layers),
            &aggregate.average_bits,
        )
    }

    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.json", file_safe(&self.name)));
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        info!("Saved chart artifact {}", path.display());
        Ok(path)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// 경로 구분자만 치환
fn file_safe(name: &str) -> String {
    name.replace(['/', '\\'], "-")
}

/// 레이어/집계 차트를 디렉토리에 JSON으로 기록
#[derive(Debug, Clone)]
pub struct JsonArtifactSink {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonArtifactSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: Vec::new(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// 지금까지 기록한 파일들
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ReportSink for JsonArtifactSink {
    fn report(&mut self, _layer_label: &str, result: &LayerResolutionResult) -> Result<()> {
        let path = ChartArtifact::for_layer(result).save(&self.output_dir)?;
        self.written.push(path);
        Ok(())
    }

    fn report_aggregate(&mut self, aggregate: &AggregateResolution) -> Result<()> {
        let path = ChartArtifact::for_aggregate(aggregate).save(&self.output_dir)?;
        self.written.push(path);
        Ok(())
    }
}
