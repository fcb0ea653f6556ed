//! # 분석 설정
//!
//! JSON 파일로 저장/로드할 수 있으며, 빠진 필드는 기본값으로 채워진다.
//! CLI 플래그는 파일 값 위에 덮어쓴다.

use crate::core::estimator::EstimatorConfig;
use crate::error::Result;
use crate::model_tools::SyntheticModelConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// 추정기 설정 (반복 횟수, 크로스바 행 수, 시드)
    pub estimator: EstimatorConfig,
    /// 차트/리포트 출력 디렉토리
    pub output_dir: PathBuf,
    /// JSON 차트 산출물 기록 여부
    pub write_artifacts: bool,
    /// 콘솔 막대 그래프 출력 여부
    pub print_charts: bool,
    /// 진행률 표시
    pub show_progress: bool,
    /// rayon 전역 스레드 풀 크기
    pub num_threads: usize,
    /// `synthetic` 명령용 합성 모델 설정
    pub synthetic: SyntheticModelConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            estimator: EstimatorConfig::default(),
            output_dir: PathBuf::from("adc_results"),
            write_artifacts: true,
            print_charts: true,
            show_progress: true,
            num_threads: num_cpus::get(),
            synthetic: SyntheticModelConfig::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.estimator.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// 모델 리포트 파일 경로
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join("adc_report.json")
    }
}
