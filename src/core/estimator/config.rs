use crate::error::{AdcError, Result};
use serde::{Deserialize, Serialize};

/// 크로스바 한 열에 동시에 연결되는 행 수 (샘플 크기)
pub const DEFAULT_CROSSBAR_ROWS: usize = 256;

/// 기본 몬테카를로 반복 횟수
pub const DEFAULT_NUM_ITERATIONS: usize = 20;

/// ADC 해상도 추정기 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// 독립 샘플링 반복 횟수
    pub num_iterations: usize,
    /// 반복마다 뽑는 가중치 수
    pub crossbar_rows: usize,
    /// 반복 k의 시드는 `base_seed + k`
    pub base_seed: u64,
    /// rayon으로 반복을 병렬 실행
    pub parallel: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            num_iterations: DEFAULT_NUM_ITERATIONS,
            crossbar_rows: DEFAULT_CROSSBAR_ROWS,
            base_seed: 0,
            parallel: false,
        }
    }
}

impl EstimatorConfig {
    pub fn with_iterations(mut self, num_iterations: usize) -> Self {
        self.num_iterations = num_iterations;
        self
    }

    pub fn with_seed(mut self, base_seed: u64) -> Self {
        self.base_seed = base_seed;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_iterations == 0 {
            return Err(AdcError::InvalidConfig(
                "num_iterations must be at least 1".to_string(),
            ));
        }
        if self.crossbar_rows == 0 {
            return Err(AdcError::InvalidConfig(
                "crossbar_rows must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// 반복 k에 쓰일 시드
    pub fn seed_for(&self, iteration: usize) -> u64 {
        self.base_seed.wrapping_add(iteration as u64)
    }
}
