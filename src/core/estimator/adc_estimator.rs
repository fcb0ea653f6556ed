//! # 레이어 ADC 해상도 추정기
//!
//! 레이어 가중치에서 크로스바 행 수만큼 비복원 추출하고, 부호 분리된 크기를
//! 2비트 컬럼으로 분해해 열마다 누적한 뒤 필요한 비트 수를 구한다. 시드가
//! 다른 독립 반복을 `num_iterations`번 수행해 평균을 낸다.

use super::bit_width::bit_widths;
use super::config::EstimatorConfig;
use super::result::LayerResolutionResult;
use super::sampling::Sample;
use super::tensor::QuantizedWeightTensor;
use crate::core::column::{accumulate_into, ColumnTable};
use crate::error::{AdcError, Result};
use log::{debug, warn};
use rayon::prelude::*;

/// 반복 한 번의 중간 결과
#[derive(Debug, Clone, PartialEq)]
pub struct IterationOutcome {
    pub iteration: usize,
    pub seed: u64,
    pub column_sums: ColumnTable<u32>,
    pub bit_widths: ColumnTable<u32>,
}

/// 샘플된 가중치들의 컬럼별 누적 합
pub fn accumulate_sample(weights: &[i8], sample: &Sample) -> ColumnTable<u32> {
    let mut sums = ColumnTable::default();
    for weight in sample.gather(weights) {
        accumulate_into(&mut sums, weight);
    }
    sums
}

#[derive(Debug, Clone)]
pub struct AdcResolutionEstimator {
    config: EstimatorConfig,
}

impl AdcResolutionEstimator {
    pub fn new(config: EstimatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// 레이어 하나의 평균 비트 수 추정
    ///
    /// 가중치가 `crossbar_rows`보다 적으면 경고를 남기고 `None`을 돌려준다.
    /// 호출자는 해당 레이어를 건너뛰면 된다.
    pub fn estimate(&self, tensor: &QuantizedWeightTensor, layer_label: &str) -> Option<LayerResolutionResult> {
        match self.try_estimate(tensor, layer_label) {
            Ok(result) => Some(result),
            Err(e) => {
                warn!("{}; skipping layer", e);
                None
            }
        }
    }

    /// `estimate`와 같지만 데이터 부족을 에러로 돌려준다
    pub fn try_estimate(&self, tensor: &QuantizedWeightTensor, layer_label: &str) -> Result<LayerResolutionResult> {
        let total = tensor.total_weights();
        self.check_len(layer_label, total)?;

        let weights = tensor.flat();
        let iterations = self.config.num_iterations;

        let widths: Vec<ColumnTable<u32>> = if self.config.parallel {
            (0..iterations)
                .into_par_iter()
                .map(|k| self.run_iteration(layer_label, weights, k).map(|o| o.bit_widths))
                .collect::<Result<_>>()?
        } else {
            (0..iterations)
                .map(|k| self.run_iteration(layer_label, weights, k).map(|o| o.bit_widths))
                .collect::<Result<_>>()?
        };
        // 정수 합이므로 병렬 여부와 무관하게 같은 결과
        let totals = widths
            .iter()
            .fold(ColumnTable::<u32>::default(), |a, b| a.zip_with(b, |x, y| x + y));

        let average_bits = totals.map(|total_bits| f64::from(total_bits) / iterations as f64);
        debug!(
            "{}: {} weights, {} iterations, averages {:?}",
            layer_label,
            total,
            iterations,
            average_bits.values()
        );

        Ok(LayerResolutionResult::new(layer_label, iterations, average_bits))
    }

    /// 반복 k 실행. 시드는 `base_seed + k`이며 생성기는 이 반복 안에서만 쓰인다
    pub fn run_iteration(&self, layer_label: &str, weights: &[i8], iteration: usize) -> Result<IterationOutcome> {
        let seed = self.config.seed_for(iteration);
        let sample = Sample::draw(seed, weights.len(), self.config.crossbar_rows)
            .ok_or_else(|| self.insufficient(layer_label, weights.len()))?;
        let column_sums = accumulate_sample(weights, &sample);
        Ok(IterationOutcome {
            iteration,
            seed,
            bit_widths: bit_widths(&column_sums),
            column_sums,
        })
    }

    fn check_len(&self, layer_label: &str, available: usize) -> Result<()> {
        if available < self.config.crossbar_rows {
            return Err(self.insufficient(layer_label, available));
        }
        Ok(())
    }

    fn insufficient(&self, layer_label: &str, available: usize) -> AdcError {
        AdcError::InsufficientData {
            layer: layer_label.to_string(),
            available,
            required: self.config.crossbar_rows,
        }
    }
}

/// 기본 설정(시드 = 반복 번호)으로 `num_iterations`번 추정
pub fn estimate(
    tensor: &QuantizedWeightTensor,
    num_iterations: usize,
    layer_label: &str,
) -> Option<LayerResolutionResult> {
    let config = EstimatorConfig::default().with_iterations(num_iterations);
    match AdcResolutionEstimator::new(config) {
        Ok(estimator) => estimator.estimate(tensor, layer_label),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}
