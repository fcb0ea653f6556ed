use crate::core::column::{ColumnKey, ColumnTable};
use crate::core::estimator::LayerResolutionResult;
use serde::{Deserialize, Serialize};

/// 모든 레이어에 걸친 컬럼별 평균 비트 수
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResolution {
    pub num_layers: usize,
    pub average_bits: ColumnTable<f64>,
}

impl AggregateResolution {
    /// 레이어 결과들의 키별 산술 평균. 빈 입력이면 `None`
    pub fn from_results(results: &[LayerResolutionResult]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }
        let totals = results
            .iter()
            .fold(ColumnTable::splat(0.0), |acc, r| acc.zip_with(&r.average_bits, |a, b| a + b));
        let n = results.len() as f64;
        Some(Self {
            num_layers: results.len(),
            average_bits: totals.map(|total| total / n),
        })
    }

    pub fn get(&self, key: ColumnKey) -> f64 {
        self.average_bits[key]
    }
}
