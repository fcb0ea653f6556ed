use crate::core::column::{ColumnKey, ColumnTable};
use serde::{Deserialize, Serialize};

/// 레이어 하나의 컬럼별 평균 ADC 비트 수
///
/// 계산이 끝난 뒤에는 변경되지 않으며 호출자가 소유한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerResolutionResult {
    pub layer_label: String,
    pub num_iterations: usize,
    pub average_bits: ColumnTable<f64>,
}

impl LayerResolutionResult {
    pub fn new(layer_label: impl Into<String>, num_iterations: usize, average_bits: ColumnTable<f64>) -> Self {
        Self {
            layer_label: layer_label.into(),
            num_iterations,
            average_bits,
        }
    }

    pub fn get(&self, key: ColumnKey) -> f64 {
        self.average_bits[key]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColumnKey, f64)> + '_ {
        self.average_bits.iter()
    }

    /// 가장 많은 비트가 필요한 컬럼
    pub fn widest(&self) -> (ColumnKey, f64) {
        self.iter()
            .fold((ColumnKey::ALL[0], f64::MIN), |best, (key, bits)| {
                if bits > best.1 {
                    (key, bits)
                } else {
                    best
                }
            })
    }

    /// 실제 ADC 설계에 필요한 정수 비트 수 (가장 넓은 컬럼의 올림)
    pub fn worst_case_bits(&self) -> u32 {
        self.widest().1.ceil() as u32
    }
}
