use crate::core::estimator::{QuantizedWeightTensor, MAX_QUANTIZED};
use crate::error::{AdcError, Result};
use ndarray::ArrayD;

/// 텐서 단위 스케일을 갖는 대칭 int8 양자화 결과
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizedTensor {
    pub values: ArrayD<i8>,
    pub scale: f32,
}

impl QuantizedTensor {
    pub fn dequantize(&self) -> ArrayD<f32> {
        self.values.mapv(|q| f32::from(q) * self.scale)
    }

    /// 추정기 입력 형태로 변환
    pub fn to_weight_tensor(&self) -> Result<QuantizedWeightTensor> {
        QuantizedWeightTensor::from_array(&self.values)
    }
}

/// 절댓값 최대치 기준 대칭 양자화
///
/// `scale = max|w| / 127`, 값은 `round(w / scale)`을 [-127, 127]로 자른 것이다.
/// 모든 가중치가 0이거나 scale이 0으로 언더플로하면 scale은 1로 둔다.
pub fn quantize_int8(layer: &str, weights: &ArrayD<f32>) -> Result<QuantizedTensor> {
    if let Some((index, _)) = weights.iter().enumerate().find(|(_, w)| !w.is_finite()) {
        return Err(AdcError::NonFiniteWeight {
            layer: layer.to_string(),
            index,
        });
    }

    let max_abs = weights.iter().fold(0.0f32, |acc, w| acc.max(w.abs()));
    let limit = f32::from(MAX_QUANTIZED);
    let scale = max_abs / limit;
    let scale = if scale > 0.0 { scale } else { 1.0 };

    let values = weights.mapv(|w| (w / scale).round().clamp(-limit, limit) as i8);
    Ok(QuantizedTensor { values, scale })
}
