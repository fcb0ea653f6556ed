use crate::error::{AdcError, Result};
use ndarray::{ArrayD, IxDyn};

/// int8 가중치 하한 (-128은 허용하지 않음)
pub const MIN_QUANTIZED: i8 = -127;
pub const MAX_QUANTIZED: i8 = 127;

/// 한 레이어의 양자화 가중치 텐서
///
/// 모든 원소가 [-127, 127] 범위임이 생성 시점에 검증된다. 값은 ndarray 논리
/// 순서(행 우선)로 평탄화되어 저장된다.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizedWeightTensor {
    shape: Vec<usize>,
    values: Vec<i8>,
}

impl QuantizedWeightTensor {
    pub fn from_array(array: &ArrayD<i8>) -> Result<Self> {
        Self::from_flat(array.shape().to_vec(), array.iter().copied().collect())
    }

    pub fn from_flat(shape: Vec<usize>, values: Vec<i8>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if expected != values.len() {
            return Err(AdcError::InvalidConfig(format!(
                "shape {:?} needs {} values, got {}",
                shape,
                expected,
                values.len()
            )));
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, &v)| v < MIN_QUANTIZED)
        {
            return Err(AdcError::ValueOutOfRange { index, value });
        }
        Ok(Self { shape, values })
    }

    /// 1차원 텐서
    pub fn from_values(values: Vec<i8>) -> Result<Self> {
        Self::from_flat(vec![values.len()], values)
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// 평탄화된 값
    pub fn flat(&self) -> &[i8] {
        &self.values
    }

    pub fn total_weights(&self) -> usize {
        self.values.len()
    }

    pub fn to_array(&self) -> Result<ArrayD<i8>> {
        Ok(ArrayD::from_shape_vec(IxDyn(&self.shape), self.values.clone())?)
    }
}
