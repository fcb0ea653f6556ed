pub mod downloader;
pub mod safetensors_model;
pub mod synthetic;

#[cfg(test)]
mod __tests__;

pub use downloader::*;
pub use safetensors_model::*;
pub use synthetic::*;

use crate::error::Result;
use ndarray::ArrayD;

/// 모델에서 꺼낸 합성곱 레이어 하나
#[derive(Debug, Clone)]
pub struct ModelLayer {
    pub name: String,
    pub weights: ArrayD<f32>,
}

impl ModelLayer {
    pub fn shape(&self) -> &[usize] {
        self.weights.shape()
    }

    pub fn total_weights(&self) -> usize {
        self.weights.len()
    }
}

/// `(레이어 이름, 가중치)` 쌍을 합성곱 레이어에 대해서만 내주는 모델
pub trait LayerSource {
    fn name(&self) -> &str;

    /// 이름 순으로 정렬된 합성곱 레이어 목록
    fn conv_layers(&self) -> Result<Vec<ModelLayer>>;
}
