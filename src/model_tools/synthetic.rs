//! 시드 기반 합성 CNN 모델
//!
//! 사전학습 체크포인트 없이 파이프라인을 돌려보기 위한 ResNet 유사 합성곱
//! 스택. 가중치는 He 초기화 표준편차를 갖는 정규분포에서 뽑는다.

use super::{LayerSource, ModelLayer};
use crate::error::Result;
use ndarray::{ArrayD, IxDyn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticModelConfig {
    /// 3x3 합성곱 레이어 수 (stem 제외)
    pub num_layers: usize,
    /// 첫 스테이지 채널 수
    pub base_channels: usize,
    /// 채널 상한
    pub max_channels: usize,
    /// 스테이지당 레이어 수. 스테이지가 바뀔 때 채널이 두 배가 된다
    pub layers_per_stage: usize,
    /// 샘플 크기보다 작은 1x1 프로브 레이어 포함 여부
    pub include_tiny_layer: bool,
    pub seed: u64,
}

impl Default for SyntheticModelConfig {
    fn default() -> Self {
        Self {
            num_layers: 8,
            base_channels: 16,
            max_channels: 128,
            layers_per_stage: 2,
            include_tiny_layer: true,
            seed: 42,
        }
    }
}

pub struct SyntheticModel {
    name: String,
    config: SyntheticModelConfig,
}

impl SyntheticModel {
    pub fn new(config: SyntheticModelConfig) -> Self {
        Self {
            name: format!("synthetic-cnn-seed{}", config.seed),
            config,
        }
    }

    /// 레이어별 `(이름, [out, in, kh, kw])`
    pub fn layer_shapes(&self) -> Vec<(String, [usize; 4])> {
        let c = &self.config;
        let mut shapes = vec![("conv1.weight".to_string(), [c.base_channels, 3, 7, 7])];

        let mut in_channels = c.base_channels;
        for i in 0..c.num_layers {
            let stage = i / c.layers_per_stage.max(1);
            let out_channels = (c.base_channels << stage.min(16)).min(c.max_channels);
            shapes.push((
                format!("features.{:02}.conv.weight", i),
                [out_channels, in_channels, 3, 3],
            ));
            in_channels = out_channels;
        }

        if c.include_tiny_layer {
            shapes.push(("probe.conv.weight".to_string(), [4, 4, 1, 1]));
        }
        shapes.sort_by(|a, b| a.0.cmp(&b.0));
        shapes
    }
}

impl LayerSource for SyntheticModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn conv_layers(&self) -> Result<Vec<ModelLayer>> {
        let mut layers = Vec::new();
        for (index, (name, shape)) in self.layer_shapes().into_iter().enumerate() {
            // 레이어마다 독립 시드
            let mut rng = StdRng::seed_from_u64(self.config.seed.wrapping_add(index as u64));
            let fan_in = shape[1] * shape[2] * shape[3];
            let std_dev = (2.0 / fan_in as f32).sqrt();
            let len: usize = shape.iter().product();
            let values: Vec<f32> = (0..len).map(|_| gaussian(&mut rng) * std_dev).collect();
            let weights = ArrayD::from_shape_vec(IxDyn(&shape), values)?;
            layers.push(ModelLayer { name, weights });
        }
        Ok(layers)
    }
}

/// Box-Muller 표준정규 샘플
fn gaussian(rng: &mut StdRng) -> f32 {
    let u1: f32 = rng.gen_range(f32::EPSILON..1.0);
    let u2: f32 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos()
}
