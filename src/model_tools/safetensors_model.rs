//! SafeTensors 체크포인트에서 합성곱 가중치 읽기

use super::{LayerSource, ModelLayer};
use crate::error::{AdcError, Result};
use log::{debug, info};
use memmap2::Mmap;
use ndarray::{ArrayD, IxDyn};
use safetensors::tensor::TensorView;
use safetensors::{Dtype, SafeTensors};
use std::fs::File;
use std::path::{Path, PathBuf};

/// 디렉토리가 주어졌을 때 찾아볼 파일 이름들
pub const MODEL_FILE_NAMES: [&str; 3] = [
    "model.safetensors",
    "pytorch_model.safetensors",
    "model-00001-of-00001.safetensors",
];

/// 텐서 요약 (inspect 출력용)
#[derive(Debug, Clone, PartialEq)]
pub struct TensorSummary {
    pub name: String,
    pub shape: Vec<usize>,
    pub dtype: String,
    pub is_conv: bool,
}

impl TensorSummary {
    pub fn total_weights(&self) -> usize {
        self.shape.iter().product()
    }
}

/// 메모리 매핑된 SafeTensors 모델
pub struct SafetensorsModel {
    name: String,
    path: PathBuf,
    mmap: Mmap,
}

impl SafetensorsModel {
    /// 파일 또는 모델 디렉토리 열기
    pub fn open(path: &Path) -> Result<Self> {
        let file_path = resolve_model_file(path)?;
        info!("Loading SafeTensors model from {}", file_path.display());

        let file = File::open(&file_path)?;
        // SAFETY: 매핑된 파일은 이 구조체가 살아있는 동안 읽기 전용으로만 쓰인다
        let mmap = unsafe { Mmap::map(&file)? };
        SafeTensors::deserialize(&mmap)?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "model".to_string());

        Ok(Self {
            name,
            path: file_path,
            mmap,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tensors(&self) -> Result<SafeTensors<'_>> {
        Ok(SafeTensors::deserialize(&self.mmap)?)
    }

    /// 모든 텐서의 이름, 형상, dtype
    pub fn summaries(&self) -> Result<Vec<TensorSummary>> {
        let tensors = self.tensors()?;
        let mut summaries: Vec<TensorSummary> = tensors
            .tensors()
            .into_iter()
            .map(|(name, view)| TensorSummary {
                is_conv: is_conv_weight(&name, view.shape()),
                shape: view.shape().to_vec(),
                dtype: format!("{:?}", view.dtype()),
                name,
            })
            .collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(summaries)
    }
}

impl LayerSource for SafetensorsModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn conv_layers(&self) -> Result<Vec<ModelLayer>> {
        let tensors = self.tensors()?;
        let mut names: Vec<String> = tensors.names().into_iter().cloned().collect();
        names.sort();

        let mut layers = Vec::new();
        for name in names {
            let view = tensors.tensor(&name)?;
            if !is_conv_weight(&name, view.shape()) {
                debug!("Skipping non-conv tensor {} {:?}", name, view.shape());
                continue;
            }
            let values = decode_f32(&name, &view)?;
            let weights = ArrayD::from_shape_vec(IxDyn(view.shape()), values)?;
            layers.push(ModelLayer { name, weights });
        }

        info!("{}: {} conv layers", self.name, layers.len());
        Ok(layers)
    }
}

/// 합성곱 가중치 판별: `(out, in, kh, kw)` 4차원이고 이름이 `weight`로 끝남
pub fn is_conv_weight(name: &str, shape: &[usize]) -> bool {
    shape.len() == 4 && name.ends_with("weight")
}

/// F32 / F16 / BF16 텐서를 f32로 디코딩
pub fn decode_f32(name: &str, view: &TensorView<'_>) -> Result<Vec<f32>> {
    let data = view.data();
    let values = match view.dtype() {
        Dtype::F32 => data
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect(),
        Dtype::F16 => data
            .chunks_exact(2)
            .map(|c| half::f16::from_bits(u16::from_le_bytes([c[0], c[1]])).to_f32())
            .collect(),
        Dtype::BF16 => data
            .chunks_exact(2)
            .map(|c| half::bf16::from_bits(u16::from_le_bytes([c[0], c[1]])).to_f32())
            .collect(),
        other => {
            return Err(AdcError::UnsupportedDtype {
                layer: name.to_string(),
                dtype: format!("{:?}", other),
            })
        }
    };
    Ok(values)
}

fn resolve_model_file(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    if path.is_dir() {
        if let Some(found) = MODEL_FILE_NAMES
            .iter()
            .map(|name| path.join(name))
            .find(|candidate| candidate.exists())
        {
            return Ok(found);
        }
    }
    Err(AdcError::ModelNotFound(path.display().to_string()))
}
