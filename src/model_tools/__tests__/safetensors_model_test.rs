//! SafeTensors 로더 테스트

use crate::error::AdcError;
use crate::model_tools::{is_conv_weight, LayerSource, SafetensorsModel};
use safetensors::tensor::TensorView;
use safetensors::Dtype;
use std::path::Path;

fn f32_바이트(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn f16_바이트(values: &[f32]) -> Vec<u8> {
    values
        .iter()
        .flat_map(|&v| half::f16::from_f32(v).to_bits().to_le_bytes())
        .collect()
}

fn bf16_바이트(values: &[f32]) -> Vec<u8> {
    values
        .iter()
        .flat_map(|&v| half::bf16::from_f32(v).to_bits().to_le_bytes())
        .collect()
}

fn 테스트_모델_작성(path: &Path) {
    let conv: Vec<f32> = (0..2 * 2 * 3 * 3).map(|i| i as f32 * 0.25 - 4.0).collect();
    let half_conv: Vec<f32> = vec![0.5, -0.25, 1.0, -1.0];
    let linear: Vec<f32> = vec![0.1; 6];

    let conv_bytes = f32_바이트(&conv);
    let half_bytes = f16_바이트(&half_conv);
    let bf16_bytes = bf16_바이트(&half_conv);
    let linear_bytes = f32_바이트(&linear);

    let tensors = vec![
        ("layer2.conv.weight", TensorView::new(Dtype::F32, vec![2, 2, 3, 3], &conv_bytes).unwrap()),
        ("layer1.conv.weight", TensorView::new(Dtype::F16, vec![1, 1, 2, 2], &half_bytes).unwrap()),
        ("layer3.conv.weight", TensorView::new(Dtype::BF16, vec![1, 1, 2, 2], &bf16_bytes).unwrap()),
        ("fc.weight", TensorView::new(Dtype::F32, vec![2, 3], &linear_bytes).unwrap()),
    ];
    let bytes = safetensors::serialize(tensors, &None).unwrap();
    std::fs::write(path, bytes).unwrap();
}

#[test]
fn 합성곱_판별_테스트() {
    assert!(is_conv_weight("layer1.0.conv1.weight", &[64, 64, 3, 3]));
    assert!(!is_conv_weight("layer1.0.bn1.weight", &[64]));
    assert!(!is_conv_weight("fc.weight", &[1000, 512]));
    assert!(!is_conv_weight("conv.bias", &[1, 1, 1, 1]));
}

#[test]
fn 합성곱_레이어_로딩_테스트() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tiny.safetensors");
    테스트_모델_작성(&path);

    let model = SafetensorsModel::open(&path).unwrap();
    assert_eq!(model.name(), "tiny");

    let layers = model.conv_layers().unwrap();
    let names: Vec<&str> = layers.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["layer1.conv.weight", "layer2.conv.weight", "layer3.conv.weight"]);

    assert_eq!(layers[0].shape(), &[1, 1, 2, 2]);
    let f16_values: Vec<f32> = layers[0].weights.iter().copied().collect();
    assert_eq!(f16_values, vec![0.5, -0.25, 1.0, -1.0]);

    assert_eq!(layers[1].total_weights(), 36);
    assert_eq!(layers[1].weights.iter().next().copied(), Some(-4.0));
    assert_eq!(layers[1].weights.iter().last().copied(), Some(35.0 * 0.25 - 4.0));

    let bf16_values: Vec<f32> = layers[2].weights.iter().copied().collect();
    assert_eq!(bf16_values, vec![0.5, -0.25, 1.0, -1.0]);
}

#[test]
fn 디렉토리_로딩_테스트() {
    let dir = tempfile::tempdir().unwrap();
    테스트_모델_작성(&dir.path().join("model.safetensors"));

    let model = SafetensorsModel::open(dir.path()).unwrap();
    assert!(model.path().ends_with("model.safetensors"));

    let summaries = model.summaries().unwrap();
    assert_eq!(summaries.len(), 4);
    assert_eq!(summaries[0].name, "fc.weight");
    assert!(!summaries[0].is_conv);
    assert_eq!(summaries.iter().filter(|s| s.is_conv).count(), 3);
    assert_eq!(summaries[2].total_weights(), 36);
}

#[test]
fn 파일_없음_테스트() {
    let dir = tempfile::tempdir().unwrap();
    let result = SafetensorsModel::open(&dir.path().join("missing.safetensors"));
    assert!(matches!(result, Err(AdcError::ModelNotFound(_))));
}

#[test]
fn 미지원_dtype_테스트() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ints.safetensors");
    let data = vec![0u8; 16];
    let tensors = vec![("conv.weight", TensorView::new(Dtype::I8, vec![1, 1, 4, 4], &data).unwrap())];
    std::fs::write(&path, safetensors::serialize(tensors, &None).unwrap()).unwrap();

    let model = SafetensorsModel::open(&path).unwrap();
    assert!(matches!(model.conv_layers(), Err(AdcError::UnsupportedDtype { .. })));
}
