use crate::error::AdcError;
use crate::quantization::quantize_int8;
use approx::assert_relative_eq;
use ndarray::{ArrayD, IxDyn};

fn 배열(values: Vec<f32>) -> ArrayD<f32> {
    let len = values.len();
    ArrayD::from_shape_vec(IxDyn(&[len]), values).unwrap()
}

#[test]
fn 스케일_계산_테스트() {
    let weights = 배열(vec![0.4, -1.0, 0.25, 0.0]);
    let quantized = quantize_int8("w", &weights).unwrap();

    assert_relative_eq!(quantized.scale, 1.0 / 127.0);
    let values: Vec<i8> = quantized.values.iter().copied().collect();
    assert_eq!(values, vec![51, -127, 32, 0]);
}

#[test]
fn 범위_테스트() {
    let weights = 배열((0..1000).map(|i| (i as f32 - 500.0) * 0.013).collect());
    let quantized = quantize_int8("w", &weights).unwrap();

    assert!(quantized.values.iter().all(|&q| (-127..=127).contains(&q)));
    assert!(quantized.values.iter().any(|&q| q == -127));
    assert!(quantized.to_weight_tensor().is_ok());
}

#[test]
fn 영_가중치_스케일_테스트() {
    let quantized = quantize_int8("zeros", &배열(vec![0.0; 16])).unwrap();
    assert_eq!(quantized.scale, 1.0);
    assert!(quantized.values.iter().all(|&q| q == 0));
}

#[test]
fn 역양자화_오차_테스트() {
    let weights = 배열(vec![0.3, -0.7, 0.01, 0.69, -0.02]);
    let quantized = quantize_int8("w", &weights).unwrap();
    let restored = quantized.dequantize();

    for (original, restored) in weights.iter().zip(restored.iter()) {
        assert!((original - restored).abs() <= quantized.scale / 2.0 + 1e-6);
    }
}

#[test]
fn 비유한값_거부_테스트() {
    let result = quantize_int8("bad", &배열(vec![0.1, f32::NAN, 0.2]));
    match result {
        Err(AdcError::NonFiniteWeight { layer, index }) => {
            assert_eq!(layer, "bad");
            assert_eq!(index, 1);
        }
        other => panic!("NaN이 거부되지 않음: {:?}", other),
    }
}

#[test]
fn 비정규_최대값_스케일_테스트() {
    // 1e-45 / 127 은 0으로 언더플로한다
    let weights = 배열(vec![1e-45, 0.0, -1e-45]);
    let quantized = quantize_int8("w", &weights).unwrap();

    assert!(quantized.scale > 0.0);
    assert_eq!(quantized.scale, 1.0);
    let values: Vec<i8> = quantized.values.iter().copied().collect();
    assert_eq!(values, vec![0, 0, 0]);
}
