use crate::core::estimator::QuantizedWeightTensor;
use crate::error::AdcError;
use ndarray::{ArrayD, IxDyn};

#[test]
fn 배열_평탄화_테스트() {
    let array = ArrayD::from_shape_vec(IxDyn(&[2, 3]), vec![1i8, -2, 3, -4, 5, -6]).unwrap();
    let tensor = QuantizedWeightTensor::from_array(&array).unwrap();

    assert_eq!(tensor.shape(), &[2, 3]);
    assert_eq!(tensor.flat(), &[1, -2, 3, -4, 5, -6]);
    assert_eq!(tensor.total_weights(), 6);
    assert_eq!(tensor.to_array().unwrap(), array);
}

#[test]
fn 범위_검증_테스트() {
    let result = QuantizedWeightTensor::from_values(vec![0, 127, -127, -128]);
    match result {
        Err(AdcError::ValueOutOfRange { index, value }) => {
            assert_eq!(index, 3);
            assert_eq!(value, -128);
        }
        other => panic!("범위 초과가 거부되지 않음: {:?}", other),
    }
}

#[test]
fn 형상_불일치_테스트() {
    let result = QuantizedWeightTensor::from_flat(vec![4, 4], vec![0; 10]);
    assert!(matches!(result, Err(AdcError::InvalidConfig(_))));
}
