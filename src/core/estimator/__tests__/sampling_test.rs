use crate::core::estimator::Sample;
use std::collections::HashSet;

#[test]
fn 비복원_추출_테스트() {
    let sample = Sample::draw(7, 1000, 256).unwrap();
    assert_eq!(sample.len(), 256);

    let unique: HashSet<usize> = sample.indices().iter().copied().collect();
    assert_eq!(unique.len(), 256, "중복 인덱스 발생");
    assert!(sample.indices().iter().all(|&i| i < 1000));
}

#[test]
fn 시드_재현성_테스트() {
    for seed in 0..5u64 {
        assert_eq!(Sample::draw(seed, 5000, 256).unwrap(), Sample::draw(seed, 5000, 256).unwrap());
    }
    assert_ne!(Sample::draw(0, 5000, 256).unwrap(), Sample::draw(1, 5000, 256).unwrap());
}

#[test]
fn 전체_추출_테스트() {
    // total == size 이면 모든 인덱스가 한 번씩 뽑힘
    let sample = Sample::draw(3, 256, 256).unwrap();
    let mut indices = sample.indices().to_vec();
    indices.sort_unstable();
    assert_eq!(indices, (0..256).collect::<Vec<_>>());
}

#[test]
fn 값_수집_테스트() {
    let weights: Vec<i8> = (0..300).map(|i| (i % 100) as i8).collect();
    let sample = Sample::draw(11, weights.len(), 256).unwrap();
    let gathered: Vec<i8> = sample.gather(&weights).collect();
    for (&index, &value) in sample.indices().iter().zip(gathered.iter()) {
        assert_eq!(weights[index], value);
    }
}

#[test]
fn 모집단_부족_테스트() {
    assert!(Sample::draw(0, 100, 256).is_none());
    assert!(Sample::draw(0, 0, 1).is_none());
    assert_eq!(Sample::draw(0, 5, 0).map(|s| s.len()), Some(0));
}
