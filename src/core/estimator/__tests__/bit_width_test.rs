use crate::core::column::ColumnTable;
use crate::core::estimator::{bit_widths, required_bits};

#[test]
fn 영_합계_최소_비트_테스트() {
    assert_eq!(required_bits(0), 1);
}

#[test]
fn 로그_공식_일치_테스트() {
    for sum in 1..=100_000u32 {
        let expected = ((sum as f64) + 1.0).log2().ceil() as u32;
        assert_eq!(required_bits(sum), expected, "sum = {}", sum);
    }
}

#[test]
fn 경계값_테스트() {
    assert_eq!(required_bits(1), 1);
    assert_eq!(required_bits(2), 2);
    assert_eq!(required_bits(3), 2);
    assert_eq!(required_bits(4), 3);
    assert_eq!(required_bits(255), 8);
    assert_eq!(required_bits(256), 9);
    // 256행 × 셀 최대값 3
    assert_eq!(required_bits(768), 10);
    assert_eq!(required_bits(u32::MAX), 32);
}

#[test]
fn 테이블_비트폭_테스트() {
    let sums = ColumnTable {
        pos: [0, 1, 256, 768],
        neg: [3, 4, 0, 0],
    };
    let widths = bit_widths(&sums);
    assert_eq!(widths.pos, [1, 1, 9, 10]);
    assert_eq!(widths.neg, [2, 3, 1, 1]);
}
