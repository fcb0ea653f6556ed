//! # 컬럼 비트 분해기
//!
//! 셀당 4레벨(2비트) RRAM 크로스바는 8비트 크기값을 네 개의 2비트 아날로그
//! 레벨로 나누어 저장한다. 컬럼 1이 최상위 비트쌍(b0 b1), 컬럼 4가 최하위
//! 비트쌍(b6 b7)이다.

use super::column_key::ColumnTable;

/// 가중치 하나가 차지하는 물리 컬럼 수
pub const COLUMNS_PER_WEIGHT: usize = 4;

/// 셀당 비트 수
pub const BITS_PER_CELL: u32 = 2;

const CELL_MASK: u8 = (1 << BITS_PER_CELL) - 1;

/// 바이트 하나를 4개의 2비트 컬럼 값으로 분해
///
/// `c1*64 + c2*16 + c3*4 + c4 == value` 가 항상 성립한다.
pub fn decompose(value: u8) -> [u8; COLUMNS_PER_WEIGHT] {
    [
        (value >> 6) & CELL_MASK,
        (value >> 4) & CELL_MASK,
        (value >> 2) & CELL_MASK,
        value & CELL_MASK,
    ]
}

/// `decompose`의 역연산. 각 컬럼은 하위 2비트만 사용
pub fn recompose(columns: [u8; COLUMNS_PER_WEIGHT]) -> u8 {
    columns
        .iter()
        .fold(0u8, |acc, &c| (acc << BITS_PER_CELL) | (c & CELL_MASK))
}

/// 부호 있는 가중치를 (양수 부분, 음수 크기)로 분리
pub fn split_sign(weight: i8) -> (u8, u8) {
    if weight >= 0 {
        (weight.unsigned_abs(), 0)
    } else {
        (0, weight.unsigned_abs())
    }
}

/// 가중치 하나의 pos/neg 컬럼 기여분
///
/// 해당하지 않는 부호 쪽은 0을 분해한 값(모두 0)이 들어간다.
pub fn decompose_signed(weight: i8) -> ColumnTable<u8> {
    let (positive, negative) = split_sign(weight);
    ColumnTable {
        pos: decompose(positive),
        neg: decompose(negative),
    }
}

/// 가중치 하나의 기여분을 누적 합에 더함
pub fn accumulate_into(sums: &mut ColumnTable<u32>, weight: i8) {
    *sums = sums.zip_with(&decompose_signed(weight), |sum, column| sum + u32::from(column));
}
