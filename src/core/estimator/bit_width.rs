use crate::core::column::ColumnTable;

/// 누적 합을 무손실로 표현하는 최소 무부호 비트 수
///
/// 합이 0이면 1비트, 아니면 `ceil(log2(sum + 1))`. 정수 비트 길이로 계산하므로
/// `log2(0)`이 생기지 않는다.
pub fn required_bits(sum: u32) -> u32 {
    if sum == 0 {
        1
    } else {
        u32::BITS - sum.leading_zeros()
    }
}

/// 8개 컬럼 전체의 반복별 비트 폭
pub fn bit_widths(sums: &ColumnTable<u32>) -> ColumnTable<u32> {
    sums.map(required_bits)
}
