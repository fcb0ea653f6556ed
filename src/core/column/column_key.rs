//! 컬럼 키와 8칸 고정 테이블
//!
//! 크로스바 한 열(column)은 `{1,2,3,4} × {pos,neg}` 중 하나로 식별된다.
//! 문자열 키 맵 대신 열거형 쌍으로 인덱싱하는 고정 크기 레코드를 사용한다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// 8비트 크기값의 2비트 슬라이스 위치 (1 = 최상위 비트쌍)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    First,
    Second,
    Third,
    Fourth,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::First, Column::Second, Column::Third, Column::Fourth];

    /// 1부터 시작하는 컬럼 번호
    pub fn number(self) -> usize {
        self.slot() + 1
    }

    /// 1..=4 번호로부터 컬럼 생성
    pub fn from_number(number: usize) -> Option<Self> {
        match number {
            1 => Some(Column::First),
            2 => Some(Column::Second),
            3 => Some(Column::Third),
            4 => Some(Column::Fourth),
            _ => None,
        }
    }

    fn slot(self) -> usize {
        match self {
            Column::First => 0,
            Column::Second => 1,
            Column::Third => 2,
            Column::Fourth => 3,
        }
    }
}

/// 부호 분리된 크기 스트림
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sign {
    Pos,
    Neg,
}

impl Sign {
    pub const ALL: [Sign; 2] = [Sign::Pos, Sign::Neg];

    pub fn as_str(self) -> &'static str {
        match self {
            Sign::Pos => "pos",
            Sign::Neg => "neg",
        }
    }
}

/// 컬럼 식별자 (`1_pos` ... `4_neg`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColumnKey {
    pub column: Column,
    pub sign: Sign,
}

impl ColumnKey {
    /// 고정 순회 순서: pos 1..4 다음 neg 1..4
    pub const ALL: [ColumnKey; 8] = [
        ColumnKey::new(Column::First, Sign::Pos),
        ColumnKey::new(Column::Second, Sign::Pos),
        ColumnKey::new(Column::Third, Sign::Pos),
        ColumnKey::new(Column::Fourth, Sign::Pos),
        ColumnKey::new(Column::First, Sign::Neg),
        ColumnKey::new(Column::Second, Sign::Neg),
        ColumnKey::new(Column::Third, Sign::Neg),
        ColumnKey::new(Column::Fourth, Sign::Neg),
    ];

    pub const fn new(column: Column, sign: Sign) -> Self {
        Self { column, sign }
    }

    /// `"3_neg"` 형태의 라벨 파싱
    pub fn parse(label: &str) -> Option<Self> {
        let (number, sign) = label.split_once('_')?;
        let column = Column::from_number(number.parse().ok()?)?;
        let sign = match sign {
            "pos" => Sign::Pos,
            "neg" => Sign::Neg,
            _ => return None,
        };
        Some(Self::new(column, sign))
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.column.number(), self.sign.as_str())
    }
}

/// ColumnKey로 인덱싱되는 8칸 고정 테이블
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnTable<T> {
    pub pos: [T; 4],
    pub neg: [T; 4],
}

impl<T: Copy> ColumnTable<T> {
    /// 모든 칸을 같은 값으로 채움
    pub fn splat(value: T) -> Self {
        Self {
            pos: [value; 4],
            neg: [value; 4],
        }
    }

    pub fn get(&self, key: ColumnKey) -> T {
        self[key]
    }

    /// 고정 순서로 (키, 값) 순회
    pub fn iter(&self) -> impl Iterator<Item = (ColumnKey, T)> + '_ {
        ColumnKey::ALL.iter().map(move |&key| (key, self[key]))
    }

    pub fn values(&self) -> [T; 8] {
        let mut out = [self.pos[0]; 8];
        for (slot, (_, value)) in out.iter_mut().zip(self.iter()) {
            *slot = value;
        }
        out
    }

    pub fn map<U: Copy>(&self, mut f: impl FnMut(T) -> U) -> ColumnTable<U> {
        ColumnTable {
            pos: self.pos.map(&mut f),
            neg: self.neg.map(&mut f),
        }
    }

    /// 같은 키끼리 두 테이블을 결합
    pub fn zip_with<U: Copy, V: Copy>(
        &self,
        other: &ColumnTable<U>,
        mut f: impl FnMut(T, U) -> V,
    ) -> ColumnTable<V> {
        ColumnTable {
            pos: std::array::from_fn(|i| f(self.pos[i], other.pos[i])),
            neg: std::array::from_fn(|i| f(self.neg[i], other.neg[i])),
        }
    }
}

impl<T> Index<ColumnKey> for ColumnTable<T> {
    type Output = T;

    fn index(&self, key: ColumnKey) -> &T {
        match key.sign {
            Sign::Pos => &self.pos[key.column.slot()],
            Sign::Neg => &self.neg[key.column.slot()],
        }
    }
}

impl<T> IndexMut<ColumnKey> for ColumnTable<T> {
    fn index_mut(&mut self, key: ColumnKey) -> &mut T {
        match key.sign {
            Sign::Pos => &mut self.pos[key.column.slot()],
            Sign::Neg => &mut self.neg[key.column.slot()],
        }
    }
}
