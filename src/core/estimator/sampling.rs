//! 반복별 샘플링
//!
//! 반복마다 독립된 `StdRng`를 명시적 시드로 만든다. 프로세스 전역 RNG는
//! 쓰지 않으므로 반복을 병렬로 돌려도 같은 시드는 같은 샘플을 낸다.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

/// 비복원 추출된 평탄화 인덱스 집합
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    indices: Vec<usize>,
}

impl Sample {
    /// `seed`로 초기화한 생성기로 `[0, total)`에서 `size`개를 비복원 추출
    ///
    /// `total < size`이면 `None`.
    pub fn draw(seed: u64, total: usize, size: usize) -> Option<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::draw_with(&mut rng, total, size)
    }

    pub fn draw_with(rng: &mut StdRng, total: usize, size: usize) -> Option<Self> {
        if total < size {
            return None;
        }
        let indices = index::sample(rng, total, size).into_vec();
        Some(Self { indices })
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// 샘플된 위치의 가중치 값
    pub fn gather<'a>(&'a self, weights: &'a [i8]) -> impl Iterator<Item = i8> + 'a {
        self.indices.iter().map(move |&i| weights[i])
    }
}
