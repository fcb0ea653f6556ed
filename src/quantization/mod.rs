//! 레이어 가중치 int8 양자화

pub mod int8;

#[cfg(test)]
mod __tests__;

pub use int8::{quantize_int8, QuantizedTensor};
