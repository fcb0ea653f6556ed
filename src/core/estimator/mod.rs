pub mod adc_estimator;
pub mod bit_width;
pub mod config;
pub mod result;
pub mod sampling;
pub mod tensor;

#[cfg(test)]
mod __tests__;

pub use adc_estimator::{accumulate_sample, estimate, AdcResolutionEstimator, IterationOutcome};
pub use bit_width::{bit_widths, required_bits};
pub use config::{EstimatorConfig, DEFAULT_CROSSBAR_ROWS, DEFAULT_NUM_ITERATIONS};
pub use result::LayerResolutionResult;
pub use sampling::Sample;
pub use tensor::{QuantizedWeightTensor, MAX_QUANTIZED, MIN_QUANTIZED};
