use super::aggregate::AggregateResolution;
use super::sink::ReportSink;
use crate::core::column::ColumnTable;
use crate::core::estimator::LayerResolutionResult;
use crate::error::Result;

const BAR_WIDTH: usize = 40;

/// 콘솔 텍스트 막대 그래프
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// 8개 컬럼 막대 줄. 가장 긴 막대가 `BAR_WIDTH`
    pub fn render_bars(table: &ColumnTable<f64>) -> Vec<String> {
        let max = table.values().iter().cloned().fold(1.0f64, f64::max);
        table
            .iter()
            .map(|(key, bits)| {
                let filled = ((bits / max) * BAR_WIDTH as f64).round() as usize;
                format!(
                    "  {:>5} │{}{} {:.2}",
                    key.to_string(),
                    "█".repeat(filled),
                    " ".repeat(BAR_WIDTH - filled.min(BAR_WIDTH)),
                    bits
                )
            })
            .collect()
    }
}

impl ReportSink for ConsoleSink {
    fn report(&mut self, layer_label: &str, result: &LayerResolutionResult) -> Result<()> {
        let (widest, bits) = result.widest();
        println!("\n📊 {} - 평균 ADC 해상도 ({}회 반복)", layer_label, result.num_iterations);
        for line in Self::render_bars(&result.average_bits) {
            println!("{}", line);
        }
        println!("   최대 컬럼: {} ({:.2} bits → {}-bit ADC)", widest, bits, result.worst_case_bits());
        Ok(())
    }

    fn report_aggregate(&mut self, aggregate: &AggregateResolution) -> Result<()> {
        println!("\n🏆 === 전체 레이어 평균 ({}개 레이어) ===", aggregate.num_layers);
        for line in Self::render_bars(&aggregate.average_bits) {
            println!("{}", line);
        }
        Ok(())
    }
}
