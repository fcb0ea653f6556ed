use super::aggregate::AggregateResolution;
use crate::core::estimator::LayerResolutionResult;
use crate::error::Result;

/// 레이어 결과를 받아 시각화/기록하는 수신자
///
/// 실패해도 이미 계산된 수치 결과에는 영향을 주지 않는다.
pub trait ReportSink {
    fn report(&mut self, layer_label: &str, result: &LayerResolutionResult) -> Result<()>;

    fn report_aggregate(&mut self, _aggregate: &AggregateResolution) -> Result<()> {
        Ok(())
    }
}

/// 헤드리스 실행용
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn report(&mut self, _layer_label: &str, _result: &LayerResolutionResult) -> Result<()> {
        Ok(())
    }
}

/// 여러 수신자에 차례로 전달. 하나가 실패해도 나머지는 호출하고 첫 에러를 돌려준다
#[derive(Default)]
pub struct FanOutSink {
    sinks: Vec<Box<dyn ReportSink>>,
}

impl FanOutSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: impl ReportSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    fn for_each(&mut self, mut f: impl FnMut(&mut dyn ReportSink) -> Result<()>) -> Result<()> {
        let mut first_error = None;
        for sink in self.sinks.iter_mut() {
            if let Err(e) = f(sink.as_mut()) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

impl ReportSink for FanOutSink {
    fn report(&mut self, layer_label: &str, result: &LayerResolutionResult) -> Result<()> {
        self.for_each(|sink| sink.report(layer_label, result))
    }

    fn report_aggregate(&mut self, aggregate: &AggregateResolution) -> Result<()> {
        self.for_each(|sink| sink.report_aggregate(aggregate))
    }
}
