use crate::core::column::ColumnTable;
use crate::core::estimator::LayerResolutionResult;
use crate::error::{AdcError, Result};
use crate::report::{AggregateResolution, ConsoleSink, FanOutSink, NullSink, ReportSink};
use std::cell::RefCell;
use std::rc::Rc;

/// 호출 기록용 수신자
struct 기록_수신자 {
    labels: Rc<RefCell<Vec<String>>>,
}

impl ReportSink for 기록_수신자 {
    fn report(&mut self, layer_label: &str, _result: &LayerResolutionResult) -> Result<()> {
        self.labels.borrow_mut().push(layer_label.to_string());
        Ok(())
    }
}

struct 실패_수신자;

impl ReportSink for 실패_수신자 {
    fn report(&mut self, _layer_label: &str, _result: &LayerResolutionResult) -> Result<()> {
        Err(AdcError::InvalidConfig("sink offline".to_string()))
    }
}

fn 결과() -> LayerResolutionResult {
    LayerResolutionResult::new("conv", 1, ColumnTable::splat(4.0))
}

#[test]
fn 팬아웃_실패_격리_테스트() {
    let labels = Rc::new(RefCell::new(Vec::new()));
    let mut sink = FanOutSink::new()
        .with(실패_수신자)
        .with(기록_수신자 { labels: labels.clone() })
        .with(NullSink);
    assert_eq!(sink.len(), 3);

    let result = sink.report("conv", &결과());
    assert!(matches!(result, Err(AdcError::InvalidConfig(_))));
    // 앞선 수신자가 실패해도 나머지는 호출됨
    assert_eq!(labels.borrow().as_slice(), &["conv".to_string()]);

    let aggregate = AggregateResolution::from_results(&[결과()]).unwrap();
    assert!(sink.report_aggregate(&aggregate).is_ok());
}

#[test]
fn 콘솔_막대_테스트() {
    let table = ColumnTable {
        pos: [1.0, 10.0, 5.0, 0.0],
        neg: [1.0; 4],
    };
    let lines = ConsoleSink::render_bars(&table);
    assert_eq!(lines.len(), 8);
    assert!(lines[0].contains("1_pos"));
    assert_eq!(lines[1].matches('█').count(), 40);
    assert_eq!(lines[2].matches('█').count(), 20);
    assert_eq!(lines[3].matches('█').count(), 0);
    assert!(lines[1].ends_with("10.00"));

    let mut console = ConsoleSink;
    assert!(console.report("conv", &결과()).is_ok());
}
