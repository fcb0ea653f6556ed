use crate::core::column::ColumnTable;
use crate::core::estimator::LayerResolutionResult;
use crate::report::{
    layer_artifact_name, AggregateResolution, ChartArtifact, JsonArtifactSink, ReportSink,
    AGGREGATE_ARTIFACT_NAME,
};

fn 결과(label: &str) -> LayerResolutionResult {
    LayerResolutionResult::new(
        label,
        20,
        ColumnTable {
            pos: [1.0, 8.5, 9.0, 9.0],
            neg: [1.0, 8.0, 9.0, 9.05],
        },
    )
}

#[test]
fn 산출물_이름_테스트() {
    assert_eq!(layer_artifact_name("conv1"), "conv1_average_adc_resolution");
    assert_eq!(AGGREGATE_ARTIFACT_NAME, "average_adc_bits_per_column_all_layers");
}

#[test]
fn 차트_라벨_순서_테스트() {
    let chart = ChartArtifact::for_layer(&결과("layer1.0.conv1.weight"));
    assert_eq!(chart.name, "layer1.0.conv1.weight_average_adc_resolution");
    assert_eq!(
        chart.labels,
        vec!["1_pos", "2_pos", "3_pos", "4_pos", "1_neg", "2_neg", "3_neg", "4_neg"]
    );
    assert_eq!(chart.values, vec![1.0, 8.5, 9.0, 9.0, 1.0, 8.0, 9.0, 9.05]);
}

#[test]
fn json_기록_테스트() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("charts");
    let mut sink = JsonArtifactSink::new(&out);

    let result = 결과("conv1");
    sink.report("conv1", &result).unwrap();
    let aggregate = AggregateResolution::from_results(&[result.clone()]).unwrap();
    sink.report_aggregate(&aggregate).unwrap();

    let layer_path = out.join("conv1_average_adc_resolution.json");
    let aggregate_path = out.join("average_adc_bits_per_column_all_layers.json");
    assert_eq!(sink.written(), &[layer_path.clone(), aggregate_path.clone()]);

    let loaded = ChartArtifact::load(&layer_path).unwrap();
    assert_eq!(loaded.values, ChartArtifact::for_layer(&result).values);

    let loaded_aggregate = ChartArtifact::load(&aggregate_path).unwrap();
    assert!(loaded_aggregate.title.contains("1 layers"));
}

#[test]
fn 경로_구분자_치환_테스트() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = JsonArtifactSink::new(dir.path());
    sink.report("block/conv", &결과("block/conv")).unwrap();
    assert!(dir.path().join("block-conv_average_adc_resolution.json").exists());
}
