use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use rram_adc::model_tools::{
    LayerSource, ModelDownloader, SafetensorsModel, SyntheticModel, DEFAULT_MODEL_ID,
};
use rram_adc::{AnalysisConfig, ModelAdcAnalyzer};
use std::path::PathBuf;
use std::process;

fn analysis_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("JSON 설정 파일"),
        )
        .arg(
            Arg::new("iterations")
                .long("iterations")
                .short('i')
                .value_name("COUNT")
                .help("레이어당 샘플링 반복 횟수 (기본 20)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("기본 시드. 반복 k의 시드는 seed + k"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("DIR")
                .help("차트/리포트 출력 디렉토리"),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .value_name("N")
                .help("rayon 스레드 수"),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .action(ArgAction::SetTrue)
                .help("반복을 병렬로 실행"),
        )
        .arg(
            Arg::new("no-artifacts")
                .long("no-artifacts")
                .action(ArgAction::SetTrue)
                .help("JSON 차트 산출물을 기록하지 않음"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("콘솔 막대 그래프와 진행률 숨김"),
        )
}

fn build_cli() -> Command {
    Command::new("rram-adc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("RRAM 크로스바 컬럼별 ADC 해상도 추정 도구")
        .subcommand_required(true)
        .subcommand(analysis_args(
            Command::new("analyze")
                .about("SafeTensors 모델의 합성곱 레이어 분석")
                .arg(
                    Arg::new("model-path")
                        .required(true)
                        .help("model.safetensors 파일 또는 모델 디렉토리"),
                ),
        ))
        .subcommand(analysis_args(
            Command::new("synthetic")
                .about("시드 기반 합성 CNN으로 분석")
                .arg(
                    Arg::new("layers")
                        .long("layers")
                        .value_name("COUNT")
                        .help("3x3 합성곱 레이어 수"),
                )
                .arg(
                    Arg::new("model-seed")
                        .long("model-seed")
                        .value_name("SEED")
                        .help("합성 가중치 시드"),
                ),
        ))
        .subcommand(
            Command::new("download")
                .about("HuggingFace에서 모델 다운로드")
                .arg(
                    Arg::new("model-id")
                        .default_value(DEFAULT_MODEL_ID)
                        .help("HuggingFace 모델 ID"),
                )
                .arg(
                    Arg::new("output-dir")
                        .long("output")
                        .short('o')
                        .value_name("DIR")
                        .default_value("./models")
                        .help("출력 디렉토리"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("모델 텐서 목록과 합성곱 레이어 확인")
                .arg(Arg::new("model-path").required(true).help("모델 경로")),
        )
}

fn main() {
    env_logger::init();

    let matches = build_cli().get_matches();
    let result = match matches.subcommand() {
        Some(("analyze", sub_matches)) => handle_analyze(sub_matches),
        Some(("synthetic", sub_matches)) => handle_synthetic(sub_matches),
        Some(("download", sub_matches)) => handle_download(sub_matches),
        Some(("inspect", sub_matches)) => handle_inspect(sub_matches),
        _ => {
            println!("❌ 명령을 지정해주세요. --help를 참조하세요.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("❌ 오류: {:#}", e);
        process::exit(1);
    }
}

fn parse_opt<T>(matches: &ArgMatches, name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    matches
        .get_one::<String>(name)
        .map(|raw| raw.parse::<T>().with_context(|| format!("--{} 값이 잘못됨: {}", name, raw)))
        .transpose()
}

/// 설정 파일 위에 CLI 플래그를 덮어씀
fn load_config(matches: &ArgMatches) -> Result<AnalysisConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => AnalysisConfig::load(&PathBuf::from(path))
            .with_context(|| format!("설정 파일 로드 실패: {}", path))?,
        None => AnalysisConfig::default(),
    };

    if let Some(iterations) = parse_opt(matches, "iterations")? {
        config.estimator.num_iterations = iterations;
    }
    if let Some(seed) = parse_opt(matches, "seed")? {
        config.estimator.base_seed = seed;
    }
    if let Some(threads) = parse_opt(matches, "threads")? {
        config.num_threads = threads;
    }
    if let Some(output) = matches.get_one::<String>("output") {
        config.output_dir = PathBuf::from(output);
    }
    if matches.get_flag("parallel") {
        config.estimator.parallel = true;
    }
    if matches.get_flag("no-artifacts") {
        config.write_artifacts = false;
    }
    if matches.get_flag("quiet") {
        config.print_charts = false;
        config.show_progress = false;
    }
    Ok(config)
}

fn run_analysis(config: AnalysisConfig, source: &dyn LayerSource) -> Result<()> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(config.num_threads)
        .build_global()
        .context("rayon 스레드 풀 초기화 실패")?;

    println!("📐 ADC 해상도 분석 시작: {}", source.name());
    println!("   반복 횟수: {}", config.estimator.num_iterations);
    println!("   크로스바 행: {}", config.estimator.crossbar_rows);
    println!("   기본 시드: {}", config.estimator.base_seed);
    println!("   출력: {:?}", config.output_dir);

    let analyzer = ModelAdcAnalyzer::new(config)?;
    let mut sink = analyzer.default_sink();
    let report = analyzer.analyze(source, &mut sink)?;
    report.print_summary();

    if analyzer.config().write_artifacts {
        let report_path = analyzer.config().report_path();
        report.save_json(&report_path)?;
        println!("💾 리포트 저장: {}", report_path.display());
    }
    Ok(())
}

fn handle_analyze(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let model_path = PathBuf::from(
        matches
            .get_one::<String>("model-path")
            .context("model-path가 필요합니다")?,
    );
    let model = SafetensorsModel::open(&model_path)
        .with_context(|| format!("모델 로드 실패: {}", model_path.display()))?;
    run_analysis(config, &model)
}

fn handle_synthetic(matches: &ArgMatches) -> Result<()> {
    let mut config = load_config(matches)?;
    if let Some(layers) = parse_opt(matches, "layers")? {
        config.synthetic.num_layers = layers;
    }
    if let Some(seed) = parse_opt(matches, "model-seed")? {
        config.synthetic.seed = seed;
    }
    let model = SyntheticModel::new(config.synthetic.clone());
    run_analysis(config, &model)
}

fn handle_download(matches: &ArgMatches) -> Result<()> {
    let model_id = matches
        .get_one::<String>("model-id")
        .context("model-id가 필요합니다")?;
    let output_dir = matches
        .get_one::<String>("output-dir")
        .context("output-dir가 필요합니다")?;

    let downloader = ModelDownloader::with_output_root(model_id, PathBuf::from(output_dir));
    let runtime = tokio::runtime::Runtime::new()?;
    let model_dir = runtime.block_on(downloader.download())?;

    println!("✅ 다운로드 완료: {:?}", model_dir);
    println!("   다음: rram-adc analyze {}", model_dir.display());
    Ok(())
}

fn handle_inspect(matches: &ArgMatches) -> Result<()> {
    let model_path = PathBuf::from(
        matches
            .get_one::<String>("model-path")
            .context("model-path가 필요합니다")?,
    );
    let model = SafetensorsModel::open(&model_path)?;
    let summaries = model.summaries()?;

    println!("📋 모델: {} ({})", model.name(), model.path().display());
    println!("전체 텐서: {}개", summaries.len());
    for summary in summaries.iter().filter(|s| s.is_conv) {
        println!(
            "  {} {:?} {} - {} weights",
            summary.name,
            summary.shape,
            summary.dtype,
            summary.total_weights()
        );
    }
    let conv_count = summaries.iter().filter(|s| s.is_conv).count();
    println!("합성곱 레이어: {}개", conv_count);
    Ok(())
}
