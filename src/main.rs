use anyhow::Context;
use clap::Parser;
use time_interval::utils::error::ErrorCategory;
use time_interval::utils::logger;
use time_interval::{CliConfig, IntervalError, Report};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 載入設定檔 (logger 需要 logging.level)
    let file = match config.load_file() {
        Ok(file) => file,
        Err(e) => exit_with(&e),
    };
    let level = file.as_ref().and_then(|f| f.log_level());

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose, level);
    } else {
        logger::init_cli_logger(config.verbose, level);
    }
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve_settings(file.as_ref()) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    // 行尾換行由 shell 管道帶入, h:m:s 文法本身不接受空白
    let input = config.input.trim_end_matches(['\r', '\n']);
    let report = match Report::build(input, config.from, &settings) {
        Ok(report) => report,
        Err(e) => exit_with(&e),
    };

    let output = if config.json {
        report.render_json().context("rendering JSON report")?
    } else {
        report.render_text()
    };
    println!("{}", output);

    Ok(())
}

fn exit_with(e: &IntervalError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.category() {
        ErrorCategory::Configuration | ErrorCategory::System => 1,
        ErrorCategory::Input | ErrorCategory::Arithmetic => 2,
    };
    std::process::exit(exit_code);
}
