use clap::Parser;
use matrixgen::core::ConfigProvider;
use matrixgen::utils::error::{ErrorSeverity, MatrixError};
use matrixgen::utils::{logger, validation::Validate};
use matrixgen::{CliConfig, LocalSnippetDir, MatrixEngine, MatrixPipeline, TomlConfig};

fn main() {
    let config = CliConfig::parse().normalized();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting matrixgen");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let exit_code = run(config);
    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}

fn run(config: CliConfig) -> i32 {
    let dry_run = config.dry_run;

    match &config.config {
        Some(path) => {
            let mut file_config = match TomlConfig::from_file(path) {
                Ok(loaded) => loaded,
                Err(e) => return report_error(&e),
            };
            // --limit on the command line wins over the config file.
            if config.limit.is_some() {
                file_config.matrix.limit = config.limit;
            }
            execute(file_config, dry_run)
        }
        None => execute(config, dry_run),
    }
}

fn execute<C>(config: C, dry_run: bool) -> i32
where
    C: ConfigProvider + Validate,
{
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        return report_error(&e);
    }

    let source = LocalSnippetDir::new(config.snippets_dir());
    let pipeline = MatrixPipeline::new(source, config);
    let engine = MatrixEngine::new(pipeline);

    if dry_run {
        match engine.summarize() {
            Ok(summary) => {
                eprintln!("{}", summary);
                0
            }
            Err(e) => report_error(&e),
        }
    } else {
        match engine.run() {
            Ok(result) => {
                println!("{}", result.yaml);
                tracing::info!("Build matrix complete: {} entries", result.emitted);
                0
            }
            Err(e) => report_error(&e),
        }
    }
}

fn report_error(e: &MatrixError) -> i32 {
    tracing::error!("Build matrix generation failed: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
    }
}
