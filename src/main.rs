//! Batch entry point: score every participant in the configured response file
//! and write the report.

use std::process::ExitCode;
use std::sync::Arc;

use ccip_profile::adapters::{
    FileIconRenderer, InMemoryIconRenderer, JsonLinesResponseSource, JsonReportWriter,
};
use ccip_profile::application::{GenerateProfilesCommand, GenerateProfilesHandler};
use ccip_profile::config::{AppConfig, LoggingConfig, ScoringConfig};
use ccip_profile::domain::foundation::{DomainError, ErrorCode};
use ccip_profile::domain::report::TextBank;
use ccip_profile::domain::{EngineTables, ProfileEngine};
use ccip_profile::ports::IconRenderer;
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn build_engine(scoring: &ScoringConfig) -> Result<ProfileEngine, DomainError> {
    let mut tables = EngineTables::standard()
        .map_err(|e| DomainError::new(ErrorCode::ConfigInvalid, e.to_string()))?;
    tables.thresholds = scoring.thresholds;

    if let Some(path) = &scoring.text_bank_path {
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::new(ErrorCode::ConfigInvalid, e.to_string()))?;
        let bank = TextBank::from_yaml(&source).map_err(|e| {
            DomainError::new(ErrorCode::ConfigInvalid, e.to_string()).with_detail("path", path)
        })?;
        tracing::info!(path = %path, "Loaded text bank override");
        tables.text_bank = Arc::new(bank);
    }

    Ok(ProfileEngine::new(tables)?)
}

async fn run(config: AppConfig) -> Result<bool, DomainError> {
    let engine = Arc::new(build_engine(&config.scoring).await?);

    let renderer: Arc<dyn IconRenderer> = match &config.batch.icon_dir {
        Some(dir) => Arc::new(FileIconRenderer::new(dir)),
        None => Arc::new(InMemoryIconRenderer::new()),
    };
    let handler = GenerateProfilesHandler::new(
        engine,
        Arc::new(JsonLinesResponseSource::new(&config.batch.input_path)),
        renderer,
        Arc::new(JsonReportWriter::new(&config.batch.output_path)),
    );

    let summary = handler
        .handle(GenerateProfilesCommand {
            render_icons: config.batch.renders_icons(),
        })
        .await?;

    let report = serde_json::to_string_pretty(&summary)
        .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))?;
    println!("{}", report);

    Ok(summary.rejected_rows.is_empty() && summary.intake_rejections.is_empty())
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };
    init_tracing(&config.logging);

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        return ExitCode::from(2);
    }

    match run(config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            tracing::warn!("Some rows were rejected");
            ExitCode::from(1)
        }
        Err(e) => {
            tracing::error!(code = %e.code, error = %e, "Batch failed");
            ExitCode::from(2)
        }
    }
}
