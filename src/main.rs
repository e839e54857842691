use clap::Parser;
use small_lessons::utils::{logger, validation::Validate};
use small_lessons::{CliConfig, JournalEngine, LessonRegistry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting the small-lessons journal");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let registry = LessonRegistry::built_in();

    if config.list {
        print_catalog(&registry, &config.format)?;
        return Ok(());
    }

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let engine = JournalEngine::new_with_monitoring(registry, config.monitor);

    match engine.run(&config).await {
        Ok(report) => {
            let show_headers = report.runs.len() > 1;
            for run in &report.runs {
                if show_headers {
                    println!("=== {} ({}) ===", run.name, run.level);
                }
                print!("{}", run.output);
                if show_headers {
                    println!();
                }
            }

            if config.timing {
                for run in &report.runs {
                    println!("⏱️  {}: {}ms", run.name, run.duration_ms);
                }
            }

            tracing::info!(
                "✅ Journal run finished: {} completed, {} failed",
                report.completed(),
                report.failed()
            );
            if report.failed() > 0 {
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Journal run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            if let small_lessons::JournalError::UnknownLessonError { name } = &e {
                if let Some(suggestion) = engine.registry().suggest(name) {
                    eprintln!("💡 Did you mean '{}'?", suggestion);
                }
            }
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                small_lessons::utils::error::ErrorSeverity::Low => 0,
                small_lessons::utils::error::ErrorSeverity::Medium => 2,
                small_lessons::utils::error::ErrorSeverity::High => 1,
                small_lessons::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn print_catalog(registry: &LessonRegistry, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&registry.infos())?);
        return Ok(());
    }

    println!("📖 The journal knows {} lessons:", registry.len());
    for info in registry.infos() {
        println!("  [{}] {} - {}", info.level, info.name, info.summary);
    }
    Ok(())
}
