use anyhow::Context;
use clap::Parser;
use small_lessons::utils::{logger, validation, validation::Validate};
use small_lessons::{JournalEngine, LessonRegistry, Level, Playlist, SelectionProvider};

#[derive(Parser)]
#[command(name = "playlist")]
#[command(about = "Run a saved lesson playlist from a TOML file")]
struct Args {
    /// Path to the playlist file
    #[arg(short, long, default_value = "playlist.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Log CPU/memory stats between lessons
    #[arg(long)]
    monitor: bool,

    /// Show what would run without running it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting a playlist run");
    tracing::info!("📁 Loading playlist from: {}", args.config);

    if let Err(e) = validation::validate_path("config", &args.config) {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let playlist = match Playlist::from_file(&args.config) {
        Ok(playlist) => playlist,
        Err(e) => {
            eprintln!("❌ Failed to load playlist '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML");
            std::process::exit(1);
        }
    };

    if let Err(e) = playlist.validate() {
        tracing::error!("❌ Playlist validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Playlist loaded and validated");
    display_summary(&playlist);

    let registry = LessonRegistry::built_in();

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be executed");
        println!("Would run:");
        for line in dry_run_lines(&registry, &playlist) {
            println!("{}", line);
        }
        return Ok(());
    }

    let engine = JournalEngine::new_with_monitoring(registry, args.monitor);
    let report = engine
        .run(&playlist)
        .await
        .with_context(|| format!("playlist '{}' did not finish", playlist.journal.name))?;

    for run in &report.runs {
        if playlist.headers() {
            println!("=== {} ({}) ===", run.name, run.level);
        }
        print!("{}", run.output);
        if playlist.headers() {
            println!();
        }
    }

    if playlist.timing() {
        for run in &report.runs {
            println!("⏱️  {}: {}ms", run.name, run.duration_ms);
        }
    }

    tracing::info!(
        "✅ Playlist finished: {} completed, {} failed",
        report.completed(),
        report.failed()
    );
    Ok(())
}

fn display_summary(playlist: &Playlist) {
    println!("📋 Playlist: {}", playlist.journal.name);
    if let Some(description) = &playlist.journal.description {
        println!("   {}", description);
    }
    if !playlist.lessons().is_empty() {
        println!("   Lessons: {}", playlist.lessons().join(", "));
    }
    if let Some(level) = playlist.level() {
        println!("   Level filter: {}", level);
    }
}

/// Preview of a run. The level filter goes through the same `Level` parse a
/// real run uses, so the preview and the run always agree.
fn dry_run_lines(registry: &LessonRegistry, playlist: &Playlist) -> Vec<String> {
    if playlist.lessons().is_empty() {
        let filter = playlist
            .level()
            .and_then(|level| level.parse::<Level>().ok());
        return registry
            .infos()
            .into_iter()
            .filter(|info| filter.map_or(true, |level| info.level == level))
            .map(|info| format!("  [{}] {}", info.level, info.name))
            .collect();
    }

    playlist
        .lessons()
        .iter()
        .map(|name| match registry.get(name) {
            Ok(lesson) => format!("  [{}] {}", lesson.info().level, lesson.info().name),
            Err(_) => format!("  ⚠️  unknown lesson '{}'", name),
        })
        .collect()
}
