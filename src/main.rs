use std::io;

use chrono::Utc;
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use whatsapp_report_simulator::{
    cli::{banner, educational_info, reason_menu, Cli, ConsoleObserver, Prompter},
    config::{Config, LogFormat},
    error::{AppError, AppResult},
    request::SimulationRequest,
    shutdown::{listen_for_ctrl_c, Shutdown},
    simulation::{Pacing, RandomOutcomeGenerator, Session, Simulator, SystemClock},
    storage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration, then let flags override it
    let config = match Config::from_env().and_then(|c| cli.apply_overrides(c)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Report simulator starting..."
    );

    print!("{}", banner());

    if cli.list_reasons {
        println!("\nAvailable report reasons:");
        print!("{}", reason_menu());
        return Ok(());
    }

    if cli.educational {
        print!("{}", educational_info());
        return Ok(());
    }

    match run(&cli, &config).await {
        Ok(()) => Ok(()),
        Err(AppError::Validation(e)) if !cli.wants_prompt() => {
            debug!(error = %e, "Request rejected");
            eprintln!("Request rejected: {}", e);
            std::process::exit(2);
        }
        Err(e) => {
            debug!(error = %e, "Simulation aborted");
            eprintln!("\nAn error occurred: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: &Cli, config: &Config) -> AppResult<()> {
    let shutdown = listen_for_ctrl_c();

    let request = if cli.wants_prompt() {
        prompt_for_request(shutdown.clone()).await?
    } else {
        cli.request()?
    };

    let outcomes = RandomOutcomeGenerator::from_config(&config.simulation);
    let pacing = if config.simulation.pacing_enabled {
        Pacing::Realtime
    } else {
        Pacing::Instant
    };
    info!(
        success_probability = outcomes.success_probability(),
        seeded = config.simulation.seed.is_some(),
        pacing = ?pacing,
        "Outcome generator ready"
    );

    println!(
        "\nStarting simulation for {} reports...",
        request.unit_count()
    );
    println!("Target number: {}", request.target_number());
    println!("Reason: {}", request.reason());
    println!("{}", "=".repeat(60));

    let mut simulator = Simulator::new(outcomes, SystemClock, pacing);
    let mut observer = ConsoleObserver::new(io::stdout());
    let session = simulator.run(request, shutdown, &mut observer).await;

    let completed_at = session.finished_at().unwrap_or_else(Utc::now);
    print!(
        "{}",
        session.summary().render(
            session.request().target_number(),
            session.request().reason(),
            completed_at
        )
    );

    if session.was_interrupted() {
        println!(
            "\nSimulation interrupted by user after {} of {} reports.",
            session.records().len(),
            session.request().unit_count()
        );
    }

    if cli.save_logs {
        save_logs(&session, cli, config);
    }

    if session.was_interrupted() {
        println!("Thank you for using the educational tool!");
    } else {
        print!("{}", educational_info());
    }

    Ok(())
}

/// Prompts on a blocking thread so an interrupt can end the wait.
async fn prompt_for_request(mut shutdown: Shutdown) -> AppResult<SimulationRequest> {
    let prompt = tokio::task::spawn_blocking(|| {
        Prompter::new(io::stdin().lock(), io::stdout()).collect_request()
    });

    tokio::select! {
        joined = prompt => joined.map_err(|e| AppError::Internal {
            message: format!("prompt task failed: {}", e),
        })?,
        _ = shutdown.triggered() => {
            warn!("Interrupted while prompting");
            println!("\n\nSimulation interrupted by user.");
            println!("Thank you for using the educational tool!");
            // The prompt thread is blocked on stdin and would hold the runtime open.
            std::process::exit(0);
        }
    }
}

/// Persists the session log. Failure is reported but never fatal.
fn save_logs(session: &Session, cli: &Cli, config: &Config) {
    let generated_at = Utc::now();
    let path = cli.output.clone().unwrap_or_else(|| {
        config
            .output
            .log_dir
            .join(storage::default_log_filename(generated_at))
    });

    match storage::persist(&path, &session.session_log(generated_at)) {
        Ok(path) => {
            info!(path = %path.display(), reports = session.records().len(), "Session log saved");
            println!("\nSimulation logs saved to: {}", path.display());
        }
        Err(e) => {
            warn!(error = %e, "Failed to save session log");
            println!("\nError saving logs: {}", e);
        }
    }
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
