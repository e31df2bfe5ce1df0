//*** START FILE: src/main.rs ***//
use clap::Parser;
use log::{debug, error, info, LevelFilter};
use sensory_audit::audit_io::{export_audit, load_audit_input, result_to_json};
use sensory_audit::config::resolve_config;
use sensory_audit::{run_audit, AuditError};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "sensory-audit")]
#[command(version)]
#[command(about = "Sensory richness and motif audit for manuscripts", long_about = None)]
struct Cli {
    /// Audit request as JSON (manuscript_text, sensory_baseline, chapters_flagged_for_enrichment)
    #[arg(short, long)]
    input: PathBuf,

    /// TOML configuration. Defaults to ./sensory_audit.toml when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the result JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the markdown, CSV and HTML artifacts into this directory
    #[arg(short, long)]
    artifacts_dir: Option<PathBuf>,

    /// Pretty-print the result JSON
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Verbose output
    ///
    /// When specified, sets the log level to `info` and ignores the `RUST_LOG`
    /// environment variable. When not specified, uses `RUST_LOG`
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    fn run(self) -> Result<(), AuditError> {
        let config = resolve_config(self.config.as_deref())?;
        let input = load_audit_input(&self.input)?;
        info!(
            "Auditing {} characters from {}",
            input.manuscript_text.chars().count(),
            self.input.display()
        );

        let result = run_audit(&input, &config);

        let stdout_json = match &self.output {
            Some(_) => None,
            None => Some(result_to_json(&result, self.pretty)?),
        };
        export_audit(
            &result,
            self.output.as_deref(),
            self.artifacts_dir.as_deref(),
            self.pretty,
        )?;
        match (&self.output, stdout_json) {
            (Some(path), _) => info!("Wrote audit result to {}", path.display()),
            (None, Some(json)) => println!("{}", json),
            (None, None) => {}
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        // explicitly set logging to info
        env_logger::builder().filter_level(LevelFilter::Info).init();
        info!("Verbose output enabled (ignoring RUST_LOG environment variable)");
    } else {
        env_logger::init();
        debug!("Logging configured from environment variables");
    }

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Audit failed: {}", e);
            eprintln!("Failed to process audit: {}", e);
            ExitCode::FAILURE
        }
    }
}
//*** END FILE: src/main.rs ***//
