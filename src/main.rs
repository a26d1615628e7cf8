use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;
use unslop::{Mode, ProcessingSettings, RunReport};

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Humanize,
    Paraphrase,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Humanize => Mode::Humanize,
            ModeArg::Paraphrase => Mode::Paraphrase,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "unslop",
    about = "Rewrite AI-sounding prose so it reads like a person wrote it",
    version
)]
struct Cli {
    /// File paths to rewrite (reads stdin if none provided)
    files: Vec<String>,

    #[arg(long, value_enum, default_value = "humanize")]
    mode: ModeArg,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with processing settings
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Print a JSON report instead of plain text
    #[arg(long)]
    json: bool,

    #[arg(long)]
    no_conversational: bool,
    #[arg(long)]
    no_structure: bool,
    #[arg(long)]
    no_expressions: bool,
    #[arg(long)]
    no_readability: bool,
    #[arg(long)]
    no_patterns: bool,
    /// Keep a formal register and skip sloppy strategies
    #[arg(long)]
    technical: bool,
}

impl Cli {
    fn processing_settings(&self) -> unslop::Result<ProcessingSettings> {
        let mut settings = match &self.settings {
            Some(path) => ProcessingSettings::from_json_file(path)?,
            None => ProcessingSettings::default(),
        };
        settings.conversational &= !self.no_conversational;
        settings.structure &= !self.no_structure;
        settings.expressions &= !self.no_expressions;
        settings.readability &= !self.no_readability;
        settings.patterns &= !self.no_patterns;
        settings.technical |= self.technical;
        Ok(settings)
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn print_report(report: &RunReport, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(out) => println!("{out}"),
            Err(e) => fail(e),
        }
    } else {
        println!("{}", report.output);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("UNSLOP_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.processing_settings().unwrap_or_else(|e| fail(e));
    let mode = Mode::from(cli.mode);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut inputs: Vec<(String, String)> = Vec::new();
    if cli.files.is_empty() {
        let mut input = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut input) {
            fail(format!("failed to read stdin: {e}"));
        }
        inputs.push(("<stdin>".to_string(), input));
    } else {
        for path in &cli.files {
            let text = std::fs::read_to_string(path).unwrap_or_else(|e| fail(format!("reading {path}: {e}")));
            inputs.push((path.clone(), text));
        }
    }

    for (name, text) in &inputs {
        let report = unslop::run(text, mode, &settings, &mut rng).unwrap_or_else(|e| fail(format!("{name}: {e}")));
        info!(
            input = %name,
            words = report.input_words,
            change_ratio = report.change_ratio,
            "processed"
        );
        print_report(&report, cli.json);
    }
}
