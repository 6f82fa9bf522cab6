use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use ohc::render::{render_assessment, render_catalog, render_compliance, render_report};
use ohc::{evaluate_exam, parse_input, read_source, to_json, ExamInput, ReportError};
use ohc_classify::assess;
use ohc_compliance::{catalog, validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "ohc",
    version,
    about = "Grade occupational health exam results and check report completeness",
    long_about = "ohc grades the measurements of an occupational health exam into\n\
        management levels 1-4 and checks that the exam report contains every\n\
        mandatory item.\n\n\
        Input is a JSON document with `sex`, optional `subject`, `measurements`\n\
        and `checklist` sections, read from FILE or stdin.\n\n\
        EXAMPLES:\n\
        \n  ohc evaluate exam.json                Full report\n\
        \n  ohc grade --format json exam.json     Risk grading only, as JSON\n\
        \n  cat exam.json | ohc comply            Completeness check from stdin\n\
        \n  ohc catalog                           List mandatory report items"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Grade measurements and check report completeness")]
    Evaluate(InputArgs),
    #[command(about = "Grade measurements only")]
    Grade(InputArgs),
    #[command(about = "Check report completeness only; exits 1 when items are missing")]
    Comply(InputArgs),
    #[command(about = "List the mandatory report items")]
    Catalog(CatalogArgs),
}

#[derive(Debug, clap::Args)]
struct InputArgs {
    /// Exam input file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputMode::Text)]
    format: OutputMode,
}

#[derive(Debug, clap::Args)]
struct CatalogArgs {
    #[arg(long, value_enum, default_value_t = OutputMode::Text)]
    format: OutputMode,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

fn load_input(args: &InputArgs) -> Result<ExamInput, ReportError> {
    let text = read_source(args.input.as_deref())?;
    parse_input(&text)
}

fn emit(result: Result<String, ReportError>) -> i32 {
    match result {
        Ok(out) => {
            print!("{out}");
            if !out.ends_with('\n') {
                println!();
            }
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            2
        }
    }
}

fn run_evaluate(args: &InputArgs) -> i32 {
    let result = load_input(args).and_then(|input| {
        let report = evaluate_exam(&input);
        match args.format {
            OutputMode::Text => Ok(render_report(&report)),
            OutputMode::Json => to_json(&report),
        }
    });
    emit(result)
}

fn run_grade(args: &InputArgs) -> i32 {
    let result = load_input(args).and_then(|input| {
        let assessment = assess(&input.measurements, input.sex);
        match args.format {
            OutputMode::Text => Ok(render_assessment(&assessment)),
            OutputMode::Json => to_json(&assessment),
        }
    });
    emit(result)
}

fn run_comply(args: &InputArgs) -> i32 {
    let input = match load_input(args) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let compliance = validate(&input.checklist);
    let out = match args.format {
        OutputMode::Text => Ok(render_compliance(&compliance)),
        OutputMode::Json => to_json(&compliance),
    };
    match emit(out) {
        0 if !compliance.is_compliant() => 1,
        rc => rc,
    }
}

fn run_catalog(args: &CatalogArgs) -> i32 {
    emit(match args.format {
        OutputMode::Text => Ok(render_catalog()),
        OutputMode::Json => to_json(&catalog()),
    })
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Evaluate(args) => run_evaluate(args),
        Command::Grade(args) => run_grade(args),
        Command::Comply(args) => run_comply(args),
        Command::Catalog(args) => run_catalog(args),
    }
}

fn main() {
    std::process::exit(run_cli());
}
