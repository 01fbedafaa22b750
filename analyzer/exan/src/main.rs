use std::ffi::OsString;
use std::io::{self, Read};

use clap::{Args, Parser, Subcommand};
use exan::{analyze_source, AnalysisReport};
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "exan",
    version,
    about = "Analyzer for arithmetic expression notations",
    long_about = "exan detects whether an arithmetic expression is written in infix,\n\
        prefix, or postfix notation, validates it, and rebuilds it as all three\n\
        notations plus a binary expression tree diagram.\n\n\
        EXAMPLES:\n\
        \n  exan '(a+b)*c'              Analyze an infix expression\n\
        \n  exan json 'ab+c*'           Emit the analysis as JSON\n\
        \n  exan repl                   Start an interactive session\n\
        \n  echo '+ab' | exan analyze   Analyze an expression from stdin"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze an expression and print the notations and the tree
    Analyze(AnalyzeArgs),

    /// Output the analysis as JSON
    #[command(about = "Output the analysis as JSON for integration with other tooling")]
    Json(AnalyzeArgs),

    /// Start an interactive analysis session
    #[command(
        about = "Start an interactive analysis session",
        long_about = "Read expressions one per line and analyze each independently.\n\n\
            Commands:\n\
            \n  :help   Show available commands\n\
            \n  :quit   Exit the session (also :q, :exit)"
    )]
    Repl,
}

#[derive(Debug, Args, Clone)]
struct AnalyzeArgs {
    /// Expression to analyze (reads from stdin if not provided)
    #[arg(value_name = "EXPRESSION")]
    expression: Option<String>,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(filter)
        .try_init();
}

fn read_expression_from_input(arg: &Option<String>) -> Result<String, String> {
    if let Some(expression) = arg {
        Ok(expression.clone())
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read from stdin: {e}"))?;
        Ok(buf)
    }
}

/// Run the analysis behind a panic boundary.
///
/// An unexpected panic is logged and reported as a generic failure so no
/// internal state reaches the user.
fn analyze_guarded(source: &str) -> Option<AnalysisReport> {
    match std::panic::catch_unwind(|| analyze_source(source)) {
        Ok(report) => Some(report),
        Err(_) => {
            log::error!("analysis panicked on input {source:?}");
            eprintln!("error: an unexpected internal failure occurred");
            None
        }
    }
}

fn render_text_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "notation: {}\n",
        report.notation.as_deref().unwrap_or("unknown")
    ));
    out.push_str(&format!(
        "postfix:  {}\n",
        report.postfix.as_deref().unwrap_or("")
    ));
    out.push_str(&format!(
        "prefix:   {}\n",
        report.prefix.as_deref().unwrap_or("")
    ));
    out.push_str(&format!(
        "infix:    {}\n",
        report.infix.as_deref().unwrap_or("")
    ));
    if let Some(tree) = &report.tree {
        out.push_str("\nexpression tree:\n");
        out.push_str(tree);
    }
    out
}

fn run_analyze(args: &AnalyzeArgs) -> i32 {
    let source = match read_expression_from_input(&args.expression) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    let Some(report) = analyze_guarded(&source) else {
        return 2;
    };

    if let Some(message) = report.errors.first() {
        eprintln!("error: {message}");
        return 1;
    }

    print!("{}", render_text_report(&report));
    0
}

fn run_json(args: &AnalyzeArgs) -> i32 {
    let source = match read_expression_from_input(&args.expression) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    let Some(report) = analyze_guarded(&source) else {
        return 2;
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            return 2;
        }
    }

    if report.errors.is_empty() {
        0
    } else {
        1
    }
}

/// One interactive session. Every submission is analyzed from scratch;
/// an error prints alone so stale results are never repeated.
#[derive(Debug, Default)]
struct ReplSession;

impl ReplSession {
    fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return (Vec::new(), false);
        }

        if let Some(command) = trimmed.strip_prefix(':') {
            return match command {
                "help" => (
                    vec![
                        "commands: :help, :quit".to_string(),
                        "enter an expression in infix, prefix, or postfix notation".to_string(),
                    ],
                    false,
                ),
                "q" | "quit" | "exit" => (Vec::new(), true),
                other => (vec![format!("error: unknown command ':{other}'")], false),
            };
        }

        let report = analyze_source(trimmed);
        if let Some(message) = report.errors.first() {
            (vec![format!("error: {message}")], false)
        } else {
            (
                render_text_report(&report)
                    .lines()
                    .map(str::to_string)
                    .collect(),
                false,
            )
        }
    }
}

fn run_repl() -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;

    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    let mut session = ReplSession;
    loop {
        match rl.readline("exan> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let (out, exit) = session.handle_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: repl failed: {e}");
                return 2;
            }
        }
    }
}

/// Map a bare `exan EXPR` invocation onto the `analyze` subcommand.
fn normalize_cli_args(args: Vec<OsString>) -> Vec<OsString> {
    if args.len() <= 1 {
        return args;
    }

    let first = args[1].to_string_lossy();
    let is_known = matches!(
        first.as_ref(),
        "analyze" | "json" | "repl" | "help" | "--help" | "-h" | "--version" | "-V"
    );
    if is_known {
        return args;
    }

    let mut out: Vec<OsString> = Vec::with_capacity(args.len() + 1);
    out.push(args[0].clone());
    out.push(OsString::from("analyze"));
    out.extend(args.into_iter().skip(1));
    out
}

fn normalized_cli_args() -> Vec<OsString> {
    normalize_cli_args(std::env::args_os().collect())
}

fn run_cli() -> i32 {
    let cli = Cli::parse_from(normalized_cli_args());
    init_logging(cli.verbose);

    let cmd = cli
        .command
        .unwrap_or(Command::Analyze(AnalyzeArgs { expression: None }));

    match cmd {
        Command::Analyze(args) => run_analyze(&args),
        Command::Json(args) => run_json(&args),
        Command::Repl => run_repl(),
    }
}

fn main() {
    std::process::exit(run_cli());
}
