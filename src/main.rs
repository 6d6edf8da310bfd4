use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use tinyscript::{
    config::{Config, ScriptSource},
    error::ScriptError,
    interpreter::{
        evaluator::core::Context,
        lexer::collect_tokens,
        output::{Stderr, Stdout},
        session::Session,
    },
    parse_tokens, run,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// tinyscript is a small imperative scripting language with variables,
/// arithmetic, comparisons, conditionals and loops.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read the script from this file instead of the command line.
    #[arg(short, long, conflicts_with = "contents")]
    file: Option<PathBuf>,

    /// Start an interactive session. This is the default when no script is
    /// given.
    #[arg(long, conflicts_with_all = ["file", "contents"])]
    repl: bool,

    /// Print the token stream before parsing.
    #[arg(long)]
    tokens: bool,

    /// Print the parsed statements before running them.
    #[arg(long)]
    ast: bool,

    /// Print the variable table once the script finishes.
    #[arg(long)]
    vars: bool,

    /// Increase log verbosity. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The script to run.
    contents: Option<String>,
}

impl Args {
    fn into_config(self) -> Config {
        let source = match (self.file, self.contents) {
            (Some(path), _) => ScriptSource::File(path),
            (None, Some(text)) if !self.repl => ScriptSource::Inline(text),
            _ => ScriptSource::Repl,
        };

        Config { source,
                 dump_tokens: self.tokens,
                 dump_ast: self.ast,
                 dump_vars: self.vars,
                 verbosity: self.verbose }
    }
}

fn main() -> ExitCode {
    let config = Args::parse().into_config();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(false)
                             .with_writer(io::stderr)
                             .init();

    let script = match &config.source {
        ScriptSource::Repl => return repl(&config),
        ScriptSource::Inline(text) => text.clone(),
        ScriptSource::File(path) => match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        },
    };

    run_script(&script, &config)
}

fn run_script(script: &str, config: &Config) -> ExitCode {
    let mut diagnostics = Stderr;

    let tokens = collect_tokens(script, &mut diagnostics);
    if config.dump_tokens {
        for (token, line) in &tokens {
            println!("{line:>4}  {token}");
        }
    }

    let Ok(program) = parse_tokens(&tokens, &mut diagnostics) else {
        return ExitCode::FAILURE;
    };
    info!(statements = program.len(), "parsed script");

    if config.dump_ast {
        for statement in &program {
            println!("{statement:#?}");
        }
    }

    let mut context = Context::new();
    let status = match run(&program, &mut context, &mut Stdout, &mut diagnostics) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    };

    if config.dump_vars {
        print!("{context}");
    }

    status
}

fn repl(config: &Config) -> ExitCode {
    let mut session = Session::new();
    let mut buffer = String::new();
    let stdin = io::stdin();

    prompt(buffer.is_empty());
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
        };

        if buffer.is_empty() {
            match line.trim() {
                ":quit" | ":q" => break,
                ":vars" => {
                    print!("{}", session.context());
                    prompt(true);
                    continue;
                },
                ":reset" => {
                    session.reset();
                    prompt(true);
                    continue;
                },
                "" => {
                    prompt(true);
                    continue;
                },
                _ => {},
            }
        }

        buffer.push_str(&line);
        buffer.push('\n');

        if is_complete(&buffer) {
            debug!(input = buffer.trim_end(), "running repl input");
            if let Err(e) = session.run(&buffer, &mut Stdout, &mut Stderr) {
                debug!(line = e.line(), "repl input failed");
                // Parse errors already went to the diagnostic sink.
                if matches!(e, ScriptError::Runtime(_)) {
                    eprintln!("{e}");
                }
            }
            buffer.clear();
        }
        prompt(buffer.is_empty());
    }

    if config.dump_vars {
        print!("{}", session.context());
    }

    ExitCode::SUCCESS
}

fn prompt(fresh: bool) {
    print!("{}", if fresh { "> " } else { ". " });
    let _ = io::stdout().flush();
}

/// Input is complete once every brace is closed and the last statement has
/// its semicolon.
fn is_complete(buffer: &str) -> bool {
    let mut depth = 0_i64;
    let mut in_string = false;
    for c in buffer.chars() {
        match c {
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => depth -= 1,
            _ => {},
        }
    }

    depth <= 0 && !in_string && buffer.trim_end().ends_with(';')
}
