use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vecnorm_eval::builtins::register_builtins;
use vecnorm_eval::{Evaluator, ExponentPolicy, NormConfig, SymbolTable};

mod bindings;
mod formatting;

use bindings::{parse_scalar_binding, parse_vector_binding, ScalarBinding, VectorBinding};
use formatting::{format_listing_line, format_number};

/// vecnorm - vector norm evaluator
#[derive(Parser)]
#[command(name = "vecnorm")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evaluate generalized vector norms", long_about = "vecnorm\n\nEvaluates calls such as `norm(x)` or `norm(x, 3)` against vectors and scalars bound on the command line.")]
struct Cli {
    /// Expression to evaluate
    #[arg(value_name = "EXPR")]
    input: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    env: EnvArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Bindings and configuration shared by every command
#[derive(Args, Clone, Default)]
struct EnvArgs {
    /// Bind a vector, e.g. `--vector x=1,2,3,4`
    #[arg(long = "vector", value_name = "NAME=V1,V2,...", value_parser = parse_vector_binding, global = true)]
    vectors: Vec<VectorBinding>,

    /// Bind a scalar, e.g. `--scalar p=3`
    #[arg(long = "scalar", value_name = "NAME=VALUE", value_parser = parse_scalar_binding, global = true)]
    scalars: Vec<ScalarBinding>,

    /// Accept non-integral exponents >= 1
    #[arg(long, global = true)]
    fractional_exponents: bool,
}

impl EnvArgs {
    fn config(&self) -> NormConfig {
        let policy = if self.fractional_exponents {
            ExponentPolicy::AllowFractional
        } else {
            ExponentPolicy::IntegerOnly
        };
        NormConfig::default().with_exponent_policy(policy)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression
    Eval {
        /// Expression to evaluate
        expression: String,
        /// Digits after the decimal point
        #[arg(long)]
        precision: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the reference listing for x = [1, 2, 3, 4] and y = 2x + 1
    Demo,
    /// List registered functions and their accepted call shapes
    Signatures,
}

#[derive(Serialize)]
struct EvalOutput<'a> {
    expression: &'a str,
    value: f64,
    config: NormConfig,
}

const DEMO_PROGRAMS: &[&str] = &[
    "norm(x)", "norm(x,1)", "norm(x,2)", "norm(x,3)", "norm(x,4)", "norm(x,5)",
    "norm(y)", "norm(y,1)", "norm(y,2)", "norm(y,3)", "norm(y,4)", "norm(y,5)",
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Eval {
            expression,
            precision,
            json,
        }) => eval_command(&cli.env, &expression, precision, json),
        Some(Commands::Demo) => demo_command(&cli.env),
        Some(Commands::Signatures) => signatures_command(&cli.env),
        None => match cli.input {
            Some(expression) => eval_command(&cli.env, &expression, None, false),
            None => {
                eprintln!("Error: No input provided.");
                eprintln!();
                eprintln!("Usage: vecnorm <COMMAND> or vecnorm <EXPR>");
                eprintln!();
                eprintln!("Try 'vecnorm --help' for more information.");
                std::process::exit(1);
            }
        },
    }
}

fn init_logging(verbose: u8) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(verbose, rust_log.as_deref()))
        .init();
}

/// `RUST_LOG` (or `warn`) as the base; `-v`/`-vv` raise the global level
fn log_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    let filter = rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    match verbose {
        0 => filter,
        1 => filter.add_directive(tracing::Level::DEBUG.into()),
        _ => filter.add_directive(tracing::Level::TRACE.into()),
    }
}

fn build_evaluator(env: &EnvArgs) -> Result<Evaluator<f64>> {
    let config = env.config();
    let mut symbols = SymbolTable::new();
    register_builtins(&mut symbols, &config).context("registering builtins")?;

    for binding in &env.vectors {
        symbols
            .add_vector(&binding.name, binding.values.clone())
            .with_context(|| format!("binding vector '{}'", binding.name))?;
    }
    for binding in &env.scalars {
        symbols
            .add_scalar(&binding.name, binding.value)
            .with_context(|| format!("binding scalar '{}'", binding.name))?;
    }

    debug!(
        vectors = env.vectors.len(),
        scalars = env.scalars.len(),
        policy = ?config.exponent_policy,
        "evaluator ready"
    );
    Ok(Evaluator::new(symbols))
}

fn eval_command(env: &EnvArgs, expression: &str, precision: Option<usize>, json: bool) -> Result<()> {
    let evaluator = build_evaluator(env)?;
    let value = evaluator
        .evaluate(expression)
        .with_context(|| format!("evaluating '{}'", expression))?;

    if json {
        let output = EvalOutput {
            expression,
            value,
            config: env.config(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", format_number(value, precision));
    }
    Ok(())
}

fn demo_command(env: &EnvArgs) -> Result<()> {
    let mut env = env.clone();
    let x = vec![1.0, 2.0, 3.0, 4.0];
    let y = x.iter().map(|v| 2.0 * v + 1.0).collect();
    env.vectors.retain(|b| b.name != "x" && b.name != "y");
    env.vectors.push(VectorBinding {
        name: "x".to_string(),
        values: x,
    });
    env.vectors.push(VectorBinding {
        name: "y".to_string(),
        values: y,
    });

    let evaluator = build_evaluator(&env)?;
    for program in DEMO_PROGRAMS {
        let value = evaluator
            .evaluate(program)
            .with_context(|| format!("evaluating '{}'", program))?;
        println!("{}", format_listing_line(program, value));
    }
    Ok(())
}

fn signatures_command(env: &EnvArgs) -> Result<()> {
    let evaluator = build_evaluator(env)?;
    for entry in evaluator.symbols().functions().iter() {
        println!("{:<12} {}", entry.name, entry.func.parameter_sequence());
    }
    Ok(())
}
