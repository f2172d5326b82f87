use clap::Parser;
use miette::{IntoDiagnostic, Result, miette};
use serde_json::{Map, Value};
use std::io::BufRead;
use std::io::BufReader;
use stylefn::{
    BuildOptions, EvalContext, Expression, StopOrder, TargetKind, build_font_with_options,
    build_split_with_options, build_with_options, parse_named, render_error,
};
use tracing::debug;

/// stylefn - Evaluate map style functions
#[derive(Parser, Debug)]
#[command(name = "stylefn")]
#[command(about = "Evaluate stops-based style functions", long_about = None)]
struct Args {
    /// Kind of value to produce: number, color, string, boolean, or an enum
    /// such as line-cap
    #[arg(long, short, default_value = "number", value_parser = parse_kind)]
    kind: TargetKind,

    /// Current zoom level
    #[arg(long, short, allow_negative_numbers = true)]
    zoom: Option<f64>,

    /// Feature attribute as NAME=VALUE; VALUE is read as JSON, or else as a
    /// plain string
    #[arg(long = "property", short, value_name = "NAME=VALUE", value_parser = parse_property)]
    properties: Vec<(String, Value)>,

    /// Split a vector-valued function and print one value per component
    #[arg(long, conflicts_with = "font")]
    split: bool,

    /// Treat the function as a text-font function over font stacks
    #[arg(long)]
    font: bool,

    /// Sort exponential and interval stops by key instead of trusting their
    /// order
    #[arg(long)]
    sort_stops: bool,

    /// Print the parsed function (for debugging)
    #[arg(long)]
    debug_spec: bool,

    /// Function document (if not provided, reads one document per line from
    /// stdin)
    function: Option<String>,
}

fn parse_kind(name: &str) -> Result<TargetKind, String> {
    TargetKind::from_name(name).ok_or_else(|| format!("unknown value kind `{name}`"))
}

fn parse_property(arg: &str) -> Result<(String, Value), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, found `{arg}`"))?;
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((name.to_string(), value))
}

fn build_expressions(
    args: &Args,
    options: &BuildOptions,
    spec: &stylefn::FunctionSpec,
) -> std::result::Result<Vec<Expression>, stylefn::SpecError> {
    if args.font {
        Ok(vec![build_font_with_options(spec, options)?])
    } else if args.split {
        build_split_with_options(spec, args.kind, options)
    } else {
        Ok(vec![build_with_options(spec, args.kind, options)?])
    }
}

/// Evaluate one function document and print the result. Returns whether the
/// document was valid.
fn interpret_input(args: &Args, name: &str, input: &str) -> Result<bool> {
    let spec = match parse_named(name, input) {
        Ok(spec) => spec,
        Err(e) => {
            render_error(&e);
            return Ok(false);
        }
    };

    if args.debug_spec {
        println!("=== Parsed Function ===");
        println!("{:#?}", spec);
        println!();
    }

    let options = BuildOptions {
        stop_order: if args.sort_stops {
            StopOrder::Sort
        } else {
            StopOrder::Trust
        },
    };
    let expressions = match build_expressions(args, &options, &spec) {
        Ok(expressions) => expressions,
        Err(e) => {
            render_error(&e.into());
            return Ok(false);
        }
    };

    let properties: Map<String, Value> = args.properties.iter().cloned().collect();
    let mut context = EvalContext::new().with_properties(&properties);
    if let Some(zoom) = args.zoom {
        context = context.with_zoom(zoom);
    }

    let mut values = Vec::with_capacity(expressions.len());
    for expr in &expressions {
        let value = match expr.evaluate(&context) {
            Some(value) => serde_json::to_value(&value).into_diagnostic()?,
            None => Value::Null,
        };
        values.push(value);
    }
    debug!(count = values.len(), "evaluated");

    if args.split {
        println!("{}", Value::Array(values));
    } else {
        for value in values {
            println!("{}", value);
        }
    }
    Ok(true)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use STYLEFN_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("STYLEFN_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Check if we have a direct function argument
    if let Some(function) = &args.function {
        if !interpret_input(&args, "<argument>", function)? {
            std::process::exit(1);
        }
        return Ok(());
    }

    if atty::is(atty::Stream::Stdin) {
        return Err(miette!(
            help = "pass the function as an argument, or pipe JSON documents on stdin",
            "no function document given"
        ));
    }

    // Pipe/stdin mode: one document per line
    let stdin = std::io::stdin();
    let reader = BufReader::new(stdin.lock());

    let mut all_valid = true;
    for (index, line) in reader.lines().enumerate() {
        let line = line.into_diagnostic()?;
        if line.trim().is_empty() {
            continue;
        }
        let name = format!("<stdin>:{}", index + 1);
        all_valid &= interpret_input(&args, &name, &line)?;
    }

    if !all_valid {
        std::process::exit(1);
    }
    Ok(())
}
