// Command-line interface for ipyrmd
//
// Converts between Jupyter notebooks and R Markdown (fenced chunks or knitr spin scripts).
// The conversion itself lives in rmd-babel; this binary resolves formats and paths, guards
// against clobbering files, and reports problems with a non-zero exit status.
//
// Converting:
//
// The conversion needs a to and from pair. The from is auto-detected from the file extension,
// while being overwrittable by an explicit --from flag. The to defaults to the counterpart of
// the input: notebooks become flat text (convert.flat_format), flat text becomes a notebook.
// Usage:
//  ipyrmd <input> [--to <format>] [--from <format>] [-o <file>] [-y]  - Convert
//  ipyrmd --list-formats                                               - List formats
//
// The output path defaults to the input path with the target's extension.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use rmd_babel::{convert_file, load_header, ConvertSpec, FormatRegistry};
use rmd_config::{Loader, RmdConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const FORMAT_NAMES: &[&str] = &["ipynb", "notebook", "rmd", "fenced", "spin"];

fn build_cli() -> Command {
    Command::new("ipyrmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between Jupyter notebooks and R Markdown")
        .long_about(
            "ipyrmd converts Jupyter notebooks to R Markdown or knitr spin scripts and back.\n\n\
            Supported formats:\n  \
            - ipynb:  Jupyter notebook (.ipynb), alias 'notebook'\n  \
            - rmd:    R Markdown with fenced chunks (.Rmd), alias 'fenced'\n  \
            - spin:   R script with #' markdown and #+ chunk options (.R)\n\n\
            The source format is auto-detected from the file extension.\n\
            The output is written next to the input with the target's extension,\n\
            or to the path given with -o.\n\n\
            Examples:\n  \
            ipyrmd analysis.ipynb                  # Writes analysis.Rmd\n  \
            ipyrmd analysis.Rmd                    # Writes analysis.ipynb\n  \
            ipyrmd analysis.ipynb --to spin        # Writes analysis.R\n  \
            ipyrmd report.Rmd --to spin -o out.R   # Rmd to spin, explicit output",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Input file path")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Target format (inferred from the input if not specified)")
                .value_parser(clap::builder::PossibleValuesParser::new(FORMAT_NAMES))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .help("Source format (auto-detected from file extension if not specified)")
                .value_parser(clap::builder::PossibleValuesParser::new(FORMAT_NAMES))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .value_name("PATH")
                .help("Output file path (defaults to the input path with a new extension)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("overwrite")
                .long("overwrite")
                .short('y')
                .help("Overwrite the output file if it exists")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("header")
                .long("header")
                .value_name("PATH")
                .help("YAML file whose mapping replaces the document header")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a rmd.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only report errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    init_tracing(matches.get_flag("quiet"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        matches.get_flag("overwrite"),
    );

    handle_convert_command(&matches, &config);
}

fn init_tracing(quiet: bool) {
    let default_level = if quiet { "error" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("rmd_babel={default_level},ipyrmd={default_level}"))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .init();
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches, config: &RmdConfig) {
    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let registry = FormatRegistry::with_notebook_defaults(config.notebook.clone().into());

    let (from, to) = resolve_formats(
        &registry,
        input,
        matches.get_one::<String>("from").map(|s| s.as_str()),
        matches.get_one::<String>("to").map(|s| s.as_str()),
        config,
    )
    .unwrap_or_else(|message| {
        eprintln!("Error: {message}");
        std::process::exit(1);
    });

    if !Path::new(input).is_file() {
        eprintln!("Error: Input file '{input}' not found");
        std::process::exit(1);
    }

    let output = match matches.get_one::<String>("out") {
        Some(path) => PathBuf::from(path),
        None => {
            let extension = registry.primary_extension(&to).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            Path::new(input).with_extension(extension)
        }
    };

    if same_file(Path::new(input), &output) {
        eprintln!(
            "Error: Output file '{}' is the input file; use -o to choose another path",
            output.display()
        );
        std::process::exit(1);
    }

    if output.exists() && !config.convert.overwrite {
        eprintln!(
            "Error: Output file '{}' exists; use -y to overwrite",
            output.display()
        );
        std::process::exit(1);
    }

    let mut spec =
        ConvertSpec::new(&from, &to).with_notebook_defaults(config.notebook.clone().into());
    if let Some(path) = matches.get_one::<String>("header") {
        spec = spec.with_header(read_header_file(path));
    }

    if let Err(e) = convert_file(input, &output, &spec) {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    }

    tracing::info!("Converted {input} ({from}) to {} ({to})", output.display());
}

/// Pick the source and target formats, returning their canonical names.
fn resolve_formats(
    registry: &FormatRegistry,
    input: &str,
    from_arg: Option<&str>,
    to_arg: Option<&str>,
    config: &RmdConfig,
) -> Result<(String, String), String> {
    let canonical = |name: &str| -> Result<String, String> {
        registry
            .get(name)
            .map(|format| format.name().to_string())
            .map_err(|e| e.to_string())
    };

    let to_arg = to_arg.map(canonical).transpose()?;

    let from = match from_arg {
        Some(name) => canonical(name)?,
        None => match (registry.detect_format_from_filename(input), &to_arg) {
            (Some(detected), _) => detected,
            (None, Some(to)) if to == "ipynb" => "rmd".to_string(),
            (None, Some(_)) => "ipynb".to_string(),
            (None, None) => {
                return Err(format!(
                    "Could not detect format from filename '{input}'; specify --to explicitly"
                ))
            }
        },
    };

    let to = match to_arg {
        Some(to) => to,
        None if from == "ipynb" => config.convert.flat_format.as_str().to_string(),
        None => "ipynb".to_string(),
    };

    Ok((from, to))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn read_header_file(path: &str) -> serde_json::Value {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading header file '{path}': {e}");
        std::process::exit(1);
    });
    load_header(&text).unwrap_or_else(|e| {
        eprintln!("Error in header file '{path}': {e}");
        std::process::exit(1);
    })
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let extensions = format
                .file_extensions()
                .iter()
                .map(|ext| format!(".{ext}"))
                .collect::<Vec<_>>()
                .join(", ");
            println!("  {name:<8} {:<50} {extensions}", format.description());
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>, force_overwrite: bool) -> RmdConfig {
    let loader = Loader::new().with_optional_file("rmd.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    let loader = if force_overwrite {
        loader.set_override("convert.overwrite", true)
    } else {
        Ok(loader)
    };

    loader.and_then(Loader::build).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
