use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of FORMAT_NAMES from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
const FORMAT_NAMES: &[&str] = &["ipynb", "notebook", "rmd", "fenced", "spin"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("ipyrmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between Jupyter notebooks and R Markdown")
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
                .help("Target format")
                .value_parser(clap::builder::PossibleValuesParser::new(FORMAT_NAMES)),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .help("Source format")
                .value_parser(clap::builder::PossibleValuesParser::new(FORMAT_NAMES)),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .help("Output file path")
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
                .help("YAML file whose mapping replaces the document header")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "ipyrmd", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "ipyrmd", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "ipyrmd", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
