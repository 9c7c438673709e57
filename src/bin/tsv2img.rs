//! tsv2img - Render a tab-separated table with merged row spans to an image

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tabspan::utils::logging::init_logging;
use tabspan::{
    parse_merge_columns, render_table_document, Backend, ProcessRenderer, RenderOptions, TableError,
    TableResult,
};

#[derive(Parser)]
#[command(name = "tsv2img")]
#[command(version)]
#[command(about = "Render a tab-separated table to an image, merging repeated cells", long_about = None)]
struct Cli {
    /// Input TSV file (reads from stdin if not provided or `-`)
    input_file: Option<PathBuf>,

    /// Output image path (defaults to the input name with a .png extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Zero-based columns to merge, comma-separated (e.g. "4,5")
    #[arg(short, long, default_value = "")]
    merge: String,

    /// Landscape layout for wide tables
    #[arg(short, long)]
    wide: bool,

    /// Document backend (overrides the config file)
    #[arg(short, long, value_enum)]
    backend: Option<Backend>,

    /// Heading printed above the table
    #[arg(short, long)]
    title: Option<String>,

    /// TOML file with render options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the document markup instead of rendering an image
    #[arg(long)]
    emit_only: bool,

    /// Keep the renderer's working directory
    #[arg(long)]
    keep_intermediates: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> TableResult<()> {
    let options = resolve_options(&cli)?;
    let input = read_input(cli.input_file.as_deref())?;
    let merge_columns = parse_merge_columns(&cli.merge);

    let document = render_table_document(&input, &merge_columns, &options)?;

    if cli.emit_only {
        return write_document(&document, cli.output.as_deref());
    }

    let output = cli
        .output
        .clone()
        .or_else(|| default_output(cli.input_file.as_deref()))
        .ok_or_else(|| TableError::config("an output path is required when reading stdin"))?;

    let renderer = ProcessRenderer::new(&options);
    let rendered = renderer.render_job(&document, &output)?;
    for path in &rendered.images {
        eprintln!("✓ Image written to: {}", path.display());
    }
    if let Some(dir) = &rendered.kept_dir {
        eprintln!("✓ Intermediate files kept in: {}", dir.display());
    }
    Ok(())
}

/// Config file first, then command-line overrides
fn resolve_options(cli: &Cli) -> TableResult<RenderOptions> {
    let mut options = match &cli.config {
        Some(path) => RenderOptions::from_toml_file(path)?,
        None => RenderOptions::default(),
    };

    if let Some(backend) = cli.backend {
        options.backend = backend;
    }
    if cli.wide {
        options.wide = true;
    }
    if cli.title.is_some() {
        options.title = cli.title.clone();
    }
    if cli.keep_intermediates {
        options.keep_intermediates = true;
    }
    Ok(options)
}

fn read_input(path: Option<&Path>) -> TableResult<String> {
    match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p)
            .map_err(|e| TableError::io(format!("reading {}", p.display()), e)),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| TableError::io("reading stdin", e))?;
            Ok(buffer)
        }
    }
}

fn write_document(document: &str, output: Option<&Path>) -> TableResult<()> {
    match output {
        Some(path) => {
            fs::write(path, document)
                .map_err(|e| TableError::io(format!("writing {}", path.display()), e))?;
            eprintln!("✓ Document written to: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", document).map_err(|e| TableError::io("writing stdout", e))?;
        }
    }
    Ok(())
}

fn default_output(input: Option<&Path>) -> Option<PathBuf> {
    input
        .filter(|p| *p != Path::new("-"))
        .map(|p| p.with_extension("png"))
}
