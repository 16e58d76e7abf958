use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dicomvr_core::{
    CodeStringPolicy, ElementInput, HeaderInput, HeaderReport, ParserOptions, Vendor,
    report_elements,
};
use glob::glob;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("DICOMVR_BUILD_COMMIT"),
    ", ",
    env!("DICOMVR_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "dicomvr")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Typed value extraction for DICOM data elements, driven by their VR.",
    long_about = None,
    after_help = "Examples:\n  dicomvr parse --tag 0018,0081 --vr DS --value 94\n  dicomvr parse --tag 0019,100E --vr UN --hex 000000000000f03f --vendor siemens\n  dicomvr batch header.json -o results.json"
)]
struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a single element given on the command line.
    Parse {
        /// Tag as GGGG,EEEE
        #[arg(long)]
        tag: String,

        /// VR code as read from the header (e.g. DS, UN)
        #[arg(long)]
        vr: String,

        /// Text value; repeat for members already split by the reader
        #[arg(long, required_unless_present = "hex", conflicts_with = "hex")]
        value: Vec<String>,

        /// Raw bytes as hex, for UN and other binary values
        #[arg(long)]
        hex: Option<String>,

        /// Vendor private dictionary used for UN elements
        #[arg(long)]
        vendor: Option<Vendor>,

        /// Reject code strings outside their defined terms
        #[arg(long)]
        strict_codes: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Parse a JSON file of elements and write a versioned JSON result.
    Batch {
        /// Path to a header JSON file (a glob matching one file is accepted)
        input: PathBuf,

        /// Output path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        output: Option<PathBuf>,

        /// Write JSON result to stdout
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Vendor private dictionary; overrides the file's options and manufacturer
        #[arg(long)]
        vendor: Option<Vendor>,

        /// Reject code strings outside their defined terms
        #[arg(long)]
        strict_codes: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// Exit with a non-zero code if any element failed to parse
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Parse {
            tag,
            vr,
            value,
            hex,
            vendor,
            strict_codes,
            pretty,
        } => cmd_parse(
            ElementArgs {
                tag,
                vr,
                value,
                hex,
            },
            overrides(vendor, strict_codes),
            pretty,
        ),
        Commands::Batch {
            input,
            output,
            stdout,
            vendor,
            strict_codes,
            pretty,
            quiet,
            strict,
        } => cmd_batch(
            BatchArgs {
                input,
                output,
                stdout,
                pretty,
                quiet,
                strict,
            },
            overrides(vendor, strict_codes),
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "dicomvr_core=debug,dicomvr=debug"
    } else {
        "dicomvr_core=info,dicomvr=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

/// Command-line settings layered over a header's own options.
#[derive(Debug, Clone, Copy)]
struct Overrides {
    vendor: Option<Vendor>,
    strict_codes: bool,
}

fn overrides(vendor: Option<Vendor>, strict_codes: bool) -> Overrides {
    Overrides {
        vendor,
        strict_codes,
    }
}

impl Overrides {
    fn apply(self, mut options: ParserOptions) -> ParserOptions {
        if let Some(vendor) = self.vendor {
            options = options.with_vendor(vendor);
        }
        if self.strict_codes {
            options = options.with_code_strings(CodeStringPolicy::Strict);
        }
        options
    }
}

struct ElementArgs {
    tag: String,
    vr: String,
    value: Vec<String>,
    hex: Option<String>,
}

impl ElementArgs {
    fn into_input(self) -> ElementInput {
        let (value, values) = match self.value.len() {
            0 => (None, None),
            1 => (self.value.into_iter().next(), None),
            _ => (None, Some(self.value)),
        };
        ElementInput {
            tag: self.tag,
            vr: self.vr,
            value,
            values,
            hex: self.hex,
        }
    }
}

fn cmd_parse(args: ElementArgs, overrides: Overrides, pretty: bool) -> Result<(), CliError> {
    let element = args.into_input().into_element().map_err(|err| {
        CliError::new(
            err.to_string(),
            Some("give --tag as GGGG,EEEE and one of --value or --hex".to_string()),
        )
    })?;
    let parser = dicomvr_core::Parser::new(overrides.apply(ParserOptions::default()));
    debug!(tag = %element.tag(), vr = element.vr_code(), "parsing element");

    let report = report_elements(&parser, std::slice::from_ref(&element));
    let Some(result) = report.results.into_iter().next() else {
        return Err(CliError::new("no result produced", None));
    };
    if let Some(error) = &result.error {
        return Err(CliError::new(
            error.clone(),
            Some("check the VR code and value; UN elements need --vendor".to_string()),
        ));
    }

    let json = if pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    }
    .context("JSON serialization failed")?;
    println!("{}", json);
    Ok(())
}

struct BatchArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    quiet: bool,
    strict: bool,
}

fn cmd_batch(args: BatchArgs, overrides: Overrides) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&args.input)?;
    validate_input_file(&resolved_input)?;

    let output = if args.stdout {
        None
    } else {
        let output = args.output.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--output or --stdout".to_string()),
            )
        })?;
        ensure_distinct_output(&resolved_input, &output)?;
        Some(output)
    };

    let json = fs::read_to_string(&resolved_input)
        .with_context(|| format!("Failed to read input file: {}", resolved_input.display()))?;
    let header: HeaderInput = serde_json::from_str(&json).map_err(|err| {
        CliError::new(
            format!("invalid header JSON in {}: {}", resolved_input.display(), err),
            Some("expected {\"elements\": [{\"tag\", \"vr\", \"value\"|\"values\"|\"hex\"}]}".to_string()),
        )
    })?;

    let parser = dicomvr_core::Parser::new(overrides.apply(header.parser_options()));
    info!(
        input = %resolved_input.display(),
        elements = header.elements.len(),
        vendor = ?parser.options().vendor,
        "parsing header"
    );
    let elements = header.into_elements().map_err(|err| {
        CliError::new(
            format!("invalid element in {}: {}", resolved_input.display(), err),
            None,
        )
    })?;
    let report = report_elements(&parser, &elements);
    let json = serialize_report(&report, args.pretty)?;

    match output {
        None => print!("{}", json),
        Some(output) => {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(&output, json)
                .with_context(|| format!("Failed to write output: {}", output.display()))?;
            if !args.quiet {
                eprintln!("OK: results written -> {}", output.display());
            }
        }
    }

    let failed = report.error_count();
    if failed > 0 {
        debug!(failed, "elements failed to parse");
        if args.strict {
            return Err(CliError::new(
                format!("{} element(s) failed to parse", failed),
                Some("inspect the \"error\" fields in the output".to_string()),
            ));
        }
    }
    Ok(())
}

fn serialize_report(report: &HeaderReport, pretty: bool) -> Result<String, CliError> {
    if pretty {
        serde_json::to_string_pretty(report)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(report)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn ensure_distinct_output(input: &Path, output: &Path) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let output_dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let Ok(output_dir) = fs::canonicalize(output_dir) else {
        return Ok(());
    };
    let Some(file_name) = output.file_name() else {
        return Err(CliError::new(
            format!("invalid output path: {}", output.display()),
            None,
        ));
    };
    if output_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!("output path must differ from input: {}", output.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a .json file of elements".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a .json file of elements".to_string()),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "json" {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .json file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    match matches.len() {
        0 => Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        )),
        1 => Ok(matches.remove(0)),
        count => {
            let listed = matches
                .iter()
                .take(3)
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let more = if count > 3 { ", ..." } else { "" };
            Err(CliError::new(
                format!(
                    "multiple files match pattern '{}' ({} matches); matches: {}{}",
                    pattern, count, listed, more
                ),
                Some("pass a single header file, or run once per file".to_string()),
            ))
        }
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
