//! Process command - turn one invoice file path into a JSON record.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use tracing::{debug, info};

use invocr_core::{InvoiceExtractor, PlaceholderExtractor, to_ascii_json};

use crate::error::CliError;

/// Invoice OCR - Turn an invoice file into a JSON invoice record
#[derive(Parser, Debug)]
#[command(name = "invocr")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct ProcessArgs {
    /// Input file (PDF or image). It is not opened.
    #[arg(required = true)]
    file_path: PathBuf,
}

impl ProcessArgs {
    /// Parse the arguments following the program name.
    ///
    /// Exactly one argument is accepted and it is taken verbatim as the file
    /// path, even when it is empty or looks like an option. clap only renders
    /// the usage line.
    pub fn from_args<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != 1 {
            return Err(usage_error());
        }

        Ok(Self {
            file_path: PathBuf::from(args.remove(0)),
        })
    }
}

fn usage_error() -> CliError {
    CliError::Usage {
        usage: ProcessArgs::command().render_usage().to_string(),
    }
}

/// Run one invocation and return the process exit code.
///
/// On success a single JSON line goes to `stdout` and the code is 0.
/// On failure `stdout` is untouched, the diagnostic goes to `stderr` and
/// the code is 1.
pub fn run<I, O, E>(args: I, stdout: &mut O, stderr: &mut E) -> u8
where
    I: IntoIterator,
    I::Item: Into<OsString>,
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    match execute(args, stdout) {
        Ok(()) => 0,
        Err(e) => {
            debug!("Invocation failed: {:?}", e);
            // Nothing else to report to if stderr is gone as well.
            let _ = writeln!(stderr, "{}", e);
            1
        }
    }
}

fn execute<I, O>(args: I, stdout: &mut O) -> Result<(), CliError>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
    O: Write + ?Sized,
{
    let start = Instant::now();
    let args = ProcessArgs::from_args(args)?;

    info!("Processing file: {}", args.file_path.display());

    let extractor = PlaceholderExtractor::default();
    let record = extractor.extract(&args.file_path)?;

    // Encode fully before writing so a failure leaves stdout empty.
    let json = to_ascii_json(&record)?;
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
