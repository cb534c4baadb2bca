use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use encoding_rs::Encoding;

use crate::compare::{compare_files, CompareOptions};
use crate::report::write_report;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// First file (File 1)
    pub file1: PathBuf,

    /// Second file (File 2)
    pub file2: PathBuf,

    /// Print every differing line with both contents
    #[arg(short, long)]
    pub verbose: bool,

    /// Compare line endings byte for byte (by default CRLF and CR count as LF)
    #[arg(short = 'S', long)]
    pub strict_eol: bool,

    /// Encoding of both files (e.g., utf-8, windows-1252, latin1)
    #[arg(short, long, default_value = "utf-8")]
    pub encoding: String,

    /// Print nothing; report the verdict through the exit status only
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Exit with status 1 when the files differ
    #[arg(long)]
    pub fail_on_diff: bool,
}

#[derive(Debug)]
pub struct Options {
    pub file1: PathBuf,
    pub file2: PathBuf,
    pub compare: CompareOptions,
    pub verbose: bool,
    pub quiet: bool,
    pub fail_on_diff: bool,
}

pub fn build_options(args: &Args) -> Result<Options> {
    let encoding = Encoding::for_label(args.encoding.trim().as_bytes())
        .with_context(|| format!("Unknown encoding: {}", args.encoding))?;
    if !encoding.is_ascii_compatible() {
        bail!(
            "Encoding {} is not supported for line comparison",
            encoding.name()
        );
    }

    Ok(Options {
        file1: args.file1.clone(),
        file2: args.file2.clone(),
        compare: CompareOptions {
            encoding,
            strict_eol: args.strict_eol,
        },
        verbose: args.verbose,
        quiet: args.quiet,
        fail_on_diff: args.fail_on_diff,
    })
}

/// Compares the two configured files and writes the report to `out`.
/// Returns whether the files are equal.
pub fn run<W: Write>(opts: &Options, out: &mut W) -> Result<bool> {
    let comparison = compare_files(&opts.file1, &opts.file2, &opts.compare)?;
    if !opts.quiet {
        write_report(out, &comparison, opts.verbose)?;
    }
    Ok(comparison.equal())
}

/// Process exit status for a finished comparison.
pub fn exit_status(opts: &Options, equal: bool) -> u8 {
    if opts.fail_on_diff && !equal {
        1
    } else {
        0
    }
}
