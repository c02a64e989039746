//! Command-line front-end for Yaz0 compression and decompression.
//!
//! ```text
//! fastyz file.bin                 Encode to file.bin.yaz0
//! fastyz -c file.bin -o out.szs   Encode to out.szs
//! fastyz file.yaz0                Decode to file
//! fastyz -d data.szs -o raw.bin   Decode to raw.bin
//! ```
//!
//! With no `-c`/`-d` flag the mode is auto-detected: a `.yaz0`, `.szs`, or
//! `.carc` extension or a leading `Yaz0` magic means decode, anything else
//! means encode. Progress goes to stdout, diagnostics to stderr, and any
//! failure exits with code 1.

use std::env;
use std::fs;
use std::process;
use std::time::Instant;

use anyhow::{anyhow, bail, Context, Result};

const PROG: &str = "fastyz";
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extensions that flag an input as already Yaz0-encoded.
const ENCODED_SUFFIXES: [&str; 3] = [".yaz0", ".szs", ".carc"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Encode,
    Decode,
}

#[derive(Debug)]
struct Args {
    /// `None` requests auto-detection.
    op: Option<Op>,
    input: String,
    output: Option<String>,
}

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{}: error: {:#}", PROG, err);
            process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let argv: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&argv)? {
        Some(args) => args,
        None => return Ok(0),
    };

    let data = fs::read(&args.input)
        .with_context(|| format!("cannot open '{}' for reading", args.input))?;
    if data.is_empty() {
        bail!("'{}' is empty", args.input);
    }

    let op = args
        .op
        .unwrap_or_else(|| detect_op(&args.input, &data));
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| infer_output_path(&args.input, op));

    match op {
        Op::Encode => do_encode(&args.input, &output, &data)?,
        Op::Decode => do_decode(&args.input, &output, &data)?,
    }

    Ok(0)
}

/// Process the argument list. `Ok(None)` means help or version was printed
/// and the caller should exit cleanly.
fn parse_args(argv: &[String]) -> Result<Option<Args>> {
    let mut op = None;
    let mut input: Option<String> = None;
    let mut output = None;

    let mut iter = argv.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-c" => op = Some(Op::Encode),
            "-d" => op = Some(Op::Decode),
            "-o" => {
                let path = iter.next().ok_or_else(|| anyhow!("-o requires an argument"))?;
                output = Some(path.clone());
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(None);
            }
            "-v" | "--version" => {
                println!("FastYZ v{}", VERSION);
                println!("Fast Yaz0 compression based on FastLZ");
                return Ok(None);
            }
            _ if arg.starts_with('-') => bail!("unknown option '{}'", arg),
            _ => {
                if input.is_some() {
                    bail!("multiple input files specified");
                }
                input = Some(arg.clone());
            }
        }
    }

    let input = input
        .ok_or_else(|| anyhow!("no input file specified (try '{} --help')", PROG))?;

    Ok(Some(Args { op, input, output }))
}

fn print_usage() {
    println!("FastYZ v{} - Fast Yaz0 compression", VERSION);
    println!();
    println!("Usage: {} [options] <input>", PROG);
    println!();
    println!("Options:");
    println!("  -c             Force encode mode");
    println!("  -d             Force decode mode");
    println!("  -o <file>      Specify output filename");
    println!("  -h, --help     Show this help message");
    println!("  -v, --version  Show version information");
    println!();
    println!("If no mode is specified, the operation is auto-detected:");
    println!("  - Files with a .yaz0, .szs, or .carc extension are decoded");
    println!("  - Files starting with the 'Yaz0' magic are decoded");
    println!("  - All other files are encoded");
    println!();
    println!("Examples:");
    println!("  {} file.bin                 Encode to file.bin.yaz0", PROG);
    println!("  {} -c file.bin -o out.szs   Encode to out.szs", PROG);
    println!("  {} file.yaz0                Decode to file", PROG);
    println!("  {} -d data.szs -o raw.bin   Decode to raw.bin", PROG);
}

/// Pick encode or decode from the filename, falling back to a magic sniff.
fn detect_op(input: &str, data: &[u8]) -> Op {
    let by_name = ENCODED_SUFFIXES
        .iter()
        .any(|suffix| has_suffix(input, suffix));
    if by_name || fastyz::is_yaz0(data) {
        Op::Decode
    } else {
        Op::Encode
    }
}

fn has_suffix(name: &str, suffix: &str) -> bool {
    name.len() >= suffix.len()
        && name.as_bytes()[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes())
}

fn strip_suffix_ci<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    if has_suffix(name, suffix) {
        Some(&name[..name.len() - suffix.len()])
    } else {
        None
    }
}

fn infer_output_path(input: &str, op: Op) -> String {
    match op {
        Op::Encode => format!("{}.yaz0", input),
        Op::Decode => {
            if let Some(stem) = strip_suffix_ci(input, ".yaz0") {
                stem.to_string()
            } else if let Some(stem) = strip_suffix_ci(input, ".szs") {
                stem.to_string()
            } else if let Some(stem) = strip_suffix_ci(input, ".carc") {
                format!("{}.arc", stem)
            } else {
                format!("{}.bin", input)
            }
        }
    }
}

fn do_encode(input_path: &str, output_path: &str, data: &[u8]) -> Result<()> {
    let start = Instant::now();
    let encoded = fastyz::encode(data)?;
    let elapsed = start.elapsed().as_secs_f64();

    fs::write(output_path, &encoded)
        .with_context(|| format!("cannot write '{}'", output_path))?;

    let ratio = 100.0 * encoded.len() as f64 / data.len() as f64;
    println!("Encoded: {} -> {}", input_path, output_path);
    println!("  Original:   {} bytes", data.len());
    println!("  Encoded:    {} bytes ({:.1}%)", encoded.len(), ratio);
    println!(
        "  Time:       {:.3} sec ({:.1} MB/s)",
        elapsed,
        mb_per_sec(data.len(), elapsed)
    );

    Ok(())
}

fn do_decode(input_path: &str, output_path: &str, data: &[u8]) -> Result<()> {
    let start = Instant::now();
    let decoded = fastyz::decode(data)
        .with_context(|| format!("'{}' is not a valid Yaz0 file", input_path))?;
    let elapsed = start.elapsed().as_secs_f64();

    fs::write(output_path, &decoded)
        .with_context(|| format!("cannot write '{}'", output_path))?;

    println!("Decoded: {} -> {}", input_path, output_path);
    println!("  Encoded:    {} bytes", data.len());
    println!("  Decoded:    {} bytes", decoded.len());
    println!(
        "  Time:       {:.3} sec ({:.1} MB/s)",
        elapsed,
        mb_per_sec(decoded.len(), elapsed)
    );

    Ok(())
}

fn mb_per_sec(bytes: usize, elapsed: f64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0) / elapsed.max(1e-9)
}
