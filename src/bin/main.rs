#[macro_use]
extern crate log;

use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use quickopen::highlight::wrap_matches;
use quickopen::prelude::*;

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // if downstream pipe is closed, exit silently
            if err
                .chain()
                .filter_map(|cause| cause.downcast_ref::<std::io::Error>())
                .any(|io_err| io_err.kind() == std::io::ErrorKind::BrokenPipe)
            {
                std::process::exit(0)
            }
            eprintln!("qo: {err:?}");
            std::process::exit(2)
        }
    }
}

fn parse_args() -> QuickOpenOptions {
    let mut args = Vec::new();

    args.push(env::args().next().unwrap_or_else(|| String::from("qo")));
    args.extend(
        env::var("QUICKOPEN_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    for arg in env::args().skip(1) {
        args.push(arg);
    }

    QuickOpenOptions::parse_from(args).build()
}

fn read_candidates(opts: &QuickOpenOptions) -> Result<Vec<String>> {
    let reader: Box<dyn Read> = match &opts.input {
        Some(path) => Box::new(File::open(path).wrap_err_with(|| format!("cannot open input file {path}"))?),
        None => Box::new(std::io::stdin()),
    };
    let delimiter = if opts.read0 { b'\0' } else { b'\n' };

    let mut candidates = Vec::new();
    for chunk in BufReader::new(reader).split(delimiter) {
        let chunk = chunk.wrap_err("failed to read candidates")?;
        let line = String::from_utf8_lossy(&chunk);
        let line = line.strip_suffix('\r').unwrap_or(&*line);
        if !line.is_empty() {
            candidates.push(line.to_string());
        }
    }
    Ok(candidates)
}

fn real_main() -> Result<i32> {
    color_eyre::install()?;
    let opts = parse_args();
    debug!("options: {opts:?}");

    let prompt = Prompt::parse(&opts.query);
    let candidates = read_candidates(&opts)?;
    let ranked = Ranker::new(&opts)
        .rank(&prompt.query, &candidates)
        .wrap_err("cannot build the candidate filter")?;

    let ending = opts.output_ending();
    let location = prompt.line_suffix.as_deref().unwrap_or_default();
    let mut stdout = BufWriter::new(std::io::stdout().lock());

    if opts.print_query {
        write!(stdout, "{}{}", prompt.query, ending)?;
    }

    for item in &ranked {
        if opts.print_score {
            write!(stdout, "{}\t", item.score)?;
        }
        let text = wrap_matches(&item.text, &item.indices, opts.highlight);
        write!(stdout, "{}{}{}", text, location, ending)?;
    }
    stdout.flush()?;

    Ok(if ranked.is_empty() { 1 } else { 0 })
}
