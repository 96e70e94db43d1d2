// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use tracing::{info, Level};

use scalecalc::config::{RequestEvent, RequestWatcher};
use scalecalc::{OutputConfig, OutputFormat, RequestFile, ScaleReport, ScaleRequest, ScaleType};

fn print_usage() {
    println!("scalecalc - Scale, interval and triad calculator");
    println!();
    println!("Usage: scalecalc [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --root <A-G>            Root letter (default C)");
    println!("  --accidental <ACC>      flat, sharp, double-flat, double-sharp, b, #, x (default natural)");
    println!("  --scale <NAME>          Scale type (default Major, see --list-scales)");
    println!("  --file <PATH>           Read the request from a YAML or TOML file");
    println!("  --watch <PATH>          Recalculate whenever a request file changes");
    println!("  --format <text|yaml>    Output format (default text)");
    println!("  --ascii                 Print accidentals as b, # and x");
    println!("  --list-scales           List the supported scale types");
    println!("  --verbose               Log calculation steps to stderr");
    println!("  --help                  Show this help message");
}

/// Command-line selections; unset fields fall back to the request file
#[derive(Debug, Default)]
struct CliArgs {
    root: Option<String>,
    accidental: Option<String>,
    scale: Option<String>,
    file: Option<PathBuf>,
    watch: Option<PathBuf>,
    format: Option<OutputFormat>,
    ascii: bool,
    list_scales: bool,
    verbose: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| anyhow!("{} requires a value", name))
        };

        match arg.as_str() {
            "--root" => cli.root = Some(value("--root")?),
            "--accidental" => cli.accidental = Some(value("--accidental")?),
            "--scale" => cli.scale = Some(value("--scale")?),
            "--file" => cli.file = Some(PathBuf::from(value("--file")?)),
            "--watch" => cli.watch = Some(PathBuf::from(value("--watch")?)),
            "--format" => {
                cli.format = Some(value("--format")?.parse()?);
            }
            "--ascii" => cli.ascii = true,
            "--list-scales" => cli.list_scales = true,
            "--verbose" | "-v" => cli.verbose = true,
            "--help" | "-h" => cli.help = true,
            other => bail!("Unknown option: {}", other),
        }
    }

    Ok(cli)
}

/// Apply command-line overrides on top of a request file
fn merge(mut file: RequestFile, cli: &CliArgs) -> RequestFile {
    let request: &mut ScaleRequest = &mut file.request;
    if let Some(root) = &cli.root {
        request.root = root.clone();
    }
    if let Some(accidental) = &cli.accidental {
        request.accidental = accidental.clone();
    }
    if let Some(scale) = &cli.scale {
        request.scale = scale.clone();
    }

    let output: &mut OutputConfig = &mut file.output;
    if let Some(format) = cli.format {
        output.format = format;
    }
    output.ascii |= cli.ascii;
    file
}

fn render(file: &RequestFile) -> Result<String> {
    let (root, scale_type) = file.request.resolve()?;
    let report = ScaleReport::calculate(root, scale_type, file.output.note_style())?;
    match file.output.format {
        OutputFormat::Text => report.render_text(),
        OutputFormat::Yaml => report.to_yaml(),
    }
}

fn watch(path: PathBuf, cli: &CliArgs) -> Result<()> {
    let watcher = RequestWatcher::new(&path, None)?;
    println!("Watching {:?} (press Ctrl+C to stop)...", watcher.watched_path());

    if path.is_file() {
        match RequestFile::load(&path).and_then(|file| render(&merge(file, cli))) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Error: {:#}", e),
        }
    }

    while let Some(event) = watcher.recv() {
        match event {
            RequestEvent::Reloaded(path, file) => {
                info!(path = ?path, "recalculating");
                match render(&merge(*file, cli)) {
                    Ok(text) => println!("{}", text),
                    Err(e) => eprintln!("Error: {:#}", e),
                }
            }
            RequestEvent::Error(message) => eprintln!("Error: {}", message),
            RequestEvent::Removed(path) => eprintln!("Removed: {:?}", path),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let cli = parse_args(&args)?;

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    if cli.help {
        print_usage();
        return Ok(());
    }

    if cli.list_scales {
        for scale_type in ScaleType::ALL {
            println!("{}", scale_type);
        }
        return Ok(());
    }

    if let Some(path) = cli.watch.clone() {
        return watch(path, &cli);
    }

    let file = match &cli.file {
        Some(path) => RequestFile::load(path)?,
        None => RequestFile::default(),
    };

    print!("{}", render(&merge(file, &cli))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let cli = parse_args(&args(&[
            "--root", "E", "--accidental", "flat", "--scale", "Dorian", "--format", "yaml", "--ascii",
        ]))
        .unwrap();
        assert_eq!(cli.root.as_deref(), Some("E"));
        assert_eq!(cli.accidental.as_deref(), Some("flat"));
        assert_eq!(cli.scale.as_deref(), Some("Dorian"));
        assert_eq!(cli.format, Some(OutputFormat::Yaml));
        assert!(cli.ascii);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&args(&["--root"])).is_err());
        assert!(parse_args(&args(&["--format", "json"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_merge_overrides_file() {
        let cli = parse_args(&args(&["--scale", "Locrian", "--ascii"])).unwrap();
        let file = RequestFile {
            request: ScaleRequest::new("B", "natural", "Major"),
            output: OutputConfig::default(),
        };
        let merged = merge(file, &cli);
        assert_eq!(merged.request, ScaleRequest::new("B", "natural", "Locrian"));
        assert!(merged.output.ascii);
    }

    #[test]
    fn test_render_defaults_to_c_major() {
        let text = render(&RequestFile::default()).unwrap();
        assert!(text.starts_with("C Major\n"));
        assert!(text.contains("B Dim"));
    }
}
