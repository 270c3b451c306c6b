//! code-timeline - render source code as a timeline of token blocks

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use code_timeline::config::{self, Config};
use code_timeline::error::{Result, TimelineError};
use code_timeline::render::{self, Renderer};
use code_timeline::syntax::{Classifier, Theme};
use code_timeline::terminal::Terminal;

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    file: Option<String>,
    theme: Option<Theme>,
    char_width: Option<usize>,
    dump: bool,
    no_legend: bool,
    no_line_numbers: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args)? {
        Some(options) => options,
        None => return Ok(()),
    };

    let mut config = Config::load()?;
    if let Some(theme) = options.theme {
        config.theme = theme;
    }
    if let Some(width) = options.char_width {
        config.char_width = width;
    }
    if options.no_legend {
        config.show_legend = false;
    }
    if options.no_line_numbers {
        config.show_line_numbers = false;
    }

    let source = read_input(options.file.as_deref())?;
    let classifier = Classifier::new(config.char_width);
    let lines = classifier.build(&source);

    if options.dump {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        return render::dump(&mut out, &lines);
    }

    let mut renderer = Renderer::new(config.palette()?, config.cell_width);
    renderer.show_legend = config.show_legend;
    renderer.show_line_numbers = config.show_line_numbers;
    renderer.render(&mut Terminal::stdout(), &lines)
}

/// Parse arguments; None means help or version was printed
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--version" | "-V" => {
                println!("code-timeline {}", env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            "--light" => options.theme = Some(Theme::Light),
            "--dark" => options.theme = Some(Theme::Dark),
            "--dump" => options.dump = true,
            "--no-legend" => options.no_legend = true,
            "--no-line-numbers" => options.no_line_numbers = true,
            "--char-width" => {
                let value = iter
                    .next()
                    .ok_or_else(|| TimelineError::Message("--char-width needs a value".into()))?;
                let width = value.parse::<usize>().map_err(|_| TimelineError::InvalidValue {
                    key: "--char-width".to_string(),
                    value: value.clone(),
                })?;
                options.char_width = Some(config::clamp_width(width));
            }
            "-" => options.file = None,
            other if other.starts_with('-') => {
                return Err(TimelineError::Message(format!("unknown option: {}", other)));
            }
            path => options.file = Some(path.to_string()),
        }
    }

    Ok(Some(options))
}

/// Read the whole input from a file, or stdin when no file is given
fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => {
            log::debug!("reading {}", path);
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn print_usage() {
    println!("code-timeline {} - see your code as a timeline", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: code-timeline [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE, or stdin when FILE is absent or '-'.");
    println!();
    println!("Options:");
    println!("  --light              Use the light palette");
    println!("  --dark               Use the dark palette (default)");
    println!("  --char-width N       Display width per character, 1-64 (default 8)");
    println!("  --no-legend          Do not print the color legend");
    println!("  --no-line-numbers    Do not print line numbers");
    println!("  --dump               Print segments as text instead of blocks");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Settings are read from ~/.code-timeline.toml; RUST_LOG controls logging.");
}
