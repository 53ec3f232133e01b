use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use linemark_config::{ClosingTagStyle, Config, OutputFormat};
use linemark_engine::{ClosingTag, Document, HtmlOptions, parse_lines, split_lines};
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process,
};

#[derive(Parser)]
#[command(name = "linemark")]
#[command(about = "Render a restricted Markdown dialect as normalized text or HTML")]
struct Cli {
    /// Input file; reads stdin when absent or `-`
    input: Option<PathBuf>,

    /// Output form (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// HTML closing-tag form (overrides the config file)
    #[arg(long, value_enum)]
    closing_tag: Option<ClosingTagArg>,

    /// Escape `<`, `>` and `&` in HTML text content
    #[arg(long)]
    escape_html: bool,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    save_config: bool,

    /// Log debug information to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Html,
    Tree,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Tree => OutputFormat::Tree,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ClosingTagArg {
    Backslash,
    Slash,
}

impl From<ClosingTagArg> for ClosingTagStyle {
    fn from(arg: ClosingTagArg) -> Self {
        match arg {
            ClosingTagArg::Backslash => ClosingTagStyle::Backslash,
            ClosingTagArg::Slash => ClosingTagStyle::Slash,
        }
    }
}

/// Effective settings: command line over config file over defaults.
fn resolve(cli: &Cli, config: Config) -> Config {
    Config {
        format: cli.format.map_or(config.format, OutputFormat::from),
        closing_tag: cli
            .closing_tag
            .map_or(config.closing_tag, ClosingTagStyle::from),
        escape_html: cli.escape_html || config.escape_html,
    }
}

fn config_path(cli: &Cli) -> PathBuf {
    Config::locate(cli.config.as_deref())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let path = config_path(cli);
    log::debug!("Config path: {}", path.display());
    Ok(Config::load_or_default(&path)?)
}

fn save_config(cli: &Cli, settings: &Config) -> Result<()> {
    let path = config_path(cli);
    settings.save_to_path(&path)?;
    log::info!("Saved settings to {}", path.display());
    Ok(())
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            log::debug!("Reading {}", path.display());
            fs::read_to_string(path).with_context(|| format!("Error reading {}", path.display()))
        }
        _ => {
            log::debug!("Reading stdin");
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Error reading stdin")?;
            Ok(text)
        }
    }
}

fn html_options(settings: &Config) -> HtmlOptions {
    HtmlOptions {
        closing_tag: match settings.closing_tag {
            ClosingTagStyle::Backslash => ClosingTag::Backslash,
            ClosingTagStyle::Slash => ClosingTag::Slash,
        },
        escape_text: settings.escape_html,
    }
}

fn render(doc: &Document, settings: &Config) -> Result<String> {
    let output = match settings.format {
        OutputFormat::Text => doc.to_text(),
        OutputFormat::Html => doc.render_html_with(&html_options(settings)).join("\n"),
        OutputFormat::Tree => serde_json::to_string_pretty(doc)?,
    };
    Ok(output)
}

fn run(cli: &Cli) -> Result<()> {
    let settings = resolve(cli, load_config(cli)?);
    if cli.save_config {
        return save_config(cli, &settings);
    }

    let text = read_input(cli.input.as_ref())?;

    let lines = split_lines(&text);
    log::debug!("Parsing {} lines", lines.len());
    let parsed = parse_lines(lines.as_slice());
    for issue in &parsed.issues {
        log::warn!("{issue}");
    }
    log::debug!("Parsed {} top-level blocks", parsed.document.blocks.len());

    println!("{}", render(&parsed.document, &settings)?);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
