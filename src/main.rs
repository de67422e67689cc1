use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use chatmark::{Config, Error, ListMode, Transcript};
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "chatmark")]
#[command(about = "Structure chat replies into paragraphs, lists, bold text and links")]
struct Cli {
    /// Input text file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Output file (writes stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat the input as a JSON chat transcript
    #[arg(long)]
    transcript: bool,

    /// Override the configured list grouping
    #[arg(long, value_enum)]
    list_mode: Option<CliListMode>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Typst,
    Json,
    Tree,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliListMode {
    Indentation,
    MarkerSensitive,
}

impl From<CliListMode> for ListMode {
    fn from(mode: CliListMode) -> Self {
        match mode {
            CliListMode::Indentation => ListMode::Indentation,
            CliListMode::MarkerSensitive => ListMode::MarkerSensitive,
        }
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> chatmark::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::compiled_default(),
    };
    if let Some(mode) = cli.list_mode {
        config.lists.mode = mode.into();
    }
    log::debug!("list mode: {:?}", config.lists.mode);

    let input = read_input(cli.input.as_deref())?;
    let rendered = if cli.transcript {
        render_transcript(&input, cli.format, &config)?
    } else {
        render_text(&input, cli.format, &config)?
    };

    write_output(cli.output.as_deref(), &rendered)
}

fn render_text(input: &str, format: Format, config: &Config) -> chatmark::Result<String> {
    let doc = chatmark::structure_with(input, config.lists.mode);
    log::debug!("structured {} blocks", doc.blocks.len());
    Ok(match format {
        Format::Html => chatmark::render_html(&doc, config),
        Format::Typst => chatmark::render_typst(&doc),
        Format::Json => serde_json::to_string_pretty(&doc).map_err(Error::Serialize)? + "\n",
        Format::Tree => format!("{doc:#?}\n"),
    })
}

fn render_transcript(input: &str, format: Format, config: &Config) -> chatmark::Result<String> {
    let transcript = Transcript::from_json(input)?;
    log::debug!("loaded {} messages", transcript.messages.len());
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(&transcript).map_err(Error::Serialize)? + "\n",
        Format::Tree => format!("{transcript:#?}\n"),
        Format::Html | Format::Typst => {
            if matches!(format, Format::Typst) {
                log::warn!("transcripts render as HTML only");
            }
            chatmark::render_transcript(&transcript, config)
        }
    })
}

fn read_input(path: Option<&Path>) -> chatmark::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| Error::Io {
            action: "read",
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|source| Error::Io {
                    action: "read",
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(input)
        }
    }
}

fn write_output(path: Option<&Path>, rendered: &str) -> chatmark::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, rendered).map_err(|source| Error::Io {
                action: "write",
                path: path.to_path_buf(),
                source,
            })?;
            log::info!("wrote {}", path.display());
            Ok(())
        }
        None => io::stdout()
            .write_all(rendered.as_bytes())
            .map_err(|source| Error::Io {
                action: "write",
                path: PathBuf::from("<stdout>"),
                source,
            }),
    }
}
