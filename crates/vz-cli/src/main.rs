mod server;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rmcp::{ServiceExt, transport::stdio};
use vz_core::{
    NormalizeOptions, Normalizer, NumberSubstitution, PronounceOptions, nice_number,
    pronounce_number, to_mixed_fraction,
};
use vz_store::{Config, ConfigStore};

#[derive(Parser)]
#[command(name = "vz", about = "Number verbalization and text normalization CLI and MCP server")]
struct Cli {
    /// Override the config directory (default: $VZ_DATA_DIR or ~/.verbalize)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server on stdio transport
    Serve,

    /// Speak a number in English
    Pronounce {
        /// Number to pronounce
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Maximum decimal places to speak
        #[arg(long)]
        places: Option<usize>,

        /// Use the long scale (billion = 10^12)
        #[arg(long)]
        long_scale: bool,

        /// Speak in scientific notation
        #[arg(long)]
        scientific: bool,
    },

    /// Approximate a number as a mixed fraction
    Fraction {
        /// Number to approximate
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Candidate denominators in priority order, e.g. 2,3,4
        #[arg(long, value_delimiter = ',')]
        denominators: Vec<u32>,
    },

    /// Format a number as a friendly mixed fraction
    Nice {
        /// Number to format
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Phrase for speech ("4 and a half") instead of display ("4 1/2")
        #[arg(long)]
        speech: bool,

        /// Candidate denominators in priority order, e.g. 2,3,4
        #[arg(long, value_delimiter = ',')]
        denominators: Vec<u32>,
    },

    /// Normalize English text ("-" reads stdin)
    Normalize {
        /// Text to normalize
        text: String,

        /// Keep "the", "a" and "an"
        #[arg(long)]
        keep_articles: bool,

        /// Only replace spoken numbers that stand as whole words
        #[arg(long)]
        whole_word: bool,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config as TOML
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn open_store(cli: &Cli) -> ConfigStore {
    ConfigStore::open(cli.config_dir.as_deref())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let store = open_store(cli);
    store
        .load()
        .with_context(|| format!("failed to load {}", store.config_path().display()))
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Serve => cmd_serve(&cli).await,
        Commands::Pronounce {
            value,
            places,
            long_scale,
            scientific,
        } => cmd_pronounce(&cli, *value, *places, *long_scale, *scientific),
        Commands::Fraction {
            value,
            denominators,
        } => cmd_fraction(&cli, *value, denominators),
        Commands::Nice {
            value,
            speech,
            denominators,
        } => cmd_nice(&cli, *value, *speech, denominators),
        Commands::Normalize {
            text,
            keep_articles,
            whole_word,
        } => cmd_normalize(&cli, text, *keep_articles, *whole_word),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(&cli),
            ConfigAction::Init { force } => cmd_config_init(&cli, *force),
        },
    }
}

async fn cmd_serve(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    tracing::info!("starting MCP server");

    let server = server::VzServer::new(config);
    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await?;
    Ok(())
}

/// Flags win over the config file.
fn pronounce_options(
    config: &Config,
    places: Option<usize>,
    long_scale: bool,
    scientific: bool,
) -> PronounceOptions {
    PronounceOptions {
        places: places.unwrap_or(config.pronounce.places),
        short_scale: config.pronounce.short_scale && !long_scale,
        scientific: config.pronounce.scientific || scientific,
    }
}

fn denominators<'a>(config: &'a Config, flag: &'a [u32]) -> &'a [u32] {
    if flag.is_empty() {
        &config.denominators
    } else {
        flag
    }
}

fn cmd_pronounce(
    cli: &Cli,
    value: f64,
    places: Option<usize>,
    long_scale: bool,
    scientific: bool,
) -> Result<()> {
    let config = load_config(cli)?;
    let opts = pronounce_options(&config, places, long_scale, scientific);
    println!("{}", pronounce_number(value, &opts));
    Ok(())
}

fn cmd_fraction(cli: &Cli, value: f64, flag: &[u32]) -> Result<()> {
    let config = load_config(cli)?;
    let denominators = denominators(&config, flag);
    if denominators.contains(&0) {
        bail!("denominators must be positive");
    }
    match to_mixed_fraction(value, denominators) {
        Some(m) => println!("{} {}/{}", m.whole, m.numerator, m.denominator),
        None => println!("none"),
    }
    Ok(())
}

fn cmd_nice(cli: &Cli, value: f64, speech: bool, flag: &[u32]) -> Result<()> {
    let config = load_config(cli)?;
    let denominators = denominators(&config, flag);
    if denominators.contains(&0) {
        bail!("denominators must be positive");
    }
    println!("{}", nice_number(value, speech, denominators));
    Ok(())
}

fn cmd_normalize(cli: &Cli, text: &str, keep_articles: bool, whole_word: bool) -> Result<()> {
    let config = load_config(cli)?;
    let options = NormalizeOptions {
        remove_articles: config.normalize.remove_articles && !keep_articles,
        number_substitution: if whole_word {
            NumberSubstitution::WholeWord
        } else {
            config.normalize.number_substitution
        },
        ..config.normalize
    };

    let input = if text == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        text.to_string()
    };

    let normalized = Normalizer::new(options)
        .normalize(&input)
        .context("normalization failed")?;
    println!("{normalized}");
    Ok(())
}

fn cmd_config_show(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let rendered = config
        .to_toml_string()
        .context("failed to render config")?;
    print!("{rendered}");
    Ok(())
}

fn cmd_config_init(cli: &Cli, force: bool) -> Result<()> {
    let store = open_store(cli);
    let path = store.config_path();
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    store
        .save(&Config::default())
        .context("failed to write config")?;
    println!("wrote {}", path.display());
    Ok(())
}
