use clap::{Parser, Subcommand};
use gauge::convert::convert_measurement;
use gauge::server::{self, ServerConfig};

#[derive(Parser)]
#[command(name = "gauge")]
#[command(about = "Measurement parser and metric-imperial conversion tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a measurement like "4gal" or "1/2km"
    Convert {
        /// Raw measurement: a quantity followed by a unit abbreviation
        input: String,

        /// Print the full JSON payload instead of the description
        #[arg(long)]
        json: bool,
    },

    /// Run the HTTP conversion service
    Serve {
        /// Config file path (TOML with host/port)
        #[arg(short, long)]
        config: Option<String>,

        /// Port to bind (overrides the config file and PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { input, json } => match run_convert(&input, json) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Serve { config, port } => match run_serve(config.as_deref(), port).await {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

fn run_convert(input: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let conversion = convert_measurement(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&conversion)?);
    } else {
        println!("{}", conversion.string);
    }

    Ok(())
}

async fn run_serve(
    config_path: Option<&str>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut config = match config_path {
        Some(path) => ServerConfig::load_from_file(path)?,
        None => ServerConfig::default(),
    }
    .with_env_overrides();

    if let Some(port) = port {
        config.port = port;
    }

    server::serve(&config).await?;
    Ok(())
}
