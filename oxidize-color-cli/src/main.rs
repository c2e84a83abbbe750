use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use oxidize_color::{Channel, Color};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "oxidizecolor",
    about = "Inspect and transform packed ARGB colors",
    version,
    author
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the channels and PDF operators of a color
    Inspect {
        /// Color as #RRGGBB, #AARRGGBB, "r,g,b[,a]" or a name
        color: String,
    },

    /// Brighten a color by the 0.7 factor
    Brighter {
        /// Color as #RRGGBB, #AARRGGBB, "r,g,b[,a]" or a name
        color: String,

        /// Number of times to apply the transform
        #[arg(short = 'n', long, default_value = "1")]
        steps: u32,
    },

    /// Darken a color by the 0.7 factor
    Darker {
        /// Color as #RRGGBB, #AARRGGBB, "r,g,b[,a]" or a name
        color: String,

        /// Number of times to apply the transform
        #[arg(short = 'n', long, default_value = "1")]
        steps: u32,
    },

    /// List the named colors
    Named,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Inspect { color } => {
            let color = parse_color(&color)?;
            let device = color.to_device();

            println!("{color:?}");
            println!("Hex:     {}", color.to_hex());
            for channel in Channel::ALL {
                let label = format!("{}:", capitalize(channel.name()));
                println!("{label:<8} {}", color.channel(channel));
            }
            if let Some(name) = color.name() {
                println!("Name:    {name}");
            }
            println!("Opacity: {:.3}", color.opacity());
            println!("Fill:    {}", device.fill_operator());
            println!("Stroke:  {}", device.stroke_operator());
        }

        Commands::Brighter { color, steps } => {
            let color = parse_color(&color)?;
            print_steps(color, steps, Color::brighter);
        }

        Commands::Darker { color, steps } => {
            let color = parse_color(&color)?;
            print_steps(color, steps, Color::darker);
        }

        Commands::Named => {
            for (name, color) in Color::NAMED {
                println!("{:<12} {}", name, color.to_hex());
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "oxidize_color=debug,oxidizecolor=debug"
    } else {
        "oxidize_color=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn parse_color(input: &str) -> Result<Color> {
    let color = input
        .parse::<Color>()
        .with_context(|| format!("Failed to parse color '{input}'"))?;
    debug!(input, %color, "resolved color argument");
    Ok(color)
}

fn print_steps(mut color: Color, steps: u32, transform: fn(&Color) -> Color) {
    for _ in 0..steps {
        color = transform(&color);
        println!("{}", color.to_hex());
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
