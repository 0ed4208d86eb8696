use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use cinerec::{RawRecord, Recommender};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cinerec")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank films similar to a title within one genre subset
    Recommend {
        data: String,
        title: String,
        #[arg(long, default_value = "Biography")]
        category: String,
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,
    },
    /// Print the genre vocabulary of a subset
    Genres {
        data: String,
        #[arg(long, default_value = "Biography")]
        category: String,
    },
}

fn load_catalog(path: &str) -> Result<Vec<RawRecord>> {
    let file = File::open(path).with_context(|| format!("cannot open {path}"))?;
    let catalog =
        serde_json::from_reader(BufReader::new(file)).with_context(|| format!("cannot parse {path}"))?;
    Ok(catalog)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Recommend {
            data,
            title,
            category,
            count,
        } => {
            let catalog = load_catalog(&data)?;
            let recommender = Recommender::build(&catalog, &category)?;
            let hits = recommender.recommend(&title, count)?;
            println!("films similar to '{title}':");
            for (i, hit) in hits.iter().enumerate() {
                let year = hit
                    .year
                    .map_or_else(|| "unknown".to_string(), |y| y.to_string());
                let rating = hit
                    .rating
                    .map_or_else(|| "-".to_string(), |r| format!("{r:.1}"));
                println!(
                    "{}. {} ({year})  genres: {}  rating: {rating}  similarity: {:.2}",
                    i + 1,
                    hit.title,
                    hit.genres.join(", "),
                    hit.similarity
                );
            }
        }
        Commands::Genres { data, category } => {
            let catalog = load_catalog(&data)?;
            let recommender = Recommender::build(&catalog, &category)?;
            for label in recommender.vocabulary().labels() {
                println!("{label}");
            }
        }
    }
    Ok(())
}
