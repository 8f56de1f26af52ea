use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use jexpr_lang_japanese::LexiconLoader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod cli;
pub mod input;
pub mod pipeline;


use self::cli::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so the report can be piped
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jexpr=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let (config, format) = args.load_config()?;

    let source = args
        .input_source()
        .context("Either --file or --url is required")?;
    let text = input::acquire(&source, &config.network).await?;

    let lexicon = LexiconLoader::load(Path::new(&config.dictionary.path), format)
        .context("Failed to load lexicon")?;

    let report = pipeline::find_expressions(&lexicon, &text, config.matcher.min_reading_chars);

    let output = if args.json {
        report.to_json().context("Failed to serialize report")?
    } else {
        report.render(pipeline::highlight_for(config.report.color))
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
