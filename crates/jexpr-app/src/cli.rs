use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use jexpr_config::{ColorMode, Config};
use jexpr_lang_japanese::LexiconFormat;

use crate::input::InputSource;

#[derive(Parser, Debug)]
#[command(name = "jexpr")]
#[command(about = "Find Japanese expressions in a text file or web page", version)]
#[command(group(ArgGroup::new("input").required(true).args(["file", "url"])))]
pub struct Args {
    /// Text file to search
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Web page to fetch and search
    #[arg(short, long)]
    pub url: Option<String>,

    /// Lexicon file (overrides JEXPR_DICT_PATH)
    #[arg(long)]
    pub dict: Option<PathBuf>,

    /// Lexicon layout: expressions | jmdict
    #[arg(long)]
    pub dict_format: Option<LexiconFormat>,

    /// JSON config file, used instead of JEXPR_* environment variables
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// auto | always | never
    #[arg(long)]
    pub color: Option<ColorMode>,

    /// Readings must be longer than this many characters (at least 3)
    #[arg(long)]
    pub min_chars: Option<usize>,
}

impl Args {
    pub fn input_source(&self) -> Option<InputSource> {
        match (&self.file, &self.url) {
            (Some(path), _) => Some(InputSource::File(path.clone())),
            (None, Some(url)) => Some(InputSource::Url(url.clone())),
            (None, None) => None,
        }
    }

    /// Config file if given, otherwise the environment, then CLI overrides.
    /// The lexicon format is validated here so a bad value fails before any input is read.
    pub fn load_config(&self) -> anyhow::Result<(Config, LexiconFormat)> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::new(),
        };
        self.apply(&mut config);

        let format: LexiconFormat = config
            .dictionary
            .format
            .parse()
            .map_err(anyhow::Error::msg)
            .context("Invalid dictionary format")?;

        Ok((config, format))
    }

    /// Apply command-line overrides on top of a loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(dict) = &self.dict {
            config.dictionary.path = dict.display().to_string();
        }
        if let Some(format) = self.dict_format {
            config.dictionary.format = format.to_string();
        }
        if let Some(color) = self.color {
            config.report.color = color;
        }
        if let Some(min_chars) = self.min_chars {
            config.matcher.min_reading_chars = min_chars;
        }
    }
}
