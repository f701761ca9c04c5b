//! Count the tokens of a text file
//!
//! Usage: token-count <filepath> [--tokenizer-file PATH | --hf-repo [REPO]] [--model MODEL]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use inference_probe::{
    logging::init_tracing,
    tokens::{read_text, TokenCounter, TokenizerSource, DEFAULT_HF_REPO},
    TokenCountError,
};

#[derive(Debug, Parser)]
#[command(name = "token-count", version, about = "Count the tokens in a text file")]
struct Cli {
    /// File to tokenize
    filepath: Option<PathBuf>,

    /// Local Hugging Face tokenizer.json
    #[arg(long, env = "TOKENIZER_FILE", conflicts_with = "hf_repo")]
    tokenizer_file: Option<PathBuf>,

    /// Fetch tokenizer.json from this Hub repository
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_HF_REPO)]
    hf_repo: Option<String>,

    /// tiktoken model name used when no Hugging Face tokenizer is given
    #[arg(long, default_value = "gpt-4")]
    model: String,
}

impl Cli {
    fn tokenizer_source(&self) -> TokenizerSource {
        if let Some(path) = &self.tokenizer_file {
            TokenizerSource::File(path.clone())
        } else if let Some(repo) = &self.hf_repo {
            TokenizerSource::Hub {
                repo: repo.clone(),
                token: std::env::var("HF_TOKEN").ok().filter(|t| !t.is_empty()),
            }
        } else {
            TokenizerSource::Tiktoken {
                model: self.model.clone(),
            }
        }
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing("inference_probe=warn");

    let Some(filepath) = cli.filepath.clone() else {
        println!("Usage: token-count <filepath>");
        return ExitCode::from(1);
    };

    match run(&filepath, &cli.tokenizer_source()) {
        Ok((text, count)) => {
            println!("Text: '{}'", text.trim());
            println!("Token count: {count}");
            ExitCode::SUCCESS
        }
        Err(e @ TokenCountError::FileNotFound(_)) => {
            println!("Error: {e}");
            ExitCode::from(1)
        }
        Err(e) => {
            println!("An error occurred: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(filepath: &Path, source: &TokenizerSource) -> Result<(String, usize), TokenCountError> {
    let counter = TokenCounter::load(source)?;
    let text = read_text(filepath)?;
    let count = counter.count_tokens(&text)?;
    Ok((text, count))
}
