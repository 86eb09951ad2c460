//! Command-line interface for claimcheck.
//!
//! Provides the `validate` command (check claims against a document from a
//! local path, URL, or inline text) and `config` (show the resolved
//! configuration).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::config;
use crate::judge::{ClaimJudge, JudgeOpinion, OpenAiJudge};
use crate::matcher::{validate, Claim, ValidationOptions};
use crate::source::DocumentSource;

pub mod report;

/// claimcheck - check whether textual claims appear in a source document
#[derive(Parser, Debug)]
#[command(name = "claimcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate claims against a document
    Validate {
        /// Path to a local document (.pdf or plain text)
        #[arg(long, conflicts_with_all = ["url", "text"])]
        doc: Option<PathBuf>,

        /// URL of a remote document (fetched as text)
        #[arg(long, conflicts_with = "text")]
        url: Option<String>,

        /// Inline document text
        #[arg(long)]
        text: Option<String>,

        /// Semicolon-separated terms (auto-assigned ids t1..tn)
        #[arg(long, conflicts_with = "claims")]
        terms: Option<String>,

        /// Path to a JSON file with an array of {"id", "text"} claims
        #[arg(long)]
        claims: Option<PathBuf>,

        /// Characters of context on each side of a match
        #[arg(long)]
        context: Option<usize>,

        /// Match substrings instead of whole words
        #[arg(long)]
        substring: bool,

        /// Match case exactly
        #[arg(long)]
        case_sensitive: bool,

        /// Write flattened results to a CSV file instead of printing JSON
        #[arg(long)]
        out: Option<PathBuf>,

        /// Also consult the configured language model for an advisory opinion
        #[arg(long)]
        judge: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Validate {
                doc,
                url,
                text,
                terms,
                claims,
                context,
                substring,
                case_sensitive,
                out,
                judge,
            } => {
                run_validate(ValidateArgs {
                    doc,
                    url,
                    text,
                    terms,
                    claims,
                    context,
                    substring,
                    case_sensitive,
                    out,
                    judge,
                })
                .await
            }
            Commands::Config => show_config(),
        }
    }
}

struct ValidateArgs {
    doc: Option<PathBuf>,
    url: Option<String>,
    text: Option<String>,
    terms: Option<String>,
    claims: Option<PathBuf>,
    context: Option<usize>,
    substring: bool,
    case_sensitive: bool,
    out: Option<PathBuf>,
    judge: bool,
}

/// Pick the document source from the mutually exclusive flags
fn select_source(args: &ValidateArgs) -> Result<(DocumentSource, String)> {
    match (&args.doc, &args.url, &args.text) {
        (Some(path), None, None) => Ok((
            DocumentSource::LocalPath(path.clone()),
            path.display().to_string(),
        )),
        (None, Some(url), None) => Ok((DocumentSource::RemoteUrl(url.clone()), url.clone())),
        (None, None, Some(text)) => Ok((
            DocumentSource::Inline(text.clone()),
            "<inline text>".to_string(),
        )),
        _ => anyhow::bail!("Provide exactly one of --doc, --url, or --text"),
    }
}

/// Load claims from --terms or --claims
fn load_claims(args: &ValidateArgs) -> Result<Vec<Claim>> {
    let claims = match (&args.terms, &args.claims) {
        (Some(terms), None) => terms
            .split(';')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .enumerate()
            .map(|(i, t)| Claim::new(format!("t{}", i + 1), t))
            .collect(),
        (None, Some(path)) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read claims file: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse claims file: {}", path.display()))?
        }
        _ => anyhow::bail!("Provide exactly one of --terms or --claims"),
    };

    Ok(claims)
}

/// Merge configured defaults with the command-line flags
fn build_options(args: &ValidateArgs, defaults: &ValidationOptions) -> ValidationOptions {
    ValidationOptions {
        whole_word: if args.substring {
            false
        } else {
            defaults.whole_word
        },
        case_insensitive: if args.case_sensitive {
            false
        } else {
            defaults.case_insensitive
        },
        context: args.context.unwrap_or(defaults.context),
    }
}

async fn run_validate(args: ValidateArgs) -> Result<()> {
    let cfg = config::config()?;

    let (source, doc_label) = select_source(&args)?;
    let claims = load_claims(&args)?;
    if claims.is_empty() {
        anyhow::bail!("No claims to validate");
    }
    let options = build_options(&args, &cfg.defaults);

    let document = source.resolve(cfg.fetch_timeout).await?;
    info!(
        doc = %doc_label,
        claims = claims.len(),
        pages = document.pages().map(|p| p.len()),
        "validating document"
    );

    let results = validate(&document, &claims, &options)?;

    let opinion: Option<JudgeOpinion> = if args.judge {
        let judge = OpenAiJudge::from_env(cfg.judge.clone())?;
        Some(judge.judge(document.text(), &claims).await?)
    } else {
        None
    };

    if let Some(out_path) = &args.out {
        report::write_csv(&results, out_path)?;
        eprintln!("Saved details to: {}", out_path.display());
        if let Some(op) = &opinion {
            eprintln!("Judge ({}): {}", op.model, op.verdict);
        }
    } else {
        let report = report::Report::new(doc_label, &options, &results, opinion.as_ref());
        println!("{}", report.to_json()?);
    }

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("claimcheck configuration");
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Default options:");
    println!("  whole_word:       {}", cfg.defaults.whole_word);
    println!("  case_insensitive: {}", cfg.defaults.case_insensitive);
    println!("  context:          {}", cfg.defaults.context);
    println!();
    println!("Fetch timeout: {}s", cfg.fetch_timeout.as_secs());
    println!();
    println!("Judge:");
    println!("  model:    {}", cfg.judge.model);
    println!("  api_base: {}", cfg.judge.api_base);

    Ok(())
}
