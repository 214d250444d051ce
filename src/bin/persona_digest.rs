use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use persona_digest_core::config::DigestConfig;
use persona_digest_core::logging;
use persona_digest_core::pipeline::DigestPipeline;

#[derive(Parser)]
#[command(
    name = "persona-digest",
    about = "Rank document sections for a persona and task, and distill the best excerpts"
)]
struct Cli {
    /// Input configuration (documents, persona, job_to_be_done)
    #[arg(long, default_value = "input_config.json")]
    config: PathBuf,
    #[arg(long, default_value = "challenge1b_output.json")]
    output: PathBuf,
    /// Base directory for relative document paths
    #[arg(long)]
    documents_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let mut pipeline = DigestPipeline::new(DigestConfig::v0());
    if let Some(dir) = cli.documents_dir {
        pipeline = pipeline.with_documents_dir(dir);
    }

    let result = pipeline.process_config_file(&cli.config);
    result
        .write_to(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    println!("Processing time: {} seconds", result.metadata.processing_time_seconds);
    println!("Extracted sections: {}", result.extracted_sections.len());
    println!("Refined sections: {}", result.sub_section_analysis.len());
    println!("Output saved to: {}", cli.output.display());

    if let Some(error) = &result.metadata.error {
        tracing::error!(%error, "Run finished with an error result");
    }
    Ok(())
}
