//! Generate a batch of test cases for a requirement given on the command line.
//!
//! This example shows how to:
//! - Load adapter configuration from the environment (and `.env`)
//! - Generate a batch for one requirement
//! - Tell placeholder records apart from generated ones
//!
//! # Running
//!
//! ```bash
//! export TESTGEN_PROVIDER=groq
//! export GROQ_API_KEY="gsk_..."
//! cargo run --example generate_from_env -- "Users can reset their password by email"
//! ```
//!
//! Without a credential the run still succeeds and prints the
//! `Configuration Error` placeholder.

use testcase_gen::{AdapterConfig, TestCaseGenerator};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    let requirement = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if requirement.trim().is_empty() {
        anyhow::bail!("Usage: generate_from_env <requirement text>");
    }

    let config = AdapterConfig::from_dotenv()?;
    println!(
        "Generating {} test cases with {} ({})...",
        config.case_count,
        config.provider.display_name(),
        config.model
    );

    let generator = TestCaseGenerator::new(config);
    let batch = generator.generate(&requirement).await;

    if batch.len() == 1 && batch[0].is_placeholder() {
        println!("\nGeneration failed: {}", batch[0].title);
        println!("  {}", batch[0].description);
        return Ok(());
    }

    for case in &batch {
        println!("\n#{} {} [{} / {}]", case.id, case.title, case.priority, case.case_type);
        println!("  {}", case.description);
        println!("  Input:    {}", case.input);
        println!("  Expected: {}", case.expected_output);
        for (field, value) in case.artifacts.iter() {
            println!("  --- {} ---", field.label());
            for line in value.lines() {
                println!("  {line}");
            }
        }
    }

    Ok(())
}
