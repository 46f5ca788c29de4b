//! Generate a batch and export it as JSON and CSV.
//!
//! This example shows how to:
//! - Generate a batch with the configured provider
//! - Serve the whole batch and a single case as JSON
//! - Write the batch to a spreadsheet-friendly CSV file
//!
//! # Running
//!
//! ```bash
//! export GITHUB_TOKEN="ghp_..."
//! cargo run --example export_batch -- "Shopping cart keeps items between sessions" cart.csv
//! ```

use std::fs::File;
use testcase_gen::export::{batch_to_json, case_to_json, lookup_case, write_csv};
use testcase_gen::{AdapterConfig, TestCaseGenerator};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .try_init();

    let mut args = std::env::args().skip(1);
    let requirement = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("Usage: export_batch <requirement> [output.csv]"))?;
    let output_path = args.next().unwrap_or_else(|| "test_cases.csv".to_string());

    let config = AdapterConfig::from_dotenv()?;
    let variant = config.schema_variant;
    let batch = TestCaseGenerator::new(config).generate(&requirement).await;

    println!("Batch JSON:\n{}\n", batch_to_json(&batch)?);

    match lookup_case(Some(batch.as_slice()), 1) {
        Ok(case) => println!("Case 1 JSON:\n{}\n", case_to_json(case)?),
        Err(e) => println!("Lookup failed: {}", e.to_error_body()),
    }

    write_csv(&batch, variant, File::create(&output_path)?)?;
    println!("Wrote {} rows to {output_path}", batch.len());

    Ok(())
}
