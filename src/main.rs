use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use qslcard::cli::Args;
use qslcard::loader::{load_config, load_contacts};
use qslcard::render::generate_pdf;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .init();

    let config = load_config(&args.config)
        .with_context(|| format!("Failed to load config: {}", args.config.display()))?;

    let contacts = load_contacts(&config.files.contacts).with_context(|| {
        format!(
            "Failed to load contacts: {}",
            config.files.contacts.display()
        )
    })?;

    if contacts.is_empty() {
        anyhow::bail!("No contacts to print");
    }

    log::info!("Printing {} cards", contacts.len());

    let pdf_data = generate_pdf(&config, &contacts).with_context(|| "Failed to generate PDF")?;

    // Write output only after every page rendered
    let output_path = args.output_path(&config.files.output);
    fs::write(&output_path, pdf_data)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!("Successfully wrote PDF to {}", output_path.display());

    Ok(())
}
