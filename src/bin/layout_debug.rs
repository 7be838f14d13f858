//! Debug tool to print the computed card layout
//! Run with: cargo run --bin layout_debug -- qslcard.json

use std::path::PathBuf;

use anyhow::{Context, Result};

use qslcard::loader::{load_config, load_contacts};
use qslcard::render::layout::PlacedText;
use qslcard::render::{ComputedLayout, FontFiles, PdfCanvas};

fn print_text(label: &str, text: &PlacedText) {
    println!(
        "  {:<14} {:<12} x={:7.2} y={:7.2} ({:?}, {} pt)",
        label, text.text, text.x, text.y, text.font, text.size
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("qslcard.json"));

    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config: {}", config_path.display()))?;
    let contacts = load_contacts(&config.files.contacts).with_context(|| {
        format!("Failed to load contacts: {}", config.files.contacts.display())
    })?;

    // Measure with the real fonts
    let fonts = FontFiles::load(&config.fonts).context("Failed to load fonts")?;
    let measurer = PdfCanvas::new("Layout Debug", &fonts)?;

    println!("=== Layout Debug (with actual font metrics) ===");
    println!(
        "Card: {}x{} pt, table top: {} pt",
        config.card.width, config.card.height, config.table_top
    );

    for contact in &contacts {
        let layout = ComputedLayout::compute(&config, contact, &measurer)?;
        println!();
        println!("Contact {} ({})", contact.id, contact.callsign);
        print_text("own callsign", &layout.own_callsign);
        print_text("peer label", &layout.peer_label);
        print_text("peer callsign", &layout.peer_callsign);

        let table = &layout.table;
        println!(
            "  table          top={:.2} divider={:.2} bottom={:.2}",
            table.top, table.divider, table.bottom
        );
        let bounds: Vec<String> = table.boundaries.iter().map(|b| format!("{:.2}", b)).collect();
        println!("  columns        [{}]", bounds.join(", "));

        for (header, field) in layout.headers.iter().zip(&layout.fields) {
            print_text(&header.text, field);
        }
        if let Some(ref remarks) = layout.remarks {
            print_text("remarks", remarks);
        }
    }

    Ok(())
}
