//! Render the palettes of every standard for one base color as rows of
//! swatches.
//!
//! Usage: `swatches [base color] [output.png]`. The base color is either the
//! name of a reference color or any notation the parser accepts.

use std::env;

use anyhow::Context;
use chromatone::{
    palette::{generate_accessible_variants, generate_palettes_with, GeneratedPalette, Standard},
    parse::parse_color,
    reference::{find_reference_color, BaseColor},
};
use image::{Rgb, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

const WIDTH: u32 = 1200;
const HEIGHT_PER_PALETTE: u32 = 80;
const GAP: u32 = 4;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut args = env::args().skip(1);
    let base = args.next().unwrap_or_else(|| "#ff5555".to_string());
    let output = args.next().unwrap_or_else(|| "swatches.png".to_string());

    let base = match find_reference_color(&base) {
        Some(reference) => reference.clone(),
        None => BaseColor::custom(parse_color(&base).context("reading base color")?),
    };

    let table = config::load();
    let result = generate_palettes_with(&table, &base, &Standard::ALL);

    let rows = result
        .palettes
        .iter()
        .flat_map(|palette| [palette.clone(), generate_accessible_variants(palette)])
        .collect::<Vec<_>>();

    for palette in &rows {
        info!(
            palette = %palette.name,
            colors = palette.colors.len(),
            wcag = %palette.accessibility.wcag_level,
            "generated"
        );
    }

    let image = render(&rows);
    image
        .save(&output)
        .with_context(|| format!("writing {output}"))?;

    info!(
        path = %output,
        base = %base.hex,
        total_colors = result.total_colors,
        "swatches written"
    );

    Ok(())
}

fn init_tracing() {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Draw one row per palette, each color an equal share of the row.
fn render(palettes: &[GeneratedPalette]) -> RgbImage {
    let height = palettes.len() as u32 * HEIGHT_PER_PALETTE;

    let mut image = RgbImage::new(WIDTH, height.max(1));
    image.fill(255);

    for (row, palette) in palettes.iter().enumerate() {
        if palette.colors.is_empty() {
            continue;
        }

        let top = row as u32 * HEIGHT_PER_PALETTE;
        let width = WIDTH / palette.colors.len() as u32;

        for (column, color) in palette.colors.iter().enumerate() {
            let rect = Rect::at((column as u32 * width) as i32, top as i32)
                .of_size(width.max(1), HEIGHT_PER_PALETTE - GAP);
            draw_filled_rect_mut(&mut image, rect, Rgb(color.hex.to_array()));
        }
    }

    image
}
