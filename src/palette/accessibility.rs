//! Evaluate how readable text is on the colors of a palette.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    color::{Hex, ToHex},
    contrast::{contrast_ratio, WcagLevel, AAA_NORMAL, AA_NORMAL},
    error::ParseError,
    palette::GeneratedColor,
};

/// The Dracula foreground, used as the third text color.
pub const FOREGROUND: Hex = Hex::new(0xf8, 0xf8, 0xf2);

/// Share of colors that must reach AAA for the palette to rate AAA.
const AAA_SHARE: f64 = 0.7;
/// Share of colors that must reach AA for the palette to rate AA.
const AA_SHARE: f64 = 0.5;

/// Contrast ratios of every color against the text colors, and the level
/// of the palette as a whole.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySummary {
    /// Ratios keyed by `"{index}-white"`, `"{index}-black"` and
    /// `"{index}-dracula"` (against [`FOREGROUND`]), in color order. A color
    /// that could not be read records `"{index}-error"` with a ratio of 1.
    pub contrast_ratios: IndexMap<String, f64>,
    /// The aggregate level.
    pub wcag_level: WcagLevel,
}

impl ToHex for GeneratedColor {
    fn to_hex(&self) -> Result<Hex, ParseError> {
        Ok(self.hex)
    }
}

/// Rate a list of colors. An empty list rates AAA.
pub fn calculate_accessibility<I>(colors: I) -> AccessibilitySummary
where
    I: IntoIterator,
    I::Item: ToHex,
{
    let mut contrast_ratios = IndexMap::new();
    let mut total = 0_usize;
    let mut aa_count = 0_usize;
    let mut aaa_count = 0_usize;

    for (index, color) in colors.into_iter().enumerate() {
        total += 1;

        let hex = match color.to_hex() {
            Ok(hex) => hex,
            Err(err) => {
                warn!(index, error = %err, "skipping unreadable color in accessibility check");
                contrast_ratios.insert(format!("{index}-error"), 1.0);
                continue;
            }
        };

        let white = contrast_ratio(hex, Hex::WHITE);
        let black = contrast_ratio(hex, Hex::BLACK);
        let dracula = contrast_ratio(hex, FOREGROUND);

        contrast_ratios.insert(format!("{index}-white"), white);
        contrast_ratios.insert(format!("{index}-black"), black);
        contrast_ratios.insert(format!("{index}-dracula"), dracula);

        let best = white.max(black).max(dracula);
        if best >= AA_NORMAL {
            aa_count += 1;
        }
        if best >= AAA_NORMAL {
            aaa_count += 1;
        }
    }

    let total = total as f64;
    let wcag_level = if aaa_count as f64 >= total * AAA_SHARE {
        WcagLevel::AAA
    } else if aa_count as f64 >= total * AA_SHARE {
        WcagLevel::AA
    } else {
        WcagLevel::Fail
    };

    AccessibilitySummary {
        contrast_ratios,
        wcag_level,
    }
}
