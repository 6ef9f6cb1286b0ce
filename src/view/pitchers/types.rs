use maud::Markup;

use crate::model::PitcherSeasonSummary;

/// Url prefixes for the team logo and player headshot images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub logo_base: String,
    pub headshot_base: String,
}

impl AssetPaths {
    #[must_use]
    pub fn new(logo_base: &str, headshot_base: &str) -> Self {
        Self {
            logo_base: logo_base.trim_end_matches('/').to_string(),
            headshot_base: headshot_base.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn logo_src(&self, team: &str) -> String {
        format!("{}/{team}.png", self.logo_base)
    }

    #[must_use]
    pub fn headshot_src(&self, pitcher_id: &str) -> String {
        format!("{}/{pitcher_id}.png", self.headshot_base)
    }
}

/// Pre-rendered custom cells for one table row.
#[derive(Debug, Clone)]
pub struct PitcherRowCells<'a> {
    pub row: &'a PitcherSeasonSummary,
    pub era: Markup,
    pub winloss: Markup,
    pub luck: Markup,
}
