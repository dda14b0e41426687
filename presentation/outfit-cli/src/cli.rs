use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "outfit-cli",
    about = "Build a deterministic outfit around a catalog item",
    after_help = "Examples:\n  outfit-cli --base-item-id 7d3f6a6e-7b1c-4d5e-9a0f-2c4b8e9d1a23\n  outfit-cli --base-item-id <id> --style-vibe casual --avoid-color red"
)]
pub struct Cli {
    #[arg(long, help = "Catalog id of the garment the outfit is built around")]
    pub base_item_id: String,
    #[arg(long, help = "Optional style tag used to break ranking ties (e.g. casual, formal)")]
    pub style_vibe: Option<String>,
    #[arg(long, help = "Shopper gender override (accepted, not applied)")]
    pub gender: Option<String>,
    #[arg(long = "avoid-color", help = "Color to avoid (accepted, not applied); repeatable")]
    pub avoid_colors: Vec<String>,
    #[arg(long, help = "Apply catalog migrations before running")]
    pub run_migrations: bool,
}

/// Raw request handed to the runner.
#[derive(Debug, Clone, PartialEq)]
pub struct OutfitRequest {
    pub base_item_id: String,
    pub style_vibe: Option<String>,
    pub gender: Option<String>,
    pub avoid_colors: Vec<String>,
}

impl Cli {
    pub fn into_request(self) -> OutfitRequest {
        OutfitRequest {
            base_item_id: self.base_item_id,
            style_vibe: self.style_vibe,
            gender: self.gender,
            avoid_colors: self.avoid_colors,
        }
    }
}
