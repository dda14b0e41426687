//! Static outfit rule tables.
//!
//! Built once at startup (built-in defaults or a JSON override) and shared
//! read-only between requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::errors::RulesError;
use super::model::OutfitRole;
use crate::domain::catalog::model::CatalogItem;
use crate::domain::catalog::value_objects::Gender;
use crate::domain::shared::text::{normalize, same_label};

pub const DEFAULT_MAX_ITEMS: usize = 3;

/// A role to fill and the categories acceptable for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSlot {
    pub role: OutfitRole,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Ordered role plan for a set of base categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPlan {
    pub base_categories: Vec<String>,
    pub slots: Vec<RoleSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderRules {
    pub plans: Vec<CategoryPlan>,
    /// Keyword groups, highest priority first.
    #[serde(default)]
    pub accessory_priorities: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub neutral: Vec<String>,
    pub warm: Vec<String>,
    pub cool: Vec<String>,
}

impl ColorPalette {
    pub fn is_neutral(&self, color: &str) -> bool {
        self.neutral.iter().any(|c| same_label(c, color))
    }

    pub fn is_warm(&self, color: &str) -> bool {
        self.warm.iter().any(|c| same_label(c, color))
    }

    pub fn is_cool(&self, color: &str) -> bool {
        self.cool.iter().any(|c| same_label(c, color))
    }
}

/// A recognized style vibe and its category priorities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StylePreference<'a> {
    pub name: &'a str,
    pub categories: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitRules {
    pub men: GenderRules,
    pub women: GenderRules,
    pub kids: GenderRules,
    #[serde(default)]
    pub style_priorities: BTreeMap<String, Vec<String>>,
    pub palette: ColorPalette,
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

fn default_max_items() -> usize {
    DEFAULT_MAX_ITEMS
}

impl OutfitRules {
    /// Parses and validates a JSON rule file.
    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        let mut rules: OutfitRules = serde_json::from_str(json)?;

        if rules.max_items == 0 || rules.max_items > DEFAULT_MAX_ITEMS {
            return Err(RulesError::InvalidMaxItems);
        }

        let has_empty_group = [&rules.men, &rules.women, &rules.kids]
            .iter()
            .flat_map(|r| r.accessory_priorities.iter())
            .any(|group| group.iter().all(|k| k.trim().is_empty()));
        if has_empty_group {
            return Err(RulesError::EmptyKeywordGroup);
        }

        rules.style_priorities = rules
            .style_priorities
            .into_iter()
            .map(|(name, categories)| (normalize(&name), categories))
            .collect();

        Ok(rules)
    }

    pub fn for_gender(&self, gender: Gender) -> &GenderRules {
        match gender {
            Gender::Men => &self.men,
            Gender::Women => &self.women,
            Gender::Kids => &self.kids,
        }
    }

    /// Role plan for the base item, looked up by category then sub-category.
    pub fn plan_for(&self, gender: Gender, base: &CatalogItem) -> Option<&[RoleSlot]> {
        let plans = &self.for_gender(gender).plans;

        [base.category.as_str(), base.sub_category.as_str()]
            .into_iter()
            .filter(|label| !label.trim().is_empty())
            .find_map(|label| {
                plans
                    .iter()
                    .find(|plan| plan.base_categories.iter().any(|c| same_label(c, label)))
            })
            .map(|plan| plan.slots.as_slice())
    }

    pub fn accessory_priorities(&self, gender: Gender) -> &[Vec<String>] {
        &self.for_gender(gender).accessory_priorities
    }

    /// Returns the preference only when the vibe is a known tag.
    pub fn style_preference(&self, vibe: &str) -> Option<StylePreference<'_>> {
        self.style_priorities
            .get_key_value(&normalize(vibe))
            .map(|(name, categories)| StylePreference {
                name: name.as_str(),
                categories: categories.as_slice(),
            })
    }
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn slot(role: OutfitRole, categories: &[&str]) -> RoleSlot {
    RoleSlot {
        role,
        categories: labels(categories),
    }
}

fn accessory() -> RoleSlot {
    slot(OutfitRole::Accessory, &[])
}

fn plan(base_categories: &[&str], slots: Vec<RoleSlot>) -> CategoryPlan {
    CategoryPlan {
        base_categories: labels(base_categories),
        slots,
    }
}

const MEN_TOPS: &[&str] = &[
    "Shirts",
    "Tshirts",
    "Sweatshirts",
    "Sweaters",
    "Jackets",
    "Kurtas",
];
const MEN_BOTTOMS: &[&str] = &["Jeans", "Pants", "Trousers", "Shorts", "Track Pants"];
const MEN_FOOTWEAR: &[&str] = &[
    "Casual Shoes",
    "Formal Shoes",
    "Sports Shoes",
    "Sneakers",
    "Sandals",
];

const WOMEN_TOPS: &[&str] = &[
    "Tops",
    "Tshirts",
    "Shirts",
    "Kurtas",
    "Kurtis",
    "Sweaters",
    "Jackets",
];
const WOMEN_BOTTOMS: &[&str] = &[
    "Jeans",
    "Pants",
    "Trousers",
    "Skirts",
    "Shorts",
    "Leggings",
];
const WOMEN_FOOTWEAR: &[&str] = &["Heels", "Flats", "Casual Shoes", "Sandals", "Sneakers"];

const KIDS_TOPS: &[&str] = &["Tshirts", "Shirts", "Tops"];
const KIDS_BOTTOMS: &[&str] = &["Jeans", "Shorts", "Trousers", "Skirts"];
const KIDS_FOOTWEAR: &[&str] = &["Casual Shoes", "Sports Shoes", "Sandals", "Flip Flops"];

fn men_rules() -> GenderRules {
    GenderRules {
        plans: vec![
            plan(
                MEN_TOPS,
                vec![
                    slot(OutfitRole::Bottom, MEN_BOTTOMS),
                    slot(OutfitRole::Footwear, MEN_FOOTWEAR),
                    accessory(),
                ],
            ),
            plan(
                MEN_BOTTOMS,
                vec![
                    slot(OutfitRole::Top, MEN_TOPS),
                    slot(OutfitRole::Footwear, MEN_FOOTWEAR),
                    accessory(),
                ],
            ),
            plan(
                MEN_FOOTWEAR,
                vec![
                    slot(OutfitRole::Top, MEN_TOPS),
                    slot(OutfitRole::Bottom, MEN_BOTTOMS),
                    accessory(),
                ],
            ),
        ],
        accessory_priorities: vec![
            labels(&["watch"]),
            labels(&["belt"]),
            labels(&["wallet"]),
            labels(&["sunglasses"]),
            labels(&["cap"]),
            labels(&["bag"]),
        ],
    }
}

fn women_rules() -> GenderRules {
    GenderRules {
        plans: vec![
            plan(
                WOMEN_TOPS,
                vec![
                    slot(OutfitRole::Bottom, WOMEN_BOTTOMS),
                    slot(OutfitRole::Footwear, WOMEN_FOOTWEAR),
                    accessory(),
                ],
            ),
            plan(
                WOMEN_BOTTOMS,
                vec![
                    slot(OutfitRole::Top, WOMEN_TOPS),
                    slot(OutfitRole::Footwear, WOMEN_FOOTWEAR),
                    accessory(),
                ],
            ),
            plan(
                &["Dresses", "Jumpsuit"],
                vec![slot(OutfitRole::Footwear, WOMEN_FOOTWEAR), accessory()],
            ),
            plan(
                WOMEN_FOOTWEAR,
                vec![
                    slot(OutfitRole::Top, WOMEN_TOPS),
                    slot(OutfitRole::Bottom, WOMEN_BOTTOMS),
                    accessory(),
                ],
            ),
        ],
        accessory_priorities: vec![
            labels(&["earring"]),
            labels(&["bangle", "jewel"]),
            labels(&["watch"]),
            labels(&["necklace"]),
            labels(&["handbag"]),
            labels(&["bag"]),
        ],
    }
}

fn kids_rules() -> GenderRules {
    GenderRules {
        plans: vec![
            plan(
                KIDS_TOPS,
                vec![
                    slot(OutfitRole::Bottom, KIDS_BOTTOMS),
                    slot(OutfitRole::Footwear, KIDS_FOOTWEAR),
                    accessory(),
                ],
            ),
            plan(
                KIDS_BOTTOMS,
                vec![
                    slot(OutfitRole::Top, KIDS_TOPS),
                    slot(OutfitRole::Footwear, KIDS_FOOTWEAR),
                    accessory(),
                ],
            ),
            plan(
                &["Dresses"],
                vec![slot(OutfitRole::Footwear, KIDS_FOOTWEAR), accessory()],
            ),
        ],
        accessory_priorities: vec![labels(&["watch"]), labels(&["cap"]), labels(&["bag"])],
    }
}

fn style_priorities() -> BTreeMap<String, Vec<String>> {
    [
        (
            "casual",
            &[
                "Tshirts",
                "Jeans",
                "Casual Shoes",
                "Sneakers",
                "Shorts",
                "Watches",
            ][..],
        ),
        (
            "formal",
            &[
                "Shirts",
                "Trousers",
                "Formal Shoes",
                "Heels",
                "Belts",
                "Watches",
            ][..],
        ),
        (
            "sporty",
            &["Tshirts", "Track Pants", "Shorts", "Sports Shoes", "Caps"][..],
        ),
        (
            "party",
            &["Dresses", "Tops", "Heels", "Earrings", "Clutches", "Necklace"][..],
        ),
        (
            "ethnic",
            &["Kurtas", "Kurtis", "Sandals", "Bangle", "Earrings"][..],
        ),
        (
            "streetwear",
            &["Sweatshirts", "Jackets", "Jeans", "Sneakers", "Caps", "Backpacks"][..],
        ),
    ]
    .into_iter()
    .map(|(name, categories)| (name.to_string(), labels(categories)))
    .collect()
}

fn palette() -> ColorPalette {
    ColorPalette {
        neutral: labels(&[
            "Black",
            "White",
            "Grey",
            "Gray",
            "Charcoal",
            "Navy",
            "Navy Blue",
            "Beige",
            "Cream",
            "Off White",
            "Khaki",
            "Taupe",
            "Nude",
            "Silver",
        ]),
        warm: labels(&[
            "Red", "Maroon", "Burgundy", "Orange", "Rust", "Yellow", "Mustard", "Gold", "Pink",
            "Peach", "Coral", "Brown", "Tan", "Copper", "Magenta",
        ]),
        cool: labels(&[
            "Blue",
            "Teal",
            "Turquoise Blue",
            "Green",
            "Olive",
            "Sea Green",
            "Mint",
            "Purple",
            "Lavender",
            "Violet",
        ]),
    }
}

impl Default for OutfitRules {
    fn default() -> Self {
        Self {
            men: men_rules(),
            women: women_rules(),
            kids: kids_rules(),
            style_priorities: style_priorities(),
            palette: palette(),
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}
