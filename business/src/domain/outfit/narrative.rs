//! Display text for generated outfits. Pure and deterministic.

use super::model::{Outfit, OutfitItem};
use super::ranking::ColorHarmony;
use super::rules::{ColorPalette, StylePreference};
use super::selection::Pick;
use crate::domain::catalog::model::CatalogItem;

/// Outfit with no items for a base category that has no role plan.
pub fn unsupported(base: CatalogItem) -> Outfit {
    let explanation = expansion_message(&base);
    Outfit {
        title: title(&base, None),
        items: Vec::new(),
        explanation,
        base,
    }
}

pub fn compose(
    base: CatalogItem,
    picks: Vec<Pick>,
    palette: &ColorPalette,
    style: Option<&StylePreference<'_>>,
) -> Outfit {
    let explanation = explanation(&base, &picks, style);
    let items = picks
        .into_iter()
        .map(|pick| outfit_item(&base, pick, palette, style))
        .collect();

    Outfit {
        title: title(&base, style),
        items,
        explanation,
        base,
    }
}

pub fn expansion_message(base: &CatalogItem) -> String {
    format!(
        "We're still expanding our outfit ideas for {}. Check back soon for styling suggestions.",
        label(base).to_lowercase()
    )
}

pub fn title(base: &CatalogItem, style: Option<&StylePreference<'_>>) -> String {
    let name = if base.name.is_empty() {
        label(base)
    } else {
        base.name.as_str()
    };
    match style {
        Some(style) => format!("{} look with your {}", capitalize(style.name), name),
        None => format!("Complete the look with your {}", name),
    }
}

fn outfit_item(
    base: &CatalogItem,
    pick: Pick,
    palette: &ColorPalette,
    style: Option<&StylePreference<'_>>,
) -> OutfitItem {
    let reason = reason(base, &pick, palette, style);
    OutfitItem {
        role: pick.role,
        suggested_type: label(&pick.item).to_string(),
        color_suggestion: pick.item.color_name.clone(),
        color_hex_suggestion: pick.item.color_hex.clone(),
        reason,
        product: pick.item,
    }
}

pub fn reason(
    base: &CatalogItem,
    pick: &Pick,
    palette: &ColorPalette,
    style: Option<&StylePreference<'_>>,
) -> String {
    let color = pick.item.color_label().unwrap_or("This shade");
    let base_color = base.color_label().unwrap_or("base");
    let base_label = label(base).to_lowercase();

    let mut text = match pick.harmony {
        ColorHarmony::Neutral if palette.is_neutral(color) => format!(
            "{} is a versatile neutral that anchors your {} {}.",
            color, base_color, base_label
        ),
        ColorHarmony::Neutral => format!(
            "{} stands out against the neutral tone of your {}.",
            color, base_label
        ),
        ColorHarmony::Duplicate => format!(
            "Matching {} for a bold tonal statement.",
            color.to_lowercase()
        ),
        ColorHarmony::SameTemperature => {
            let temperature = if palette.is_warm(color) { "warm" } else { "cool" };
            format!(
                "{} shares {} undertones with your {} {}.",
                color, temperature, base_color, base_label
            )
        }
        ColorHarmony::Contrast => format!(
            "{} adds a warm-cool contrast to your {} {}.",
            color, base_color, base_label
        ),
        ColorHarmony::Unclassified => format!(
            "A {} that rounds out your {}.",
            label(&pick.item).to_lowercase(),
            base_label
        ),
    };

    if let Some(style) = style.filter(|_| pick.style_weight > 0) {
        text.push_str(&format!(" A go-to piece for a {} vibe.", style.name));
    }

    text
}

pub fn explanation(
    base: &CatalogItem,
    picks: &[Pick],
    style: Option<&StylePreference<'_>>,
) -> String {
    let base_label = label(base).to_lowercase();
    if picks.is_empty() {
        return format!(
            "We couldn't find in-stock pieces that pair well with this {} right now.",
            base_label
        );
    }

    let parts: Vec<String> = picks
        .iter()
        .map(|pick| {
            let kind = label(&pick.item).to_lowercase();
            match pick.item.color_label() {
                Some(color) => format!("{} {} for the {}", color.to_lowercase(), kind, pick.role),
                None => format!("{} for the {}", kind, pick.role),
            }
        })
        .collect();

    let mut text = format!(
        "Built around your {}, this outfit pairs {}.",
        base_label,
        join_natural(&parts)
    );
    if let Some(style) = style {
        text.push_str(&format!(" Ties are broken toward a {} style.", style.name));
    }
    text
}

/// Category shown to shoppers, falling back to the sub-category.
fn label(item: &CatalogItem) -> &str {
    if item.category.is_empty() {
        &item.sub_category
    } else {
        &item.category
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn join_natural(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::CatalogItemProps;
    use crate::domain::outfit::model::OutfitRole;
    use crate::domain::outfit::rules::OutfitRules;
    use crate::domain::shared::value_objects::ItemId;
    use uuid::Uuid;

    fn item(name: &str, category: &str, color: Option<&str>) -> CatalogItem {
        CatalogItem::from_repository(CatalogItemProps {
            id: ItemId::new(Uuid::new_v4()),
            gender: "Men".to_string(),
            name: name.to_string(),
            category: category.to_string(),
            sub_category: "Topwear".to_string(),
            master_category: "Apparel".to_string(),
            color_name: color.map(|c| c.to_string()),
            color_hex: color.map(|_| "#000000".to_string()),
            price: Some(1_000),
            rating: None,
            is_available: true,
        })
    }

    fn pick(role: OutfitRole, item: CatalogItem, harmony: ColorHarmony) -> Pick {
        Pick {
            role,
            item,
            harmony,
            style_weight: 0,
        }
    }

    #[test]
    fn should_return_expansion_message_for_unsupported_base() {
        let outfit = unsupported(item("Board Shorts", "Swimwear", Some("Blue")));
        assert!(outfit.items.is_empty());
        assert_eq!(
            outfit.explanation,
            "We're still expanding our outfit ideas for swimwear. Check back soon for styling suggestions."
        );
    }

    #[test]
    fn should_title_with_style_when_recognized() {
        let rules = OutfitRules::default();
        let base = item("Oxford Shirt", "Shirts", Some("White"));
        let style = rules.style_preference("formal");

        assert_eq!(title(&base, style.as_ref()), "Formal look with your Oxford Shirt");
        assert_eq!(title(&base, None), "Complete the look with your Oxford Shirt");
    }

    #[test]
    fn should_map_picks_into_outfit_items() {
        let rules = OutfitRules::default();
        let base = item("Oxford Shirt", "Shirts", Some("White"));
        let jeans = item("Slim Jeans", "Jeans", Some("Black"));
        let jeans_id = jeans.id;

        let outfit = compose(
            base,
            vec![pick(OutfitRole::Bottom, jeans, ColorHarmony::Neutral)],
            &rules.palette,
            None,
        );

        assert_eq!(outfit.items.len(), 1);
        let first = &outfit.items[0];
        assert_eq!(first.role, OutfitRole::Bottom);
        assert_eq!(first.suggested_type, "Jeans");
        assert_eq!(first.color_suggestion.as_deref(), Some("Black"));
        assert_eq!(first.color_hex_suggestion.as_deref(), Some("#000000"));
        assert_eq!(first.product.id, jeans_id);
        assert_eq!(
            first.reason,
            "Black is a versatile neutral that anchors your White shirts."
        );
        assert_eq!(
            outfit.explanation,
            "Built around your shirts, this outfit pairs black jeans for the bottom."
        );
    }

    #[test]
    fn should_mention_style_only_for_style_hits() {
        let rules = OutfitRules::default();
        let style = rules.style_preference("casual");
        let base = item("Tee", "Tshirts", Some("Red"));
        let mut hit = pick(
            OutfitRole::Bottom,
            item("Jeans", "Jeans", Some("Orange")),
            ColorHarmony::SameTemperature,
        );

        let plain = reason(&base, &hit, &rules.palette, style.as_ref());
        assert_eq!(plain, "Orange shares warm undertones with your Red tshirts.");

        hit.style_weight = 5;
        let styled = reason(&base, &hit, &rules.palette, style.as_ref());
        assert!(styled.ends_with("A go-to piece for a casual vibe."));
    }

    #[test]
    fn should_explain_empty_result() {
        let base = item("Tee", "Tshirts", None);
        assert_eq!(
            explanation(&base, &[], None),
            "We couldn't find in-stock pieces that pair well with this tshirts right now."
        );
    }

    #[test]
    fn should_join_parts_naturally() {
        let parts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(join_natural(&parts), "a, b and c");
        assert_eq!(join_natural(&parts[..1]), "a");
    }
}
