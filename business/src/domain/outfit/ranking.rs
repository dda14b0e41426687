use std::cmp::Ordering;

use super::rules::{ColorPalette, StylePreference};
use crate::domain::catalog::model::CatalogItem;
use crate::domain::shared::text::{normalize, same_label};

/// How a candidate's color relates to the base item's color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorHarmony {
    /// At least one side is a neutral.
    Neutral,
    /// Identical non-neutral colors.
    Duplicate,
    /// Both warm or both cool.
    SameTemperature,
    /// One warm, one cool.
    Contrast,
    Unclassified,
}

impl ColorHarmony {
    pub fn score(self) -> f64 {
        match self {
            ColorHarmony::Neutral => 2.0,
            ColorHarmony::Duplicate => 0.5,
            ColorHarmony::SameTemperature => 1.5,
            ColorHarmony::Contrast => 0.8,
            ColorHarmony::Unclassified => 1.0,
        }
    }
}

/// Classifies a color pairing. Missing colors never count as equal.
pub fn classify_colors(
    palette: &ColorPalette,
    base: Option<&str>,
    candidate: Option<&str>,
) -> ColorHarmony {
    let neutral = |c: Option<&str>| c.is_some_and(|c| palette.is_neutral(c));
    if neutral(base) || neutral(candidate) {
        return ColorHarmony::Neutral;
    }

    let (Some(base), Some(candidate)) = (base, candidate) else {
        return ColorHarmony::Unclassified;
    };

    if same_label(base, candidate) {
        return ColorHarmony::Duplicate;
    }

    let both_warm = palette.is_warm(base) && palette.is_warm(candidate);
    let both_cool = palette.is_cool(base) && palette.is_cool(candidate);
    if both_warm || both_cool {
        return ColorHarmony::SameTemperature;
    }

    let warm_cool = palette.is_warm(base) && palette.is_cool(candidate);
    let cool_warm = palette.is_cool(base) && palette.is_warm(candidate);
    if warm_cool || cool_warm {
        return ColorHarmony::Contrast;
    }

    ColorHarmony::Unclassified
}

pub fn color_compatibility(
    palette: &ColorPalette,
    base: Option<&str>,
    candidate: Option<&str>,
) -> f64 {
    classify_colors(palette, base, candidate).score()
}

/// `len - index` of the item's category in the preference list, 0 otherwise.
pub fn style_weight(style: Option<&StylePreference<'_>>, item: &CatalogItem) -> usize {
    let Some(style) = style else {
        return 0;
    };

    let category = item.normalized_category();
    style
        .categories
        .iter()
        .position(|c| normalize(c) == category)
        .map(|index| style.categories.len() - index)
        .unwrap_or(0)
}

/// Per-request inputs shared by every comparison.
pub struct RankingContext<'a> {
    pub palette: &'a ColorPalette,
    pub base_color: Option<&'a str>,
    pub style: Option<StylePreference<'a>>,
}

/// A candidate with its derived sort keys.
#[derive(Debug, Clone)]
pub struct RankedCandidate<'a> {
    pub item: &'a CatalogItem,
    pub harmony: ColorHarmony,
    pub style_weight: usize,
    pub neutral_color: bool,
}

impl<'a> RankingContext<'a> {
    pub fn evaluate<'c>(&self, item: &'c CatalogItem) -> RankedCandidate<'c> {
        let candidate_color = item.color_label();
        RankedCandidate {
            item,
            harmony: classify_colors(self.palette, self.base_color, candidate_color),
            style_weight: style_weight(self.style.as_ref(), item),
            neutral_color: candidate_color.is_some_and(|c| self.palette.is_neutral(c)),
        }
    }

    /// Best candidates first.
    pub fn rank<'c, I>(&self, candidates: I) -> Vec<RankedCandidate<'c>>
    where
        I: IntoIterator<Item = &'c CatalogItem>,
    {
        let mut ranked: Vec<_> = candidates.into_iter().map(|c| self.evaluate(c)).collect();
        ranked.sort_by(compare_candidates);
        ranked
    }

    pub fn pick_best<'c, I>(&self, candidates: I) -> Option<RankedCandidate<'c>>
    where
        I: IntoIterator<Item = &'c CatalogItem>,
    {
        self.rank(candidates).into_iter().next()
    }
}

/// Total order: color score desc, style weight desc, price asc (missing
/// last), rating desc (missing as 0), neutral candidate first, id asc.
pub fn compare_candidates(a: &RankedCandidate<'_>, b: &RankedCandidate<'_>) -> Ordering {
    b.harmony
        .score()
        .total_cmp(&a.harmony.score())
        .then_with(|| b.style_weight.cmp(&a.style_weight))
        .then_with(|| price_key(a.item).cmp(&price_key(b.item)))
        .then_with(|| rating_key(b.item).total_cmp(&rating_key(a.item)))
        .then_with(|| b.neutral_color.cmp(&a.neutral_color))
        .then_with(|| a.item.id.cmp(&b.item.id))
}

fn price_key(item: &CatalogItem) -> (bool, i64) {
    match item.price {
        Some(price) => (false, price),
        None => (true, 0),
    }
}

fn rating_key(item: &CatalogItem) -> f64 {
    item.rating.unwrap_or(0.0)
}
