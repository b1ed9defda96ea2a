//! Keyword hints for catalog search order.

use pourtrait_model::Category;

/// Style words that pull the beer catalog to the front.
const BEER_KEYWORDS: &[&str] = &[
    "lager", "ale", "ipa", "stout", "porter", "pils", "draught",
];

/// Varietal words that pull the wine catalog to the front.
const WINE_KEYWORDS: &[&str] = &[
    "cabernet",
    "merlot",
    "shiraz",
    "chardonnay",
    "pinot",
    "sauvignon",
    "riesling",
    "rose",
];

/// Spirit family words that pull the spirit catalog to the front.
const SPIRIT_KEYWORDS: &[&str] = &[
    "gin", "whisky", "whiskey", "rum", "vodka", "tequila", "mezcal", "brandy", "cognac", "liqueur",
    "amaro",
];

fn keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Beer => BEER_KEYWORDS,
        Category::Wine => WINE_KEYWORDS,
        Category::Spirit => SPIRIT_KEYWORDS,
    }
}

/// True when any keyword of `category` occurs in the normalized text,
/// as a whole token or inside one ("ipas" still hints beer).
fn has_keyword(category: Category, normalized: &str) -> bool {
    keywords(category).iter().any(|kw| normalized.contains(kw))
}

/// Orders the catalogs to search for one normalized input line.
///
/// Categories with a keyword hit come first; within the hinted group and
/// the remainder the default beer, wine, spirit order is kept. Every
/// category is always present: a hint reorders the search, it never
/// excludes a catalog.
#[must_use]
pub fn hint_order(normalized: &str) -> [Category; 3] {
    let mut order = Category::ALL;
    // Stable sort keeps the default order within each group.
    order.sort_by_key(|category| !has_keyword(*category, normalized));
    order
}
