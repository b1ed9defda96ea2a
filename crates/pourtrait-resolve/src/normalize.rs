//! Text normalization for matching.

use unicode_normalization::UnicodeNormalization;

/// Folds raw drink text into canonical matching form.
///
/// The text is decomposed to NFKD and anything outside ASCII is dropped,
/// so accented letters lose their marks ("Pacífico" becomes "pacifico")
/// while letters with no ASCII base vanish entirely. What survives is
/// lowercased, every character other than letters, digits, whitespace and
/// hyphens is removed, and whitespace runs collapse to single spaces with
/// none at either end.
///
/// Normalizing already-normalized text returns it unchanged.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let folded: String = raw.nfkd().filter(char::is_ascii).collect();
    let kept: String = folded
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}
