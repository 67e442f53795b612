use std::sync::LazyLock;

use regex::Regex;

/// Bold marker left behind by the generator's markdown
const EMPHASIS: &str = "**";

/// `-` or `*` list marker at the start of any line of a paragraph
static LINE_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[-*]\s+").unwrap());

/// Bullet glyph at the start of a single item
static ITEM_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*•]\s*").unwrap());

/// `12. ` numbered-list prefix
static ITEM_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+").unwrap());

/// Cosmetic strip of a whole paragraph block: emphasis markers, per-line
/// bullet markers, surrounding whitespace.
pub fn clean_paragraph(paragraph: &str) -> String {
    let no_emphasis = paragraph.replace(EMPHASIS, "");
    LINE_BULLET.replace_all(&no_emphasis, "").trim().to_string()
}

/// Split a cleaned paragraph into trimmed, non-empty lines.
pub fn split_items(cleaned: &str) -> impl Iterator<Item = &str> {
    cleaned.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Normalize a single item. Returns `None` when nothing is left.
///
/// The strip pass repeats until the text stops changing, so nested residue
/// such as `- 1. **Oats**` collapses fully and the result is a fixed point.
pub fn normalize_item(item: &str) -> Option<String> {
    let mut current = item.trim().to_string();
    loop {
        let next = strip_once(&current);
        if next == current {
            break;
        }
        current = next;
    }
    (!current.is_empty()).then_some(current)
}

/// Normalize every item of a list, dropping items that end up empty.
pub fn normalize_items<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .filter_map(|item| normalize_item(item.as_ref()))
        .collect()
}

fn strip_once(item: &str) -> String {
    let s = ITEM_BULLET.replace(item, "");
    let s = s.replace(EMPHASIS, "");
    let s = ITEM_NUMBER.replace(&s, "");
    s.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_paragraph_strips_bullets_on_every_line() {
        let cleaned = clean_paragraph("- Apples\n* Pears\n- **Leafy** greens  ");
        assert_eq!(cleaned, "Apples\nPears\nLeafy greens");
    }

    #[test]
    fn test_clean_paragraph_keeps_inline_hyphen() {
        assert_eq!(clean_paragraph("Low-fat yogurt"), "Low-fat yogurt");
    }

    #[test]
    fn test_clean_paragraph_requires_space_after_marker() {
        // "-5" is not a bullet at the paragraph stage
        assert_eq!(clean_paragraph("-5 kg target"), "-5 kg target");
    }

    #[test]
    fn test_split_items_drops_blank_lines() {
        let items: Vec<_> = split_items("Apples\n   \nPears  ").collect();
        assert_eq!(items, vec!["Apples", "Pears"]);
    }

    #[test]
    fn test_markdown_stripping() {
        assert_eq!(
            normalize_item("**Apples** (1 serving)").as_deref(),
            Some("Apples (1 serving)")
        );
    }

    #[test]
    fn test_numbered_list_stripping() {
        assert_eq!(normalize_item("1. Drink water").as_deref(), Some("Drink water"));
        assert_eq!(normalize_item("12.   Walk daily").as_deref(), Some("Walk daily"));
    }

    #[test]
    fn test_decimal_is_not_a_list_prefix() {
        assert_eq!(
            normalize_item("1.5 liters of water").as_deref(),
            Some("1.5 liters of water")
        );
    }

    #[test]
    fn test_bullet_glyphs() {
        assert_eq!(normalize_item("• Oats").as_deref(), Some("Oats"));
        assert_eq!(normalize_item("*Berries").as_deref(), Some("Berries"));
        assert_eq!(normalize_item("-  Lentils").as_deref(), Some("Lentils"));
    }

    #[test]
    fn test_nested_residue_collapses() {
        assert_eq!(normalize_item("- 1. **Oats**").as_deref(), Some("Oats"));
        assert_eq!(normalize_item("**-** Beans").as_deref(), Some("Beans"));
    }

    #[test]
    fn test_marker_only_items_dropped() {
        assert_eq!(normalize_item("-"), None);
        assert_eq!(normalize_item("****"), None);
        assert_eq!(normalize_item("   "), None);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let raw = [
            "- **Apples**",
            "1. Drink water",
            "• - 2. Nested",
            "**-** Beans",
            "plain text",
            "- ",
        ];
        let once = normalize_items(raw);
        let twice = normalize_items(&once);
        assert_eq!(once, twice);
        assert_eq!(once.len(), 5);
    }
}
