mod clean;
mod phrases;

pub use clean::{clean_paragraph, normalize_item, normalize_items, split_items};
pub use phrases::PhraseTable;

use crate::types::{DietPlanSections, SectionKey};

/// Blank line between paragraph blocks
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Counters collected during one segmentation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentStats {
    pub paragraphs: usize,
    pub headings: usize,
    /// Lines appended during the pass that normalization later dropped
    pub dropped_items: usize,
}

/// Sections plus the counters gathered while producing them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentOutcome {
    pub sections: DietPlanSections,
    pub stats: SegmentStats,
}

/// Splits generated diet-plan text into the six display sections.
#[derive(Debug, Clone, Default)]
pub struct DietPlanSegmenter {
    phrases: PhraseTable,
    keep_heading_items: bool,
}

impl DietPlanSegmenter {
    pub fn new(phrases: PhraseTable) -> Self {
        Self {
            phrases,
            keep_heading_items: false,
        }
    }

    /// Keep the lines that follow the heading line inside a heading
    /// paragraph (`"Green Foods:\n- Apples"`). Off by default: a heading
    /// paragraph is consumed whole.
    pub fn keep_heading_items(mut self, keep: bool) -> Self {
        self.keep_heading_items = keep;
        self
    }

    pub fn phrases(&self) -> &PhraseTable {
        &self.phrases
    }

    pub fn segment(&self, text: &str) -> DietPlanSections {
        self.segment_with_stats(text).sections
    }

    /// Segment `text`, also reporting how many paragraphs, headings and
    /// dropped items the pass saw. Never fails.
    pub fn segment_with_stats(&self, text: &str) -> SegmentOutcome {
        let text = text.replace("\r\n", "\n");

        let start = (SectionKey::Goals, DietPlanSections::new(), SegmentStats::default());
        let (_, raw, mut stats) = text.split(PARAGRAPH_SEPARATOR).fold(
            start,
            |(current, mut sections, mut stats), paragraph| {
                stats.paragraphs += 1;

                // Headings are matched against the raw text
                if let Some(key) = self.phrases.classify(paragraph) {
                    tracing::debug!(section = %key, "heading paragraph");
                    stats.headings += 1;
                    if self.keep_heading_items {
                        let tail = self.after_heading_line(paragraph, key);
                        push_paragraph(&mut sections, key, tail);
                    }
                    return (key, sections, stats);
                }

                push_paragraph(&mut sections, current, paragraph);
                (current, sections, stats)
            },
        );

        let mut sections = DietPlanSections::new();
        for (key, items) in raw.iter() {
            let normalized = normalize_items(items);
            stats.dropped_items += items.len() - normalized.len();
            *sections.get_mut(key) = normalized;
        }

        tracing::debug!(
            paragraphs = stats.paragraphs,
            headings = stats.headings,
            items = sections.total_items(),
            dropped = stats.dropped_items,
            "segmented diet plan"
        );
        if stats.headings == 0 && !sections.is_empty() {
            tracing::warn!(
                items = sections.goals.len(),
                "no section headings found, all content attributed to goals"
            );
        }

        SegmentOutcome { sections, stats }
    }

    /// Text of `paragraph` below the first line that triggers `key`.
    fn after_heading_line<'a>(&self, paragraph: &'a str, key: SectionKey) -> &'a str {
        let mut offset = 0;
        for line in paragraph.split_inclusive('\n') {
            offset += line.len();
            if self.phrases.classify(line) == Some(key) {
                return &paragraph[offset..];
            }
        }
        ""
    }
}

fn push_paragraph(sections: &mut DietPlanSections, key: SectionKey, paragraph: &str) {
    let cleaned = clean_paragraph(paragraph);
    sections
        .get_mut(key)
        .extend(split_items(&cleaned).map(str::to_string));
}

/// Segment `text` with the built-in phrase table.
pub fn segment(text: &str) -> DietPlanSections {
    DietPlanSegmenter::default().segment(text)
}
