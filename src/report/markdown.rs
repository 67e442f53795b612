use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// `# Title` .. `###### Title`
static ATX_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").unwrap());

/// Whole line wrapped in bold, e.g. `**Key Findings:**`
static BOLD_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\*(.+)\*\*:?$").unwrap());

static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*•]\s+(.*)$").unwrap());

static NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)\.\s+(.*)$").unwrap());

/// Heading level given to bold-only lines
const BOLD_HEADING_LEVEL: u8 = 3;

/// One display line of a summary or comparison text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ReportLine {
    Heading { level: u8, text: String },
    Bullet { text: String },
    Numbered { number: u32, text: String },
    Paragraph { text: String },
}

impl ReportLine {
    pub fn text(&self) -> &str {
        match self {
            ReportLine::Heading { text, .. }
            | ReportLine::Bullet { text }
            | ReportLine::Numbered { text, .. }
            | ReportLine::Paragraph { text } => text,
        }
    }
}

/// Classify each non-blank line of generated markdown.
pub fn format_report(text: &str) -> Vec<ReportLine> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(classify_line)
        .collect()
}

fn classify_line(line: &str) -> Option<ReportLine> {
    let element = if let Some(caps) = ATX_HEADING.captures(line) {
        ReportLine::Heading {
            level: caps[1].len() as u8,
            text: strip_emphasis(&caps[2]),
        }
    } else if let Some(caps) = BOLD_LINE.captures(line) {
        ReportLine::Heading {
            level: BOLD_HEADING_LEVEL,
            text: strip_emphasis(&caps[1]),
        }
    } else if let Some(caps) = BULLET.captures(line) {
        ReportLine::Bullet {
            text: strip_emphasis(&caps[1]),
        }
    } else if let Some(caps) = NUMBERED.captures(line) {
        match caps[1].parse() {
            Ok(number) => ReportLine::Numbered {
                number,
                text: strip_emphasis(&caps[2]),
            },
            // Too many digits to be a list number
            Err(_) => ReportLine::Paragraph {
                text: strip_emphasis(line),
            },
        }
    } else {
        ReportLine::Paragraph {
            text: strip_emphasis(line),
        }
    };

    // A line that was only markers carries nothing to show
    (!element.text().is_empty()).then_some(element)
}

fn strip_emphasis(s: &str) -> String {
    s.replace("**", "").trim().to_string()
}
