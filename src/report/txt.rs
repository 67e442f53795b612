use crate::report::markdown::ReportLine;
use crate::types::DietPlanSections;

/// Render report lines as plain text.
pub fn report_to_text(lines: &[ReportLine]) -> String {
    let mut out = String::new();
    let mut in_list = false;

    for line in lines {
        match line {
            ReportLine::Heading { text, .. } | ReportLine::Paragraph { text } => {
                if in_list {
                    out.push('\n');
                    in_list = false;
                }
                out.push_str(text);
                out.push_str("\n\n");
            }
            ReportLine::Bullet { text } => {
                out.push_str("• ");
                out.push_str(text);
                out.push('\n');
                in_list = true;
            }
            ReportLine::Numbered { number, text } => {
                out.push_str(&format!("{}. {}\n", number, text));
                in_list = true;
            }
        }
    }

    finish(out)
}

/// Render diet-plan sections as titled bullet lists. Empty sections are
/// skipped.
pub fn sections_to_text(sections: &DietPlanSections) -> String {
    let mut out = String::new();

    for (key, items) in sections.iter() {
        if items.is_empty() {
            continue;
        }
        out.push_str(key.title());
        out.push('\n');
        for item in items {
            out.push_str("• ");
            out.push_str(item);
            out.push('\n');
        }
        out.push('\n');
    }

    finish(out)
}

fn finish(out: String) -> String {
    let trimmed = out.trim_end().to_string();
    if trimmed.is_empty() {
        trimmed
    } else {
        trimmed + "\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::format_report;

    #[test]
    fn test_heading_and_paragraph() {
        let lines = vec![
            ReportLine::Heading {
                level: 1,
                text: "Summary".to_string(),
            },
            ReportLine::Paragraph {
                text: "All values normal.".to_string(),
            },
        ];

        let txt = report_to_text(&lines);
        assert_eq!(txt, "Summary\n\nAll values normal.\n");
    }

    #[test]
    fn test_list_then_paragraph() {
        let txt = report_to_text(&format_report("- One\n1. Two\nAfter"));
        assert_eq!(txt, "• One\n1. Two\n\nAfter\n");
    }

    #[test]
    fn test_empty_lines() {
        assert_eq!(report_to_text(&[]), "");
    }

    #[test]
    fn test_sections_skip_empty() {
        let mut sections = DietPlanSections::new();
        sections.goals.push("Hydrate".to_string());
        sections.red_foods.push("Soda".to_string());

        let txt = sections_to_text(&sections);
        assert_eq!(
            txt,
            "Dietary Goals\n• Hydrate\n\nFoods to Avoid\n• Soda\n"
        );
    }

    #[test]
    fn test_sections_empty() {
        assert_eq!(sections_to_text(&DietPlanSections::new()), "");
    }
}
