// Prompt text sent to the generator. The diet-plan prompt names the same
// headings the default phrase table recognizes, goals first.

pub fn summary_prompt(report_text: &str) -> String {
    format!(
        "Summarize the following medical report in plain language for the patient. \
Highlight any values outside the normal range and explain what they mean. \
Use short paragraphs and bullet points.\n\nReport:\n{}",
        report_text.trim()
    )
}

pub fn comparison_prompt(previous_summary: &str, new_summary: &str) -> String {
    format!(
        "Compare these two medical report summaries for the same patient. \
List what improved, what got worse and what stayed the same.\n\n\
Previous report:\n{}\n\nNew report:\n{}",
        previous_summary.trim(),
        new_summary.trim()
    )
}

pub fn diet_plan_prompt(summary: &str) -> String {
    format!(
        "Based on this medical report summary, write a diet plan. \
Start with the dietary goals, then use these headings, each followed by a blank line \
and a bulleted list:\n\
Green Foods (foods to eat freely)\n\
Yellow Foods (foods in moderation)\n\
Red Foods (foods to avoid)\n\
Meal Timing\n\
Special Instructions\n\n\
Summary:\n{}",
        summary.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::PhraseTable;
    use crate::types::SectionKey;

    #[test]
    fn test_diet_plan_prompt_headings_are_recognized() {
        let prompt = diet_plan_prompt("LDL high");
        let table = PhraseTable::default();
        let headings: Vec<_> = prompt
            .lines()
            .filter_map(|line| table.classify(line))
            .collect();
        assert_eq!(
            headings,
            vec![
                SectionKey::GreenFoods,
                SectionKey::YellowFoods,
                SectionKey::RedFoods,
                SectionKey::Timing,
                SectionKey::Special,
            ]
        );
        assert!(prompt.ends_with("LDL high"));
    }

    #[test]
    fn test_comparison_prompt_orders_reports() {
        let prompt = comparison_prompt(" old ", "new");
        let old_at = prompt.find("Previous report:\nold").unwrap();
        let new_at = prompt.find("New report:\nnew").unwrap();
        assert!(old_at < new_at);
    }

    #[test]
    fn test_summary_prompt_contains_report() {
        assert!(summary_prompt("\nHb 13.2 g/dL\n").ends_with("Report:\nHb 13.2 g/dL"));
    }
}
