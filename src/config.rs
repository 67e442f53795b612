use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::segment::{DietPlanSegmenter, PhraseTable};
use crate::types::SectionKey;

/// Segmenter settings, loaded from JSON:
///
/// ```json
/// { "extraPhrases": { "timing": ["when to eat"] }, "keepHeadingItems": false }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SegmenterConfig {
    /// Extra trigger phrases keyed by section name (`greenFoods`, ...)
    pub extra_phrases: BTreeMap<String, Vec<String>>,
    pub keep_heading_items: bool,
}

impl SegmenterConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (name, phrases) in &self.extra_phrases {
            name.parse::<SectionKey>()?;
            if phrases.iter().all(|p| p.trim().is_empty()) {
                return Err(Error::InvalidConfig(format!(
                    "section {} lists no usable phrases",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Default phrase table extended with `extra_phrases`
    pub fn phrase_table(&self) -> Result<PhraseTable> {
        let mut table = PhraseTable::default();
        for (name, phrases) in &self.extra_phrases {
            let key: SectionKey = name.parse()?;
            for phrase in phrases {
                table.add_phrase(key, phrase);
            }
        }
        Ok(table)
    }

    pub fn build_segmenter(&self) -> Result<DietPlanSegmenter> {
        Ok(DietPlanSegmenter::new(self.phrase_table()?).keep_heading_items(self.keep_heading_items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_object_is_default() {
        let config = SegmenterConfig::from_json("{}").unwrap();
        assert!(config.extra_phrases.is_empty());
        assert!(!config.keep_heading_items);
        assert_eq!(config.phrase_table().unwrap(), PhraseTable::default());
    }

    #[test]
    fn test_extra_phrases_extend_table() {
        let config = SegmenterConfig::from_json(
            r#"{ "extraPhrases": { "greenFoods": ["Eat Freely"], "timing": ["when to eat"] } }"#,
        )
        .unwrap();
        let table = config.phrase_table().unwrap();
        assert_eq!(
            table.phrases(SectionKey::GreenFoods),
            ["foods to eat freely", "green foods", "eat freely"]
        );
        assert_eq!(table.classify("When to eat"), Some(SectionKey::Timing));
    }

    #[test]
    fn test_unknown_section_rejected() {
        let err = SegmenterConfig::from_json(r#"{ "extraPhrases": { "snacks": ["nuts"] } }"#)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownSection(ref s) if s == "snacks"));
    }

    #[test]
    fn test_blank_phrase_list_rejected() {
        let err = SegmenterConfig::from_json(r#"{ "extraPhrases": { "special": ["  "] } }"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = SegmenterConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "keepHeadingItems": true }}"#).unwrap();

        let config = SegmenterConfig::load(file.path()).unwrap();
        assert!(config.keep_heading_items);

        let sections = config
            .build_segmenter()
            .unwrap()
            .segment("Red foods:\n- Soda");
        assert_eq!(sections.red_foods, vec!["Soda"]);
    }

    #[test]
    fn test_missing_file() {
        let err = SegmenterConfig::load(Path::new("/nonexistent/phrases.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
