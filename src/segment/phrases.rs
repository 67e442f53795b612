use crate::types::SectionKey;

/// Built-in trigger phrases, in priority order. `goals` has none: it is the
/// bucket for content seen before any heading.
const DEFAULT_PHRASES: &[(SectionKey, &[&str])] = &[
    (SectionKey::GreenFoods, &["foods to eat freely", "green foods"]),
    (SectionKey::YellowFoods, &["foods in moderation", "yellow foods"]),
    (SectionKey::RedFoods, &["foods to avoid", "red foods"]),
    (SectionKey::Timing, &["meal timing"]),
    (SectionKey::Special, &["special instructions", "special dietary"]),
];

/// Ordered (section, trigger phrases) lookup used to spot heading paragraphs.
///
/// Entries are checked top to bottom and the first entry with a phrase
/// contained in the paragraph wins. Phrases are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseTable {
    entries: Vec<(SectionKey, Vec<String>)>,
}

impl Default for PhraseTable {
    fn default() -> Self {
        let entries = DEFAULT_PHRASES
            .iter()
            .map(|(key, phrases)| {
                let phrases: Vec<String> = phrases.iter().map(|p| p.to_string()).collect();
                (*key, phrases)
            })
            .collect();
        Self { entries }
    }
}

impl PhraseTable {
    /// A table with no trigger phrases; every paragraph is content.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a trigger phrase for `key`.
    ///
    /// A key already in the table keeps its priority slot; a new key is
    /// checked after all existing ones. Blank and duplicate phrases are ignored.
    pub fn add_phrase(&mut self, key: SectionKey, phrase: &str) {
        let phrase = phrase.trim().to_lowercase();
        if phrase.is_empty() {
            return;
        }

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, phrases)) => {
                if !phrases.contains(&phrase) {
                    phrases.push(phrase);
                }
            }
            None => self.entries.push((key, vec![phrase])),
        }
    }

    pub fn with_phrase(mut self, key: SectionKey, phrase: &str) -> Self {
        self.add_phrase(key, phrase);
        self
    }

    /// Trigger phrases registered for `key`
    pub fn phrases(&self, key: SectionKey) -> &[String] {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, phrases)| phrases.as_slice())
            .unwrap_or(&[])
    }

    pub fn entries(&self) -> impl Iterator<Item = (SectionKey, &[String])> {
        self.entries
            .iter()
            .map(|(key, phrases)| (*key, phrases.as_slice()))
    }

    /// Section whose heading phrase occurs in `paragraph`, if any.
    /// Matching is case-insensitive substring containment.
    pub fn classify(&self, paragraph: &str) -> Option<SectionKey> {
        let haystack = paragraph.to_lowercase();
        self.entries
            .iter()
            .find(|(_, phrases)| phrases.iter().any(|p| haystack.contains(p.as_str())))
            .map(|(key, _)| *key)
    }
}
