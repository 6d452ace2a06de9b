use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;
use anyhow::{Context, Result};

/// Named word lists plus their combined vocabulary.
pub struct WordLists {
    lists: BTreeMap<String, Vec<String>>,
    all_words: Vec<String>,
}

impl WordLists {
    /// Load every `*.txt` file in `dir`; each file stem names a list.
    pub async fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut entries = fs::read_dir(dir)
            .await
            .with_context(|| format!("Failed to read word list directory {}", dir.display()))?;

        let mut lists = BTreeMap::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let content = fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read word list {}", path.display()))?;
            let words = normalize_words(content.lines());
            tracing::info!("Loaded {} words from list '{}'", words.len(), name);
            lists.insert(name.to_string(), words);
        }

        Ok(Self::from_lists(lists))
    }

    pub fn from_lists(lists: BTreeMap<String, Vec<String>>) -> Self {
        let all_words = normalize_words(lists.values().flatten());
        Self { lists, all_words }
    }

    /// Sorted, deduplicated union of every list.
    pub fn all_words(&self) -> &[String] {
        &self.all_words
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }
}

/// Trim and upper-case, drop blanks and `#` comments, then sort and dedup.
pub fn normalize_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words: Vec<String> = words
        .into_iter()
        .map(|word| word.as_ref().trim().to_uppercase())
        .filter(|word| !word.is_empty() && !word.starts_with('#'))
        .collect();
    words.sort();
    words.dedup();
    words
}
