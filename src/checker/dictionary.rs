use anyhow::{Context, Result};
use std::collections::{BTreeSet, HashSet};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Three-tier unioned word set: the structured dictionary, the custom
/// dictionary file, and words approved interactively this session. Lookups
/// see one union; the approved tier is tracked separately so it can be
/// appended to the custom file once, at normal session end.
pub struct DictionaryStore {
    words: HashSet<String>,
    approved: BTreeSet<String>,
    custom_path: PathBuf,
}

impl DictionaryStore {
    /// Populate the union from both files. Fails if either is unreadable;
    /// callers validate existence before any scanning starts.
    pub fn load(structured_path: &Path, custom_path: &Path) -> Result<Self> {
        let mut words = HashSet::new();

        let structured = fs::read_to_string(structured_path).with_context(|| {
            format!(
                "Failed to read main dictionary: {}",
                structured_path.display()
            )
        })?;
        let entries: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&structured).with_context(|| {
                format!(
                    "Failed to parse main dictionary: {}",
                    structured_path.display()
                )
            })?;
        // Top-level keys are the valid words; values are ignored.
        words.extend(entries.keys().map(|word| word.to_lowercase()));

        let custom = fs::read_to_string(custom_path).with_context(|| {
            format!("Failed to read custom dictionary: {}", custom_path.display())
        })?;
        for line in custom.lines() {
            if line.starts_with('#') {
                continue;
            }
            // First field is the word; trailing fields are ignored.
            if let Some(word) = line.split_whitespace().next() {
                words.insert(word.to_lowercase());
            }
        }

        Ok(Self {
            words,
            approved: BTreeSet::new(),
            custom_path: custom_path.to_path_buf(),
        })
    }

    pub fn contains(&self, lowercase_word: &str) -> bool {
        self.words.contains(lowercase_word)
    }

    /// Add a word to the session-approved set and the union in one step, so
    /// later lookups in the same session (restarts included) see it.
    pub fn approve(&mut self, word: &str) {
        let word = word.to_lowercase();
        self.words.insert(word.clone());
        self.approved.insert(word);
    }

    pub fn approved_count(&self) -> usize {
        self.approved.len()
    }

    /// Append every session-approved word to the custom dictionary, one per
    /// line, then clear the approved set. Called once at normal session end;
    /// never on the abort path.
    pub fn persist(&mut self) -> Result<()> {
        if self.approved.is_empty() {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.custom_path)
            .with_context(|| {
                format!(
                    "Failed to open custom dictionary for append: {}",
                    self.custom_path.display()
                )
            })?;
        for word in &self.approved {
            writeln!(file, "{}", word).context("Failed to write custom dictionary")?;
        }
        self.approved.clear();

        Ok(())
    }
}
