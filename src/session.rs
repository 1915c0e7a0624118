use crate::checker::tokenizer::tokenize;
use crate::checker::{DictionaryStore, Verdict, WordClassifier};
use crate::cli::prompt::{prompt_choice, Choice};
use crate::config::Config;
use crate::editor::{CommandEditor, EditorLauncher};
use crate::lookup::{DisabledLookup, HttpLookup, RemoteLookup};
use anyhow::{ensure, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Final signal of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The whole file was scanned. `skipped` words were left unresolved;
    /// `approved` words were added and persisted to the custom dictionary.
    Completed { approved: usize, skipped: usize },
    /// The operator chose Close; nothing was persisted.
    Closed,
}

/// Outcome of one scan pass over the file.
enum PassOutcome {
    Completed { skipped: usize },
    Restart,
    Closed,
}

/// Drives a full spell-checking session: loads dictionaries, scans the file,
/// runs the resolution protocol on unknown words, restarts the scan after
/// external edits, and persists approved words on normal completion.
pub struct Session<'a> {
    config: &'a Config,
    file: PathBuf,
    dictionary: DictionaryStore,
    lookup: Box<dyn RemoteLookup>,
    editor: Box<dyn EditorLauncher>,
    colored: bool,
}

impl<'a> Session<'a> {
    pub fn new(
        config: &'a Config,
        file: PathBuf,
        structured_dict: &Path,
        custom_dict: &Path,
        colored: bool,
    ) -> Result<Self> {
        // All three inputs are checked eagerly so a missing file never wastes
        // a partial scan.
        for path in [file.as_path(), structured_dict, custom_dict] {
            ensure!(path.is_file(), "{} is not a file", path.display());
        }

        let dictionary = DictionaryStore::load(structured_dict, custom_dict)?;

        let lookup: Box<dyn RemoteLookup> = if config.has_credentials() {
            Box::new(HttpLookup::new(&config.lookup)?)
        } else {
            Box::new(DisabledLookup)
        };
        let editor = Box::new(CommandEditor::new(config.editor.clone()));

        Ok(Self {
            config,
            file,
            dictionary,
            lookup,
            editor,
            colored,
        })
    }

    /// Construct a session from explicit collaborators. Used by tests to
    /// substitute the remote lookup and the editor.
    pub fn with_collaborators(
        config: &'a Config,
        file: PathBuf,
        dictionary: DictionaryStore,
        lookup: Box<dyn RemoteLookup>,
        editor: Box<dyn EditorLauncher>,
    ) -> Self {
        Self {
            config,
            file,
            dictionary,
            lookup,
            editor,
            colored: false,
        }
    }

    /// Run scan passes until one completes or the operator closes. A Restart
    /// replays the whole file from line 1 with fresh scanner state, because
    /// offline edits can shift line numbers and fix earlier words; approvals
    /// survive restarts. Persistence happens exactly once, on normal
    /// completion, never on the Close path.
    pub fn run(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<SessionOutcome> {
        loop {
            match self.scan_pass(input, output)? {
                PassOutcome::Restart => continue,
                PassOutcome::Closed => return Ok(SessionOutcome::Closed),
                PassOutcome::Completed { skipped } => {
                    let approved = self.dictionary.approved_count();
                    self.dictionary.persist()?;
                    return Ok(SessionOutcome::Completed { approved, skipped });
                }
            }
        }
    }

    fn scan_pass(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<PassOutcome> {
        let file = File::open(&self.file)
            .with_context(|| format!("Failed to open {}", self.file.display()))?;
        let scanner = crate::parser::HtmlScanner::new(BufReader::new(file));
        let classifier = WordClassifier::new(self.config.strict);
        let mut skipped = 0;

        for fragment in scanner {
            let fragment = fragment
                .with_context(|| format!("Failed to read {}", self.file.display()))?;

            for word in tokenize(&fragment.text) {
                let lower = match classifier.classify(&word, &self.dictionary, self.lookup.as_ref())
                {
                    Verdict::Valid => continue,
                    Verdict::Unknown(lower) => lower,
                };

                match prompt_choice(&lower, input, output, self.colored)? {
                    Choice::Add => self.dictionary.approve(&lower),
                    Choice::Skip => skipped += 1,
                    Choice::Edit => {
                        self.editor.open(&self.file, fragment.line, &lower)?;
                        return Ok(PassOutcome::Restart);
                    }
                    Choice::Close => return Ok(PassOutcome::Closed),
                }
            }
        }

        Ok(PassOutcome::Completed { skipped })
    }
}
