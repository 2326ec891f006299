use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::StorageError;
use crate::loader::RuleLoader;
use crate::model::RuleSet;

/// Filesystem location of the rule definitions.
///
/// Owned by configuration; read-only after process start. The caller
/// (process bootstrap) verifies that the path exists before
/// constructing [`Storage`].
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory containing the rule definition files.
    #[serde(default = "default_rules_path")]
    pub rules_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            rules_path: default_rules_path(),
        }
    }
}

fn default_rules_path() -> String {
    "rules".to_owned()
}

/// One-shot filesystem storage for gathering rules.
///
/// Reads every rule file under the configured path exactly once at
/// construction and never touches the filesystem again. There is no
/// reload operation; refreshing rules requires a process restart.
#[derive(Debug)]
pub struct Storage {
    rule_set: RuleSet,
}

impl Storage {
    /// Load all rule files under `config.rules_path`.
    ///
    /// Directory entries are visited in file-name order so the merge of
    /// multiple files is deterministic. Files whose extension no loader
    /// claims are skipped. Any read or parse failure fails the whole
    /// load; a partial rule set is never exposed.
    pub fn new(config: &StorageConfig, loaders: &[&dyn RuleLoader]) -> Result<Self, StorageError> {
        let path = Path::new(&config.rules_path);

        let mut entries: Vec<_> = std::fs::read_dir(path)
            .map_err(|e| {
                StorageError::Io(format!("cannot read directory {}: {e}", path.display()))
            })?
            .collect::<Result<_, _>>()
            .map_err(|e| StorageError::Io(format!("directory entry error: {e}")))?;
        entries.sort_by_key(std::fs::DirEntry::file_name);

        let mut items = Vec::new();
        for entry in entries {
            let file_path = entry.path();
            if !file_path.is_file() {
                continue;
            }

            let extension = file_path
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or("");

            let Some(loader) = loaders.iter().find(|l| l.extensions().contains(&extension)) else {
                debug!(file = %file_path.display(), "skipping file with unrecognized extension");
                continue;
            };

            items.extend(loader.parse_file(&file_path)?);
        }

        info!(count = items.len(), path = %path.display(), "loaded gathering rules");

        Ok(Self {
            rule_set: RuleSet::new(items),
        })
    }

    /// The rule set held by this storage.
    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }
}
