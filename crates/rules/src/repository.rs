use crate::error::RepositoryError;
use crate::model::RuleSet;
use crate::storage::Storage;

/// Narrow read interface over [`Storage`].
///
/// Decouples rule access from the on-disk layout so the service layer
/// never depends on storage's concrete shape. No caching is needed
/// beyond holding the already-loaded value: storage performs the
/// one-time load.
pub struct Repository {
    storage: Storage,
}

impl Repository {
    /// Wrap a loaded storage.
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// The rule set held by storage.
    ///
    /// A load that completed with zero rules is reported as
    /// [`RepositoryError::Empty`]: an empty rules directory is treated
    /// as a deployment error rather than a valid catalogue.
    pub fn rules(&self) -> Result<&RuleSet, RepositoryError> {
        let set = self.storage.rule_set();
        if set.is_empty() {
            return Err(RepositoryError::Empty);
        }
        Ok(set)
    }
}
