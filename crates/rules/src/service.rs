use crate::error::{RepositoryError, ServiceError};
use crate::model::RuleSet;
use crate::repository::Repository;

/// Read capability the HTTP layer is written against.
///
/// Handlers hold a `dyn GatheringService`, so tests can substitute an
/// implementation without touching the filesystem.
pub trait GatheringService: Send + Sync {
    /// The current rule set, or a typed error.
    fn rules(&self) -> Result<&RuleSet, ServiceError>;
}

/// The business-facing read API over a [`Repository`].
///
/// This is the single translation point between infrastructure failure
/// and the typed, client-facing error taxonomy: no error below this
/// layer leaks un-normalized past it.
pub struct Service {
    repository: Repository,
}

impl Service {
    /// Wrap a repository.
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }
}

impl GatheringService for Service {
    fn rules(&self) -> Result<&RuleSet, ServiceError> {
        self.repository.rules().map_err(|e| match e {
            RepositoryError::Empty => {
                ServiceError::NotFound("no gathering rules found".to_owned())
            }
            other => ServiceError::Unknown {
                message: "failed to read gathering rules".to_owned(),
                source: Some(Box::new(other)),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorCode;
    use crate::loader::{JsonLoader, RuleLoader};
    use crate::storage::{Storage, StorageConfig};

    use super::*;

    fn service_from_dir(name: &str, files: &[(&str, &str)]) -> Service {
        let dir = std::env::temp_dir().join(format!("gathering-svc-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        for (file, content) in files {
            std::fs::write(dir.join(file), content).unwrap();
        }

        let config = StorageConfig {
            rules_path: dir.display().to_string(),
        };
        let json = JsonLoader;
        let loaders: Vec<&dyn RuleLoader> = vec![&json];
        let storage = Storage::new(&config, &loaders).expect("should load");
        let _ = std::fs::remove_dir_all(&dir);
        Service::new(Repository::new(storage))
    }

    #[test]
    fn rules_pass_through_unchanged() {
        let service = service_from_dir(
            "passthrough",
            &[("rules.json", r#"[{"id":"r1","conditions":[]}]"#)],
        );

        let set = service.rules().expect("rules should be present");
        assert_eq!(set.items()[0], serde_json::json!({"id":"r1","conditions":[]}));
    }

    #[test]
    fn empty_repository_normalizes_to_not_found() {
        let service = service_from_dir("empty", &[]);

        let err = service.rules().unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[test]
    fn repeated_reads_are_identical() {
        let service = service_from_dir("idempotent", &[("rules.json", r#"[{"id":"r1"}]"#)]);

        let first = service.rules().expect("rules").items().to_vec();
        let second = service.rules().expect("rules").items().to_vec();
        assert_eq!(first, second);
    }
}
