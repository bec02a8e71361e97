use git2::{ErrorCode, Repository};
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;

use crate::failure::RpcError;

pub struct GitRepository {
    pub repo: Mutex<Repository>,
    /// Name the repository is served under, taken from its root directory
    pub name: String,
}

impl GitRepository {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let repo = Repository::discover(&path).with_context(|| {
            format!("no git repository found at {}", path.as_ref().display())
        })?;

        let root = repo.workdir().unwrap_or_else(|| repo.path());
        let name = root
            .canonicalize()
            .unwrap_or_else(|_| root.to_path_buf())
            .file_name()
            .map(|n| n.to_string_lossy().trim_end_matches(".git").to_string())
            .unwrap_or_else(|| "repository".to_string());

        Ok(Self {
            repo: Mutex::new(repo),
            name,
        })
    }

    pub fn with_repo<F, T>(&self, f: F) -> anyhow::Result<T>
    where
        F: FnOnce(&Repository) -> anyhow::Result<T>,
    {
        let repo = self
            .repo
            .lock()
            .map_err(|_| anyhow::anyhow!("git repository lock poisoned"))?;
        f(&repo)
    }
}

/// Maps lookup failures onto the git RPC sentinels; anything else stays an
/// opaque `git2::Error`.
pub fn rpc_error(err: git2::Error) -> anyhow::Error {
    let sentinel = match err.code() {
        ErrorCode::NotFound => RpcError::NotFound,
        ErrorCode::InvalidSpec | ErrorCode::Ambiguous => RpcError::InvalidArgument,
        ErrorCode::Exists => RpcError::AlreadyExists,
        _ => return anyhow::Error::new(err),
    };
    anyhow::Error::new(sentinel).context(err.message().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserError;
    use crate::translate::Translator;

    #[derive(thiserror::Error, Debug)]
    #[error("archive preparation failed")]
    struct PrepareFailed {
        #[source]
        source: anyhow::Error,
    }

    #[test]
    fn lookup_codes_become_sentinels() {
        let err = rpc_error(git2::Error::new(
            ErrorCode::NotFound,
            git2::ErrorClass::Reference,
            "reference 'refs/heads/gone' not found",
        ));
        assert_eq!(err.downcast_ref::<RpcError>(), Some(&RpcError::NotFound));
        assert!(format!("{:#}", err).contains("refs/heads/gone"));

        let err = rpc_error(git2::Error::new(
            ErrorCode::InvalidSpec,
            git2::ErrorClass::Reference,
            "invalid spec",
        ));
        assert_eq!(err.downcast_ref::<RpcError>(), Some(&RpcError::InvalidArgument));
    }

    #[test]
    fn other_codes_stay_opaque() {
        let err = rpc_error(git2::Error::from_str("odb read failed"));
        assert!(err.downcast_ref::<RpcError>().is_none());
    }

    #[test]
    fn sentinel_survives_a_source_wrapper() {
        let inner = rpc_error(git2::Error::new(
            ErrorCode::NotFound,
            git2::ErrorClass::Odb,
            "object not found",
        ));
        let err = anyhow::Error::from(PrepareFailed { source: inner });

        assert_eq!(Translator::default().translate(&err), UserError::not_found());
    }
}
