use std::path::Path;

use anyhow::Context;

use crate::failure::{RpcError, StoreError};
use crate::git::ArchiveBackend;
use crate::git::repository::{GitRepository, rpc_error};
use crate::models::{ArchiveManifest, ArchiveParams};

impl ArchiveBackend for GitRepository {
    fn prepare(
        &self,
        repository: &str,
        params: ArchiveParams,
        filename: String,
    ) -> anyhow::Result<ArchiveManifest> {
        if repository != self.name {
            return Err(anyhow::Error::new(StoreError::ResourceNotFound)
                .context(format!("repository {} is not served here", repository)));
        }
        if params.treeish.is_empty() {
            return Err(anyhow::Error::new(RpcError::InvalidArgument).context("empty treeish"));
        }

        let commit = self.with_repo(|repo| {
            let object = repo
                .revparse_single(&params.treeish)
                .map_err(rpc_error)
                .with_context(|| format!("resolving {}", params.treeish))?;
            let commit = object
                .peel_to_commit()
                .map_err(|e| anyhow::Error::new(RpcError::InvalidArgument).context(e.message().to_string()))?;
            let tree = commit.tree()?;

            for path in params.paths.iter().filter(|p| !p.is_empty()) {
                tree.get_path(Path::new(path.trim_matches('/')))
                    .map_err(rpc_error)
                    .with_context(|| format!("path {} not found at {}", path, params.treeish))?;
            }

            Ok(commit.id().to_string())
        })?;

        tracing::debug!(repository, treeish = %params.treeish, %commit, "resolved archive request");

        Ok(ArchiveManifest {
            repository: repository.to_string(),
            commit,
            filename,
            params,
        })
    }
}

#[cfg(test)]
mod tests {
    use git2::{Repository, Signature};
    use tempfile::TempDir;

    use super::*;
    use crate::failure::find;
    use crate::request::parse_archive_params;

    fn init_repo() -> (TempDir, GitRepository) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        std::fs::create_dir_all(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("README.md"), "hello").unwrap();
        std::fs::write(dir.path().join("docs/guide.md"), "guide").unwrap();

        let mut index = repo.index().unwrap();
        index.add_path(Path::new("README.md")).unwrap();
        index.add_path(Path::new("docs/guide.md")).unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

        let sig = Signature::now("Test", "test@example.com").unwrap();
        let oid = repo
            .commit(Some("refs/heads/main"), &sig, &sig, "initial", &tree, &[])
            .unwrap();
        let commit = repo.find_commit(oid).unwrap();
        repo.tag_lightweight("v1", commit.as_object(), false).unwrap();

        let git = GitRepository::open(dir.path()).unwrap();
        (dir, git)
    }

    fn prepare(git: &GitRepository, refs: &str, query: Option<&str>) -> anyhow::Result<ArchiveManifest> {
        let (params, filename) = parse_archive_params(refs, query);
        git.prepare(&git.name, params, filename)
    }

    #[test]
    fn resolves_full_ref() {
        let (_dir, git) = init_repo();
        let manifest = prepare(&git, "refs/heads/main.zip", Some("path=docs")).unwrap();

        assert_eq!(manifest.commit.len(), 40);
        assert_eq!(manifest.filename, "main.zip");
        assert_eq!(manifest.params.treeish, "refs/heads/main");
        assert_eq!(manifest.params.paths, vec!["docs".to_string()]);
    }

    #[test]
    fn short_names_and_tags_resolve_to_the_same_commit() {
        let (_dir, git) = init_repo();
        let branch = prepare(&git, "main.tar", None).unwrap();
        let tag = prepare(&git, "refs/tags/v1.tgz", None).unwrap();

        assert_eq!(branch.commit, tag.commit);
    }

    #[test]
    fn missing_ref_is_rpc_not_found() {
        let (_dir, git) = init_repo();
        let err = prepare(&git, "refs/heads/missing.zip", None).unwrap_err();

        assert_eq!(find::<RpcError>(&err), Some(&RpcError::NotFound));
    }

    #[test]
    fn missing_path_filter_is_rpc_not_found() {
        let (_dir, git) = init_repo();
        let err = prepare(&git, "main.zip", Some("path=does/not/exist")).unwrap_err();

        assert_eq!(find::<RpcError>(&err), Some(&RpcError::NotFound));
    }

    #[test]
    fn empty_treeish_is_invalid_argument() {
        let (_dir, git) = init_repo();
        let err = prepare(&git, ".zip", None).unwrap_err();

        assert_eq!(find::<RpcError>(&err), Some(&RpcError::InvalidArgument));
    }

    #[test]
    fn unknown_repository_is_store_not_found() {
        let (_dir, git) = init_repo();
        let (params, filename) = parse_archive_params("main.zip", None);
        let err = git.prepare("someone-else", params, filename).unwrap_err();

        assert_eq!(find::<StoreError>(&err), Some(&StoreError::ResourceNotFound));
    }
}
