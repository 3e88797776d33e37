// Rust guideline compliant 2026-02-12

//! Git helpers for discovering candidate files.

use anyhow::{Context, Result};
use git2::{Delta, Repository};
use std::path::{Path, PathBuf};

/// Returns every file tracked in the index that still exists on disk.
///
/// # Arguments
///
/// * `root` - Root of the Git working tree
///
/// # Errors
///
/// Returns an error if the repository or its index cannot be read.
pub fn tracked_files(root: &Path) -> Result<Vec<PathBuf>> {
    let repo = open(root)?;
    let index = repo.index()?;
    let mut files: Vec<PathBuf> = index
        .iter()
        .map(|entry| PathBuf::from(String::from_utf8_lossy(&entry.path).into_owned()))
        .filter(|path| root.join(path).is_file())
        .collect();
    files.sort();
    files.dedup();
    Ok(files)
}

/// Returns files added or modified in the index relative to HEAD.
///
/// On an unborn branch every indexed file counts as staged.
///
/// # Arguments
///
/// * `root` - Root of the Git working tree
///
/// # Errors
///
/// Returns an error if the repository, HEAD or index cannot be read.
pub fn staged_files(root: &Path) -> Result<Vec<PathBuf>> {
    let repo = open(root)?;
    let head_tree = match repo.head() {
        Ok(head) => Some(head.peel_to_tree()?),
        Err(_) => None,
    };
    let diff = repo.diff_tree_to_index(head_tree.as_ref(), None, None)?;
    let mut files: Vec<PathBuf> = diff
        .deltas()
        .filter(|delta| delta.status() != Delta::Deleted)
        .filter_map(|delta| delta.new_file().path().map(Path::to_path_buf))
        .collect();
    files.sort();
    files.dedup();
    Ok(files)
}

/// Returns the working tree root of the repository containing `start`.
///
/// `None` when `start` is not inside a Git working tree (bare repositories
/// included).
pub fn discover_root(start: &Path) -> Option<PathBuf> {
    let repo = Repository::discover(start).ok()?;
    let workdir = repo.workdir()?;
    Some(workdir.canonicalize().unwrap_or_else(|_| workdir.to_path_buf()))
}

fn open(root: &Path) -> Result<Repository> {
    Repository::open(root)
        .with_context(|| format!("{} is not a Git repository", root.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_repo() -> (TempDir, Repository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::init(temp_dir.path()).unwrap();
        (temp_dir, repo)
    }

    fn stage(repo: &Repository, root: &Path, name: &str, content: &str) {
        std::fs::write(root.join(name), content).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
    }

    fn commit(repo: &Repository) {
        let mut index = repo.index().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = git2::Signature::now("tester", "tester@example.com").unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, "commit", &tree, &parents)
            .unwrap();
    }

    #[test]
    fn test_tracked_files_lists_index() {
        let (dir, repo) = init_repo();
        stage(&repo, dir.path(), "b.py", "b");
        stage(&repo, dir.path(), "a.toml", "a");
        std::fs::write(dir.path().join("untracked.txt"), "u").unwrap();

        let files = tracked_files(dir.path()).unwrap();
        assert_eq!(files, vec![PathBuf::from("a.toml"), PathBuf::from("b.py")]);
    }

    #[test]
    fn test_staged_files_on_unborn_branch() {
        let (dir, repo) = init_repo();
        stage(&repo, dir.path(), "a.toml", "a");
        assert_eq!(staged_files(dir.path()).unwrap(), vec![PathBuf::from("a.toml")]);
    }

    #[test]
    fn test_staged_files_excludes_committed() {
        let (dir, repo) = init_repo();
        stage(&repo, dir.path(), "a.toml", "a");
        commit(&repo);
        stage(&repo, dir.path(), "b.py", "b");

        assert_eq!(staged_files(dir.path()).unwrap(), vec![PathBuf::from("b.py")]);
        assert_eq!(tracked_files(dir.path()).unwrap().len(), 2);
    }

    #[test]
    fn test_discover_root_from_subdirectory() {
        let (dir, _repo) = init_repo();
        let sub = dir.path().join("src").join("nested");
        std::fs::create_dir_all(&sub).unwrap();

        let root = discover_root(&sub).unwrap();
        assert_eq!(root, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_discover_root_outside_repository() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(discover_root(temp_dir.path()), None);
    }

    #[test]
    fn test_not_a_repository() {
        let temp_dir = TempDir::new().unwrap();
        let err = tracked_files(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("not a Git repository"));
    }
}
