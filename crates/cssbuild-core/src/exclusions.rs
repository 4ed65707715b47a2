//! Exclusion sets: explicit lists or version-control ignore state
//!
//! A directory walk skips excluded paths. The set either comes verbatim from
//! the caller, or is queried from git per directory visited. Querying can
//! fail for many reasons (no git binary, not a repository, permission
//! problems); every failure degrades to an empty set so the build proceeds
//! unfiltered instead of aborting.

use std::collections::HashSet;
use std::path::{MAIN_SEPARATOR, Path};
use std::process::Command;

/// Set of absolute excluded paths.
///
/// Membership is string-based so the trailing-separator convention survives:
/// an entry ending with the path separator marks an excluded directory, any
/// other entry an excluded file.
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    paths: HashSet<String>,
}

impl ExcludeSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Is this exact file path excluded?
    pub fn contains_file(&self, path: &Path) -> bool {
        self.paths.contains(&path.display().to_string())
    }

    /// Is this directory excluded? Tested with a trailing separator, the
    /// form the ignore-lister uses for directory entries.
    pub fn contains_dir(&self, path: &Path) -> bool {
        self.paths
            .contains(&format!("{}{}", path.display(), MAIN_SEPARATOR))
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Compute the exclusion set for `dir`.
///
/// An explicit list always wins, even when empty, and is never merged with
/// version-control state. With no explicit list, git is asked for the
/// ignored paths under `dir`; the query is scoped to this directory only and
/// repeated per directory during a recursive walk, since ignore rules can be
/// directory-scoped.
pub fn resolve(dir: &Path, explicit: Option<&[String]>) -> ExcludeSet {
    match explicit {
        Some(paths) => ExcludeSet::from_paths(paths.iter().cloned()),
        None => git_ignored_paths(dir).unwrap_or_else(|| ExcludeSet::empty()),
    }
}

/// Query `git ls-files` for ignored paths under `dir`, rooted at `dir`.
///
/// Returns `None` on any failure; callers treat that as "no exclusions".
fn git_ignored_paths(dir: &Path) -> Option<ExcludeSet> {
    tracing::debug!("Querying git ignore state in {}", dir.display());
    let output = Command::new("git")
        .args([
            "ls-files",
            "--others",
            "--ignored",
            "--exclude-standard",
            "--directory",
        ])
        .current_dir(dir)
        .output()
        .map_err(|e| tracing::debug!("git invocation failed: {e}"))
        .ok()?;

    if !output.status.success() {
        tracing::debug!("git ls-files exited with {}", output.status);
        return None;
    }

    let stdout = String::from_utf8(output.stdout)
        .map_err(|_| tracing::debug!("git ls-files produced non-UTF-8 output"))
        .ok()?;

    let base = dir.display().to_string();
    let paths = stdout
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let relative = if MAIN_SEPARATOR != '/' {
                line.replace('/', &MAIN_SEPARATOR.to_string())
            } else {
                line.to_string()
            };
            let full = format!("{base}{MAIN_SEPARATOR}{relative}");
            tracing::debug!("Excluding '{full}' from git ignore state");
            full
        })
        .collect();

    Some(ExcludeSet { paths })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_and_dir_membership() {
        let set = ExcludeSet::from_paths(["/root/a.less".to_string(), "/root/skip/".to_string()]);
        assert!(set.contains_file(Path::new("/root/a.less")));
        assert!(!set.contains_file(Path::new("/root/b.less")));
        assert!(set.contains_dir(Path::new("/root/skip")));
        assert!(!set.contains_dir(Path::new("/root/a.less")));
    }

    #[test]
    fn test_explicit_list_wins_over_git() {
        let temp = TempDir::new().unwrap();
        let set = resolve(temp.path(), Some(&["/x/y.less".to_string()]));
        assert!(set.contains_file(Path::new("/x/y.less")));

        // An explicit empty list means "no excludes", not "ask git"
        let set = resolve(temp.path(), Some(&[]));
        assert!(set.is_empty());
    }

    #[test]
    fn test_unavailable_ignore_state_degrades_to_empty() {
        // A fresh temp directory is not a git repository; the query must
        // fail silently and yield no exclusions.
        let temp = TempDir::new().unwrap();
        let set = resolve(temp.path(), None);
        assert!(set.is_empty());
    }

    #[test]
    fn test_git_ignored_paths_become_absolute_entries() {
        let temp = TempDir::new().unwrap();
        let git_works = Command::new("git")
            .arg("init")
            .current_dir(temp.path())
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false);
        if !git_works {
            return;
        }

        fs::write(temp.path().join(".gitignore"), "ignored.scss\nskipped/\n").unwrap();
        fs::write(temp.path().join("ignored.scss"), "body {}").unwrap();
        fs::write(temp.path().join("kept.scss"), "body {}").unwrap();
        fs::create_dir(temp.path().join("skipped")).unwrap();
        fs::write(temp.path().join("skipped").join("x.scss"), "body {}").unwrap();

        let set = resolve(temp.path(), None);
        assert!(set.contains_file(&temp.path().join("ignored.scss")));
        assert!(!set.contains_file(&temp.path().join("kept.scss")));
        assert!(set.contains_dir(&temp.path().join("skipped")));
    }
}
