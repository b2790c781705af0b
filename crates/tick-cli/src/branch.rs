//! Git branch lookup used to default the note of `start`.

use std::path::Path;

/// Name of the branch checked out in the repository at `dir`.
///
/// Returns `None` when `dir` is not a repository root, HEAD is detached, or
/// the lookup fails for any other reason.
pub fn current_branch(dir: &Path) -> Option<String> {
    let repo = match gix::open(dir) {
        Ok(repo) => repo,
        Err(err) => {
            tracing::debug!(dir = %dir.display(), %err, "no git repository");
            return None;
        }
    };

    match repo.head_name() {
        Ok(Some(name)) => {
            let branch = name.shorten().to_string();
            tracing::debug!(%branch, "found checked out branch");
            Some(branch)
        }
        Ok(None) => {
            tracing::debug!("HEAD is detached");
            None
        }
        Err(err) => {
            tracing::debug!(%err, "failed to read HEAD");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_directory_has_no_branch() {
        let temp = tempfile::tempdir().unwrap();
        assert_eq!(current_branch(temp.path()), None);
    }

    #[test]
    fn fresh_repository_reports_its_branch() {
        let temp = tempfile::tempdir().unwrap();
        gix::init(temp.path()).unwrap();

        let branch = current_branch(temp.path()).unwrap();
        assert!(!branch.is_empty());
        assert!(!branch.starts_with("refs/"));
    }

    #[test]
    fn branch_from_head_file() {
        let temp = tempfile::tempdir().unwrap();
        gix::init(temp.path()).unwrap();
        std::fs::write(
            temp.path().join(".git").join("HEAD"),
            "ref: refs/heads/feature/login\n",
        )
        .unwrap();

        assert_eq!(
            current_branch(temp.path()).as_deref(),
            Some("feature/login")
        );
    }
}
