use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::repository::*;

/// One path per listing: `MM initial.txt`, `A  added.txt`, ` M edited.txt`, `?? scratch.txt`.
fn create_classified_repo() -> anyhow::Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    create_file(&repo.path, "edited.txt", "v1\n")?;
    git_add(&repo.path, "edited.txt")?;
    git_commit(&repo.path, "Add edited.txt")?;

    create_file(&repo.path, "initial.txt", "v2\n")?;
    git_add(&repo.path, "initial.txt")?;
    create_file(&repo.path, "initial.txt", "v3\n")?;
    create_file(&repo.path, "edited.txt", "v2\n")?;
    create_file(&repo.path, "added.txt", "new\n")?;
    git_add(&repo.path, "added.txt")?;
    create_file(&repo.path, "scratch.txt", "scratch\n")?;
    Ok(repo)
}

#[cfg(test)]
mod class_list_command_tests {
    use super::*;

    #[test]
    fn test_each_listing_prints_its_paths() -> anyhow::Result<()> {
        let repo = create_classified_repo()?;

        for (listing, expected) in [
            ("list_changed_staged", "initial.txt\n"),
            ("list_untracked_staged", "added.txt\n"),
            ("list_changed_unstaged", "edited.txt\n"),
            ("list_untracked_unstaged", "scratch.txt\n"),
        ] {
            repo.yag()?
                .args(["test", listing])
                .assert()
                .success()
                .stdout(expected);
        }
        Ok(())
    }

    #[test]
    fn test_listing_on_clean_tree_is_empty() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        repo.yag()?
            .args(["test", "list_changed_unstaged"])
            .assert()
            .success()
            .stdout("");
        Ok(())
    }

    #[test]
    fn test_unknown_listing_is_rejected() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        repo.yag()?
            .args(["test", "list_everything"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("list_everything"));
        Ok(())
    }
}
