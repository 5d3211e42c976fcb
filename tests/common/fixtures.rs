//! Test data generation utilities and predefined scenarios
//!
//! Provides functions for creating directories and repositories with
//! specific file states to test context collection consistently.

#![allow(dead_code)]

use super::repository::*;
use starpost::core::error::Result;

/// Fourteen lines of python where lines 10-12 (zero-based) hold the snippet
pub fn hello_py() -> String {
    let mut lines: Vec<String> = (0..10).map(|i| format!("# line {i}")).collect();
    lines.push("def hello():".to_string());
    lines.push("    print('hi')".to_string());
    lines.push("    return '<ok>' if a < b && c else \"{{nope}}\"".to_string());
    lines.push("hello()".to_string());
    lines.join("\n") + "\n"
}

/// Scenario: plain directory (no repository) containing hello.py
pub fn create_plain_snippet_dir() -> Result<TestRepo> {
    let dir = setup_plain_dir()?;
    create_file(&dir.path, "hello.py", &hello_py())?;
    Ok(dir)
}

/// Scenario: repository with hello.py committed, plus one modified tracked
/// file, one staged new file and two untracked files
pub fn create_dirty_snippet_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "src/hello.py", &hello_py())?;
    create_file(&repo.path, "README.md", "# readme\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    create_file(&repo.path, "README.md", "# readme\nchanged\n")?;
    create_file(&repo.path, "staged.txt", "staged\n")?;
    git_add(&repo.path, "staged.txt")?;
    create_file(&repo.path, "scratch/one.txt", "one\n")?;
    create_file(&repo.path, "scratch/two.txt", "two\n")?;

    Ok(repo)
}

/// Scenario: a repository nested inside another one, each with a commit.
/// The inner repository lives at `<outer>/inner`.
pub fn create_nested_repos() -> Result<TestRepo> {
    let outer = setup_test_repo()?;
    create_file(&outer.path, "outer.txt", "outer\n")?;
    git_add(&outer.path, "outer.txt")?;
    git_commit(&outer.path, "Outer commit")?;

    let inner = outer.path.join("inner");
    std::fs::create_dir_all(&inner)?;
    init_repo(&inner)?;
    create_file(&inner, "hello.py", &hello_py())?;
    git_add(&inner, "hello.py")?;
    git_commit(&inner, "Inner commit")?;

    Ok(outer)
}
