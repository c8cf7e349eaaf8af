use std::{fs, path::Path, process::Command};

fn main() {
    // Tell Cargo to rerun this script if git state changes
    println!("cargo:rerun-if-changed=.git/HEAD");
    if Path::new(".git/refs/heads").exists() {
        println!("cargo:rerun-if-changed=.git/refs/heads");
    }

    let git_info = get_git_info();

    println!("cargo:rustc-env=GIT_BRANCH={}", git_info.branch);
    println!("cargo:rustc-env=GIT_COMMIT_SHORT={}", git_info.commit_short);
}

struct GitInfo {
    branch: String,
    commit_short: String,
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let s = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!s.is_empty()).then_some(s)
}

fn get_git_info() -> GitInfo {
    let mut info = GitInfo {
        branch: git(&["rev-parse", "--abbrev-ref", "HEAD"]).unwrap_or_else(|| "unknown".into()),
        commit_short: git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".into()),
    };

    // Fallback to manual parsing if git is not installed
    if info.commit_short == "unknown" {
        if let Ok(head) = fs::read_to_string(".git/HEAD") {
            let commit = if let Some(ref_path) = head.strip_prefix("ref: ") {
                let ref_path = ref_path.trim();
                info.branch = ref_path.rsplit('/').next().unwrap_or("unknown").to_string();
                fs::read_to_string(format!(".git/{}", ref_path)).unwrap_or_default()
            } else {
                head
            };
            let commit = commit.trim();
            if !commit.is_empty() {
                info.commit_short = commit.chars().take(7).collect();
            }
        }
    }

    info
}
