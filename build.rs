use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_default();

    let is_dirty = git(&["status", "--porcelain"])
        .map(|out| !out.is_empty())
        .unwrap_or(false);

    // A release build is a clean tree with HEAD sitting on the version tag
    let version = env!("CARGO_PKG_VERSION");
    let tag_at_head = git(&["tag", "--points-at", "HEAD"])
        .map(|tags| {
            tags.lines()
                .any(|tag| tag == format!("v{}", version) || tag == version)
        })
        .unwrap_or(false);

    println!("cargo:rustc-env=GIT_HASH={}", hash);
    println!("cargo:rustc-env=IS_RELEASE={}", tag_at_head && !is_dirty);
}
