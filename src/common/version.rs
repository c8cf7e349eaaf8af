//! Build identification, filled in by `build.rs` where git is available.

macro_rules! env_or {
    ($key:literal, $default:literal) => {
        option_env!($key).unwrap_or($default)
    };
}

pub struct VersionInfo {
    pub version: &'static str,
    pub branch: &'static str,
    pub commit_short: &'static str,
    pub profile: &'static str,
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            branch: env_or!("GIT_BRANCH", "unknown"),
            commit_short: env_or!("GIT_COMMIT_SHORT", "unknown"),
            profile: if cfg!(debug_assertions) {
                "debug"
            } else {
                "release"
            },
        }
    }
}

impl VersionInfo {
    /// e.g. `0.1.0-main-1a2b3c4-release`
    pub fn version_string(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.version, self.branch, self.commit_short, self.profile
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_starts_with_package_version() {
        let info = VersionInfo::default();
        let s = info.version_string();
        assert!(s.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(s.ends_with(info.profile));
    }
}
