//! Module Registry
//!
//! Static description of every content module the platform can show, and
//! the feature flag that gates it. The flag keys here are the complete set of
//! known flags; [`crate::shared::flags::FeatureFlags::baseline`] is built from
//! them.

use serde::Serialize;

use crate::shared::flags::FeatureFlags;

/// A content module entry in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleInfo {
    /// Stable identifier
    pub key: &'static str,
    /// Display title
    pub title: &'static str,
    /// Front-end route
    pub path: &'static str,
    /// Flag that must be enabled for the module to be shown
    pub flag: &'static str,
}

/// Every content module, in navigation order
pub const MODULES: &[ModuleInfo] = &[
    ModuleInfo { key: "lexicon", title: "Lexicon", path: "/lexicon", flag: "lexicon" },
    ModuleInfo { key: "directory", title: "Directory", path: "/directory", flag: "directory" },
    ModuleInfo { key: "lounge", title: "Lounge", path: "/lounge", flag: "lounge" },
    ModuleInfo { key: "tv", title: "Droobi TV", path: "/tv", flag: "tv" },
    ModuleInfo { key: "projects", title: "Projects", path: "/projects", flag: "projects" },
    ModuleInfo { key: "webinars", title: "Webinars", path: "/webinars", flag: "webinars" },
    ModuleInfo { key: "trainings", title: "Trainings", path: "/trainings", flag: "trainings" },
    ModuleInfo { key: "community", title: "Community", path: "/community", flag: "community" },
];

/// Iterate over every known flag key
pub fn flag_keys() -> impl Iterator<Item = &'static str> {
    MODULES.iter().map(|module| module.flag)
}

/// Registry entries whose gating flag is enabled, in registry order
pub fn enabled_modules(flags: &FeatureFlags) -> Vec<&'static ModuleInfo> {
    MODULES
        .iter()
        .filter(|module| flags.is_enabled(module.flag))
        .collect()
}
