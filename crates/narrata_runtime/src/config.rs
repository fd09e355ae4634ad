//! Configuration for a project run.

use std::path::{Path, PathBuf};

/// Engine module imported by generated files unless overridden.
pub const DEFAULT_ENGINE_IMPORT: &str = "@narrata/engine";

/// Where a project's inputs live, where its outputs go, and how output files
/// are named.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectOptions {
    /// Directory holding one asset directory per package.
    pub resources_dir: PathBuf,

    /// Directory holding one script directory per package.
    pub sources_dir: PathBuf,

    /// Directory receiving one output directory per package.
    pub output_dir: PathBuf,

    /// Suffix of the character and resource map files.
    pub map_suffix: String,

    /// Suffix of the resource name (enum) file.
    pub name_suffix: String,

    /// Suffix of the resource list file.
    pub res_suffix: String,

    /// Suffix of the package file.
    pub package_suffix: String,

    /// Module the generated files import engine types from.
    pub engine_import: String,

    /// Report which files would change instead of writing them.
    pub check_only: bool,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            resources_dir: PathBuf::from("resources"),
            sources_dir: PathBuf::from("sources"),
            output_dir: PathBuf::from("output"),
            map_suffix: ".map.ts".to_string(),
            name_suffix: ".enum.ts".to_string(),
            res_suffix: ".res.ts".to_string(),
            package_suffix: ".pack.ts".to_string(),
            engine_import: DEFAULT_ENGINE_IMPORT.to_string(),
            check_only: false,
        }
    }
}

impl ProjectOptions {
    /// Creates options with the three project directories under `root`.
    #[must_use]
    pub fn rooted(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            resources_dir: root.join("resources"),
            sources_dir: root.join("sources"),
            output_dir: root.join("output"),
            ..Self::default()
        }
    }

    /// Builder method to set the resources directory.
    #[must_use]
    pub fn with_resources_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resources_dir = dir.into();
        self
    }

    /// Builder method to set the sources directory.
    #[must_use]
    pub fn with_sources_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.sources_dir = dir.into();
        self
    }

    /// Builder method to set the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Builder method to set the map file suffix.
    #[must_use]
    pub fn with_map_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.map_suffix = suffix.into();
        self
    }

    /// Builder method to set the name file suffix.
    #[must_use]
    pub fn with_name_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.name_suffix = suffix.into();
        self
    }

    /// Builder method to set the resource list suffix.
    #[must_use]
    pub fn with_res_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.res_suffix = suffix.into();
        self
    }

    /// Builder method to set the package file suffix.
    #[must_use]
    pub fn with_package_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.package_suffix = suffix.into();
        self
    }

    /// Builder method to set the engine import.
    #[must_use]
    pub fn with_engine_import(mut self, module: impl Into<String>) -> Self {
        self.engine_import = module.into();
        self
    }

    /// Builder method to enable/disable check mode.
    #[must_use]
    pub fn with_check_only(mut self, check: bool) -> Self {
        self.check_only = check;
        self
    }
}
