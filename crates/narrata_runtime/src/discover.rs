//! Package discovery.
//!
//! A package is a directory name found under the sources directory or the
//! resources directory. Its scripts are every file below
//! `<sources>/<package>/` and its assets every file below
//! `<resources>/<package>/`, both in lexical path order.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use narrata_foundation::{Error, ErrorContext, ErrorKind, Result};

use crate::config::ProjectOptions;

/// Base name of the character map file.
pub const CHAR_MAP_NAME: &str = "char";
/// Base name of the resource map and resource name files.
pub const RES_NAME: &str = "res";
/// Base name of the resource list file.
pub const RES_LIST_NAME: &str = "list";

/// Inputs and output locations of one package.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourcePack {
    /// Package name (the directory name).
    pub name: String,
    /// Script files.
    pub sources: Vec<PathBuf>,
    /// Asset files.
    pub resources: Vec<PathBuf>,
    /// Character map output.
    pub char_map: PathBuf,
    /// Resource map output.
    pub res_map: PathBuf,
    /// Resource list output.
    pub res_list: PathBuf,
    /// Resource name (enum) output.
    pub res_names: PathBuf,
    /// Package file output.
    pub package: PathBuf,
}

impl SourcePack {
    /// Creates a pack with output locations derived from `options` and no
    /// input files.
    #[must_use]
    pub fn new(name: impl Into<String>, options: &ProjectOptions) -> Self {
        let name = name.into();
        let out = options.output_dir.join(&name);
        Self {
            char_map: out.join(format!("{CHAR_MAP_NAME}{}", options.map_suffix)),
            res_map: out.join(format!("{RES_NAME}{}", options.map_suffix)),
            res_list: out.join(format!("{RES_LIST_NAME}{}", options.res_suffix)),
            res_names: out.join(format!("{RES_NAME}{}", options.name_suffix)),
            package: out.join(format!("{name}{}", options.package_suffix)),
            sources: Vec::new(),
            resources: Vec::new(),
            name,
        }
    }
}

/// Finds every package of the project.
///
/// # Errors
///
/// Returns a missing directory error if the sources directory does not
/// exist, or an I/O error if a directory cannot be walked.
pub fn discover(options: &ProjectOptions) -> Result<Vec<SourcePack>> {
    if !options.sources_dir.is_dir() {
        return Err(Error::new(ErrorKind::MissingDirectory(
            options.sources_dir.display().to_string(),
        )));
    }

    let mut names = package_names(&options.sources_dir)?;
    if options.resources_dir.is_dir() {
        names.extend(package_names(&options.resources_dir)?);
    }
    names.sort();
    names.dedup();

    names
        .into_iter()
        .map(|name| {
            let mut pack = SourcePack::new(&name, options);
            pack.sources = files_below(&options.sources_dir.join(&name), &name)?;
            pack.resources = files_below(&options.resources_dir.join(&name), &name)?;
            debug!(
                package = %pack.name,
                sources = pack.sources.len(),
                resources = pack.resources.len(),
                "discovered package"
            );
            Ok(pack)
        })
        .collect()
}

fn package_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| Error::io(e.to_string()))?;
        if entry.file_type().is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

/// Every file below `dir`, sorted; an absent directory has no files.
fn files_below(dir: &Path, package: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| {
            Error::io(e.to_string()).with_context(ErrorContext::new().with_package(package))
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}
