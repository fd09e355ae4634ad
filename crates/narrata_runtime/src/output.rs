//! Generated output files.
//!
//! Renders a package's tables, resource list, and package descriptor as
//! TypeScript modules and writes the ones whose content changed.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use narrata_engine::Resource;
use narrata_engine::resources::{asset_path, unix_path};
use narrata_foundation::{Error, ErrorContext, LookupTable, Result, to_pascal_case};

use crate::reader::TableFile;

/// The resource list file of a package.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceFile {
    /// File location.
    pub path: PathBuf,
    /// Name the file exports.
    pub export: String,
    /// Resources, in discovery order.
    pub items: Vec<Resource>,
}

/// Everything written for one package.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPack {
    /// Package name.
    pub name: String,
    /// Package file location.
    pub package: PathBuf,
    /// Script files of the package.
    pub sources: Vec<PathBuf>,
    /// Resource list.
    pub resources: ResourceFile,
    /// Resource names (the generated enum).
    pub res_names: TableFile,
    /// Resource map.
    pub res_map: TableFile,
    /// Character map.
    pub char_map: TableFile,
}

/// Renders output files with a given engine import.
#[derive(Clone, Debug)]
pub struct OutputWriter {
    engine_import: String,
    check_only: bool,
}

impl OutputWriter {
    /// Creates a writer importing engine types from `engine_import`.
    #[must_use]
    pub fn new(engine_import: impl Into<String>) -> Self {
        Self {
            engine_import: engine_import.into(),
            check_only: false,
        }
    }

    /// Builder method to enable/disable check mode.
    #[must_use]
    pub fn with_check_only(mut self, check: bool) -> Self {
        self.check_only = check;
        self
    }

    /// Writes every file of `pack` whose content changed.
    ///
    /// The resource name and list files are only produced for packages with
    /// assets; the maps only for packages with scripts. In check mode
    /// nothing is written.
    ///
    /// Returns the files that changed (or would change).
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a file cannot be read or written.
    pub fn save(&self, pack: &OutputPack) -> Result<Vec<PathBuf>> {
        let mut files = vec![(pack.package.clone(), self.render_package(pack))];
        if !pack.resources.items.is_empty() {
            files.push((pack.res_names.path.clone(), render_enum(&pack.res_names)));
            files.push((pack.resources.path.clone(), self.render_resource_list(pack)));
        }
        if !pack.sources.is_empty() {
            files.push((pack.res_map.path.clone(), self.render_res_map(pack)));
            files.push((pack.char_map.path.clone(), self.render_char_map(pack)));
        }

        let mut changed = Vec::new();
        for (path, content) in files {
            if self.write_if_changed(&path, &content, &pack.name)? {
                changed.push(path);
            }
        }
        Ok(changed)
    }

    /// Renders the package descriptor.
    #[must_use]
    pub fn render_package(&self, pack: &OutputPack) -> String {
        let mut imports = vec![self.lib_import(&["Package"])];
        let has_resources = !pack.resources.items.is_empty();
        let has_sources = !pack.sources.is_empty();

        if has_resources {
            imports.push(module_import(&pack.resources.export, &pack.resources.path));
        }
        if has_sources {
            imports.push(module_import(&pack.res_map.export, &pack.res_map.path));
            imports.push(module_import(&pack.char_map.export, &pack.char_map.path));
        }

        let resources = if has_resources { pack.resources.export.as_str() } else { "[]" };
        let res_map = if has_sources { pack.res_map.export.as_str() } else { "{}" };
        let char_map = if has_sources { pack.char_map.export.as_str() } else { "{}" };

        format!(
            "{imports}\n\nexport const {name}Package: Package = {{\n  id: '{id}',\n  sources: {sources},\n  resources: {resources},\n  resMap: {res_map},\n  charMap: {char_map},\n}};\n",
            imports = imports.join("\n"),
            name = to_pascal_case(&pack.name),
            id = pack.name,
            sources = source_list(&pack.sources),
        )
    }

    /// Renders the resource list.
    #[must_use]
    pub fn render_resource_list(&self, pack: &OutputPack) -> String {
        let items: Vec<_> = pack.resources.items.iter().map(render_resource).collect();
        format!(
            "{}\n{}\n\nexport const {}: Resource[] = [\n{}\n];\n",
            self.lib_import(&["Resource"]),
            module_import(&pack.res_names.export, &pack.res_names.path),
            pack.resources.export,
            items.join("\n"),
        )
    }

    /// Renders the resource map; an empty header is replaced by the imports
    /// the map needs.
    #[must_use]
    pub fn render_res_map(&self, pack: &OutputPack) -> String {
        let file = &pack.res_map;
        let header = if file.table.header.is_empty() {
            format!(
                "{}\n{}\n",
                self.lib_import(&["PackageMap"]),
                module_import(&pack.res_names.export, &pack.res_names.path)
            )
        } else {
            file.table.header.clone()
        };
        render_map(&header, &file.export, &file.table)
    }

    /// Renders the character map; like the resource map but ending in a
    /// newline.
    #[must_use]
    pub fn render_char_map(&self, pack: &OutputPack) -> String {
        let file = &pack.char_map;
        let header = if file.table.header.is_empty() {
            format!("{}\n", self.lib_import(&["PackageMap"]))
        } else {
            file.table.header.clone()
        };
        let mut content = render_map(&header, &file.export, &file.table);
        content.push('\n');
        content
    }

    fn lib_import(&self, names: &[&str]) -> String {
        format!("import {{ {} }} from '{}';", names.join(", "), self.engine_import)
    }

    fn write_if_changed(&self, path: &Path, content: &str, package: &str) -> Result<bool> {
        let context = || {
            ErrorContext::new()
                .with_package(package)
                .with_source(path.display().to_string())
        };

        if path.exists() {
            let existing = fs::read_to_string(path)
                .map_err(|e| Error::io(format!("failed to read output: {e}")).with_context(context()))?;
            if existing == content {
                debug!(path = %path.display(), "unchanged");
                return Ok(false);
            }
        }
        if self.check_only {
            info!(path = %path.display(), "would change");
            return Ok(true);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                Error::io(format!("failed to create output directory: {e}")).with_context(context())
            })?;
        }
        fs::write(path, content)
            .map_err(|e| Error::io(format!("failed to write output: {e}")).with_context(context()))?;
        info!(path = %path.display(), "saved");
        Ok(true)
    }
}

/// Renders the resource name enum.
#[must_use]
pub fn render_enum(file: &TableFile) -> String {
    let items: Vec<_> = file
        .table
        .iter()
        .map(|(key, value)| format!("  {key} = '{value}'"))
        .collect();
    format!("export enum {} {{\n{}\n}}\n", file.export, items.join(",\n"))
}

/// Renders a map declaration after `header`.
#[must_use]
pub fn render_map(header: &str, export: &str, table: &LookupTable) -> String {
    let items: Vec<_> = table
        .iter()
        .map(|(key, value)| {
            let value = if value.is_empty() { "''" } else { value };
            format!("  {}: {value},", render_key(key))
        })
        .collect();
    format!("{header}export const {export}: PackageMap = {{\n{}\n}};", items.join("\n"))
}

/// Quotes keys that are not plain ASCII identifiers.
///
/// Inside quotes, `'` and `\` are backslash-escaped.
#[must_use]
pub fn render_key(key: &str) -> String {
    let mut chars = key.chars();
    let identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if identifier {
        return key.to_string();
    }
    let mut quoted = String::with_capacity(key.len() + 2);
    quoted.push('\'');
    for c in key.chars() {
        if c == '\'' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

fn render_resource(resource: &Resource) -> String {
    let tags: Vec<_> = resource.tags.iter().map(|t| format!("'{t}'")).collect();
    format!(
        "  {{\n    id: {},\n    type: '{}',\n    tags: [{}],\n    path: '{}',\n  }},",
        resource.id,
        resource.kind,
        tags.join(", "),
        resource.path
    )
}

fn source_list(sources: &[PathBuf]) -> String {
    let lines: Vec<_> = sources
        .iter()
        .map(|path| format!("    '{}',", asset_path(&unix_path(path))))
        .collect();
    format!("[\n{}\n  ]", lines.join("\n"))
}

/// `import { X } from './<file name without last extension>';`
fn module_import(export: &str, path: &Path) -> String {
    let module = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    format!("import {{ {export} }} from './{module}';")
}
