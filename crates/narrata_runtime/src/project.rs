//! Project pipeline.
//!
//! For every package: read the previous run's tables, catalog the assets,
//! parse the scripts, merge the cross-references into the tables, and write
//! the outputs. Packages are independent; a fatal error in one aborts the
//! whole run so tables never drift out of sync with their sources.

use std::fs;
use std::mem;
use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use narrata_engine::{CrossReference, IdGenerator, MergeReport, PackTables, ResourceCatalog};
use narrata_foundation::{Error, ErrorContext, ErrorKind, Result};
use narrata_parser::{Aggregate, Aggregator, SourceDocument};

use crate::config::ProjectOptions;
use crate::discover::{SourcePack, discover};
use crate::output::{OutputPack, OutputWriter, ResourceFile};
use crate::reader::{TableKind, TableReader, list_export_name};

/// Result of processing one package.
#[derive(Clone, Debug)]
pub struct PackageOutcome {
    /// Package name.
    pub name: String,
    /// Records parsed from the package's scripts.
    pub aggregate: Aggregate,
    /// What the merge added and which keys went stale.
    pub report: MergeReport,
    /// Output files that changed (or would change in check mode).
    pub changed: Vec<PathBuf>,
}

#[derive(Serialize)]
struct PackageRecords<'a> {
    package: &'a str,
    #[serde(flatten)]
    records: &'a Aggregate,
}

impl PackageOutcome {
    /// Parsed records as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails.
    pub fn records_json(&self) -> Result<String> {
        let records = PackageRecords {
            package: &self.name,
            records: &self.aggregate,
        };
        serde_json::to_string_pretty(&records)
            .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
    }
}

/// A package parsed and merged, not yet written.
struct MergedPackage {
    out: OutputPack,
    aggregate: Aggregate,
    report: MergeReport,
}

/// Runs the pipeline over a project.
pub struct Project {
    options: ProjectOptions,
    aggregator: Aggregator,
    reader: TableReader,
    writer: OutputWriter,
}

impl Project {
    /// Prepares a project run.
    ///
    /// # Errors
    ///
    /// Returns an invalid descriptor error if a built-in pattern is malformed.
    pub fn new(options: ProjectOptions) -> Result<Self> {
        let writer =
            OutputWriter::new(options.engine_import.clone()).with_check_only(options.check_only);
        Ok(Self {
            aggregator: Aggregator::new()?,
            reader: TableReader::new()?,
            writer,
            options,
        })
    }

    /// The options this project runs with.
    #[must_use]
    pub fn options(&self) -> &ProjectOptions {
        &self.options
    }

    /// Processes every package, in name order.
    ///
    /// Every package is parsed and merged before the first file is written,
    /// so a fatal error in any package leaves all outputs untouched.
    ///
    /// # Errors
    ///
    /// Returns the first error of any package.
    pub fn run(&self, ids: &mut impl IdGenerator) -> Result<Vec<PackageOutcome>> {
        let packs = discover(&self.options)?;
        info!(packages = packs.len(), "found packages");

        let prepared = packs
            .iter()
            .map(|pack| self.prepare(pack, ids))
            .collect::<Result<Vec<_>>>()?;
        prepared.into_iter().map(|merged| self.save(merged)).collect()
    }

    /// Processes one package.
    ///
    /// # Errors
    ///
    /// Returns an unknown dialect error for a script with an unrecognized
    /// extension, or an I/O error if a file cannot be read or written.
    pub fn process(&self, pack: &SourcePack, ids: &mut impl IdGenerator) -> Result<PackageOutcome> {
        let merged = self.prepare(pack, ids)?;
        self.save(merged)
    }

    fn prepare(&self, pack: &SourcePack, ids: &mut impl IdGenerator) -> Result<MergedPackage> {
        info!(package = %pack.name, "processing package");
        let mut out = self.read_output(pack)?;

        out.resources.items = ResourceCatalog::build(
            &pack.resources,
            &out.res_names.export,
            &mut out.res_names.table,
            ids,
        );

        let documents = load_documents(pack)?;
        let aggregate = self.aggregator.aggregate(&documents);

        let tables = PackTables {
            characters: mem::take(&mut out.char_map.table),
            resources: mem::take(&mut out.res_map.table),
        };
        let (tables, report) = CrossReference::merge(&aggregate, tables);
        out.char_map.table = tables.characters;
        out.res_map.table = tables.resources;

        Ok(MergedPackage {
            out,
            aggregate,
            report,
        })
    }

    fn save(&self, merged: MergedPackage) -> Result<PackageOutcome> {
        let MergedPackage {
            out,
            aggregate,
            report,
        } = merged;
        let changed = self.writer.save(&out)?;
        info!(package = %out.name, changed = changed.len(), "updated package");

        Ok(PackageOutcome {
            name: out.name,
            aggregate,
            report,
            changed,
        })
    }

    fn read_output(&self, pack: &SourcePack) -> Result<OutputPack> {
        Ok(OutputPack {
            name: pack.name.clone(),
            package: pack.package.clone(),
            sources: pack.sources.clone(),
            resources: ResourceFile {
                path: pack.res_list.clone(),
                export: list_export_name(&pack.name),
                items: Vec::new(),
            },
            res_names: self.reader.read(&pack.res_names, &pack.name, TableKind::Enum)?,
            res_map: self.reader.read(&pack.res_map, &pack.name, TableKind::Map)?,
            char_map: self.reader.read(&pack.char_map, &pack.name, TableKind::Map)?,
        })
    }
}

fn load_documents(pack: &SourcePack) -> Result<Vec<SourceDocument>> {
    pack.sources
        .iter()
        .map(|path| {
            let context = || {
                ErrorContext::new()
                    .with_package(&pack.name)
                    .with_source(path.display().to_string())
            };
            let text = fs::read_to_string(path)
                .map_err(|e| Error::io(format!("failed to read source: {e}")).with_context(context()))?;
            SourceDocument::new(path, text).map_err(|e| e.with_context(context()))
        })
        .collect()
}
