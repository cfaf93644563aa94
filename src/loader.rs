//! # Configuration Loading
//!
//! This module coordinates a complete configuration-loading run:
//!
//! 1.  **Reading**: parse the configuration source (and every file it
//!     includes) and hand each declaration to its handler, which schedules
//!     deferred actions on a [`ConfigContext`].
//! 2.  **Conflict check**: reject any two declarations with the same
//!     discriminator, before anything is applied.
//! 3.  **Execution**: run the actions in declaration order against the
//!     [`ClusterRegistry`].
//!
//! A load is all-or-nothing from the caller's point of view: the first error
//! aborts it and is returned unchanged.
//!
//! ## Includes
//!
//! `include` paths are resolved relative to the directory of the including
//! file. A file already read during this run is skipped when included again;
//! a file that includes itself, directly or through other files, is an
//! [`Error::IncludeCycle`].

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::actions::{ConfigContext, Origin};
use crate::config::{self, Declaration, Format, Schema};
use crate::directives::{self, SelectorClusterHandler};
use crate::error::{Error, Result};
use crate::registry::ClusterRegistry;

/// Summary of a finished load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Declarations read, counting nested selectors individually
    pub declarations: usize,
    /// Actions executed
    pub actions: usize,
    /// Clusters that did not exist before this load
    pub clusters_created: usize,
    /// Selectors appended across all clusters
    pub entries_registered: usize,
}

/// Tracks the files read during one run.
#[derive(Debug, Default)]
struct IncludeState {
    stack: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

/// Load a configuration file into `registry`.
pub fn load_file<P: AsRef<Path>>(path: P, registry: &mut ClusterRegistry) -> Result<LoadReport> {
    let mut ctx = ConfigContext::new();
    let declarations = schedule_file(path, &mut ctx)?;
    execute(ctx, declarations, registry)
}

/// Load in-memory configuration content into `registry`.
///
/// Includes are resolved relative to the current directory.
pub fn load_str(
    content: &str,
    format: Format,
    registry: &mut ClusterRegistry,
) -> Result<LoadReport> {
    let mut ctx = ConfigContext::new();
    let declarations = schedule_str(content, format, &mut ctx)?;
    execute(ctx, declarations, registry)
}

/// Read a configuration file and schedule its actions without running them.
///
/// Returns the number of declarations read.
pub fn schedule_file<P: AsRef<Path>>(path: P, ctx: &mut ConfigContext) -> Result<usize> {
    let mut state = IncludeState::default();
    schedule_included(path.as_ref(), ctx, &mut state)
}

/// Schedule the actions of in-memory content without running them.
pub fn schedule_str(content: &str, format: Format, ctx: &mut ConfigContext) -> Result<usize> {
    let schema = config::parse_as(content, format)?;
    let mut state = IncludeState::default();
    schedule_schema(&schema, "<string>", Path::new("."), ctx, &mut state)
}

fn schedule_included(path: &Path, ctx: &mut ConfigContext, state: &mut IncludeState) -> Result<usize> {
    let canonical = path.canonicalize()?;

    if state.stack.contains(&canonical) {
        let mut chain: Vec<String> = state
            .stack
            .iter()
            .skip_while(|p| **p != canonical)
            .map(|p| p.display().to_string())
            .collect();
        chain.push(canonical.display().to_string());
        return Err(Error::IncludeCycle {
            cycle: chain.join(" -> "),
        });
    }
    if !state.seen.insert(canonical.clone()) {
        debug!("Skipping {}, already read", path.display());
        return Ok(0);
    }

    info!("Reading configuration from {}", path.display());
    let schema = config::from_file(&canonical)?;
    let base_dir = canonical
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    state.stack.push(canonical);
    let result = schedule_schema(
        &schema,
        &path.display().to_string(),
        &base_dir,
        ctx,
        state,
    );
    state.stack.pop();
    result
}

/// Dispatch every declaration of `schema` to its handler.
fn schedule_schema(
    schema: &Schema,
    source: &str,
    base_dir: &Path,
    ctx: &mut ConfigContext,
    state: &mut IncludeState,
) -> Result<usize> {
    let mut index = 0;
    let mut next_origin = || {
        index += 1;
        Origin::new(source, index)
    };
    let mut included = 0;

    for declaration in schema {
        match declaration {
            Declaration::SelectorString(flat) => {
                directives::selector_string(
                    ctx,
                    next_origin(),
                    flat.cluster.as_deref(),
                    &flat.value,
                    flat.label.as_deref(),
                )?;
            }
            Declaration::SelectorCluster(nested) => {
                let origin = next_origin();
                if nested.selectors.is_empty() {
                    warn!("selectorcluster {:?} at {} declares no selectors", nested.name, origin);
                }
                let handler = SelectorClusterHandler::open(ctx, origin, &nested.name);
                for selector in &nested.selectors {
                    handler.selector_string(
                        ctx,
                        next_origin(),
                        &selector.value,
                        selector.label.as_deref(),
                    );
                }
                handler.close();
            }
            Declaration::Include(file) => {
                next_origin();
                included += schedule_included(&base_dir.join(file), ctx, state)?;
            }
        }
    }

    Ok(index + included)
}

fn execute(
    ctx: ConfigContext,
    declarations: usize,
    registry: &mut ClusterRegistry,
) -> Result<LoadReport> {
    let clusters_before = registry.len();
    let entries_before: usize = registry.iter().map(|cluster| cluster.len()).sum();

    let actions = ctx.execute(registry)?;

    let report = LoadReport {
        declarations,
        actions,
        clusters_created: registry.len() - clusters_before,
        entries_registered: registry.iter().map(|cluster| cluster.len()).sum::<usize>()
            - entries_before,
    };
    info!(
        "Loaded {} declarations: {} clusters created, {} selectors registered",
        report.declarations, report.clusters_created, report.entries_registered
    );
    Ok(report)
}
