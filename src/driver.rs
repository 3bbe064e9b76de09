//! One rendering run: load document -> build tree -> render -> write.

use crate::Result;
use crate::diagnostics;
use crate::error::ArgSpecError;
use crate::render::{StyledTextRenderer, SvgOptions, SvgRenderer};
use crate::spec;
use crate::tree::build_tree;

use anyhow::Context;
use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

pub const TITLE: &str = "Argument Spec";

/// Render `file_path` to `<output_dir>/<role>.svg` and return the written path.
pub fn run(file_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    run_with(file_path, output_dir, &SvgRenderer::new(SvgOptions::default()))
}

pub fn run_with(
    file_path: &Path,
    output_dir: &Path,
    renderer: &dyn StyledTextRenderer,
) -> Result<PathBuf> {
    let document = spec::load_document(file_path)?;
    let parameters = spec::extract_parameters(&document)
        .with_context(|| format!("in {}", file_path.display()))?;
    debug!(
        top_level = parameters.len(),
        total = parameters.count_all(),
        "loaded {}",
        file_path.display()
    );
    if parameters.is_empty() {
        diagnostics::warn(format!(
            "{} has no parameters under argument_specs.main.options",
            file_path.display()
        ));
    }

    let tree = build_tree(&parameters, 0);
    let name = output_name(file_path)?;
    let rendered = renderer.render(&tree, TITLE)?;

    let out = output_dir.join(format!("{name}.svg"));
    write_atomically(&out, &rendered)?;
    debug!(lines = tree.line_count(), "wrote {}", out.display());
    Ok(out)
}

/// Role name for `<role>/meta/argument_specs.yml`: the input's grandparent directory.
///
/// The path is used as given; if that has no usable grandparent (for example
/// `meta/argument_specs.yml` run from inside the role) the canonical path is tried.
pub fn output_name(file_path: &Path) -> std::result::Result<String, ArgSpecError> {
    if let Some(name) = grandparent_name(file_path) {
        return Ok(name);
    }
    fs::canonicalize(file_path)
        .ok()
        .and_then(|abs| grandparent_name(&abs))
        .ok_or_else(|| ArgSpecError::OutputName {
            path: file_path.to_path_buf(),
        })
}

fn grandparent_name(path: &Path) -> Option<String> {
    let grandparent = path.parent()?.parent()?;
    match grandparent.components().next_back()? {
        Component::Normal(name) => name_str(name),
        _ => None,
    }
}

fn name_str(name: &OsStr) -> Option<String> {
    let name = name.to_string_lossy();
    (!name.is_empty()).then(|| name.into_owned())
}

/// Write through a temporary sibling so the target is either complete or absent.
fn write_atomically(path: &Path, contents: &str) -> std::result::Result<(), ArgSpecError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = path.with_file_name(format!(".{file_name}.tmp"));

    let result = fs::write(&tmp, contents).and_then(|()| fs::rename(&tmp, path));
    if let Err(source) = result {
        let _ = fs::remove_file(&tmp);
        return Err(ArgSpecError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}
