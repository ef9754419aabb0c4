use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::cli::ScanArgs;
use crate::formats::CatalogEntry;
use crate::{pdf, rating, signature, title};

pub fn run(args: ScanArgs) -> anyhow::Result<()> {
    let books_dir = PathBuf::from(&args.books_dir);
    let out_path = PathBuf::from(&args.out);

    let catalog = build_catalog(&books_dir)?;
    write_catalog(&catalog, &out_path)?;

    tracing::info!(
        entries = catalog.len(),
        out = %out_path.display(),
        "catalog written"
    );

    Ok(())
}

/// Enumerates the PDF files directly under `books_dir` (no recursion) and
/// folds them into an ordered catalog. A per-file extraction failure yields
/// a degraded entry; only the directory read itself is fatal.
pub fn build_catalog(books_dir: &Path) -> anyhow::Result<Vec<CatalogEntry>> {
    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(books_dir)
        .with_context(|| format!("read books dir: {}", books_dir.display()))?
    {
        let entry = entry
            .with_context(|| format!("read books dir entry: {}", books_dir.display()))?;
        let path = entry.path();
        if !path.is_file() || !has_pdf_extension(&path) {
            continue;
        }
        candidates.push(path);
    }

    // Raw enumeration order is filesystem-dependent; sort so repeated runs
    // over an unchanged directory produce byte-identical output.
    candidates.sort();

    Ok(candidates.iter().map(|path| build_entry(path)).collect())
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn build_entry(path: &Path) -> CatalogEntry {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    let title = title::format_title(stem);
    let data = pdf::extract(path);

    CatalogEntry {
        rating: rating::rating(&title),
        signature: signature::signature(&title),
        title,
        author: data.author,
        num_pages: data.num_pages,
        creation_date: data.creation_date,
        read_time: data.read_time,
        difficulty: data.difficulty,
    }
}

fn write_catalog(catalog: &[CatalogEntry], out_path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(catalog).context("serialize catalog")?;

    // Write to a sibling temp file and rename into place so a failed run
    // never leaves a half-written catalog behind.
    let dir = match out_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("create catalog temp file in: {}", dir.display()))?;
    tmp.write_all(json.as_bytes())
        .context("write catalog temp file")?;
    tmp.write_all(b"\n").context("write catalog temp file")?;
    tmp.persist(out_path)
        .with_context(|| format!("persist catalog: {}", out_path.display()))?;

    Ok(())
}
