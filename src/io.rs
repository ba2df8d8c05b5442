use anyhow::{Context, Result};
use chrono::Local;
use csv::ReaderBuilder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Lit le tableau brut tel quel : pas d'interprétation d'en-tête, lignes de
/// largeurs inégales acceptées (le padding est fait à l'ingestion).
pub fn read_table_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec.with_context(|| format!("parsing {}", path.display()))?;
        rows.push(rec.iter().map(str::to_owned).collect());
    }
    Ok(rows)
}

/// Écriture atomique : fichier temporaire puis rename.
pub fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let mut tmp = NamedTempFile::new_in(path.parent().unwrap_or_else(|| Path::new(".")))
        .with_context(|| "creating temp file")?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}

/// Sauvegarde avec repli : si l'écriture échoue (fichier verrouillé par un
/// tableur, lecteur réseau), on retente sous un nom horodaté à côté.
/// Retourne le chemin réellement écrit.
pub fn save_with_fallback<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
    }
    match write_atomic(path, bytes) {
        Ok(()) => Ok(path.to_path_buf()),
        Err(first_err) => {
            let ts = Local::now().format("%Y%m%d_%H%M%S");
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("roster");
            let ext = path
                .extension()
                .and_then(|s| s.to_str())
                .map(|e| format!(".{e}"))
                .unwrap_or_default();
            let alt = path.with_file_name(format!("{stem}_{ts}{ext}"));
            write_atomic(&alt, bytes)
                .with_context(|| format!("fallback save {} (after: {first_err})", alt.display()))?;
            Ok(alt)
        }
    }
}
