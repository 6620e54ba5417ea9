// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::csv::write_row;

/// Incremental row writer. The file is created (truncated) once with the
/// header row and held open behind a `BufWriter` until finished or dropped.
pub struct RowWriter {
    out: BufWriter<File>,
}

impl RowWriter {
    pub fn create<S: AsRef<str>>(
        path: &Path,
        header: &[S],
    ) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        let mut out = BufWriter::new(File::create(path)?);
        write_row(&mut out, header)?;
        Ok(Self { out })
    }

    pub fn write_row<S: AsRef<str>>(&mut self, row: &[S]) -> Result<(), Box<dyn std::error::Error>> {
        write_row(&mut self.out, row)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.out.flush()?;
        Ok(())
    }
}

/// Resolve the output path: a directory (existing or hinted by a trailing
/// separator) gets the default filename appended.
pub fn resolve_out_path(
    hint: &Path,
    default_filename: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if hint.as_os_str().is_empty() {
        return Ok(PathBuf::from(default_filename));
    }
    if looks_like_dir_hint(hint) || hint.is_dir() {
        ensure_directory(hint)?;
        Ok(hint.join(default_filename))
    } else {
        Ok(hint.to_path_buf())
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_hint_appends_default_filename() {
        let mut dir = std::env::temp_dir();
        dir.push("puca_ledger_out_test");
        let _ = fs::remove_dir_all(&dir);

        let hinted = format!("{}/", dir.display());
        let resolved = resolve_out_path(Path::new(&hinted), "ledger.csv").unwrap();
        assert!(resolved.ends_with("ledger.csv"));
        assert!(dir.is_dir());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn plain_file_path_is_kept() {
        let resolved = resolve_out_path(Path::new("some.csv"), "ledger.csv").unwrap();
        assert_eq!(resolved, PathBuf::from("some.csv"));
    }

    #[test]
    fn row_writer_emits_header_once() {
        let mut path = std::env::temp_dir();
        path.push("puca_ledger_writer_test.csv");

        let mut w = RowWriter::create(&path, &["A", "B"]).unwrap();
        w.write_row(&[s!("1"), s!("2")]).unwrap();
        w.write_row(&[s!("3"), s!("4")]).unwrap();
        w.finish().unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "A,B\n1,2\n3,4\n");
        let _ = fs::remove_file(&path);
    }
}
