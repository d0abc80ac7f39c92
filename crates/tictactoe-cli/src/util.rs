use std::{
    fmt,
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;

/// Destination for CSV game rows.
///
/// The underlying handle is opened when the store is constructed. A path of
/// `-` writes to stdout instead of a file.
#[derive(Debug)]
pub enum RecordStore {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
        was_empty: bool,
    },
}

impl RecordStore {
    /// Opens `path` for appending, creating it if absent.
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        if is_stdout_path(path) {
            return Ok(Self::stdout());
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open record file: {}", path.display()))?;
        let was_empty = file
            .metadata()
            .with_context(|| format!("Failed to read metadata of {}", path.display()))?
            .len()
            == 0;
        Ok(Self::File {
            writer: BufWriter::new(file),
            path: path.to_owned(),
            was_empty,
        })
    }

    /// Deletes `path` if it exists, then creates it empty.
    pub fn overwrite(path: &Path) -> anyhow::Result<Self> {
        if is_stdout_path(path) {
            return Ok(Self::stdout());
        }
        if path.exists() {
            fs::remove_file(path)
                .with_context(|| format!("Failed to delete record file: {}", path.display()))?;
        }
        Self::create(path)
    }

    pub fn stdout() -> Self {
        Self::Stdout {
            writer: io::stdout().lock(),
        }
    }

    /// Returns `true` if nothing had been written to the store before it was opened.
    pub fn was_empty(&self) -> bool {
        match self {
            Self::Stdout { .. } => true,
            Self::File { was_empty, .. } => *was_empty,
        }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout { .. })
    }

    pub fn display_path(&self) -> String {
        match self {
            Self::Stdout { .. } => "stdout".to_string(),
            Self::File { path, .. } => path.display().to_string(),
        }
    }

    /// Writes `line` followed by a newline.
    pub fn append_line(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self, "{line}")
            .with_context(|| format!("Failed to write record to {}", self.display_path()))
    }

    pub fn finish(mut self) -> anyhow::Result<()> {
        self.flush()
            .with_context(|| format!("Failed to flush records to {}", self.display_path()))
    }
}

impl io::Write for RecordStore {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout { writer } => writer.write(buf),
            Self::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout { writer } => writer.flush(),
            Self::File { writer, .. } => writer.flush(),
        }
    }
}

fn is_stdout_path(path: &Path) -> bool {
    path.as_os_str() == "-"
}

pub fn save_json<T>(value: &T, path: &Path) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
    writeln!(writer)
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to flush output to {}", path.display()))?;
    Ok(())
}

pub fn write_histogram<W, I, S>(out: &mut W, data: I) -> io::Result<()>
where
    W: io::Write,
    I: Iterator<Item = (S, usize)>,
    S: fmt::Display,
{
    let data = data.collect::<Vec<_>>();
    let max_count = data.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1);
    let max_bar_width = 50;
    for (label, count) in &data {
        let bar_width = (count * max_bar_width) / max_count;
        writeln!(out, "{:>15} | {:<8} {}", label, count, "#".repeat(bar_width))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("tictactoe-{}-{name}", process::id()))
    }

    #[test]
    fn test_overwrite_then_create_appends() {
        let path = temp_path("store.csv");

        let mut store = RecordStore::overwrite(&path).unwrap();
        assert!(store.was_empty());
        store.append_line("header").unwrap();
        store.append_line("1").unwrap();
        store.finish().unwrap();

        let mut store = RecordStore::create(&path).unwrap();
        assert!(!store.was_empty());
        store.append_line("2").unwrap();
        store.finish().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "header\n1\n2\n");

        let store = RecordStore::overwrite(&path).unwrap();
        assert!(store.was_empty());
        store.finish().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_dash_is_stdout() {
        let store = RecordStore::create(Path::new("-")).unwrap();
        assert!(store.is_stdout());
        assert_eq!(store.display_path(), "stdout");
    }

    #[test]
    fn test_histogram_bars_scale_to_max() {
        let mut out = Vec::new();
        write_histogram(&mut out, [("a", 50), ("b", 25), ("c", 0)].into_iter()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let bars: Vec<usize> = text
            .lines()
            .map(|l| l.chars().filter(|&c| c == '#').count())
            .collect();
        assert_eq!(bars, [50, 25, 0]);
    }
}
