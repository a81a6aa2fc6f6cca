//! Directory-backed local report store.
//!
//! Layout: one `{date}.html` file per report directly under the reports
//! directory, holding the raw HTML body. Files whose stem is not a date key
//! are ignored.

use async_trait::async_trait;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use crate::domain::errors::StoreResult;
use crate::domain::models::ReportDate;
use crate::domain::ports::LocalReportStore;

const REPORT_EXTENSION: &str = "html";

/// Local report store rooted at a directory that may not exist yet.
#[derive(Debug, Clone)]
pub struct FileReportStore {
    root: PathBuf,
}

impl FileReportStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, date: &ReportDate) -> PathBuf {
        self.root.join(date.file_name())
    }

    /// Sibling temp file; the leading dot and suffix keep it out of listings.
    fn partial_path_for(&self, date: &ReportDate) -> PathBuf {
        let mut name = OsString::from(".");
        name.push(date.file_name());
        name.push(format!(".{}.partial", Uuid::new_v4()));
        self.root.join(name)
    }
}

fn date_from_file_name(path: &Path) -> Option<ReportDate> {
    if path.extension()?.to_str()? != REPORT_EXTENSION {
        return None;
    }
    ReportDate::parse(path.file_stem()?.to_str()?).ok()
}

#[async_trait]
impl LocalReportStore for FileReportStore {
    async fn list_dates(&self) -> StoreResult<Vec<ReportDate>> {
        let mut dir = match fs::read_dir(&self.root).await {
            Ok(dir) => dir,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(root = %self.root.display(), "reports directory does not exist yet");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let mut dates = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            // `metadata` follows symlinks, unlike `DirEntry::file_type`.
            match fs::metadata(entry.path()).await {
                Ok(meta) if meta.is_file() => {}
                Ok(_) => continue,
                Err(err) => {
                    debug!(
                        path = %entry.path().display(),
                        error = %err,
                        "skipping unreadable entry"
                    );
                    continue;
                }
            }
            match date_from_file_name(&entry.path()) {
                Some(date) => dates.push(date),
                None => debug!(path = %entry.path().display(), "skipping non-report file"),
            }
        }
        Ok(dates)
    }

    async fn read(&self, date: &ReportDate) -> StoreResult<Option<Vec<u8>>> {
        match fs::read(self.path_for(date)).await {
            Ok(body) => Ok(Some(body)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn write(&self, date: &ReportDate, body: &[u8]) -> StoreResult<()> {
        fs::create_dir_all(&self.root).await?;

        let partial = self.partial_path_for(date);
        if let Err(err) = fs::write(&partial, body).await {
            let _ = fs::remove_file(&partial).await;
            return Err(err.into());
        }
        if let Err(err) = fs::rename(&partial, self.path_for(date)).await {
            let _ = fs::remove_file(&partial).await;
            return Err(err.into());
        }
        Ok(())
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(raw: &str) -> ReportDate {
        ReportDate::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn test_missing_directory_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileReportStore::new(temp.path().join("never-created"));

        assert!(store.list_dates().await.unwrap().is_empty());
        assert!(store.read(&date("2024-01-01")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_lists_only_report_files() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("2024-01-01.html"), "a").unwrap();
        std::fs::write(temp.path().join("2024-02-01.html"), "b").unwrap();
        std::fs::write(temp.path().join("notes.html"), "c").unwrap();
        std::fs::write(temp.path().join("2024-03-01.txt"), "d").unwrap();
        std::fs::write(temp.path().join(".2024-04-01.html.abc.partial"), "e").unwrap();
        std::fs::create_dir(temp.path().join("2024-05-01.html")).unwrap();

        let store = FileReportStore::new(temp.path());
        let mut dates = store.list_dates().await.unwrap();
        dates.sort();

        assert_eq!(dates, vec![date("2024-01-01"), date("2024-02-01")]);
    }

    #[tokio::test]
    async fn test_write_creates_directory_and_round_trips() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("nested").join("reports");
        let store = FileReportStore::new(&root);

        store.write(&date("2024-05-10"), b"<p>x</p>").await.unwrap();

        assert_eq!(
            std::fs::read_to_string(root.join("2024-05-10.html")).unwrap(),
            "<p>x</p>"
        );
        assert_eq!(
            store.read(&date("2024-05-10")).await.unwrap().as_deref(),
            Some(&b"<p>x</p>"[..])
        );
        assert_eq!(store.list_dates().await.unwrap(), vec![date("2024-05-10")]);
    }

    #[tokio::test]
    async fn test_write_overwrites_and_leaves_no_partials() {
        let temp = TempDir::new().unwrap();
        let store = FileReportStore::new(temp.path());

        store.write(&date("2024-05-10"), b"first").await.unwrap();
        store.write(&date("2024-05-10"), b"second").await.unwrap();

        let names: Vec<String> = std::fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["2024-05-10.html".to_string()]);
        assert_eq!(
            store.read(&date("2024-05-10")).await.unwrap().as_deref(),
            Some(&b"second"[..])
        );
    }

    #[tokio::test]
    async fn test_write_fails_when_root_is_a_file() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("occupied");
        std::fs::write(&root, "not a directory").unwrap();

        let store = FileReportStore::new(&root);
        assert!(store.write(&date("2024-05-10"), b"body").await.is_err());
    }

    #[tokio::test]
    async fn test_read_returns_bytes_verbatim() {
        let temp = TempDir::new().unwrap();
        let latin1 = b"<p>caf\xe9</p>";
        std::fs::write(temp.path().join("2024-01-01.html"), latin1).unwrap();

        let store = FileReportStore::new(temp.path());
        assert_eq!(
            store.read(&date("2024-01-01")).await.unwrap().as_deref(),
            Some(&latin1[..])
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_lists_symlinked_reports() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("archive.bin");
        std::fs::write(&target, "<p>linked</p>").unwrap();
        std::os::unix::fs::symlink(&target, temp.path().join("2024-06-01.html")).unwrap();
        std::os::unix::fs::symlink(temp.path(), temp.path().join("2024-07-01.html")).unwrap();

        let store = FileReportStore::new(temp.path());

        assert_eq!(store.list_dates().await.unwrap(), vec![date("2024-06-01")]);
        assert_eq!(
            store.read(&date("2024-06-01")).await.unwrap().as_deref(),
            Some(&b"<p>linked</p>"[..])
        );
    }

    #[test]
    fn test_location_is_root_path() {
        let store = FileReportStore::new("/srv/reports");
        assert_eq!(store.location(), "/srv/reports");
        assert_eq!(store.root(), Path::new("/srv/reports"));
    }
}
