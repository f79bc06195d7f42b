use crate::core::types::{ScanOutcome, ScanRequest};
use crate::scanner::race::RaceResult;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tokio::{
    fs::{self, OpenOptions},
    io::AsyncWriteExt,
};

static LOG_TARGET: &str = "foggrid::report::file";

pub const REPORT_FILE_NAME: &str = "scan_report.json";

#[derive(Error, Debug)]
pub enum ReportFileError {
    #[error("Path {path:?} is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("Directory {path:?} is read-only")]
    ReadOnlyDirectory { path: PathBuf },

    #[error("File does not exist at {path:?}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to serialize scan report")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Failed to deserialize {path:?}: {message}")]
    DeserializationError { path: PathBuf, message: String },

    #[error("IO operation failed on {path:?}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create temporary file for atomic write")]
    AtomicWriteError {
        #[source]
        source: std::io::Error,
    },
}

/// Summary of one scan run, written as pretty JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub request: ScanRequest,
    pub outcome: ScanOutcome,

    /// Outcome in the kernel's integer convention (-1 when not found)
    pub result: i32,

    pub elapsed_ms: u64,
    pub candidates_checked: u64,
    pub workers: usize,

    #[serde(default)]
    pub found_by: Option<usize>,
}

impl ScanReport {
    /// Report for a single-threaded kernel scan
    pub fn serial(request: ScanRequest, outcome: ScanOutcome, candidates_checked: u64, elapsed: Duration) -> Self {
        Self {
            request,
            outcome,
            result: outcome.to_sentinel(),
            elapsed_ms: elapsed.as_millis() as u64,
            candidates_checked,
            workers: 1,
            found_by: None,
        }
    }

    /// Report for a race across several workers
    pub fn from_race(request: ScanRequest, race: &RaceResult) -> Self {
        Self {
            request,
            outcome: race.outcome,
            result: race.outcome.to_sentinel(),
            elapsed_ms: race.elapsed.as_millis() as u64,
            candidates_checked: race.candidates_checked,
            workers: race.worker_count(),
            found_by: race.found_by,
        }
    }
}

/// Read a scan request from a JSON job file
pub async fn load_request(path: &Path) -> Result<ScanRequest, ReportFileError> {
    debug!(target: LOG_TARGET, "Loading job file from {:?}", path);

    if !path.exists() {
        return Err(ReportFileError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)
        .await
        .map_err(|e| ReportFileError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;

    let request: ScanRequest =
        serde_json::from_str(&contents).map_err(|e| ReportFileError::DeserializationError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    info!(target: LOG_TARGET,
        "Loaded job [{}, {}) target {} ({})",
        request.start, request.end, request.target, request.workload
    );
    Ok(request)
}

#[derive(Debug, Clone)]
pub struct ReportFileManager {
    directory_path: PathBuf,
    file_path: PathBuf,
}

impl ReportFileManager {
    pub async fn new(directory_path: PathBuf) -> Result<Self, ReportFileError> {
        if directory_path.exists() {
            if !directory_path.is_dir() {
                return Err(ReportFileError::NotADirectory {
                    path: directory_path,
                });
            }

            let metadata = fs::metadata(&directory_path)
                .await
                .map_err(|e| ReportFileError::IoError {
                    path: directory_path.clone(),
                    source: e,
                })?;
            if metadata.permissions().readonly() {
                return Err(ReportFileError::ReadOnlyDirectory {
                    path: directory_path,
                });
            }
        }

        let file_path = directory_path.join(REPORT_FILE_NAME);
        Ok(Self {
            directory_path,
            file_path,
        })
    }

    async fn ensure_directory_exists(&self) -> Result<(), ReportFileError> {
        if !self.directory_path.exists() {
            fs::create_dir_all(&self.directory_path)
                .await
                .map_err(|e| ReportFileError::IoError {
                    path: self.directory_path.clone(),
                    source: e,
                })?;
        }
        Ok(())
    }

    pub async fn save(&self, report: &ScanReport) -> Result<(), ReportFileError> {
        self.ensure_directory_exists().await?;

        debug!(target: LOG_TARGET, "Writing scan report to {:?}", self.file_path);

        let contents = serde_json::to_vec_pretty(report)?;
        let temp_path = self.file_path.with_extension("tmp");

        {
            let mut temp_file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .await
                .map_err(|e| ReportFileError::AtomicWriteError { source: e })?;

            temp_file
                .write_all(&contents)
                .await
                .map_err(|e| ReportFileError::AtomicWriteError { source: e })?;

            temp_file
                .flush()
                .await
                .map_err(|e| ReportFileError::AtomicWriteError { source: e })?;
        }

        fs::rename(&temp_path, &self.file_path)
            .await
            .map_err(|e| ReportFileError::AtomicWriteError { source: e })?;

        info!(target: LOG_TARGET, "Saved scan report to {:?}", self.file_path);
        Ok(())
    }

    pub async fn load(&self) -> Result<ScanReport, ReportFileError> {
        debug!(target: LOG_TARGET, "Loading scan report from {:?}", self.file_path);

        if !self.file_path.exists() {
            return Err(ReportFileError::FileNotFound {
                path: self.file_path.clone(),
            });
        }

        let contents = fs::read_to_string(&self.file_path)
            .await
            .map_err(|e| ReportFileError::IoError {
                path: self.file_path.clone(),
                source: e,
            })?;

        serde_json::from_str(&contents).map_err(|e| ReportFileError::DeserializationError {
            path: self.file_path.clone(),
            message: e.to_string(),
        })
    }

    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }
}
