// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/report/mod.rs
// Version: 1.0.0
//
// JSON job files in, JSON scan reports out.

pub mod file;

pub use file::{REPORT_FILE_NAME, ReportFileError, ReportFileManager, ScanReport, load_request};
