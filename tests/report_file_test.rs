// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/report_file_test.rs
// Version: 1.0.0
//
// This file contains tests for job file loading and scan report persistence.
// Tests cover round trips, missing files, bad paths and malformed JSON.

#[cfg(test)]
mod tests {
    use foggrid::core::types::{ScanOutcome, ScanRequest};
    use foggrid::core::workload::Workload;
    use foggrid::report::{REPORT_FILE_NAME, ReportFileError, ReportFileManager, ScanReport, load_request};
    use foggrid::scanner::RaceScanner;
    use std::time::Duration;
    use tempfile::{TempDir, tempdir};
    use tokio::fs;

    fn create_temp_dir() -> TempDir {
        tempdir().expect("Failed to create temporary directory")
    }

    fn create_sample_report() -> ScanReport {
        ScanReport::serial(
            ScanRequest::new(0, 10_000, 4242),
            ScanOutcome::Found(4242),
            4243,
            Duration::from_millis(1_250),
        )
    }

    #[tokio::test]
    async fn test_save_and_load_report() {
        let temp_dir = create_temp_dir();
        let manager = ReportFileManager::new(temp_dir.path().to_path_buf())
            .await
            .expect("Failed to create manager");

        let report = create_sample_report();
        manager.save(&report).await.expect("Failed to save report");

        assert!(manager.file_path().exists());
        assert_eq!(manager.file_path(), &temp_dir.path().join(REPORT_FILE_NAME));
        assert!(
            !manager.file_path().with_extension("tmp").exists(),
            "Temporary file should be renamed away"
        );

        let loaded = manager.load().await.expect("Failed to load report");
        assert_eq!(loaded, report);
        assert_eq!(loaded.result, 4242);
        assert_eq!(loaded.elapsed_ms, 1_250);
        assert_eq!(loaded.workers, 1);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_report() {
        let temp_dir = create_temp_dir();
        let manager = ReportFileManager::new(temp_dir.path().to_path_buf())
            .await
            .expect("Failed to create manager");

        manager.save(&create_sample_report()).await.expect("First save failed");

        let miss = ScanReport::serial(
            ScanRequest::new(0, 10, 15),
            ScanOutcome::NotFound,
            10,
            Duration::from_millis(3),
        );
        manager.save(&miss).await.expect("Second save failed");

        let loaded = manager.load().await.expect("Failed to load report");
        assert_eq!(loaded.outcome, ScanOutcome::NotFound);
        assert_eq!(loaded.result, -1);
    }

    #[tokio::test]
    async fn test_race_report_round_trip() {
        let temp_dir = create_temp_dir();
        let manager = ReportFileManager::new(temp_dir.path().to_path_buf())
            .await
            .expect("Failed to create manager");

        let request = ScanRequest::new(0, 1_000, 750).with_workload(Workload::Idle);
        let race = RaceScanner::new(4, Workload::Idle)
            .run(&request)
            .expect("Race failed");
        let report = ScanReport::from_race(request, &race);
        manager.save(&report).await.expect("Failed to save report");

        let loaded = manager.load().await.expect("Failed to load report");
        assert_eq!(loaded.outcome, ScanOutcome::Found(750));
        assert_eq!(loaded.found_by, Some(3));
        assert_eq!(loaded.workers, 4);
        assert_eq!(loaded.request.workload, Workload::Idle);
    }

    #[tokio::test]
    async fn test_save_creates_missing_directory() {
        let temp_dir = create_temp_dir();
        let nested = temp_dir.path().join("reports").join("today");
        let manager = ReportFileManager::new(nested.clone())
            .await
            .expect("Missing directory should be accepted");

        manager.save(&create_sample_report()).await.expect("Failed to save report");
        assert!(nested.is_dir());
        assert!(manager.file_path().exists());
    }

    #[tokio::test]
    async fn test_load_missing_report() {
        let temp_dir = create_temp_dir();
        let manager = ReportFileManager::new(temp_dir.path().to_path_buf())
            .await
            .expect("Failed to create manager");

        match manager.load().await {
            Err(ReportFileError::FileNotFound { path }) => {
                assert_eq!(path, temp_dir.path().join(REPORT_FILE_NAME));
            }
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_manager_rejects_file_path() {
        let temp_dir = create_temp_dir();
        let file_path = temp_dir.path().join("not_a_dir.txt");
        fs::write(&file_path, "hello").await.expect("Failed to write file");

        let result = ReportFileManager::new(file_path).await;
        assert!(matches!(result, Err(ReportFileError::NotADirectory { .. })));
    }

    #[tokio::test]
    #[allow(clippy::permissions_set_readonly_false)]
    async fn test_manager_rejects_read_only_directory() {
        let temp_dir = create_temp_dir();
        let locked = temp_dir.path().join("locked");
        fs::create_dir(&locked).await.expect("Failed to create directory");

        let mut permissions = fs::metadata(&locked).await.expect("No metadata").permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&locked, permissions.clone())
            .await
            .expect("Failed to make directory read-only");

        let result = ReportFileManager::new(locked.clone()).await;

        permissions.set_readonly(false);
        fs::set_permissions(&locked, permissions)
            .await
            .expect("Failed to restore permissions");

        match result {
            Err(ReportFileError::ReadOnlyDirectory { path }) => assert_eq!(path, locked),
            other => panic!("Expected ReadOnlyDirectory, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_job_file() {
        let temp_dir = create_temp_dir();
        let job_path = temp_dir.path().join("job.json");
        fs::write(&job_path, r#"{"start": 0, "end": 10000, "target": 1234, "workload": "mix:500"}"#)
            .await
            .expect("Failed to write job file");

        let request = load_request(&job_path).await.expect("Failed to load job");
        assert_eq!(request.start, 0);
        assert_eq!(request.end, 10_000);
        assert_eq!(request.target, 1234);
        assert_eq!(request.workload, Workload::Mix { rounds: 500 });
    }

    #[tokio::test]
    async fn test_load_job_file_defaults_workload() {
        let temp_dir = create_temp_dir();
        let job_path = temp_dir.path().join("job.json");
        fs::write(&job_path, r#"{"start": -5, "end": 5, "target": -1}"#)
            .await
            .expect("Failed to write job file");

        let request = load_request(&job_path).await.expect("Failed to load job");
        assert_eq!(request.workload, Workload::Trig);
        assert!(request.target_is_sentinel());
    }

    #[tokio::test]
    async fn test_load_job_file_errors() {
        let temp_dir = create_temp_dir();

        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(
            load_request(&missing).await,
            Err(ReportFileError::FileNotFound { .. })
        ));

        let malformed = temp_dir.path().join("bad.json");
        fs::write(&malformed, r#"{"start": 0, "end": "ten"}"#)
            .await
            .expect("Failed to write job file");
        match load_request(&malformed).await {
            Err(ReportFileError::DeserializationError { path, message }) => {
                assert_eq!(path, malformed);
                assert!(!message.is_empty());
            }
            other => panic!("Expected DeserializationError, got {:?}", other),
        }
    }
}
