#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use task_cli::libs::error::StoreError;
    use task_cli::libs::storage::{self, JsonFileStore, TaskStore};
    use task_cli::libs::task::{Status, Task, Timestamp};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StorageTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("tasks.json");
            StorageTestContext { _temp_dir: temp_dir, path }
        }
    }

    fn at(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task {
                id: 1,
                description: "Test the save function".to_string(),
                status: Status::InProgress,
                created_at: at("2025-12-12T13:13:59Z"),
                updated_at: Some(at("2025-12-13T08:00:00Z")),
            },
            Task {
                id: 4,
                description: "Second, with \"quotes\" and ünïcode".to_string(),
                status: Status::Todo,
                created_at: at("2025-12-14T10:30:00.250Z"),
                updated_at: None,
            },
        ]
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_load_missing_file_is_not_found(ctx: &mut StorageTestContext) {
        let err = storage::load(&ctx.path).unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, StoreError::NotFound(path) if path == ctx.path));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_then_load_round_trips(ctx: &mut StorageTestContext) {
        let tasks = sample_tasks();
        storage::save(&ctx.path, &tasks).unwrap();
        assert_eq!(storage::load(&ctx.path).unwrap(), tasks);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_empty_collection_is_empty_array(ctx: &mut StorageTestContext) {
        storage::save(&ctx.path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&ctx.path).unwrap(), "[]");
        assert!(storage::load(&ctx.path).unwrap().is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_load_reads_documented_format(ctx: &mut StorageTestContext) {
        let content = r#"[
            {"id": 1, "description": "Test the load function", "status": 1, "createdAt": "2025-12-12T13:13:59Z", "updatedAt": "2025-12-12T13:13:59Z"},
            {"id": 2, "description": "No update yet", "status": 2, "createdAt": "2025-12-12T15:13:59+02:00"}
        ]"#;
        fs::write(&ctx.path, content).unwrap();

        let tasks = storage::load(&ctx.path).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].status, Status::InProgress);
        assert_eq!(tasks[0].updated_at, Some(at("2025-12-12T13:13:59Z")));
        assert_eq!(tasks[1].status, Status::Done);
        assert_eq!(tasks[1].created_at, at("2025-12-12T13:13:59Z"));
        assert_eq!(tasks[1].updated_at, None);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_malformed_file_is_serialization_error(ctx: &mut StorageTestContext) {
        fs::write(&ctx.path, "{not json").unwrap();
        assert!(matches!(storage::load(&ctx.path), Err(StoreError::Serialization { .. })));

        fs::write(&ctx.path, r#"[{"id": 1, "description": "x", "status": 7, "createdAt": "2025-12-12T13:13:59Z"}]"#).unwrap();
        assert!(matches!(storage::load(&ctx.path), Err(StoreError::Serialization { .. })));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_directory_path_is_io_error(ctx: &mut StorageTestContext) {
        fs::create_dir(&ctx.path).unwrap();
        assert!(matches!(storage::load(&ctx.path), Err(StoreError::Io { .. })));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_overwrites_and_leaves_no_temp_file(ctx: &mut StorageTestContext) {
        storage::save(&ctx.path, &sample_tasks()).unwrap();
        storage::save(&ctx.path, &sample_tasks()[..1]).unwrap();

        assert_eq!(storage::load(&ctx.path).unwrap().len(), 1);
        let entries: Vec<_> = fs::read_dir(ctx.path.parent().unwrap()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_creates_parent_directories(ctx: &mut StorageTestContext) {
        let nested = ctx.path.parent().unwrap().join("a").join("b").join("tasks.json");
        storage::save(&nested, &sample_tasks()).unwrap();
        assert_eq!(storage::load(&nested).unwrap(), sample_tasks());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_delete_file_is_silent_when_absent(ctx: &mut StorageTestContext) {
        storage::delete_file(&ctx.path).unwrap();

        storage::save(&ctx.path, &sample_tasks()).unwrap();
        storage::delete_file(&ctx.path).unwrap();
        assert!(!ctx.path.exists());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_delete_file_reports_other_failures(ctx: &mut StorageTestContext) {
        fs::create_dir(&ctx.path).unwrap();
        fs::write(ctx.path.join("inside.json"), "[]").unwrap();

        let err = storage::delete_file(&ctx.path).unwrap_err();
        assert!(matches!(err, StoreError::Io { ref path, .. } if *path == ctx.path));
        assert!(!err.is_not_found());
        assert!(ctx.path.exists());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_ignores_leftover_temp_names(ctx: &mut StorageTestContext) {
        let stale = ctx.path.with_file_name("tasks.json.tmp");
        fs::create_dir(&stale).unwrap();

        storage::save(&ctx.path, &sample_tasks()).unwrap();
        assert_eq!(storage::load(&ctx.path).unwrap(), sample_tasks());
        assert!(stale.is_dir());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_json_file_store_uses_its_path(ctx: &mut StorageTestContext) {
        let store = JsonFileStore::new(&ctx.path);
        assert_eq!(store.path(), ctx.path.as_path());
        assert!(store.load().unwrap_err().is_not_found());

        store.save(&sample_tasks()).unwrap();
        assert_eq!(store.load().unwrap(), sample_tasks());
    }
}
