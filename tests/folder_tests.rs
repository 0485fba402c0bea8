//! Folder creation, recursive ensure and deletion.

mod common;

use common::{UTIL_PATH, connected_session, json_response, requests_for};
use filestation::{FileStationError, StatusCode};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer};

async fn mount_createdir(server: &MockServer, folder: &str, status: i64, times: u64) {
    Mock::given(method("GET"))
        .and(path(UTIL_PATH))
        .and(query_param("func", "createdir"))
        .and(query_param("dest_folder", folder))
        .respond_with(json_response(json!({ "status": status })))
        .expect(times)
        .mount(server)
        .await;
}

async fn mount_stat_exists(server: &MockServer, exists: bool, priority: Option<u8>) {
    let mock = Mock::given(method("GET"))
        .and(path(UTIL_PATH))
        .and(query_param("func", "stat"))
        .respond_with(json_response(json!({
            "datas": [{ "filename": "c", "isfolder": 1, "exist": i64::from(exists) }]
        })));

    match priority {
        Some(p) => mock.with_priority(p).up_to_n_times(1).mount(server).await,
        None => mock.mount(server).await,
    }
}

mod create_folder {
    use super::*;

    #[tokio::test]
    async fn test_created() {
        let server = MockServer::start().await;
        let session = connected_session(&server).await;

        Mock::given(method("GET"))
            .and(path(UTIL_PATH))
            .and(query_param("func", "createdir"))
            .and(query_param("dest_path", "/Public/docs"))
            .and(query_param("dest_folder", "new"))
            .respond_with(json_response(json!({ "status": 1 })))
            .expect(1)
            .mount(&server)
            .await;

        assert!(session.create_folder("/Public/docs/new").await.unwrap());
    }

    #[tokio::test]
    async fn test_already_exists() {
        for code in [2, 33] {
            let server = MockServer::start().await;
            let session = connected_session(&server).await;
            mount_createdir(&server, "new", code, 1).await;

            assert!(!session.create_folder("/Public/new").await.unwrap());
        }
    }

    #[tokio::test]
    async fn test_failures() {
        let cases = [
            (3, StatusCode::AuthFail),
            (4, StatusCode::PermissionDenied),
            (5, StatusCode::FileNotExist),
            (27, StatusCode::FolderEncryption),
            (99, StatusCode::Unknown),
        ];

        for (code, expected) in cases {
            let server = MockServer::start().await;
            let session = connected_session(&server).await;
            mount_createdir(&server, "new", code, 1).await;

            let err = session.create_folder("/Public/new").await.unwrap_err();
            assert_eq!(err.status_code(), Some(expected), "status {}", code);
        }
    }

    #[tokio::test]
    async fn test_share_root_rejected() {
        let server = MockServer::start().await;
        let session = connected_session(&server).await;

        let err = session.create_folder("/").await.unwrap_err();
        assert!(matches!(err, FileStationError::InvalidPath(_)));
        assert_eq!(requests_for(&server, "createdir").await, 0);
    }
}

mod ensure_folder {
    use super::*;

    #[tokio::test]
    async fn test_creates_missing_ancestors_once() {
        let server = MockServer::start().await;
        let session = connected_session(&server).await;

        // first stat: missing, afterwards: present
        mount_stat_exists(&server, false, Some(1)).await;
        mount_stat_exists(&server, true, None).await;

        mount_createdir(&server, "a", 33, 1).await;
        mount_createdir(&server, "b", 1, 1).await;
        mount_createdir(&server, "c", 1, 1).await;

        let created = session.ensure_folder("/Public/a/b/c").await.unwrap();
        assert_eq!(created, 2);

        let created = session.ensure_folder("/Public/a/b/c").await.unwrap();
        assert_eq!(created, 0);

        assert_eq!(requests_for(&server, "createdir").await, 3);
    }

    #[tokio::test]
    async fn test_never_creates_share_root() {
        let server = MockServer::start().await;
        let session = connected_session(&server).await;

        mount_stat_exists(&server, false, None).await;
        mount_createdir(&server, "Public", 1, 0).await;
        mount_createdir(&server, "a", 1, 1).await;

        assert_eq!(session.ensure_folder("/Public/a").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_relative_path_rejected() {
        let server = MockServer::start().await;
        let session = connected_session(&server).await;

        let err = session.ensure_folder("Public/a/b").await.unwrap_err();
        assert!(matches!(err, FileStationError::InvalidPath(_)));
        assert_eq!(requests_for(&server, "stat").await, 0);
    }

    #[tokio::test]
    async fn test_share_root_rejected() {
        let server = MockServer::start().await;
        let session = connected_session(&server).await;

        for bad in ["/Public", "/Public/", "/"] {
            let err = session.ensure_folder(bad).await.unwrap_err();
            assert!(matches!(err, FileStationError::InvalidPath(_)), "{}", bad);
        }
        assert_eq!(requests_for(&server, "stat").await, 0);
    }

    #[tokio::test]
    async fn test_stops_at_first_failure() {
        let server = MockServer::start().await;
        let session = connected_session(&server).await;

        mount_stat_exists(&server, false, None).await;
        mount_createdir(&server, "a", 1, 1).await;
        mount_createdir(&server, "b", 4, 1).await;
        mount_createdir(&server, "c", 1, 0).await;

        match session.ensure_folder("/Public/a/b/c").await.unwrap_err() {
            FileStationError::FolderCreation {
                path,
                created,
                source,
            } => {
                assert_eq!(path, "/Public/a/b");
                assert_eq!(created, 1);
                assert!(source.is_permission_denied());
            }
            e => panic!("Expected FolderCreation, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_stat_failure_propagates() {
        let server = MockServer::start().await;
        let session = connected_session(&server).await;

        Mock::given(method("GET"))
            .and(path(UTIL_PATH))
            .and(query_param("func", "stat"))
            .respond_with(json_response(json!({ "status": 3 })))
            .mount(&server)
            .await;

        let err = session.ensure_folder("/Public/a").await.unwrap_err();
        assert!(err.is_session_expired());
        assert_eq!(requests_for(&server, "createdir").await, 0);
    }
}

mod delete {
    use super::*;

    async fn mount_delete(server: &MockServer, force: &str, status: i64) {
        Mock::given(method("GET"))
            .and(path(UTIL_PATH))
            .and(query_param("func", "delete"))
            .and(query_param("path", "/Public/docs"))
            .and(query_param("file_name", "old.txt"))
            .and(query_param("file_total", "1"))
            .and(query_param("force", force))
            .respond_with(json_response(json!({ "status": status })))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_delete_uses_recycle_bin() {
        let server = MockServer::start().await;
        let session = connected_session(&server).await;
        mount_delete(&server, "0", 1).await;

        assert!(session.delete_file("/Public/docs/old.txt").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_no_recycle_bin_forces() {
        let server = MockServer::start().await;
        let session = connected_session(&server).await;
        mount_delete(&server, "1", 1).await;

        assert!(
            session
                .delete_file_no_recycle_bin("/Public/docs/old.txt")
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_delete_missing_file() {
        for code in [0, 5] {
            let server = MockServer::start().await;
            let session = connected_session(&server).await;
            mount_delete(&server, "0", code).await;

            let deleted = session.delete_file("/Public/docs/old.txt").await.unwrap();
            assert!(!deleted, "status {}", code);
        }
    }

    #[tokio::test]
    async fn test_delete_missing_file_no_recycle_bin() {
        let server = MockServer::start().await;
        let session = connected_session(&server).await;
        mount_delete(&server, "1", 5).await;

        assert!(
            !session
                .delete_file_no_recycle_bin("/Public/docs/old.txt")
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_delete_errors() {
        let cases = [
            (3, StatusCode::AuthFail),
            (4, StatusCode::PermissionDenied),
            (25, StatusCode::DesFileNotExist),
            (99, StatusCode::Unknown),
        ];

        for (code, expected) in cases {
            let server = MockServer::start().await;
            let session = connected_session(&server).await;
            mount_delete(&server, "0", code).await;

            let err = session.delete_file("/Public/docs/old.txt").await.unwrap_err();
            assert_eq!(err.status_code(), Some(expected), "status {}", code);
        }
    }
}
