//! tests/store_tests.rs
//! Pruebas unitarias para `ScheduledService`.

#[cfg(test)]
mod tests {
    use std::path::Path;

    use chrono::NaiveDate;
    use futures_util::future::join_all;

    use crate::errors::ScheduledError;
    use crate::models::message_model::ScheduledMessage;
    use crate::services::scheduled_service::ScheduledService;

    const SEED_IDS: [&str; 6] = [
        "40f5e0c9eb794761af5baa4f46c6529c",
        "0fa7ac18e39b474083c96ff806a9112e",
        "1fa7ac18e39b474083c96ff806a9112e",
        "2fa7ac18e39b474083c96ff806a9112e",
        "3fa7ac18e39b474083c96ff806a9112e",
        "4fa7ac18e39b474083c96ff806a9112e",
    ];

    fn message(id: &str, subject: &str) -> ScheduledMessage {
        let at = NaiveDate::from_ymd_opt(2019, 8, 14)
            .and_then(|d| d.and_hms_opt(13, 52, 57))
            .expect("valid date");
        ScheduledMessage {
            id: id.to_string(),
            created_at: at,
            send_at: at,
            from_email: "someone@somewhere.nz".to_string(),
            to: "bob@bob.com".to_string(),
            subject: subject.to_string(),
        }
    }

    #[actix_rt::test]
    async fn test_seed_in_order() {
        let service = ScheduledService::seeded().expect("seed");
        let ids: Vec<String> = service.list().await.into_iter().map(|m| m.id).collect();
        assert_eq!(ids, SEED_IDS);

        let first = &service.list().await[0];
        assert_eq!(first.subject, "Handy tips");
        assert_eq!(first.to, "real.person@somewhere.nz");
    }

    #[actix_rt::test]
    async fn test_cancel_removes_record() {
        let service = ScheduledService::seeded().expect("seed");

        let removed = service.cancel(SEED_IDS[2]).await.expect("cancel");
        assert_eq!(removed.id, SEED_IDS[2]);
        assert_eq!(removed.subject, "Spam! Spam!");

        let remaining = service.list().await;
        assert_eq!(remaining.len(), 5);
        assert!(remaining.iter().all(|m| m.id != SEED_IDS[2]));
    }

    #[actix_rt::test]
    async fn test_cancel_twice_is_not_found() {
        let service = ScheduledService::seeded().expect("seed");

        assert!(service.cancel(SEED_IDS[0]).await.is_ok());
        let second = service.cancel(SEED_IDS[0]).await;
        assert!(matches!(second, Err(ScheduledError::NotFound(id)) if id == SEED_IDS[0]));
    }

    #[actix_rt::test]
    async fn test_cancel_unknown_leaves_store_untouched() {
        let service = ScheduledService::seeded().expect("seed");
        let before = service.list().await;

        let res = service.cancel("does-not-exist").await;
        assert!(matches!(res, Err(ScheduledError::NotFound(_))));
        assert_eq!(service.list().await, before);
    }

    #[actix_rt::test]
    async fn test_empty_store() {
        let service = ScheduledService::from_seed(vec![]).expect("empty seed");
        assert!(service.is_empty().await);
        assert!(service.list().await.is_empty());
        assert!(service.cancel(SEED_IDS[0]).await.is_err());
    }

    #[actix_rt::test]
    async fn test_clones_share_state() {
        let service = ScheduledService::seeded().expect("seed");
        let other = service.clone();

        other.cancel(SEED_IDS[5]).await.expect("cancel");
        assert_eq!(service.len().await, 5);
    }

    #[actix_rt::test]
    async fn test_concurrent_cancel_single_winner() {
        let service = ScheduledService::seeded().expect("seed");

        let attempts = (0..8).map(|_| {
            let s = service.clone();
            async move { s.cancel(SEED_IDS[3]).await }
        });
        let results = join_all(attempts).await;

        let ok = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(ok, 1, "exactly one cancel must succeed");
        assert_eq!(service.len().await, 5);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let res = ScheduledService::from_seed(vec![message("a", "one"), message("a", "two")]);
        assert!(res.is_err());
    }

    #[test]
    fn test_missing_seed_file() {
        let res = ScheduledService::from_seed_file(Path::new("/nonexistent/seed.json"));
        assert!(res.is_err());
    }

    #[actix_rt::test]
    async fn test_seed_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("scheduled-seed-{}.json", std::process::id()));
        let seed = vec![message("x1", "first"), message("x2", "second")];
        std::fs::write(&path, serde_json::to_string(&seed).expect("json")).expect("write");

        let service = ScheduledService::from_seed_file(&path).expect("load");
        let _ = std::fs::remove_file(&path);

        assert_eq!(service.list().await, seed);
    }

    #[test]
    fn test_malformed_timestamp_rejected() {
        let raw = r#"[{
            "_id": "bad",
            "created_at": "2019-08-14T13:52:57Z",
            "send_at": "2019-08-29 13:52:54",
            "from_email": "a@b.c",
            "to": "d@e.f",
            "subject": "x"
        }]"#;
        assert!(serde_json::from_str::<Vec<ScheduledMessage>>(raw).is_err());
    }

    #[test]
    fn test_serializes_provider_shape() {
        let value = serde_json::to_value(message("abc", "Hi")).expect("json");
        assert_eq!(value["_id"], "abc");
        assert_eq!(value["created_at"], "2019-08-14 13:52:57");
        assert!(value.get("id").is_none());
    }
}
