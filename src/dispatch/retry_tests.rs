//! Tests for `RetryPolicy`.

use super::RetryPolicy;
use http::StatusCode;
use std::time::Duration;

fn ms(values: &[u64]) -> Vec<Duration> {
    values.iter().copied().map(Duration::from_millis).collect()
}

mod retry_policy_defaults {
    use super::*;

    #[test]
    fn server_error_ladder_is_fast() {
        let policy = RetryPolicy::default();
        assert_eq!(
            policy.ladder(StatusCode::INTERNAL_SERVER_ERROR),
            Some(ms(&[500, 1_000, 2_000]).as_slice())
        );
    }

    #[test]
    fn rate_limit_ladder_is_slow() {
        let policy = RetryPolicy::default();
        assert_eq!(
            policy.ladder(StatusCode::TOO_MANY_REQUESTS),
            Some(ms(&[10_000, 25_000, 55_000]).as_slice())
        );
    }

    #[test]
    fn only_two_statuses_are_retryable() {
        let statuses: Vec<u16> = RetryPolicy::default().iter().map(|(s, _)| s).collect();
        assert_eq!(statuses, vec![429, 500]);
    }

    #[test]
    fn default_trait_matches_new() {
        assert_eq!(RetryPolicy::new(), RetryPolicy::default());
    }
}

mod retry_policy_lookup {
    use super::*;

    #[test]
    fn delay_walks_the_ladder() {
        let policy = RetryPolicy::default();
        let status = StatusCode::TOO_MANY_REQUESTS;

        assert_eq!(policy.delay(status, 0), Some(Duration::from_secs(10)));
        assert_eq!(policy.delay(status, 1), Some(Duration::from_secs(25)));
        assert_eq!(policy.delay(status, 2), Some(Duration::from_secs(55)));
    }

    #[test]
    fn delay_is_none_once_exhausted() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay(StatusCode::INTERNAL_SERVER_ERROR, 3), None);
        assert_eq!(policy.delay(StatusCode::INTERNAL_SERVER_ERROR, 100), None);
    }

    #[test]
    fn unknown_status_has_no_ladder() {
        let policy = RetryPolicy::default();
        assert!(!policy.is_retryable(StatusCode::BAD_GATEWAY));
        assert_eq!(policy.ladder(StatusCode::BAD_GATEWAY), None);
        assert_eq!(policy.delay(StatusCode::BAD_GATEWAY, 0), None);
    }
}

mod retry_policy_builder {
    use super::*;

    #[test]
    fn empty_retries_nothing() {
        let policy = RetryPolicy::empty();
        assert!(!policy.is_retryable(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(policy.iter().count(), 0);
    }

    #[test]
    fn with_ladder_replaces_existing() {
        let policy = RetryPolicy::new()
            .with_ladder(StatusCode::INTERNAL_SERVER_ERROR, ms(&[1, 2]));

        assert_eq!(
            policy.ladder(StatusCode::INTERNAL_SERVER_ERROR),
            Some(ms(&[1, 2]).as_slice())
        );
        assert!(policy.is_retryable(StatusCode::TOO_MANY_REQUESTS));
    }

    #[test]
    fn empty_ladder_is_retryable_but_exhausted() {
        let policy = RetryPolicy::empty().with_ladder(StatusCode::TOO_MANY_REQUESTS, Vec::new());

        assert!(policy.is_retryable(StatusCode::TOO_MANY_REQUESTS));
        assert_eq!(policy.delay(StatusCode::TOO_MANY_REQUESTS, 0), None);
    }
}
