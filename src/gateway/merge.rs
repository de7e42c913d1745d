//! Merge readiness for a single pull request.

use crate::error::StashError;
use crate::locator::PullRequestId;
use crate::models::{ApiMergeStatus, MergeStatus};

use super::client::HttpGateway;

pub(super) async fn fetch_merge_status(
    gateway: &HttpGateway,
    pull_request: PullRequestId,
) -> Result<MergeStatus, StashError> {
    let url = format!("{}/merge", gateway.locator().pull_request_path(pull_request));
    let body = gateway.send(http::Method::GET, &url, None).await?;
    let status: ApiMergeStatus = serde_json::from_str(&body).map_err(|error| StashError::Decode {
        message: format!("merge status response did not match the expected schema: {error}"),
    })?;
    Ok(status.into())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    use super::fetch_merge_status;
    use crate::error::StashError;
    use crate::gateway::test_support::{LISTING_PATH, gateway_fixture};
    use crate::locator::PullRequestId;

    #[rstest]
    fn reports_vetoes_blocking_the_merge() {
        let (runtime, server, gateway) = gateway_fixture();

        runtime.block_on(
            Mock::given(method("GET"))
                .and(path(format!("{LISTING_PATH}3/merge")))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "canMerge": false,
                    "conflicted": true,
                    "vetoes": [
                        {
                            "summaryMessage": "Not enough approvals",
                            "detailedMessage": "Requires 2 approvals, has 0",
                        },
                    ],
                })))
                .mount(&server),
        );

        let status = runtime
            .block_on(fetch_merge_status(&gateway, PullRequestId::new(3)))
            .expect("merge status should decode");

        assert!(!status.can_merge);
        assert!(status.conflicted);
        let veto = status.vetoes.first().expect("one veto expected");
        assert_eq!(veto.summary.as_deref(), Some("Not enough approvals"));
        assert_eq!(veto.detail.as_deref(), Some("Requires 2 approvals, has 0"));
    }

    #[rstest]
    fn clean_merge_defaults_missing_vetoes() {
        let (runtime, server, gateway) = gateway_fixture();

        runtime.block_on(
            Mock::given(method("GET"))
                .and(path(format!("{LISTING_PATH}3/merge")))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(json!({"canMerge": true})),
                )
                .mount(&server),
        );

        let status = runtime
            .block_on(fetch_merge_status(&gateway, PullRequestId::new(3)))
            .expect("merge status should decode");

        assert!(status.can_merge);
        assert!(!status.conflicted);
        assert!(status.vetoes.is_empty());
    }

    #[rstest]
    fn unknown_pull_request_surfaces_the_api_error() {
        let (runtime, server, gateway) = gateway_fixture();

        runtime.block_on(
            Mock::given(method("GET"))
                .and(path(format!("{LISTING_PATH}99/merge")))
                .respond_with(ResponseTemplate::new(404).set_body_string("no such pull request"))
                .mount(&server),
        );

        let error = runtime
            .block_on(fetch_merge_status(&gateway, PullRequestId::new(99)))
            .expect_err("missing pull request should fail");
        match error {
            StashError::Api { status, .. } => assert_eq!(status, 404),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[rstest]
    fn malformed_merge_status_is_a_decode_error() {
        let (runtime, server, gateway) = gateway_fixture();

        runtime.block_on(
            Mock::given(method("GET"))
                .and(path(format!("{LISTING_PATH}3/merge")))
                .respond_with(ResponseTemplate::new(200).set_body_string("plain text"))
                .mount(&server),
        );

        let error = runtime
            .block_on(fetch_merge_status(&gateway, PullRequestId::new(3)))
            .expect_err("non-JSON response should fail");
        assert!(matches!(error, StashError::Decode { .. }));
    }
}
