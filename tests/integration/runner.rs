//! End-to-end probe runs over both transports
//!
//! Verifies that endpoints are probed independently: one failing endpoint
//! must not stop or taint the other.

use serde_json::json;

use inference_probe::{
    probe::targets_from_config, report::render_report, run_probes, ProbeErrorKind, ProbeResult,
};

use crate::common::{config, constants::*, endpoint};
use crate::mocks::{MockCompletionsApi, MockInferenceApi};

#[tokio::test]
async fn test_one_failure_does_not_block_the_other() {
    let hf = MockInferenceApi::start().await;
    hf.mock_chat_raw(HF_MODEL, 503, json!({"error": "Model is currently loading"}))
        .await;
    let together = MockCompletionsApi::start().await;
    together.mock_completion_success(" It is spooky action.").await;

    let cfg = config(
        endpoint(&hf.base_url(), HF_MODEL, Some(TEST_HF_TOKEN)),
        endpoint(&together.base_url(), TOGETHER_MODEL, Some(TEST_TOGETHER_KEY)),
    );
    let targets = targets_from_config(&cfg, reqwest::Client::new());

    for parallel in [false, true] {
        let outcomes = run_probes(&targets, parallel).await;
        assert_eq!(outcomes.len(), 2);

        match outcomes[0].result() {
            Some(ProbeResult::Failure { kind, .. }) => {
                assert_eq!(*kind, ProbeErrorKind::HttpStatus)
            }
            other => panic!("expected HF failure, got {:?}", other),
        }
        match outcomes[1].result() {
            Some(ProbeResult::Success { generated_text, .. }) => {
                assert_eq!(generated_text, " It is spooky action.")
            }
            other => panic!("expected Together success, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_skipped_endpoint_is_reported_and_not_called() {
    let hf = MockInferenceApi::start().await;
    hf.expect_no_calls().await;
    let together = MockCompletionsApi::start().await;
    together.mock_completion_success("fine").await;

    let cfg = config(
        endpoint(&hf.base_url(), HF_MODEL, None),
        endpoint(&together.base_url(), TOGETHER_MODEL, Some(TEST_TOGETHER_KEY)),
    );
    let targets = targets_from_config(&cfg, reqwest::Client::new());
    let outcomes = run_probes(&targets, false).await;

    assert!(outcomes[0].is_skipped());
    assert!(outcomes[1].result().map(ProbeResult::is_success).unwrap_or(false));

    let report = render_report(&outcomes);
    assert!(report.contains("credential (HF_TOKEN) not set"));
    assert!(report.contains(&format!("--- Together AI API ({}) ---", TOGETHER_MODEL)));
    assert!(report.contains("Response (first 100 chars): 'fine...'"));
}
