//! Pipeline の結合テスト（スタブの完了 API・検索 API を注入する）

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog};
use common::domain::ModelName;
use common::error::Error;
use common::llm::Role;
use common::ports::outbound::Log;
use common::search::{SearchError, SearchHit};

use crate::adapter::{RecordingProgress, SilentProgress, StubCompletion, StubSearch};
use crate::domain::{profile_for, Request, Variant};
use crate::ports::inbound::RunAgent;
use crate::usecase::{Pipeline, PipelineDeps, PipelineError};

struct Harness {
    completion: Arc<StubCompletion>,
    search: Arc<StubSearch>,
    pipeline: Pipeline,
}

fn harness(completion: StubCompletion, search: StubSearch) -> Harness {
    harness_with_log(completion, search, Arc::new(NoopLog))
}

fn harness_with_log(completion: StubCompletion, search: StubSearch, log: Arc<dyn Log>) -> Harness {
    let completion = Arc::new(completion);
    let search = Arc::new(search);
    let deps = PipelineDeps {
        completion: completion.clone(),
        search: search.clone(),
        progress: Arc::new(SilentProgress),
        log,
    };
    Harness {
        completion,
        search,
        pipeline: Pipeline::new(deps, ModelName::new("llama-3.3-70b-versatile")),
    }
}

fn request_for(variant: Variant) -> Request {
    let job = variant
        .takes_job_description()
        .then(|| "Backend engineer, Rust".to_string());
    Request::new(variant, "some input".to_string(), job).unwrap()
}

fn six_hits() -> Vec<SearchHit> {
    (1..=6)
        .map(|i| SearchHit::new(format!("Title {}", i), format!("Snippet {}", i)))
        .collect()
}

#[test]
fn test_every_text_variant_cleans_headers() {
    for variant in Variant::ALL {
        if variant == Variant::DataClean {
            continue;
        }
        let h = harness(StubCompletion::reply("### a ### b"), StubSearch::hits(six_hits()));
        let out = h.pipeline.run(&request_for(variant)).unwrap();
        assert_eq!(out, "### a \n\n### b", "variant {}", variant);
    }
}

#[test]
fn test_data_clean_is_not_cleaned() {
    let h = harness(StubCompletion::reply("a,b\n1,2"), StubSearch::hits(vec![]));
    let out = h
        .pipeline
        .run(&Request::new(Variant::DataClean, "a, b\n1 ,2".to_string(), None).unwrap())
        .unwrap();
    assert_eq!(out, "a,b\n1,2");
}

#[test]
fn test_data_clean_keeps_header_markers_and_trims() {
    let h = harness(StubCompletion::reply("\n x###y \n"), StubSearch::hits(vec![]));
    let out = h.pipeline.run(&request_for(Variant::DataClean)).unwrap();
    assert_eq!(out, "x###y");
}

#[test]
fn test_research_uses_first_four_hits() {
    let h = harness(StubCompletion::reply("report"), StubSearch::hits(six_hits()));
    let req = Request::new(Variant::Research, "AI chips".to_string(), None).unwrap();
    h.pipeline.run(&req).unwrap();

    assert_eq!(h.search.queries(), vec!["AI chips".to_string()]);
    let requests = h.completion.requests();
    assert_eq!(requests.len(), 1);
    let human = &requests[0].messages[1].content;
    assert!(human.contains("- Title 1: Snippet 1\n"));
    assert!(human.contains("- Title 4: Snippet 4\n"));
    assert!(!human.contains("Title 5"));
    assert!(!human.contains("Title 6"));
    assert!(human.starts_with("Topic: AI chips\n\nSearch Findings:\n"));
}

#[test]
fn test_research_with_no_hits_still_completes() {
    let h = harness(StubCompletion::reply("thin report"), StubSearch::hits(vec![]));
    let out = h.pipeline.run(&request_for(Variant::Research)).unwrap();
    assert_eq!(out, "thin report");
    let human = &h.completion.requests()[0].messages[1].content;
    assert!(human.contains("Search Findings:\n\n\n"));
}

#[test]
fn test_search_failure_skips_completion() {
    let h = harness(
        StubCompletion::reply("unused"),
        StubSearch::failing(SearchError::Request("connection refused".to_string())),
    );
    let err = h.pipeline.run(&request_for(Variant::Research)).unwrap_err();
    assert!(matches!(err, PipelineError::Search(_)));
    assert_eq!(err.to_string(), "Search Error: request failed: connection refused");
    assert_eq!(h.completion.call_count(), 0);
}

#[test]
fn test_search_status_error_is_reported() {
    let h = harness(
        StubCompletion::reply("unused"),
        StubSearch::failing(SearchError::Status {
            status: 403,
            body: "forbidden".to_string(),
        }),
    );
    let err = h.pipeline.run(&request_for(Variant::Research)).unwrap_err();
    assert_eq!(err.to_string(), "Search Error: HTTP 403: forbidden");
    assert_eq!(err.exit_code(), 74);
}

#[test]
fn test_completion_failure_for_every_variant() {
    for variant in Variant::ALL {
        let h = harness(
            StubCompletion::failing(Error::http("API error: invalid api key")),
            StubSearch::hits(six_hits()),
        );
        let err = h.pipeline.run(&request_for(variant)).unwrap_err();
        assert_eq!(
            err,
            PipelineError::Completion(Error::http("API error: invalid api key")),
            "variant {}",
            variant
        );
        assert_eq!(err.to_string(), "Error: API error: invalid api key");
    }
}

#[test]
fn test_only_research_searches() {
    for variant in Variant::ALL {
        let h = harness(StubCompletion::reply("ok"), StubSearch::hits(six_hits()));
        h.pipeline.run(&request_for(variant)).unwrap();
        let expected = if variant == Variant::Research { 1 } else { 0 };
        assert_eq!(h.search.queries().len(), expected, "variant {}", variant);
    }
}

#[test]
fn test_request_shape_matches_profile() {
    for variant in Variant::ALL {
        let profile = profile_for(variant);
        let h = harness(StubCompletion::reply("ok"), StubSearch::hits(vec![]));
        h.pipeline.run(&request_for(variant)).unwrap();
        let req = &h.completion.requests()[0];
        assert_eq!(req.model.as_ref(), "llama-3.3-70b-versatile");
        assert_eq!(req.temperature, profile.temperature);
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, Role::System);
        assert_eq!(req.messages[0].content, profile.system_prompt);
        assert_eq!(req.messages[1].role, Role::Human);
    }
}

#[test]
fn test_resume_pair_appears_verbatim() {
    let resume = "Jane Doe\n5 years Rust, {context} literal";
    let job = "Senior Rust Engineer\nMust know tokio";
    let h = harness(StubCompletion::reply("### 🎯 Match Analysis"), StubSearch::hits(vec![]));
    let req = Request::new(Variant::Resume, resume.to_string(), Some(job.to_string())).unwrap();
    h.pipeline.run(&req).unwrap();
    let human = &h.completion.requests()[0].messages[1].content;
    assert_eq!(
        human,
        &format!("Resume:\n{}\n\nJob Description:\n{}", resume, job)
    );
}

#[test]
fn test_progress_sequence_for_research() {
    let progress = Arc::new(RecordingProgress::default());
    let deps = PipelineDeps {
        completion: Arc::new(StubCompletion::reply("ok")),
        search: Arc::new(StubSearch::hits(six_hits())),
        progress: progress.clone(),
        log: Arc::new(NoopLog),
    };
    let pipeline = Pipeline::new(deps, ModelName::new("m"));
    let req = Request::new(Variant::Research, "EV batteries".to_string(), None).unwrap();
    pipeline.run(&req).unwrap();
    assert_eq!(
        progress.events(),
        vec![
            "begin:🕵️ Agent is working...",
            "step:🌐 Connecting to World Wide Web...",
            "step:🔍 Searching Google for: 'EV batteries'...",
            "step:✅ Found relevant data sources.",
            "step:🧠 Reading and analyzing content...",
            "step:✍️ Drafting final report...",
            "finish:Mission Complete",
        ]
    );
}

#[test]
fn test_progress_fails_on_search_error() {
    let progress = Arc::new(RecordingProgress::default());
    let deps = PipelineDeps {
        completion: Arc::new(StubCompletion::reply("ok")),
        search: Arc::new(StubSearch::failing(SearchError::Parse("bad json".to_string()))),
        progress: progress.clone(),
        log: Arc::new(NoopLog),
    };
    let pipeline = Pipeline::new(deps, ModelName::new("m"));
    assert!(pipeline.run(&request_for(Variant::Research)).is_err());
    assert_eq!(progress.events().last().map(String::as_str), Some("fail:Error in Search"));
}

#[test]
fn test_pipeline_writes_jsonl_without_secrets_or_payloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs/officeos.jsonl");
    let h = harness_with_log(
        StubCompletion::reply("### ok"),
        StubSearch::hits(six_hits()),
        Arc::new(FileJsonLog::new(&path)),
    );
    let req = Request::new(Variant::Research, "EV batteries".to_string(), None).unwrap();
    h.pipeline.run(&req).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert!(lines.iter().any(|v| v["message"] == "search finished" && v["fields"]["used"] == 4));
    let completion = lines
        .iter()
        .find(|v| v["message"] == "completion requested")
        .unwrap();
    assert_eq!(completion["fields"]["model"], "llama-3.3-70b-versatile");
    assert_eq!(completion["fields"]["variant"], "research");
    assert!(lines.iter().any(|v| v["fields"]["query"] == "EV batteries"));
    assert!(!content.contains("Snippet 1"));
    assert!(!content.contains("Please summarize"));
}
