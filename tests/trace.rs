//! Recording, persisting and replaying rewrite traces.

use tempfile::tempdir;
use tgpc::{Normalizer, RewriteTrace, RuleCatalog, TraceabilityError};

fn record(delta: &str, theta: &str) -> RewriteTrace {
    let mut trace = RewriteTrace::new();
    Normalizer::new()
        .normalize_with(delta, theta, &mut trace)
        .expect("valid input");
    trace
}

#[test]
fn trace_survives_a_file_roundtrip() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("trace.cbor");

    let trace = record("21022101", "RR021210");
    trace.save_to_file(&path).expect("trace should save");
    let loaded = RewriteTrace::load_from_file(&path).expect("trace should load");

    assert_eq!(loaded, trace);
    let replayed = loaded.replay().expect("replay should succeed");
    assert_eq!(replayed.as_tuple(), ("21202210210", "20R02120120", false));
}

#[test]
fn trace_of_normalized_input_has_no_steps() {
    let trace = record("0011", "00RR");
    assert_eq!(trace.step_count(), 0);
    assert!(trace.substitution().is_identity());
    assert!(trace.replay().expect("replay should succeed").unchanged);
}

#[test]
fn trace_steps_chain_tapes() {
    let trace = record("22222", "11112");
    assert_eq!(trace.step_count(), 5);
    assert_eq!(
        trace.initial_tape().map(ToString::to_string).as_deref(),
        Some("0202020200")
    );
    let last = trace.steps().last().expect("at least one step");
    assert_eq!(last.tape_after.to_string(), "00120R120R120R120R20");
    assert_eq!(trace.catalog_fingerprint(), RuleCatalog::global().fingerprint());
}

#[test]
fn replay_uses_a_freshly_built_catalog() {
    let trace = record("0121202", "021R200");
    let fresh = RuleCatalog::build();
    let replayed = trace.replay_with(&fresh).expect("same rules, same fingerprint");
    assert_eq!(replayed.as_tuple(), ("012120210", "021R20120", false));
}

#[test]
fn missing_and_garbled_files_are_reported() {
    let dir = tempdir().expect("temporary directory");
    let missing = dir.path().join("absent.cbor");
    assert!(matches!(
        RewriteTrace::load_from_file(&missing),
        Err(TraceabilityError::Io(_))
    ));

    let garbled = dir.path().join("garbled.cbor");
    std::fs::write(&garbled, b"not cbor at all").expect("write garbage");
    assert!(matches!(
        RewriteTrace::load_from_file(&garbled),
        Err(TraceabilityError::Corruption(_))
    ));
}
