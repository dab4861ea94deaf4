//! End-to-end script scenarios: tokenize + execute, the way an embedding
//! application drives the crate.

use bscript::{bytes_to_int, tokenize, Engine, Recorder, ScriptError};

#[test]
fn p2pkh_shaped_script_validates() {
    // classic pay-to-pubkey-hash layout against the mock providers:
    // mock HASH160 of "pubKey" is the literal bytes "HASH160:pubKey"
    let script = "<sig> <pubKey> OP_DUP OP_HASH160 <HASH160:pubKey> OP_EQUALVERIFY OP_CHECKSIG";
    let tokens = tokenize(script).unwrap();
    let mut engine = Engine::with_mocks();
    engine.verifier_mut().register(b"sig", b"pubKey");
    let r = engine.execute(&tokens);
    assert!(r.success, "{}", r.message);
    assert_eq!(bytes_to_int(&r.final_stack[0]), 1);
}

#[test]
fn p2pkh_wrong_hash_fails_at_equalverify() {
    let script = "<sig> <pubKey> OP_DUP OP_HASH160 <HASH160:other> OP_EQUALVERIFY OP_CHECKSIG";
    let tokens = tokenize(script).unwrap();
    let mut engine = Engine::with_mocks();
    engine.verifier_mut().register(b"sig", b"pubKey");
    let r = engine.execute(&tokens);
    assert!(!r.success);
    assert!(r.message.contains("OP_EQUALVERIFY"), "{}", r.message);
}

#[test]
fn arithmetic_pipeline() {
    let tokens = tokenize("2 3 OP_ADD 10 OP_SWAP OP_SUB 5 OP_EQUAL").unwrap();
    // 2+3=5; swap under 10; 10-5=5; equals 5
    let r = Engine::with_mocks().execute(&tokens);
    assert!(r.success, "{}", r.message);
}

#[test]
fn guard_with_verify_then_payload() {
    let tokens = tokenize("4 4 OP_NUMEQUALVERIFY 1 OP_IF 6 OP_ENDIF").unwrap();
    let r = Engine::with_mocks().execute(&tokens);
    assert!(r.success, "{}", r.message);
    assert_eq!(bytes_to_int(&r.final_stack[0]), 6);
}

#[test]
fn tokenization_failure_precedes_execution() {
    let err = tokenize("1 NOT_A_TOKEN OP_ADD").unwrap_err();
    assert_eq!(err, ScriptError::UnrecognizedToken("NOT_A_TOKEN".into()));
}

#[test]
fn traced_run_matches_untraced_result() {
    let tokens = tokenize("0 OP_IF 5 OP_ELSE 6 OP_ENDIF").unwrap();
    let mut engine = Engine::with_mocks();
    let plain = engine.execute(&tokens);

    let mut rec = Recorder::new();
    let traced = engine.execute_with_trace(&tokens, &mut rec);

    assert_eq!(plain.success, traced.success);
    assert_eq!(plain.final_stack, traced.final_stack);
    assert_eq!(rec.step_count(), tokens.len());
    // the suppressed "5" still shows up in the trace
    assert!(rec.entries().iter().any(|l| l.contains("DATA[05]")));
}

#[test]
fn same_script_same_outcome_across_engines() {
    let tokens = tokenize("3 4 OP_ADD 7 OP_EQUAL").unwrap();
    let a = Engine::with_mocks().execute(&tokens);
    let b = Engine::with_mocks().execute(&tokens);
    assert_eq!(a.success, b.success);
    assert_eq!(a.final_stack, b.final_stack);
    assert_eq!(a.message, b.message);
}
