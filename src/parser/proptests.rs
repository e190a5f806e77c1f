//! Property-based tests for answer parsing
//!
//! - Answers without a directive pass through unchanged
//! - A well-formed directive is decoded and removed from the prose
//! - A malformed directive never leaks markup and never yields a call

use super::{parse_answer, ToolCall};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

// ============================================================================
// Strategies
// ============================================================================

/// Free text that cannot contain a marker (no `<` at all)
fn arb_prose() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.!?,:;\\n\\t>/{}\"]{0,60}"
}

fn arb_argument_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::from),
        Just(Value::Null),
        proptest::collection::vec(any::<i32>(), 0..4).prop_map(|v| json!(v)),
    ]
}

fn arb_arguments() -> impl Strategy<Value = Option<Map<String, Value>>> {
    proptest::option::of(
        proptest::collection::btree_map("[a-z_]{1,12}", arb_argument_value(), 0..5)
            .prop_map(|entries| entries.into_iter().collect::<Map<String, Value>>()),
    )
}

fn arb_tool_call() -> impl Strategy<Value = ToolCall> {
    ("[a-z_]{1,20}", arb_arguments()).prop_map(|(name, arguments)| ToolCall { name, arguments })
}

/// Whitespace the producer may put between the markers and the JSON body
fn arb_padding() -> impl Strategy<Value = String> {
    "[ \\n\\t]{0,3}"
}

fn arb_marker_case() -> impl Strategy<Value = (String, String)> {
    prop_oneof![
        Just(("<tool_call>".to_string(), "</tool_call>".to_string())),
        Just(("<TOOL_CALL>".to_string(), "</TOOL_CALL>".to_string())),
        Just(("<Tool_Call>".to_string(), "</tool_call>".to_string())),
    ]
}

/// Bodies that are never a valid tool call object
fn arb_malformed_body() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("{bad}".to_string()),
        Just("{\"name\":".to_string()),
        Just("[1, 2, 3]".to_string()),
        Just("\"just a string\"".to_string()),
        Just("{\"arguments\":{}}".to_string()),
        Just("{\"name\": 7}".to_string()),
        "[a-z ]{1,20}",
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_answer_without_directive_is_unchanged(answer in arb_prose()) {
        let parsed = parse_answer(&answer);
        prop_assert_eq!(parsed.cleaned, answer);
        prop_assert!(parsed.tool_call.is_none());
    }

    #[test]
    fn prop_directive_is_decoded_and_removed(
        pre in arb_prose(),
        post in arb_prose(),
        call in arb_tool_call(),
        (open, close) in arb_marker_case(),
        lead in arb_padding(),
        trail in arb_padding(),
    ) {
        let body = serde_json::to_string(&call).unwrap();
        let answer = format!("{pre}{open}{lead}{body}{trail}{close}{post}");

        let parsed = parse_answer(&answer);

        prop_assert_eq!(parsed.tool_call, Some(call));
        prop_assert_eq!(parsed.cleaned, format!("{pre}{post}").trim().to_string());
    }

    #[test]
    fn prop_malformed_directive_never_leaks(
        pre in arb_prose(),
        post in arb_prose(),
        body in arb_malformed_body(),
    ) {
        let answer = format!("{pre}<tool_call>{body}</tool_call>{post}");

        let parsed = parse_answer(&answer);

        prop_assert!(parsed.tool_call.is_none());
        prop_assert!(!parsed.cleaned.to_lowercase().contains("<tool_call>"));
        prop_assert_eq!(parsed.cleaned, format!("{pre}{post}").trim().to_string());
    }

    #[test]
    fn prop_second_directive_survives(
        first in arb_tool_call(),
        second in arb_tool_call(),
        middle in arb_prose(),
    ) {
        let second_block = format!(
            "<tool_call>{}</tool_call>",
            serde_json::to_string(&second).unwrap()
        );
        let answer = format!(
            "<tool_call>{}</tool_call>{middle}{second_block}",
            serde_json::to_string(&first).unwrap()
        );

        let parsed = parse_answer(&answer);

        prop_assert_eq!(parsed.tool_call, Some(first));
        prop_assert!(parsed.cleaned.ends_with(&second_block));
    }
}
