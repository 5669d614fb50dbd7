/// Property-based tests for the JSON codec.
///
/// Uses `proptest` to generate random value trees and strings and checks:
/// - `decode(encode(s)) == s` for every string
/// - `parse(to_string(v)) == v` for every value tree
/// - agreement with serde_json in both directions
/// - parsing arbitrary text never panics and always classifies it the same way
///
/// Numbers for the serde_json checks are limited to integers and short
/// decimals, which serde_json's default float parser reads back exactly.
use json_core::escape::{decode, encode, quote};
use json_core::{parse, to_string, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        // Anything, including control characters and astral planes
        any::<String>(),
        // Heavy on characters that need escaping
        "[a-z\"\\\\/ \t\n]{0,12}",
        // Text that looks like escape sequences once backslashes are involved
        Just("\\u0041".to_string()),
        Just("\\".to_string()),
        Just("".to_string()),
    ]
}

fn simple_number() -> BoxedStrategy<f64> {
    prop_oneof![
        (-1_000_000i64..1_000_000i64).prop_map(|n| n as f64),
        (-100_000_000i64..100_000_000i64, 1u32..5u32)
            .prop_map(|(mantissa, decimals)| mantissa as f64 / 10f64.powi(decimals as i32)),
    ]
    .boxed()
}

fn any_finite_number() -> BoxedStrategy<f64> {
    prop_oneof![
        simple_number(),
        any::<f64>().prop_filter("JSON numbers are finite", |f| f.is_finite()),
    ]
    .boxed()
}

/// Generate a value tree up to four levels deep.
fn arb_value_with(numbers: BoxedStrategy<f64>) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        numbers.prop_map(Value::from),
        arb_text().prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::from),
            prop::collection::vec((arb_text(), inner), 0..8)
                .prop_map(|pairs| pairs.into_iter().collect::<Value>()),
        ]
    })
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_value_with(any_finite_number())
}

fn arb_simple_value() -> impl Strategy<Value = Value> {
    arb_value_with(simple_number())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Escaping then unescaping restores the original text.
    #[test]
    fn escape_roundtrip(text in arb_text()) {
        let encoded = encode(&text);
        prop_assert_eq!(decode(&encoded), text.as_str());
    }

    /// A quoted string parses back to itself.
    #[test]
    fn quoted_string_parses_back(text in arb_text()) {
        let value = parse(&quote(&text)).unwrap();
        prop_assert_eq!(value.string().unwrap(), text.as_str());
    }

    /// Serializing and re-parsing gives an equal tree.
    #[test]
    fn roundtrip_preserves_value(value in arb_value()) {
        let rendered = to_string(&value);
        let back = parse(&rendered);
        prop_assert!(back.is_ok(), "re-parse failed for {}: {:?}", rendered, back);
        prop_assert_eq!(back.unwrap(), value);
    }

    /// Rendering is a pure function of the tree.
    #[test]
    fn serialization_is_stable(value in arb_value()) {
        let once = to_string(&value);
        let twice = to_string(&parse(&once).unwrap());
        prop_assert_eq!(once, twice);
    }

    /// serde_json reads our output as the same tree.
    #[test]
    fn serde_json_reads_our_output(value in arb_simple_value()) {
        let theirs: serde_json::Value = serde_json::from_str(&to_string(&value)).unwrap();
        prop_assert_eq!(Value::from(theirs), value);
    }

    /// We read serde_json's output as the same tree.
    #[test]
    fn we_read_serde_json_output(value in arb_simple_value()) {
        let text = serde_json::to_string(&value).unwrap();
        prop_assert_eq!(parse(&text).unwrap(), value);
    }

    /// Arbitrary input never panics, and re-parsing classifies it identically.
    #[test]
    fn parse_is_deterministic(text in any::<String>()) {
        prop_assert_eq!(parse(&text), parse(&text));
    }

    /// Anything serde_json accepts, we accept with the same tree. Exponents
    /// are left out of the alphabet since serde_json scales them inexactly.
    #[test]
    fn accepts_what_serde_json_accepts(text in "[\\[\\]{}\":,0-9a-dlnrstu \\-.]{0,12}") {
        if let Ok(theirs) = serde_json::from_str::<serde_json::Value>(&text) {
            let ours = parse(&text);
            prop_assert!(ours.is_ok(), "rejected {:?}: {:?}", text, ours);
            prop_assert_eq!(ours.unwrap(), Value::from(theirs));
        }
    }
}
