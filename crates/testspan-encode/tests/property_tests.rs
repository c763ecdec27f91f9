use proptest::prelude::*;
use serde_json::Value as Json;
use testspan_encode::{CYCLE_MARKER_PREFIX, Record, Value, encode};

fn json_value() -> impl Strategy<Value = Json> {
    let leaf = prop_oneof![
        Just(Json::Null),
        any::<bool>().prop_map(Json::Bool),
        any::<i64>().prop_map(Json::from),
        any::<f64>()
            .prop_filter("JSON numbers are finite", |f| f.is_finite())
            .prop_map(Json::from),
        "\\PC*".prop_map(Json::String),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Json::Array),
            prop::collection::vec(("\\PC*", inner), 0..8)
                .prop_map(|entries| Json::Object(entries.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn json_safe_values_round_trip(json in json_value()) {
        let encoded = encode(&Value::from(json.clone()));
        let decoded: Json = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, json);
    }

    #[test]
    fn back_edge_anywhere_in_a_chain_yields_one_marker(len in 1usize..12, target in 0usize..12) {
        let target = target % len;
        let chain: Vec<_> = (0..len).map(|i| Record::with_fields("Node", [("depth", i as i64)])).collect();
        for pair in chain.windows(2) {
            pair[0].set("next", pair[1].clone());
        }
        chain[len - 1].set("next", chain[target].clone());

        let encoded = encode(&Value::from(chain[0].clone()));
        let decoded: Json = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(encoded.matches(CYCLE_MARKER_PREFIX).count(), 1);
        prop_assert!(decoded.is_object());

        for node in &chain {
            node.clear();
        }
    }
}
