//! Property tests for the greeting sinks.

use proptest::prelude::*;

use greeter::{GreetOptions, GreetUseCase, GreetingSink, JsonSink, TextSink};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: JSON output decodes back to the exact greeting.
    #[test]
    fn property_json_sink_preserves_greeting(greeting in ".*") {
        let mut sink = JsonSink::new(Vec::new());
        sink.deliver(&greeting).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();

        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        prop_assert_eq!(value["event"].as_str(), Some("greeting"));
        prop_assert_eq!(value["message"].as_str(), Some(greeting.as_str()));
    }

    /// PROPERTY: text output is the greeting followed by one newline.
    #[test]
    fn property_text_sink_appends_newline(name in "[^\\n]*", message in "[^\\n]*") {
        let mut use_case = GreetUseCase::new(TextSink::new(Vec::new()));
        let greeting = use_case.execute(&GreetOptions::new(name, message)).unwrap();

        let out = String::from_utf8(use_case.into_sink().into_inner()).unwrap();
        prop_assert_eq!(out, format!("{}\n", greeting));
    }
}
