//! Property tests for `Greeter::greet`.

use proptest::prelude::*;

use greeter::Greeter;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the greeting is exactly message, one space, name.
    #[test]
    fn property_greet_is_message_space_name(name in ".*", message in ".*") {
        let greeter = Greeter::new(name.clone());
        prop_assert_eq!(greeter.greet(&message), format!("{} {}", message, name));
    }

    /// PROPERTY: the name is stored verbatim and greet never changes it.
    #[test]
    fn property_greet_does_not_mutate(name in ".*", message in ".*") {
        let greeter = Greeter::new(name.as_str());
        let first = greeter.greet(&message);
        let second = greeter.greet(&message);
        prop_assert_eq!(first, second);
        prop_assert_eq!(greeter.name(), name.as_str());
    }

    /// PROPERTY: the name can always be recovered from the end of the greeting.
    #[test]
    fn property_greet_ends_with_space_then_name(name in "\\PC{0,32}", message in "\\PC{0,32}") {
        let greeting = Greeter::new(name.as_str()).greet(&message);
        prop_assert!(greeting.starts_with(message.as_str()));
        let suffix = format!(" {}", name);
        prop_assert!(greeting.ends_with(suffix.as_str()));
        prop_assert_eq!(greeting.len(), message.len() + 1 + name.len());
    }
}
