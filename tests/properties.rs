//! Property tests for the parse pass.

use argdecl::{FlagArgument, Manager, StringArgument};
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

proptest! {
    #[test]
    fn flags_set_exactly_for_given_subset(
        names in proptest::collection::btree_set(name(), 1..8),
        mask in proptest::collection::vec(any::<bool>(), 8),
        long_form in any::<bool>(),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let dashes = if long_form { "--" } else { "-" };
        let tokens: Vec<String> = names
            .iter()
            .zip(&mask)
            .filter(|(_, &present)| present)
            .map(|(n, _)| format!("{dashes}{n}"))
            .collect();

        let manager = Manager::new(tokens);
        let flags: Vec<FlagArgument> = names
            .iter()
            .map(|n| {
                manager
                    .make_argument::<FlagArgument>()
                    .add_name(n)
                    .unwrap()
                    .finish_general()
                    .unwrap()
            })
            .collect();

        for (flag, &present) in flags.iter().zip(&mask) {
            prop_assert_eq!(flag.is_set().unwrap(), present);
        }
    }

    #[test]
    fn separator_round_trip(
        pieces in proptest::collection::vec("[^:]{0,6}", 1..6),
    ) {
        let joined = pieces.join(":");
        let manager = Manager::new(["-f".to_string(), joined]);
        let format = manager
            .make_argument::<StringArgument>()
            .add_name("f")
            .unwrap()
            .finish_general()
            .unwrap()
            .set_separator(':')
            .unwrap()
            .required()
            .unwrap();

        let count = format.number_of_values().unwrap();
        prop_assert_eq!(count, pieces.len());
        for (i, piece) in pieces.iter().enumerate() {
            prop_assert_eq!(&format.value(i).unwrap(), piece);
        }
    }

    #[test]
    fn last_occurrence_wins(values in proptest::collection::vec("[a-z]{1,5}", 1..6)) {
        let tokens: Vec<String> = values
            .iter()
            .flat_map(|v| ["-a".to_string(), v.clone()])
            .collect();
        let manager = Manager::new(tokens);
        let a = manager
            .make_argument::<StringArgument>()
            .add_name("a")
            .unwrap()
            .finish_general()
            .unwrap();

        prop_assert_eq!(a.values().unwrap(), vec![values[values.len() - 1].clone()]);
        prop_assert_eq!(manager.parsed_arguments_count().unwrap(), values.len());
    }

    #[test]
    fn everything_after_delimiter_is_trailing(rest in proptest::collection::vec("-{0,2}[a-z]{0,4}", 0..6)) {
        let mut tokens = vec!["--".to_string()];
        tokens.extend(rest.iter().cloned());

        let manager = Manager::new(tokens);
        prop_assert_eq!(manager.trailing_arguments().unwrap(), rest.clone());
        prop_assert_eq!(manager.parsed_arguments_count().unwrap(), rest.len());
    }
}
