//! Property-based tests for the list store and the evaluators.
//!
//! Generated definitions check that the store keeps one entry per name, and
//! generated operands check the arithmetic evaluator against `Decimal`.

use std::collections::HashSet;

use lct::{
    ast::{BinaryOperator, Expr},
    config::Config,
    interpreter::{
        environment::Environment,
        evaluator::{arithmetic, core::Bindings},
        sink::CaptureSink,
        value::{core::Value, list::List, store::ListStore},
    },
};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// A short uppercase list name.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-D][A-Z]{0,1}").expect("valid regex")
}

fn elements_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1000i64..1000, 0..6)
}

fn literal(value: i64) -> Expr {
    Expr::Literal { value: value.into(),
                    line:  1, }
}

fn binary(left: i64, op: BinaryOperator, right: i64) -> Expr {
    Expr::BinaryOp { left: Box::new(literal(left)),
                     op,
                     right: Box::new(literal(right)),
                     line: 1 }
}

proptest! {
    #[test]
    fn store_keeps_one_entry_per_name(
        definitions in prop::collection::vec((name_strategy(), elements_strategy()), 0..30)
    ) {
        let mut store = ListStore::new();
        for (name, elements) in &definitions {
            store.add_or_replace(List::new(name.clone(), elements.iter().map(|&e| e.into()).collect()));
        }

        let distinct: HashSet<&String> = definitions.iter().map(|(name, _)| name).collect();
        prop_assert_eq!(store.len(), distinct.len());
        prop_assert_eq!(store.all().count(), distinct.len());

        // The last definition of each name wins.
        for (name, _) in &definitions {
            let last = definitions.iter().rev().find(|(n, _)| n == name).map(|(_, e)| e);
            let stored = store.get(name).expect("defined name is stored");
            let expected: Vec<Value> = last.into_iter().flatten().map(|&e| e.into()).collect();
            prop_assert_eq!(&stored.elements, &expected);
        }
    }

    #[test]
    fn store_orders_by_first_definition(
        names in prop::collection::vec(name_strategy(), 1..20)
    ) {
        let mut store = ListStore::new();
        for name in &names {
            store.add_or_replace(List::new(name.clone(), Vec::new()));
        }

        let mut first_seen = Vec::new();
        for name in &names {
            if !first_seen.contains(name) {
                first_seen.push(name.clone());
            }
        }

        let stored: Vec<String> = store.all().map(|list| list.name.clone()).collect();
        prop_assert_eq!(stored, first_seen);
    }

    #[test]
    fn integer_arithmetic_matches_decimal(left in -100_000i64..100_000, right in -100_000i64..100_000) {
        let bindings = Bindings::new();

        let sum = arithmetic::evaluate(&binary(left, BinaryOperator::Add, right), &bindings).unwrap();
        let difference = arithmetic::evaluate(&binary(left, BinaryOperator::Sub, right), &bindings).unwrap();
        let product = arithmetic::evaluate(&binary(left, BinaryOperator::Mul, right), &bindings).unwrap();

        prop_assert_eq!(sum, Decimal::from(left + right));
        prop_assert_eq!(difference, Decimal::from(left - right));
        prop_assert_eq!(product, Decimal::from(left * right));
    }

    #[test]
    fn division_fails_only_on_zero(left in -1000i64..1000, right in -10i64..10) {
        let result = arithmetic::evaluate(&binary(left, BinaryOperator::Div, right), &Bindings::new());

        prop_assert_eq!(result.is_err(), right == 0);
    }

    #[test]
    fn bounded_range_has_expected_length(from in -50i64..50, to in -50i64..50) {
        let mut env = Environment::with_config(Config::default());
        env.execute(&format!("R = {from}..{to}"), &mut CaptureSink::new()).unwrap();

        let expected = usize::try_from(to - from + 1).unwrap_or(0);
        prop_assert_eq!(env.store().get("R").unwrap().elements.len(), expected);
    }

    #[test]
    fn identity_comprehension_copies_its_source(elements in elements_strategy()) {
        let literal = elements.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
        let mut env = Environment::new();
        let mut sink = CaptureSink::new();

        env.execute(&format!("S = [{literal}]"), &mut sink).unwrap();
        env.execute("C = [s | s in S]", &mut sink).unwrap();

        prop_assert_eq!(&env.store().get("C").unwrap().elements, &env.store().get("S").unwrap().elements);
    }
}
