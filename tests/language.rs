use lct::{
    config::{Config, RangeLimits},
    error::{Error, EvaluationError, LctResult, SemanticError, SyntaxError},
    interpreter::{
        environment::{Environment, State},
        sink::CaptureSink,
        value::store::LINE_ENDING,
    },
    run_script,
};
use pretty_assertions::assert_eq;

fn run(src: &str) -> LctResult<String> {
    run_script(src, Config::default())
}

/// Joins `lines` the way `show` renders them.
fn rendered(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}{LINE_ENDING}")).collect()
}

fn assert_output(src: &str, expected: &[&str]) {
    match run(src) {
        Ok(output) => assert_eq!(output, rendered(expected)),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match run(src) {
        Ok(output) => panic!("Script succeeded but was expected to fail, output:\n{output}"),
        Err(e) => e,
    }
}

/// Executes `setup`, then `failing`, and checks the store did not move.
fn assert_store_unchanged(setup: &str, failing: &str) -> Error {
    let mut env = Environment::new();
    let mut sink = CaptureSink::new();
    env.execute_script(setup, &mut sink)
       .unwrap_or_else(|e| panic!("Setup failed: {e}"));

    let before = env.store().clone();
    let error = env.execute(failing, &mut sink)
                   .expect_err("statement was expected to fail");

    assert_eq!(env.store(), &before);
    assert_eq!(env.state(), State::Idle);
    error
}

#[test]
fn manual_definition_and_show() {
    assert_output("A = [1,2,3]\nshow", &["A = [1,2,3]"]);
    assert_output("A = [1, 2.50, -3]\nshow", &["A = [1,2.5,-3]"]);
    assert_output("A = []\nshow", &["A = []"]);
}

#[test]
fn text_elements_render_verbatim() {
    assert_output("A = [apple, \"two words\", 3]\nshow", &["A = [apple,two words,3]"]);
}

#[test]
fn show_on_empty_session_prints_nothing() {
    assert_eq!(run("show").unwrap(), "");
}

#[test]
fn bounded_ranges() {
    assert_output("B = 1..5\nshow", &["B = [1,2,3,4,5]"]);
    assert_output("B = -2..1\nshow", &["B = [-2,-1,0,1]"]);
    assert_output("B = 1.5..4\nshow", &["B = [1.5,2.5,3.5]"]);
    assert_output("B = 5..1\nshow", &["B = []"]);
    assert_output("B = 3..3\nshow", &["B = [3]"]);
}

#[test]
fn open_ranges_honour_configured_limits() {
    let config = Config { range_limits: RangeLimits::new(-3, 3).unwrap() };
    let output = run_script("A = 1..\nB = ..-2\nshow", config).unwrap();

    assert_eq!(output, rendered(&["A = [1,2,3]", "B = [-3,-2]"]));
}

#[test]
fn open_ranges_use_default_limits() {
    let mut env = Environment::new();
    let mut sink = CaptureSink::new();
    env.execute("A = 32760..", &mut sink).unwrap();
    env.execute("B = ..-32765", &mut sink).unwrap();

    assert_eq!(env.store().get("A").unwrap().elements.len(), 8);
    assert_eq!(env.store().get("B").unwrap().to_string(), "B = [-32767,-32766,-32765]");
}

#[test]
fn several_clauses_in_one_statement() {
    assert_output("A = [1], B = 2..3\nshow", &["A = [1]", "B = [2,3]"]);
    assert_output("A = [1], A = [2]\nshow", &["A = [2]"]);
}

#[test]
fn redefinition_keeps_display_position() {
    assert_output("A = [1]\nB = [2]\nA = [3]\nshow", &["A = [3]", "B = [2]"]);
}

#[test]
fn redefinition_with_identical_contents_is_invisible() {
    let first = run("A = [1,2]\nB = [3]\nshow").unwrap();
    let second = run("A = [1,2]\nB = [3]\nA = [1,2]\nshow").unwrap();

    assert_eq!(first, second);
}

#[test]
fn show_prints_one_block_per_statement() {
    let mut env = Environment::new();
    let mut sink = CaptureSink::new();
    env.execute_script("A = [1]\nshow\nB = [2]\nshow", &mut sink).unwrap();

    assert_eq!(sink.blocks(), [rendered(&["A = [1]"]), rendered(&["A = [1]", "B = [2]"])]);
}

#[test]
fn arithmetic_precedence() {
    assert_output("R = [2 + 3 * 4 | x in [0]]\nshow", &["R = [14]"]);
    assert_output("R = [(2 + 3) * 4 | x in [0]]\nshow", &["R = [20]"]);
    assert_output("R = [2 ^ 3 | x in [0]]\nshow", &["R = [8]"]);
    assert_output("R = [2 ^ 3 ^ 2 | x in [0]]\nshow", &["R = [512]"]);
    assert_output("R = [10 - 4 - 3 | x in [0]]\nshow", &["R = [3]"]);
    assert_output("R = [n / 4 | n in [1]]\nshow", &["R = [0.25]"]);
}

#[test]
fn decimal_arithmetic_is_exact() {
    assert_output("R = [n + 0.2 | n in [0.1]]\nshow", &["R = [0.3]"]);
    assert_output("R = [n * 3 | n in [1.1]]\nshow", &["R = [3.3]"]);
}

#[test]
fn unary_minus() {
    assert_output("R = [-2 ^ 2 | x in [0]]\nshow", &["R = [-4]"]);
    assert_output("R = [(-2) ^ 2 | x in [0]]\nshow", &["R = [4]"]);
    assert_output("R = [-n | n in [1, -2]]\nshow", &["R = [-1,2]"]);
    assert_output("R = [2 ^ -1 | x in [0]]\nshow", &["R = [0.5]"]);
    assert_output("R = [n * -3 | n in [2]]\nshow", &["R = [-6]"]);
    assert_output("R = [--n | n in [5]]\nshow", &["R = [5]"]);
    assert_output("R = [3 - -n | n in [2]]\nshow", &["R = [5]"]);
}

#[test]
fn unbound_variables_are_zero() {
    assert_output("R = [y + 1 | x in [5]]\nshow", &["R = [1]"]);
}

#[test]
fn comprehension_filters_and_transforms() {
    assert_output("N = [1,2,3,4,5]\nR = [n * 10 | n in N | n > 2]\nshow",
                  &["N = [1,2,3,4,5]", "R = [30,40,50]"]);
}

#[test]
fn predicates_combine_with_and() {
    assert_output("R = [n | n in 1..10 | n > 2, n < 5]\nshow", &["R = [3,4]"]);
    assert_output("R = [n | n in 1..10 | n >= 9]\nshow", &["R = [9,10]"]);
    assert_output("R = [n | n in 1..10 | n <= 1]\nshow", &["R = [1]"]);
    assert_output("R = [n | n in 1..10 | n == 4]\nshow", &["R = [4]"]);
    assert_output("R = [n | n in 1..10 | n = 4]\nshow", &["R = [4]"]);
    assert_output("R = [n | n in 1..10 | n > 20]\nshow", &["R = []"]);
}

#[test]
fn several_bindings_iterate_every_combination() {
    assert_output("P = [x * 10 + y | x in [1,2], y in [3,4]]\nshow", &["P = [13,14,23,24]"]);
    assert_output("X = [1,2]\nP = [x + y | x in X, y in []]\nshow", &["X = [1,2]", "P = []"]);
}

#[test]
fn comprehension_without_bindings_is_empty() {
    assert_output("R = [1 |]\nshow", &["R = []"]);
}

#[test]
fn comprehension_results_are_stored() {
    assert_output("N = 1..3\nD = [n * 2 | n in N]\nE = [d + 1 | d in D]\nshow",
                  &["N = [1,2,3]", "D = [2,4,6]", "E = [3,5,7]"]);
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    assert_output("// setup\n\nA = [1] // trailing\n   \nshow", &["A = [1]"]);
}

#[test]
fn division_by_zero_leaves_store_unchanged() {
    let error = assert_store_unchanged("A = [1]\nB = [2]", "B = [n / 0 | n in A]");

    assert!(matches!(error, Error::Evaluation(EvaluationError::DivisionByZero { .. })));
}

#[test]
fn undefined_comparison_leaves_store_unchanged() {
    let error = assert_store_unchanged("N = [1,2,3]", "R = [n | n in N | n 2]");

    assert!(matches!(error, Error::Semantic(SemanticError::UndefinedComparison { .. })));
}

#[test]
fn undefined_comparison_is_rejected_even_without_values() {
    let error = assert_failure("R = [n | n in [] | n 2]");

    assert!(matches!(error, Error::Semantic(SemanticError::UndefinedComparison { .. })));
}

#[test]
fn missing_transform_is_rejected() {
    let error = assert_failure("R = [| n in [1]]");

    assert!(matches!(error, Error::Semantic(SemanticError::MissingTransform { .. })));
}

#[test]
fn malformed_number_is_rejected() {
    let error = assert_store_unchanged("A = [1]", "A = [1e400]");

    assert!(matches!(error, Error::Semantic(SemanticError::MalformedNumber { .. })));
}

#[test]
fn literals_too_small_for_decimals_are_rejected_in_both_notations() {
    let plain = assert_store_unchanged("A = [1]", "A = [0.00000000000000000000000000000001]");
    let scientific = assert_store_unchanged("A = [1]", "A = [1e-32]");

    assert!(matches!(plain, Error::Semantic(SemanticError::MalformedNumber { .. })));
    assert!(matches!(scientific, Error::Semantic(SemanticError::MalformedNumber { .. })));
    assert_output("A = [0.000, -0.0, 0e5]\nshow", &["A = [0,0,0]"]);
}

#[test]
fn range_endpoints_must_lie_within_limits() {
    let error = assert_store_unchanged("A = [1]", "A = 0..1e9");
    assert!(matches!(error, Error::Semantic(SemanticError::RangeOutOfBounds { .. })));

    let error = assert_failure("R = [n | n in -40000..0]");
    assert!(matches!(error, Error::Semantic(SemanticError::RangeOutOfBounds { .. })));

    let config = Config { range_limits: RangeLimits::new(-3, 3).unwrap() };
    assert!(run_script("A = 1..4", config).is_err());
    assert_eq!(run_script("A = -3..3\nshow", config).unwrap(),
               rendered(&["A = [-3,-2,-1,0,1,2,3]"]));
}

#[test]
fn unknown_source_list_is_rejected() {
    let error = assert_store_unchanged("A = [1]", "R = [n | n in Missing]");

    assert!(matches!(error, Error::Semantic(SemanticError::UnknownList { .. })));
}

#[test]
fn text_elements_cannot_be_bound() {
    let error = assert_store_unchanged("A = [1, apple]", "R = [a | a in A]");

    assert!(matches!(error, Error::Semantic(SemanticError::NonNumericElement { .. })));
}

#[test]
fn duplicate_binding_variables_are_rejected() {
    let error = assert_failure("R = [n | n in [1], n in [2]]");

    assert!(matches!(error, Error::Semantic(SemanticError::DuplicateVariable { .. })));
}

#[test]
fn undefined_powers_are_rejected() {
    let error = assert_failure("R = [n ^ 0.5 | n in [-8]]");

    assert!(matches!(error, Error::Evaluation(EvaluationError::UndefinedPower { .. })));
}

#[test]
fn zero_to_a_negative_power_is_division_by_zero() {
    let error = assert_failure("R = [n ^ -1 | n in [0]]");

    assert!(matches!(error, Error::Evaluation(EvaluationError::DivisionByZero { .. })));
    assert_output("R = [n ^ 0 | n in [0]]\nshow", &["R = [1]"]);
    assert_output("R = [n ^ 2 | n in [0]]\nshow", &["R = [0]"]);
}

#[test]
fn syntax_errors() {
    assert!(matches!(assert_failure("A = [1,2"), Error::Syntax(_)));
    assert!(matches!(assert_failure("show show"), Error::Syntax(_)));
    assert!(matches!(assert_failure("A = #"), Error::Syntax(SyntaxError::UnrecognizedInput { .. })));
    assert!(matches!(assert_failure("A ="), Error::Syntax(SyntaxError::UnexpectedEndOfInput { .. })));
    assert!(matches!(assert_failure("R = [n | n in [1] | n > ]"), Error::Syntax(_)));
}

#[test]
fn script_errors_report_their_line() {
    let error = assert_failure("A = [1]\n\n// comment\nB = [n / 0 | n in A]\nshow");

    assert_eq!(error.line(), 4);
    assert!(error.to_string().starts_with("Error on line 4:"));
}

#[test]
fn session_continues_after_an_error() {
    let mut env = Environment::new();
    let mut sink = CaptureSink::new();

    env.execute("A = [1]", &mut sink).unwrap();
    assert!(env.execute("A = [", &mut sink).is_err());
    env.execute("B = [a + 1 | a in A]", &mut sink).unwrap();
    env.execute("show", &mut sink).unwrap();

    assert_eq!(sink.joined(), rendered(&["A = [1]", "B = [2]"]));
}
