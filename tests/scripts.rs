use std::fs;

use lct::{config::Config, interpreter::value::store::LINE_ENDING, run_script};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn script_outputs_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "lct"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        count += 1;
        match run_script(&source, Config::default()) {
            Ok(output) => assert_eq!(output.replace(LINE_ENDING, "\n"),
                                     expected.replace("\r\n", "\n"),
                                     "output of {path:?}"),
            Err(e) => panic!("Script {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
