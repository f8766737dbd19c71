use std::fs;

use infix_eval::evaluate;
use walkdir::WalkDir;

#[test]
fn case_files_evaluate() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "cases"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_number, expression, expected) in extract_cases(&content) {
            count += 1;
            let result = evaluate(expression);
            match expected {
                Expected::Value(expected) => match result {
                    Ok(value) => assert!(approx_eq(value, expected),
                                         "{path:?}:{line_number}: {expression:?} evaluated to \
                                          {value}, expected {expected}"),
                    Err(e) => panic!("{path:?}:{line_number}: {expression:?} failed: {e}"),
                },
                Expected::Failure => assert!(result.is_err(),
                                             "{path:?}:{line_number}: {expression:?} succeeded \
                                              but was expected to fail"),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

enum Expected {
    Value(f64),
    Failure,
}

fn extract_cases(content: &str) -> Vec<(usize, &str, Expected)> {
    content.lines()
           .enumerate()
           .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .map(|(i, line)| {
               let (expression, expected) =
                   line.rsplit_once("=>")
                       .unwrap_or_else(|| panic!("Line {} has no '=>': {line:?}", i + 1));
               let expected = match expected.trim() {
                   "error" => Expected::Failure,
                   number => Expected::Value(number.parse().unwrap_or_else(|e| {
                                                               panic!("Line {} has a bad \
                                                                       expected value: {e}",
                                                                      i + 1)
                                                           })),
               };
               (i + 1, expression.trim(), expected)
           })
           .collect()
}

fn approx_eq(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= 1e-12 * a.abs().max(b.abs())
}
