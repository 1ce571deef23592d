use std::fs;

use shuntcalc::{CalcError, evaluate};
use walkdir::WalkDir;

/// Runs every `expression => expectation` line of every `.calc` file under
/// `tests/cases`.
#[test]
fn case_files_evaluate_as_documented() {
    let mut count = 0;
    let mut failures = Vec::new();

    for entry in
        WalkDir::new("tests/cases").sort_by_file_name()
                                   .into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (expression, expected) =
                line.split_once("=>")
                    .unwrap_or_else(|| panic!("{path:?}:{}: missing '=>'", i + 1));

            count += 1;
            if let Err(message) = check(expression.trim(), expected.trim()) {
                failures.push(format!("{}:{}: {message}", path.display(), i + 1));
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
    assert!(failures.is_empty(), "{} case(s) failed:\n{}", failures.len(), failures.join("\n"));
}

fn check(expression: &str, expected: &str) -> Result<(), String> {
    let outcome = evaluate(expression);

    if let Some(kind) = expected.strip_prefix("error:") {
        return match &outcome {
            Err(e) if error_kind(e) == kind => Ok(()),
            _ => Err(format!("{expression:?}: expected error:{kind}, got {outcome:?}")),
        };
    }

    let expected: f64 = expected.parse()
                                .map_err(|e| format!("bad expected value {expected:?}: {e}"))?;
    match outcome {
        Ok(value) if (value - expected).abs() <= 1e-9 * expected.abs().max(1.0) => Ok(()),
        _ => Err(format!("{expression:?}: expected {expected}, got {outcome:?}")),
    }
}

fn error_kind(e: &CalcError) -> &'static str {
    match e {
        CalcError::EmptyExpression => "empty",
        CalcError::Lex(_) => "lex",
        CalcError::Parse(_) => "parse",
        CalcError::Eval(_) => "eval",
        _ if e.is_factorial() => "factorial",
        CalcError::Domain(_) => "domain",
    }
}
