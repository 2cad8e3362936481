use ibtac::lexer::{is_keyword, KEYWORDS};
use ibtac::{scan, Scanner, Token, TokenKind};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

/// (kind, lexeme) pairs, without the trailing EOF
fn kinds_and_lexemes(source: &str) -> Vec<(TokenKind, String)> {
    let mut tokens = scan(source).unwrap();
    assert_eq!(tokens.pop().map(|t| t.kind), Some(TokenKind::Eof));
    tokens.into_iter().map(|t| (t.kind, t.lexeme)).collect()
}

/// Source fragments that each scan to exactly one token
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[_A-Za-z][_A-Za-z0-9]{0,8}",
        "[02-9][0-9]{0,3}(\\.[0-9]{0,3})?([eE][+-]?[0-9]{1,2})?",
        "\\.[0-9]{1,3}",
        "139[_A-Za-z0-9]{1,5}",
        "\\$[^$]{0,10}\\$",
        prop::sample::select(vec![
            "+", "-", "*", "/", "==", "!=", "<", ">", "<=", ">=", "=", "<>", "(", ")", "{", "}",
            "[", "]", ",", ";",
        ])
        .prop_map(String::from),
    ]
}

/// Blanks and comments that scan to nothing
fn separator() -> impl Strategy<Value = String> {
    prop::sample::select(vec![" ", "  ", "\n", "\t", "\r\n", " // note\n", " /* block\n */ "])
        .prop_map(String::from)
}

fn program() -> impl Strategy<Value = String> {
    prop::collection::vec((fragment(), separator()), 0..40)
        .prop_map(|parts| parts.into_iter().map(|(f, s)| f + &s).collect())
}

/// The source text a token was scanned from
fn covered_text(token: &Token) -> String {
    match token.kind {
        TokenKind::String => format!("${}$", token.lexeme),
        _ => token.lexeme.clone(),
    }
}

/// Tokens and the skipped text between them concatenate back to the source,
/// and every skipped span holds no token of its own.
fn check_reconstruction(source: &str, tokens: &[Token]) -> Result<(), TestCaseError> {
    let chars: Vec<char> = source.chars().collect();
    let mut line_starts = vec![0];
    line_starts.extend(
        chars
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == '\n')
            .map(|(i, _)| i + 1),
    );

    let mut rebuilt = String::new();
    let mut end = 0;
    for token in tokens {
        let start = line_starts[token.line - 1] + token.column - 1;
        prop_assert!(start >= end, "{:?} overlaps the previous token", token);

        let gap: String = chars[end..start].iter().collect();
        let gap_tokens = scan(&gap).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(gap_tokens.len(), 1, "skipped span {:?} holds a token", gap);

        let text = covered_text(token);
        let len = text.chars().count();
        let actual: String = chars[start..start + len].iter().collect();
        prop_assert_eq!(&actual, &text);

        rebuilt.push_str(&gap);
        rebuilt.push_str(&text);
        end = start + len;
    }

    prop_assert_eq!(end, chars.len());
    prop_assert_eq!(rebuilt.as_str(), source);
    Ok(())
}

#[test]
fn test_property_standard_identifiers() {
    proptest!(|(input in "[_A-Za-z][_A-Za-z0-9]{0,40}")| {
        prop_assume!(!is_keyword(&input));
        prop_assert_eq!(kinds_and_lexemes(&input), vec![(TokenKind::Identifier, input.clone())]);
    });
}

#[test]
fn test_property_keyword_extensions() {
    proptest!(|(keyword in prop::sample::select(KEYWORDS.to_vec()), tail in "[_A-Za-z0-9]{1,10}")| {
        prop_assert_eq!(kinds_and_lexemes(keyword), vec![(TokenKind::Keyword, keyword.to_string())]);

        let input = format!("{}{}", keyword, tail);
        prop_assert_eq!(kinds_and_lexemes(&input), vec![(TokenKind::Identifier, input.clone())]);
    });
}

#[test]
fn test_property_student_prefixed_identifiers() {
    proptest!(|(input in "139[_A-Za-z0-9]{1,20}")| {
        prop_assert_eq!(kinds_and_lexemes(&input), vec![(TokenKind::Identifier, input.clone())]);
    });
}

#[test]
fn test_property_bare_139_is_a_number() {
    proptest!(|(rest in "([ +*<>=(),;]|\\.[0-9]) [a-z0-9]{0,5}")| {
        let source = format!("139{}", rest);
        let tokens = scan(&source).unwrap();
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(tokens[0].lexeme.as_str(), "139");
    });
}

#[test]
fn test_property_numbers() {
    proptest!(|(input in "([02-9][0-9]{0,5}(\\.[0-9]{0,4})?|\\.[0-9]{1,5})([eE][+-]?[0-9]{1,3})?")| {
        prop_assert_eq!(kinds_and_lexemes(&input), vec![(TokenKind::Number, input.clone())]);
    });
}

#[test]
fn test_property_spans_reconstruct_source() {
    proptest!(|(source in program())| {
        let tokens = scan(&source).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        check_reconstruction(&source, &tokens)?;
    });
}

#[test]
fn test_property_scans_are_idempotent() {
    proptest!(|(source in prop_oneof![program(), "\\PC{0,120}"])| {
        prop_assert_eq!(scan(&source), scan(&source));
    });
}

#[test]
fn test_property_error_ends_the_sequence() {
    proptest!(|(source in "\\PC{0,120}")| {
        let results: Vec<_> = Scanner::new(&source).collect();
        let first_err = results.iter().position(|r| r.is_err());
        match first_err {
            Some(i) => {
                prop_assert_eq!(i, results.len() - 1);
            }
            None => {
                let last = results.last().and_then(|r| r.as_ref().ok()).map(|t| t.kind);
                prop_assert_eq!(last, Some(TokenKind::Eof));
            }
        }
    });
}
