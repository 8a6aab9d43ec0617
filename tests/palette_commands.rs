//! End-to-end checks of the text → PaletteCommand pipeline.

use coolor::lexer::{tokenize, TokenKind};
use coolor::{parse, ColorEndpoint, ErrorKind, Found};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Flips the case of each character at random.
fn scramble_case(source: &str, rng: &mut StdRng) -> String {
    source
        .chars()
        .map(|c| {
            if rng.gen_bool(0.5) {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

#[rstest]
#[case("BLUE")]
#[case("blue")]
#[case("Blue")]
#[case("bLuE")]
fn color_classification_ignores_case(#[case] word: &str) {
    let stream = tokenize(word).unwrap();
    assert_eq!(stream.tokens()[0].kind, TokenKind::Color);
    assert_eq!(stream.tokens()[0].lexeme, word);
}

#[rstest]
#[case("make generate palette color colors from to :")]
#[case("red green blue yellow black brown orange")]
#[case("light dark ( ) : 123")]
#[case("((light))::DARK")]
fn vocabulary_only_text_always_tokenizes(#[case] source: &str) {
    init_logger();
    assert!(tokenize(source).is_ok());
}

#[rstest]
#[case("foo", "foo")]
#[case("make palette 6 colors from light teal to dark blue", "teal")]
#[case("make palette 6 colors, from light red to dark blue", ",")]
#[case("make palette 6.5 colors", ".")]
#[case("light_blue", "light_blue")]
fn unknown_text_is_a_lexical_error(#[case] source: &str, #[case] lexeme: &str) {
    init_logger();
    let err = parse(source).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::Lexical {
            lexeme: lexeme.to_string()
        }
    );
    assert_eq!(err.code(), "E_LEXICAL");
}

#[test]
fn colon_separated_command() {
    init_logger();
    let command = parse("generate PALETTE 6 colors FROM light blue : dark orange").unwrap();

    assert_eq!(command.cmd, "generate PALETTE");
    assert_eq!(command.number, 6);
    assert_eq!(command.first.to_string(), "light blue");
    assert_eq!(command.second.to_string(), "dark orange");
}

#[test]
fn mixed_case_parenthesized_command() {
    init_logger();
    let command = parse("Make paLette 6 COLORS FROM (light blue TO dark orange)").unwrap();

    assert_eq!(command.cmd, "Make paLette");
    assert_eq!(command.number, 6);
    assert_eq!(command.first, ColorEndpoint::new("light", "blue"));
    assert_eq!(command.second, ColorEndpoint::new("dark", "orange"));
}

#[rstest]
#[case("generate palette 1 colors from light blue to dark orange")]
#[case("generate palette 6 colors from blue to dark orange")]
#[case("generate palette 6 colors from light blue dark orange")]
#[case("generate colors 6 palette from light blue to dark orange")]
#[case("generate palette 6 colors light blue to dark orange")]
#[case("generate palette")]
#[case("")]
fn malformed_commands_are_syntax_errors(#[case] source: &str) {
    init_logger();
    let err = parse(source).unwrap_err();
    assert!(err.is_syntax(), "{source:?} gave {err}");
    assert_eq!(err.code(), "E_SYNTAX");
}

#[test]
fn size_one_names_the_bad_token() {
    let err = parse("generate palette 1 colors from light blue to dark orange").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::Syntax {
            expected: "a number from 2 to 9".to_string(),
            found: Found::Token("1".to_string()),
        }
    );
}

#[test]
fn reparsing_is_idempotent() {
    let source = "make palette 4 colors from (dark red : light yellow)";
    let first = parse(source).unwrap();
    for _ in 0..5 {
        assert_eq!(parse(source).unwrap(), first);
    }
}

#[rstest]
#[case("generate palette 3 colors from light green to dark brown")]
#[case("make palette 9 color from dark black : light red")]
fn parentheses_are_optional(#[case] bare: &str) {
    let (head, tail) = bare.split_at(bare.find(" from ").unwrap() + " from ".len());
    let wrapped = format!("{head}({tail})");

    assert_eq!(parse(bare).unwrap(), parse(&wrapped).unwrap());
}

#[test]
fn random_casing_parses_to_the_same_command() {
    init_logger();
    let source = "generate palette 7 colors from (light yellow to dark green)";
    let reference = parse(source).unwrap();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..64 {
        let scrambled = scramble_case(source, &mut rng);
        let command = parse(&scrambled).unwrap();

        assert_eq!(command.number, reference.number);
        assert!(command.first.matches(&reference.first), "{scrambled}");
        assert!(command.second.matches(&reference.second), "{scrambled}");
        assert!(command.cmd.eq_ignore_ascii_case(&reference.cmd));
    }
}

#[test]
fn json_output_uses_record_field_names() {
    let command = parse("make palette 5 colors from dark blue to light orange").unwrap();
    let value: serde_json::Value = serde_json::from_str(&command.to_json().unwrap()).unwrap();

    assert_eq!(value["cmd"], "make palette");
    assert_eq!(value["number"], 5);
    assert_eq!(value["first color"], "dark blue");
    assert_eq!(value["second color"], "light orange");
}
