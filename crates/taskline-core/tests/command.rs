use pretty_assertions::assert_eq;

use taskline_core::command::{parse, Command, ParseError};

fn invalid_reason(line: &str) -> String {
    match parse(line) {
        Command::Invalid(err) => err.to_string(),
        other => panic!("expected invalid command for {line:?}, got {other:?}"),
    }
}

#[test]
fn blank_lines_are_empty() {
    assert_eq!(parse(""), Command::Empty);
    assert_eq!(parse("   \t  "), Command::Empty);
}

#[test]
fn exact_keywords() {
    assert_eq!(parse("/q"), Command::Quit);
    assert_eq!(parse("  /l  "), Command::List);
}

#[test]
fn unknown_slash_words_are_titles() {
    assert_eq!(
        parse("/h"),
        Command::Add {
            title: "/h".to_string()
        }
    );
    assert_eq!(
        parse("/qq"),
        Command::Add {
            title: "/qq".to_string()
        }
    );
}

#[test]
fn plain_text_adds_trimmed_title() {
    assert_eq!(
        parse("  Buy milk "),
        Command::Add {
            title: "Buy milk".to_string()
        }
    );
    // Only exact keywords are special; longer words are titles.
    assert_eq!(
        parse("/list groceries"),
        Command::Add {
            title: "/list groceries".to_string()
        }
    );
}

#[test]
fn edit_with_all_flags() {
    assert_eq!(
        parse(r#"/e -id=3 -title="New Title" -completed=true"#),
        Command::EditById {
            id: 3,
            new_title: Some("New Title".to_string()),
            new_completed: Some(true),
        }
    );
}

#[test]
fn edit_with_only_id() {
    assert_eq!(
        parse("/e -id=3"),
        Command::EditById {
            id: 3,
            new_title: None,
            new_completed: None,
        }
    );
}

#[test]
fn edit_with_space_separated_values() {
    assert_eq!(
        parse("/e -id 12 -title 'two words' -completed"),
        Command::EditById {
            id: 12,
            new_title: Some("two words".to_string()),
            new_completed: Some(true),
        }
    );
}

#[test]
fn completed_false_must_be_inline() {
    assert_eq!(
        parse("/e -id=1 -completed=false"),
        Command::EditById {
            id: 1,
            new_title: None,
            new_completed: Some(false),
        }
    );
    assert_eq!(
        invalid_reason("/e -id=1 -completed false"),
        "unexpected argument \"false\""
    );
}

#[test]
fn delete_by_id() {
    assert_eq!(parse("/d -id=2"), Command::DeleteById { id: 2 });
    assert_eq!(parse("/d -id=0"), Command::DeleteById { id: 0 });
}

#[test]
fn missing_id_is_reported() {
    assert_eq!(parse("/d"), Command::Invalid(ParseError::MissingId));
    assert_eq!(invalid_reason("/e -title=x"), "id flag is required");
}

#[test]
fn unterminated_quote_is_tokenize_error() {
    assert_eq!(invalid_reason(r#"/e -id=1 -title="broken"#), "tokenize error");
    assert_eq!(invalid_reason("/e -id=1 -title='broken"), "tokenize error");
    assert_eq!(invalid_reason(r#"/d -id="2"#), "tokenize error");
    assert_eq!(parse("/d -id='2"), Command::Invalid(ParseError::Tokenize));
}

#[test]
fn id_values_are_not_trimmed() {
    assert!(invalid_reason(r#"/d -id=" 3""#).contains("-id"));
    assert!(invalid_reason("/e -id '4 '").contains("-id"));
}

#[test]
fn errors_name_the_offending_flag() {
    assert_eq!(
        invalid_reason("/d -id=1 -title=x"),
        "flag provided but not defined: -title"
    );
    assert_eq!(
        invalid_reason("/e -priority=high -id=1"),
        "flag provided but not defined: -priority"
    );
    assert!(invalid_reason("/e -id=abc").contains("-id"));
    assert!(invalid_reason("/e -id=-4").contains("-id"));
    assert!(invalid_reason("/e -id=1 -completed=maybe").contains("-completed"));
    assert_eq!(invalid_reason("/e -id"), "flag needs an argument: -id");
}
