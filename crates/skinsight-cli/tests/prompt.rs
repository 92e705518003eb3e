use std::io::Cursor;

use pretty_assertions::assert_eq;
use skinsight_cli::prompt::{Command, parse, render, run_questionnaire};
use skinsight_core::{Category, ClassifierResult};
use skinsight_engine::{EngineConfig, Session};
use skinsight_knowledge::bank::Question;

fn itchy() -> Question {
    Question::yes_no(1, "Does it feel itchy?", 0)
}

fn answer(text: &str) -> Option<Command> {
    Some(Command::Answer(text.to_string()))
}

#[test]
fn shorthand_and_full_answers() {
    let q = itchy();
    assert_eq!(parse("y", &q), answer("Yes"));
    assert_eq!(parse(" YES ", &q), answer("Yes"));
    assert_eq!(parse("n", &q), answer("Not at all"));
    assert_eq!(parse("not at all", &q), answer("Not at all"));
    assert_eq!(parse("2", &q), answer("Not at all"));
    assert_eq!(parse("b", &q), Some(Command::Back));
    assert_eq!(parse("finish", &q), Some(Command::Finish));
}

#[test]
fn unrecognized_input_asks_again() {
    let q = itchy();
    assert_eq!(parse("", &q), None);
    assert_eq!(parse("maybe", &q), None);
    assert_eq!(parse("0", &q), None);
    assert_eq!(parse("3", &q), None);
}

#[test]
fn prompt_lists_numbered_options() {
    let line = render(&itchy(), 2);
    assert!(line.starts_with("Q2. Does it feel itchy?"));
    assert!(line.contains("[1] Yes"));
    assert!(line.contains("[2] Not at all"));
}

fn unknown_label_session() -> Session {
    Session::from_classifier(
        ClassifierResult::from_label("xyz_unknown_condition"),
        EngineConfig::default(),
    )
}

#[test]
fn scripted_answers_complete_the_session() {
    let mut session = unknown_label_session();
    let mut prompts = Vec::new();

    let result = run_questionnaire(
        &mut session,
        Cursor::new("y\nhuh\nb\nn\nn\ny\n"),
        &mut prompts,
    )
    .unwrap();

    assert_eq!(result.category, Category::Default);
    let given: Vec<(u32, &str)> = result.answers.iter().collect();
    assert_eq!(given, vec![(1, "Not at all"), (2, "Not at all"), (3, "Yes")]);

    let shown = String::from_utf8(prompts).unwrap();
    assert!(shown.contains("Please answer y or n."));
}

#[test]
fn end_of_input_finishes_early() {
    let mut session = unknown_label_session();
    let mut prompts = Vec::new();

    let result = run_questionnaire(&mut session, Cursor::new("y\n"), &mut prompts).unwrap();
    assert_eq!(result.answers.len(), 1);
    assert_eq!(result.answered[0].question, "Does it feel itchy?");
}

#[test]
fn back_on_the_first_question_is_reported() {
    let mut session = unknown_label_session();
    let mut prompts = Vec::new();

    run_questionnaire(&mut session, Cursor::new("b\nf\n"), &mut prompts).unwrap();
    let shown = String::from_utf8(prompts).unwrap();
    assert!(shown.contains("no earlier question to return to"));
}
