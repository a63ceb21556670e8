use std::{cell::RefCell, fs, io, rc::Rc};

use parlance::{
    error::{Error, ParseError},
    interpreter::{
        evaluator::core::Context,
        input::ScriptedInput,
        lexer::{Token, tokenize},
    },
    run_source,
    session::Session,
};
use walkdir::WalkDir;

/// A shared, growable buffer standing in for stdout.
#[derive(Clone, Default)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("output was not UTF-8")
    }
}

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs a script with scripted prompt replies and captured output.
fn run_with_input(src: &str, replies: &[&str]) -> (Result<(), Error>, String) {
    let out = SharedBuf::default();
    let mut context = Context::with_io(Box::new(out.clone()),
                                       Box::new(ScriptedInput::new(replies.iter().copied())));

    let result = run_source(src, &mut context);
    (result, out.contents())
}

fn assert_prints(src: &str, expected: &[&str]) {
    let (result, output) = run_with_input(src, &[]);
    if let Err(e) = result {
        panic!("Script failed: {e}\nScript: {src}");
    }

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, expected, "for script: {src}");
}

fn assert_parse_error(src: &str) {
    match run_with_input(src, &[]).0 {
        Err(Error::Parse(_)) => {},
        Err(Error::Runtime(e)) => panic!("Expected a parse error but got a runtime error: {e}"),
        Ok(()) => panic!("Script succeeded but was expected to fail: {src}"),
    }
}

fn assert_runtime_error(src: &str) {
    match run_with_input(src, &[]).0 {
        Err(Error::Runtime(_)) => {},
        Err(Error::Parse(e)) => panic!("Expected a runtime error but got a parse error: {e}"),
        Ok(()) => panic!("Script succeeded but was expected to fail: {src}"),
    }
}

#[test]
fn tokenization_folds_case_and_strips_punctuation() {
    let words: Vec<String> = tokenize("Let x be 5. Tell me x.").into_iter()
                                                              .map(|(token, _)| {
                                                                  token.text().to_string()
                                                              })
                                                              .collect();

    assert_eq!(words, ["let", "x", "be", "5", "tell", "me", "x"]);
}

#[test]
fn quoted_spans_keep_case_and_punctuation() {
    let tokens = tokenize(r#"ask me "What is your Name?" and call it name"#);

    assert!(tokens.iter()
                  .any(|(token, _)| matches!(token, Token::Quoted(text) if text == "What is your Name?")));
}

#[test]
fn stray_quotes_are_dropped() {
    let words: Vec<String> = tokenize("tell me \"unclosed words").into_iter()
                                                                .map(|(token, _)| {
                                                                    token.text().to_string()
                                                                })
                                                                .collect();

    assert_eq!(words, ["tell", "me", "unclosed", "words"]);

    // Statements after the stray quote still run.
    assert_prints(r#"tell me 1 " tell me 2"#, &["1", "2"]);
}

#[test]
fn assignment_and_sum() {
    assert_prints("let x be the sum of 2 and 3. tell me x.", &["5"]);
    assert_prints("Let x be 5. Tell me x.", &["5"]);
}

#[test]
fn difference_of_is_signed_and_between_is_absolute() {
    assert_prints("tell me the difference of 3 and 9", &["-6"]);
    assert_prints("tell me the difference between 3 and 9", &["6"]);
    assert_prints("tell me the difference between 9 and 3", &["6"]);
}

#[test]
fn products_and_division() {
    assert_prints("tell me the product of 6 and 7", &["42"]);
    assert_prints("tell me 7 divided by 2", &["3.5"]);
    assert_prints("let x be 10. tell me the value of x divided by 4.", &["2.5"]);
}

#[test]
fn number_words_read_as_numbers() {
    assert_prints("let x be twenty-one. tell me the sum of x and twenty-one.", &["42"]);
    assert_prints("tell me the sum of one and ninety-nine", &["100"]);
}

#[test]
fn sum_concatenates_once_strings_are_involved() {
    assert_prints(r#"tell me the sum of "Hello, " and "World""#, &["Hello, World"]);
    assert_prints(r#"let n be 3. tell me the sum of "count is " and n."#, &["count is 3"]);
}

#[test]
fn unbound_words_fall_back_to_their_literal_reading() {
    assert_prints("tell me hello", &["hello"]);
    assert_prints("tell me true", &["true"]);
    assert_prints("show me 8", &["8"]);
}

#[test]
fn quoted_literals_never_resolve_as_variables() {
    assert_prints(r#"let tell be 5. tell me "tell"."#, &["tell"]);
}

#[test]
fn variables_may_shadow_keyword_words() {
    assert_prints("let me be 3. tell me me.", &["3"]);
}

#[test]
fn increment_and_decrement_step_by_one() {
    assert_prints("let n be 5. increment n. increment n. decrement n. tell me n.", &["6"]);
}

#[test]
fn blocks_run_in_order() {
    assert_prints("first let x be 1 then let y be 2 and lastly tell me the sum of x and y",
                  &["3"]);
    assert_prints("you should tell me 1 then tell me 2 and lastly tell me 3", &["1", "2", "3"]);
    assert_prints("first tell me 1 finally tell me 2", &["1", "2"]);
}

#[test]
fn unterminated_block_is_a_parse_error() {
    let (result, _) = run_with_input("first let x be 1 then let y be 2", &[]);
    match result {
        Err(Error::Parse(ParseError::MissingBlockTerminator { found, .. })) => {
            assert_eq!(found, "end of input");
        },
        other => panic!("Expected a missing-terminator error, got {other:?}"),
    }

    assert_parse_error("first tell me 1 then tell me 2 tell me 3");
}

#[test]
fn conditionals_pick_one_arm() {
    assert_prints(r#"if 5 is greater than 3 tell me "yes""#, &["yes"]);
    assert_prints(r#"if 2 is greater than 3 tell me "yes" otherwise tell me "no""#, &["no"]);
    assert_prints("if true then you tell me 1", &["1"]);
    assert_prints(r#"if false tell me "on" otherwise tell me "off""#, &["off"]);
}

#[test]
fn zero_is_falsy() {
    assert_prints(r#"let n be 0. if n tell me "some" otherwise tell me "none"."#, &["none"]);
}

#[test]
fn loops_rerun_their_body() {
    assert_prints("let n be 3. as long as n is greater than 0, first tell me n and lastly decrement n.",
                  &["3", "2", "1"]);
    assert_prints(r#"as long as false tell me "never""#, &[]);
}

#[test]
fn comparators_are_strict_about_kinds() {
    assert_prints("tell me 2 is less than 3", &["true"]);
    assert_prints(r#"tell me "apple" is less than "banana""#, &["true"]);
    assert_prints("tell me 2 is different from 3", &["true"]);

    // A quoted "2" coerces to a number, so this is a numeric comparison.
    assert_prints(r#"tell me 2 is equal to "2""#, &["true"]);

    // A concatenation result stays a string: never equal to a number, and
    // not ordered against one in either direction.
    assert_prints(r#"tell me 2 is equal to the sum of "n " and 2"#, &["false"]);
    assert_prints(r#"tell me 2 is greater than "apples""#, &["false"]);
    assert_prints(r#"tell me 2 is less than "apples""#, &["false"]);
}

#[test]
fn function_calls_run_in_a_copied_scope() {
    assert_prints("i'll explain how to reset. i'll tell you what amount is. let amount be 0. \
                   let amount be 9. let's reset where amount is amount. tell me amount.",
                  &["9"]);
}

#[test]
fn call_results_come_back_through_call_it() {
    assert_prints("i'll explain how to double. i'll tell you what amount is. \
                   the answer is the product of amount and 2. \
                   let's double where amount is 21 and call it result. tell me result.",
                  &["42"]);
}

#[test]
fn an_early_answer_stops_the_block() {
    assert_prints(r#"i'll explain how to pick.
                     first tell me "deciding"
                     then the answer is 7
                     and lastly tell me "unreachable".
                     let's pick and call it choice. tell me choice."#,
                  &["deciding", "7"]);
}

#[test]
fn parameter_lists_end_before_and_call_it() {
    assert_prints("i'll explain how to add. \
                   i'll tell you what a is and i'll tell you what b is. \
                   the answer is the sum of a and b. \
                   let's add where a is 2 and b is 5 and call it total. tell me total.",
                  &["7"]);
}

#[test]
fn functions_may_call_themselves() {
    assert_prints("i'll explain how to countdown. i'll tell you what n is. \
                   if n is greater than 0 first tell me n then decrement n \
                   and lastly let's countdown where n is n. \
                   let's countdown where n is 3.",
                  &["3", "2", "1"]);
}

#[test]
fn calls_work_before_the_declaration_appears() {
    assert_prints(r#"let's greet. i'll explain how to greet. tell me "hi"."#, &["hi"]);
}

#[test]
fn missing_parameter_is_an_error() {
    assert_runtime_error("i'll explain how to double. i'll tell you what amount is. \
                          the answer is the product of amount and 2. let's double");
}

#[test]
fn unknown_function_is_an_error() {
    assert_runtime_error("let's dance");
    assert_runtime_error("let x be 5. let's x");
}

#[test]
fn a_call_it_without_an_answer_is_an_error() {
    assert_runtime_error("i'll explain how to shrug. tell me \"eh\". \
                          let's shrug and call it outcome");
}

#[test]
fn prompts_bind_the_coerced_reply() {
    let (result, output) = run_with_input(r#"ask me "How many?" and call it count.
                                             tell me the product of count and 2."#,
                                          &["21"]);
    assert!(result.is_ok());
    assert_eq!(output, "42\n");

    let (result, output) = run_with_input(r#"ask me "How many?" and call it count.
                                             tell me count."#,
                                          &["five"]);
    assert!(result.is_ok());
    assert_eq!(output, "5\n");
}

#[test]
fn an_exhausted_reply_script_reads_as_empty_and_falsy() {
    let (result, output) = run_with_input(r#"ask me "Anything?" and call it reply.
                                             if reply tell me "said" otherwise tell me "silent"."#,
                                          &[]);
    assert!(result.is_ok());
    assert_eq!(output, "silent\n");
}

#[test]
fn random_numbers_are_whole_and_stay_in_bounds() {
    for _ in 0..20 {
        let (result, output) = run_with_input("tell me a random number between 1 and 6", &[]);
        assert!(result.is_ok());

        let value: f64 = output.trim().parse().expect("did not print a number");
        assert!((1.0..=6.0).contains(&value), "out of bounds: {value}");
        assert!((value - value.floor()).abs() < f64::EPSILON, "not whole: {value}");
    }
}

#[test]
fn reversed_random_bounds_are_an_error() {
    assert_runtime_error("tell me a random number between 6 and 1");
}

#[test]
fn arithmetic_needs_numbers() {
    assert_runtime_error(r#"tell me the product of "a" and 2"#);
    assert_runtime_error("tell me the difference of true and 1");
    assert_runtime_error(r#"tell me "a" divided by 2"#);
}

#[test]
fn malformed_phrases_are_parse_errors() {
    assert_parse_error("let x to 5");
    assert_parse_error("let x be");
    assert_parse_error("tell me the sum of 1 2");
    assert_parse_error("tell me 1 is approximately 2");
    assert_parse_error(r#"ask me "name""#);
    assert_parse_error("first 5 and lastly tell me 2");
    assert_parse_error("let's add where a");
}

#[test]
fn the_value_of_reads_a_variable() {
    assert_prints("let total be 10. tell me the value of total.", &["10"]);
}

#[test]
fn sessions_buffer_words_until_please() {
    let out = SharedBuf::default();
    let mut session = Session::with_context(Context::with_io(Box::new(out.clone()),
                                                             Box::new(ScriptedInput::default())));

    session.say("tell").say("me").say("5");
    assert_eq!(session.buffered().len(), 3);
    assert_eq!(out.contents(), "");

    session.say("please");
    assert!(session.buffered().is_empty());
    assert_eq!(out.contents(), "5\n");
}

#[test]
fn ok_also_runs_the_buffer() {
    let out = SharedBuf::default();
    let mut session = Session::with_context(Context::with_io(Box::new(out.clone()),
                                                             Box::new(ScriptedInput::default())));

    session.say("tell").say("me").say("1").say("ok");
    session.say("tell").say("me").say("2").say("ok?");

    assert_eq!(out.contents(), "1\n2\n");
}

#[test]
fn session_namespaces_do_not_survive_between_phrases() {
    let out = SharedBuf::default();
    let mut session = Session::with_context(Context::with_io(Box::new(out.clone()),
                                                             Box::new(ScriptedInput::default())));

    session.say("let").say("x").say("be").say("5").say("please");
    session.say("tell").say("me").say("x").say("please");

    // x is gone by the second phrase, so the word reads literally.
    assert_eq!(out.contents(), "x\n");
}

#[test]
fn session_reports_parse_errors_and_recovers() {
    let out = SharedBuf::default();
    let mut session = Session::with_context(Context::with_io(Box::new(out.clone()),
                                                             Box::new(ScriptedInput::default())));

    session.say("first").say("let").say("x").say("be").say("1").say("please");
    assert!(out.contents().starts_with("Error on line 1:"));
    assert!(session.buffered().is_empty());

    session.say("tell").say("me").say("2").say("please");
    assert!(out.contents().ends_with("2\n"));
}

#[test]
fn the_query_terminator_reports_itself_unimplemented() {
    let out = SharedBuf::default();
    let mut session = Session::with_context(Context::with_io(Box::new(out.clone()),
                                                             Box::new(ScriptedInput::default())));

    session.say("tell").say("me").say("5").say("?");

    assert!(session.buffered().is_empty());
    assert!(out.contents().contains("not implemented"));
    assert!(!out.contents().contains('5'));
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.say").expect("missing file");
    let (result, output) = run_with_input(&script, &[]);

    if let Err(e) = result {
        panic!("Example script failed: {e}");
    }
    assert_eq!(output.lines().count(), 7);
}

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "say"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let (result, output) = run_with_input(&script, &["4", "4"]);
        if let Err(e) = result {
            panic!("Demo {path:?} failed:\n{script}\nError: {e}");
        }
        assert!(!output.is_empty(), "Demo {path:?} printed nothing");
    }

    assert!(count > 0, "No demo programs found in demos/");
}
