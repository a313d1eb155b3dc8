use pipesh_ast::{CommandGraph, OutputSink, Stage};

use super::parse;
use crate::{ParseError, Span};

fn graph(stages: Vec<Stage>) -> Option<CommandGraph> {
    Some(CommandGraph::new(stages).expect("valid test graph"))
}

#[test]
fn parse_blank_lines() {
    assert_eq!(parse(""), Ok(None));
    assert_eq!(parse("   \t"), Ok(None));
    assert_eq!(parse("\n"), Ok(None));
    assert_eq!(parse("# just a comment"), Ok(None));
}

#[test]
fn parse_single_command() {
    assert_eq!(
        parse("ls -l /tmp\n"),
        Ok(graph(vec![Stage::new(["ls", "-l", "/tmp"])]))
    );
}

#[test]
fn parse_command_with_trailing_comment() {
    assert_eq!(parse("ls # list"), Ok(graph(vec![Stage::new(["ls"])])));
}

#[test]
fn parse_quoted_arguments() {
    assert_eq!(
        parse(r#"printf '%s|%s' "a b""#),
        Ok(graph(vec![Stage::new(["printf", "%s|%s", "a b"])]))
    );
}

#[test]
fn parse_pipeline() {
    assert_eq!(
        parse("printf ab | wc -c"),
        Ok(graph(vec![
            Stage::new(["printf", "ab"]).with_output(OutputSink::PipeToNext),
            Stage::new(["wc", "-c"]),
        ]))
    );
}

#[test]
fn parse_redirections() {
    assert_eq!(
        parse("sort < in.txt > out.txt"),
        Ok(graph(vec![Stage::new(["sort"])
            .with_input("in.txt")
            .with_output(OutputSink::TruncateFile("out.txt".into()))]))
    );
    assert_eq!(
        parse("echo hi >> log.txt"),
        Ok(graph(vec![
            Stage::new(["echo", "hi"]).with_output(OutputSink::AppendFile("log.txt".into()))
        ]))
    );
}

#[test]
fn parse_redirection_before_arguments() {
    assert_eq!(
        parse("< in.txt grep x"),
        Ok(graph(vec![Stage::new(["grep", "x"]).with_input("in.txt")]))
    );
}

#[test]
fn parse_pipeline_with_redirections() {
    assert_eq!(
        parse("cat < in | sort | uniq >> out"),
        Ok(graph(vec![
            Stage::new(["cat"])
                .with_input("in")
                .with_output(OutputSink::PipeToNext),
            Stage::new(["sort"]).with_output(OutputSink::PipeToNext),
            Stage::new(["uniq"]).with_output(OutputSink::AppendFile("out".into())),
        ]))
    );
}

#[test]
fn parse_input_redirection_within_pipeline() {
    assert_eq!(
        parse("echo a | cat < file"),
        Ok(graph(vec![
            Stage::new(["echo", "a"]).with_output(OutputSink::PipeToNext),
            Stage::new(["cat"]).with_input("file"),
        ]))
    );
}

#[test]
fn parse_empty_commands() {
    assert_eq!(parse("| wc"), Err(ParseError::EmptyCommand(Span::new(0, 1))));
    assert_eq!(parse("ls |"), Err(ParseError::EmptyCommand(Span::new(3, 4))));
    assert_eq!(
        parse("ls | | wc"),
        Err(ParseError::EmptyCommand(Span::new(5, 6)))
    );
    assert_eq!(
        parse("> out"),
        Err(ParseError::EmptyCommand(Span::new(0, 0)))
    );
}

#[test]
fn parse_missing_redirect_targets() {
    assert_eq!(
        parse("cat <"),
        Err(ParseError::MissingRedirectTarget(Span::new(4, 5)))
    );
    assert_eq!(
        parse("ls > | wc"),
        Err(ParseError::MissingRedirectTarget(Span::new(3, 4)))
    );
}

#[test]
fn parse_duplicate_redirections() {
    assert_eq!(
        parse("cat < a < b"),
        Err(ParseError::DuplicateInput(Span::new(8, 9)))
    );
    assert_eq!(
        parse("ls > a >> b"),
        Err(ParseError::DuplicateOutput(Span::new(7, 9)))
    );
}

#[test]
fn parse_output_redirection_before_pipe() {
    assert_eq!(
        parse("ls > a | wc"),
        Err(ParseError::OutputBeforePipe(Span::new(7, 8)))
    );
}

#[test]
fn parse_lexer_errors() {
    assert_eq!(
        parse("echo 'oops"),
        Err(ParseError::UnterminatedQuote(Span::new(5, 10)))
    );
    assert_eq!(
        parse(r"echo \"),
        Err(ParseError::TrailingEscape(Span::new(5, 6)))
    );
}

#[test]
fn parse_error_reasons() {
    assert_eq!(
        ParseError::UnterminatedQuote(Span::new(0, 1)).to_string(),
        "unterminated quote"
    );
    assert_eq!(
        ParseError::EmptyCommand(Span::new(0, 1)).to_string(),
        "missing command"
    );
}
