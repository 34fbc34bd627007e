use std::collections::HashMap;

use argot_command::{
    CommandLexer, LexError, LexerConfig, ParsedCommand, Position, Token, parse_command,
    parse_message_command, render_tokens, tokenize_string,
};
use argot_core::{RichText, RichTextSegment};

fn flags(keys: &[&str]) -> HashMap<String, bool> {
    keys.iter().map(|k| (k.to_string(), true)).collect()
}

fn element_summary(cmd: &ParsedCommand<'_>) -> Vec<(String, String, usize)> {
    cmd.elements()
        .iter()
        .map(|e| {
            let content = match e.as_segment() {
                Some(segment) => segment.to_string(),
                None => e.as_text().unwrap_or_default().to_string(),
            };
            (e.kind().to_string(), content, e.position())
        })
        .collect()
}

#[test]
fn test_plain_words_split_on_whitespace() {
    for input in ["alpha beta gamma", "  alpha\tbeta \n gamma  ", "alpha beta\r\ngamma"] {
        let tokens = tokenize_string(input).unwrap();
        let words: Vec<&str> = tokens
            .iter()
            .map(|t| match t {
                Token::Word { text, .. } => text.as_str(),
                other => panic!("unexpected token {other:?}"),
            })
            .collect();
        assert_eq!(words, vec!["alpha", "beta", "gamma"]);
    }
}

#[test]
fn test_positional_round_trip() {
    let cmd = parse_command("copy -r src --mode=fast dst --force").unwrap();
    assert_eq!(cmd.positional_texts().join(" "), "copy src dst");
}

#[test]
fn test_rendered_tokens_reparse_equivalently() {
    let inputs = [
        r#"backup "my files" --dest=/backup -xvf"#,
        r#"say "he said \"hi\"" --to="the team" -n=3"#,
        r#"run   --env=NODE_ENV=prod   -- "tab\there" --empty="#,
        "plain words only",
    ];

    for input in inputs {
        let first = parse_command(input).unwrap();
        let rendered = render_tokens(first.raw_tokens());
        let second = parse_command(&rendered).unwrap();

        assert_eq!(first.options(), second.options(), "{input}");
        assert_eq!(first.named_params(), second.named_params(), "{input}");
        assert_eq!(element_summary(&first), element_summary(&second), "{input}");
        assert_eq!(render_tokens(second.raw_tokens()), rendered);
    }
}

#[test]
fn test_short_cluster() {
    let cmd = parse_command("-xvf").unwrap();
    assert_eq!(cmd.options(), &flags(&["x", "v", "f"]));
    assert!(cmd.named_params().is_empty());
}

#[test]
fn test_cluster_stops_before_non_letters() {
    let cmd = parse_command("-v1 -x.y").unwrap();
    assert_eq!(cmd.options(), &flags(&["v", "x"]));
    assert_eq!(cmd.positional_texts(), vec!["1", ".y"]);
}

#[test]
fn test_long_assignment() {
    let cmd = parse_command("--env=prod").unwrap();
    assert!(cmd.options().is_empty());
    assert_eq!(cmd.named_params().len(), 1);
    assert_eq!(cmd.text_param("env"), Some("prod"));
}

#[test]
fn test_backup_command() {
    let cmd = parse_command(r#"backup "my files" --dest=/backup -xvf"#).unwrap();
    assert_eq!(cmd.options(), &flags(&["x", "v", "f"]));
    assert_eq!(
        cmd.text_params(),
        [("dest", "/backup")].into_iter().collect::<HashMap<_, _>>()
    );
    assert_eq!(
        element_summary(&cmd),
        vec![
            ("text".into(), "backup".into(), 0),
            ("quoted-text".into(), "my files".into(), 1),
        ]
    );
}

#[test]
fn test_mixed_message() {
    let msg = RichText::new()
        .text("process ")
        .text("input.txt ")
        .image("chart.png")
        .text(" @admin --format=json --verbose");
    let cmd = parse_message_command(&msg).unwrap();

    assert_eq!(cmd.options(), &flags(&["verbose"]));
    assert_eq!(
        cmd.text_params(),
        [("format", "json")].into_iter().collect::<HashMap<_, _>>()
    );
    assert_eq!(
        element_summary(&cmd),
        vec![
            ("text".into(), "process".into(), 0),
            ("text".into(), "input.txt".into(), 1),
            ("image".into(), "[image:chart.png]".into(), 2),
            ("text".into(), "@admin".into(), 3),
        ]
    );
    assert_eq!(cmd.elements()[2].source(), Position::new(2, 0));
    assert_eq!(cmd.elements()[3].source(), Position::new(3, 1));
}

#[test]
fn test_mention_segment_keeps_order() {
    let msg = RichText::new()
        .text("/kick ")
        .at("10001")
        .text(" --reason=spam ")
        .at("10002");
    let cmd = parse_message_command(&msg).unwrap();

    let kinds: Vec<&str> = cmd.elements().iter().map(|e| e.kind()).collect();
    assert_eq!(kinds, vec!["text", "at", "at"]);
    assert_eq!(cmd.text_param("reason"), Some("spam"));
}

#[test]
fn test_unterminated_quote() {
    let err = parse_command(r#"deploy "unclosed"#).unwrap_err();
    assert_eq!(
        err,
        LexError::QuoteMismatch {
            position: Position::new(0, 7)
        }
    );
    assert_eq!(err.to_string(), "unmatched quote at element 0, offset 7");
}

#[test]
fn test_error_in_message_points_at_element() {
    let msg = RichText::new()
        .text("deploy")
        .image("a.png")
        .text(r#"--note="bad \q""#);
    let err = parse_message_command(&msg).unwrap_err();
    assert_eq!(
        err,
        LexError::InvalidEscapeSequence {
            position: Position::new(2, 12),
            sequence: 'q',
        }
    );
    assert_eq!(err.kind(), "invalid_escape_sequence");
}

#[test]
fn test_malformed_assignment() {
    let err = parse_command("set =value").unwrap_err();
    assert_eq!(
        err,
        LexError::MalformedAssignment {
            position: Position::new(0, 4)
        }
    );
}

#[test]
fn test_placeholder_binds_following_image() {
    let msg = RichText::new()
        .text("deploy --preview=[]")
        .image("shot.png")
        .text(" -v");
    let cmd = parse_message_command(&msg).unwrap();

    let image = RichTextSegment::Image("shot.png".into());
    assert_eq!(cmd.segment_params().get("preview"), Some(&&image));
    assert_eq!(cmd.positional_texts(), vec!["deploy"]);
    assert!(cmd.elements().iter().all(|e| !e.is_segment()));
    assert!(cmd.has_option("v"));
}

#[test]
fn test_placeholder_without_image_stays_literal() {
    let msg = RichText::new().text("deploy --preview=[]");
    let cmd = parse_message_command(&msg).unwrap();

    assert!(cmd.segment_params().is_empty());
    assert!(cmd.named_params().is_empty());
    assert_eq!(cmd.positional_texts(), vec!["deploy", "--preview=[]"]);
}

#[test]
fn test_empty_assignment_binds_following_image() {
    let msg = RichText::new()
        .text("deploy")
        .text("--preview=")
        .image("app.png")
        .text("--config=/etc/app.conf")
        .text("-v");
    let cmd = parse_message_command(&msg).unwrap();

    assert_eq!(
        cmd.segment_param("preview"),
        Some(&RichTextSegment::Image("app.png".into()))
    );
    assert_eq!(cmd.text_param("config"), Some("/etc/app.conf"));
    assert!(cmd.has_option("v"));
    assert_eq!(cmd.positional_texts(), vec!["deploy"]);
}

#[test]
fn test_empty_text_segment_keeps_placeholder_adjacent() {
    let msg = RichText::new().text("post --cover=[]").text("").image("c.png");
    let cmd = parse_message_command(&msg).unwrap();

    assert_eq!(
        cmd.segment_param("cover"),
        Some(&RichTextSegment::Image("c.png".into()))
    );
    assert_eq!(cmd.positional_texts(), vec!["post"]);
}

#[test]
fn test_placeholder_gap_setting() {
    let msg = RichText::new().text("post --cover=[] ").image("c.png");

    let cmd = parse_message_command(&msg).unwrap();
    assert!(cmd.segment_params().is_empty());
    assert_eq!(cmd.elements().len(), 3);

    let lexer = CommandLexer::new(LexerConfig {
        allow_placeholder_gap: true,
        ..LexerConfig::default()
    });
    let cmd = lexer.parse_message(&msg).unwrap();
    assert!(cmd.segment_param("cover").is_some());
    assert_eq!(cmd.elements().len(), 1);
}

#[test]
fn test_repeated_flags_and_assignments() {
    let cmd = parse_command("-v -v --env=dev --env=prod").unwrap();
    assert_eq!(cmd.options(), &flags(&["v"]));
    assert_eq!(cmd.named_params().len(), 1);
    assert_eq!(cmd.text_param("env"), Some("prod"));
}

#[test]
fn test_result_serializes_to_json() {
    let msg = RichText::new().text("show --img=[]").image("x.png").text("-q");
    let cmd = parse_message_command(&msg).unwrap();
    let json = serde_json::to_value(&cmd).unwrap();

    assert_eq!(json["options"]["q"], true);
    assert_eq!(json["named_params"]["img"]["type"], "image");
    assert_eq!(json["named_params"]["img"]["data"], "x.png");
    assert_eq!(json["elements"][0]["kind"], "text");
    assert_eq!(json["elements"][0]["content"], "show");
    assert_eq!(json["raw_tokens"][1]["type"], "assignment");
}
