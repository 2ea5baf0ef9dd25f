//! CLI tests - argument parsing and the read/parse/render pipeline

use std::io::Write;

use clap::Parser;
use tree_art::{
    ArtError, ConfigError, ParseErrorKind, RenderError, TreeFault,
    cli::{
        Cli, SAMPLES,
        parse::{Command, InputFormat, RenderArgs},
        render_to_string,
    },
    parse_literal, render_tree,
};

fn render_args(argv: &[&str]) -> RenderArgs {
    let cli = Cli::try_parse_from(["tree-art", "render"].into_iter().chain(argv.iter().copied()))
        .expect("arguments should parse");
    match cli.cmd {
        Command::Render(a) => a,
        Command::Examples => panic!("expected the render subcommand"),
    }
}

#[test]
fn test_defaults() {
    let a = render_args(&[]);
    assert_eq!(a.file, "-");
    assert_eq!(a.tree, None);
    assert_eq!(a.indent, 2);
    assert_eq!(a.separator, ' ');
    assert_eq!(a.format, InputFormat::Literal);
    assert!(!a.debug);
}

#[test]
fn test_inline_tree() {
    let a = render_args(&["--tree", "[1, [2, 3]]", "-i", "4", "-s", "."]);
    assert_eq!(render_to_string(&a).unwrap(), "1\n├──>2\n└──>3\n");
}

#[test]
fn test_json_format() {
    let a = render_args(&["-t", r#"[6, [5, ["dva\nradky"]]]"#, "--format", "json"]);
    assert_eq!(render_to_string(&a).unwrap(), "6\n└>5\n  └>dva\nradky\n");
}

#[test]
fn test_file_input() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "# sample tree").unwrap();
    writeln!(f, "[[[1, [True, ['abc', 'def']]],").unwrap();
    writeln!(f, "  [2, [3.14159, 6.023e23]]], 42]").unwrap();

    let path = f.path().to_str().unwrap();
    let a = render_args(&[path, "--indent", "4", "--separator", "."]);
    let out = render_to_string(&a).unwrap();
    assert!(out.starts_with("42\n├──>1\n│...└──>True\n"), "{out}");
    assert!(out.ends_with("....└──>6.023e+23\n"), "{out}");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.tree");
    let a = render_args(&[missing.to_str().unwrap()]);
    assert!(matches!(render_to_string(&a), Err(ArtError::Io(_))));
}

#[test]
fn test_errors_surface_by_kind() {
    let a = render_args(&["-t", "[1, 2]"]);
    assert!(matches!(
        render_to_string(&a),
        Err(ArtError::Render(RenderError::InvalidTree(
            TreeFault::MissingChildren
        )))
    ));

    let a = render_args(&["-t", "[1, []]", "-i", "1"]);
    assert!(matches!(
        render_to_string(&a),
        Err(ArtError::Render(RenderError::InvalidArgument(
            ConfigError::IndentTooSmall { indent: 1 }
        )))
    ));

    let a = render_args(&["-t", "[1, [2]]", "-i", "18446744073709551615"]);
    assert!(matches!(
        render_to_string(&a),
        Err(ArtError::Render(RenderError::InvalidArgument(
            ConfigError::IndentTooLarge { indent: usize::MAX }
        )))
    ));

    let a = render_args(&["-t", "[1, [2,"]);
    let Err(ArtError::Parse(e)) = render_to_string(&a) else {
        panic!("expected a parse error");
    };
    assert!(matches!(e.kind, ParseErrorKind::UnexpectedEnd));
}

#[test]
fn test_rejected_arguments() {
    // file and inline tree together
    assert!(Cli::try_parse_from(["tree-art", "render", "f.txt", "-t", "[1, []]"]).is_err());
    // separator is a single char
    assert!(Cli::try_parse_from(["tree-art", "render", "-s", ".."]).is_err());
    assert!(Cli::try_parse_from(["tree-art", "render", "-f", "yaml"]).is_err());
    assert!(Cli::try_parse_from(["tree-art", "examples"]).is_ok());
}

#[test]
fn test_samples_all_render() {
    for &(src, indent, separator) in SAMPLES {
        let tree = parse_literal(src).unwrap();
        let out = render_tree(&tree, indent, separator).unwrap();
        assert!(!out.is_empty(), "{src}");
    }
}
