use std::{
    fs,
    io::{self, Read, Write},
    time::Instant,
};

use crate::{
    core::{config::Config, error::ArtError, json, literal},
    render::Renderer,
};

use super::parse::{InputFormat, RenderArgs};

/// Sample trees as `(input, indent, separator)`.
pub const SAMPLES: &[(&str, usize, char)] = &[
    ("[[[1, [True, ['abc', 'def']]], [2, [3.14159, 6.023e23]]], 42]", 4, '.'),
    (
        "[[[1, [[True, ['abc', 'def']], [False, [1, 2]]]], [2, [3.14159, 6.023e23, 2.718281828]], [3, ['x', 'y']], [4, []]], 42]",
        4,
        '.',
    ),
    ("[6, [[[[1, [2, 3]], [42, [-43, 44]]], 4], 5]]", 2, ' '),
    (r"[6, [5, ['dva\nradky']]]", 2, ' '),
];

fn read_source(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut s = String::new();
        io::stdin().read_to_string(&mut s)?;
        Ok(s)
    } else {
        fs::read_to_string(path)
    }
}

/// Read, parse and render according to `a`, without printing the tree.
pub fn render_to_string(a: &RenderArgs) -> Result<String, ArtError> {
    let t_ingest = Instant::now();
    let src = match &a.tree {
        Some(inline) => inline.clone(),
        None => read_source(&a.file)?,
    };
    let tree = match a.format {
        InputFormat::Literal => literal::parse(&src)?,
        InputFormat::Json => json::parse(&src)?,
    };
    let dur_ingest = t_ingest.elapsed().as_micros();

    let cfg = Config::builder()
        .indent(a.indent)
        .separator(a.separator)
        .build()?;

    let t_render = Instant::now();
    let text = Renderer::new(cfg)?.render(&tree)?;
    if a.debug {
        eprintln!(
            "ingest: {dur_ingest} µs   render: {} µs   ({} bytes)",
            t_render.elapsed().as_micros(),
            text.len()
        );
    }
    Ok(text)
}

pub fn render(a: &RenderArgs) -> Result<(), ArtError> {
    let text = render_to_string(a)?;
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Print every sample with its parameters and output.
pub fn examples() -> Result<(), ArtError> {
    let mut out = io::stdout().lock();
    for &(src, indent, separator) in SAMPLES {
        let cfg = Config::builder()
            .indent(indent)
            .separator(separator)
            .build()?;
        let text = Renderer::new(cfg)?.render(&literal::parse(src)?)?;
        writeln!(
            out,
            "INPUT:\n    {src}\n\nPARAMS:\n    indent = {indent}\n    separator = {separator:?}\n\nOUTPUT:\n{text}"
        )?;
    }
    out.flush()?;
    Ok(())
}
