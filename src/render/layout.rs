//! Per-line chrome: ancestor prefix segments and branch connectors.
//!
//! Every segment is exactly `indent` chars wide, so they are built once per
//! renderer and copied into each line.

use std::fmt::{self, Write};

use crate::core::{
    config::Config,
    constants::{ARROW, CORNER, HORIZONTAL, TEE, VERTICAL},
};

#[derive(Debug, Clone)]
pub(crate) struct Gutter {
    /// Under an ancestor that still has siblings below it
    bar: String,
    /// Under an ancestor that was the last of its siblings
    blank: String,
    tee: String,
    corner: String,
}

impl Gutter {
    /// `cfg` must already be validated (`2 <= indent <= MAX_INDENT`).
    pub(crate) fn new(cfg: &Config) -> Self {
        let fill = cfg.separator.to_string();
        let body = HORIZONTAL.to_string().repeat(cfg.indent - 2);
        Self {
            bar: format!("{VERTICAL}{}", fill.repeat(cfg.indent - 1)),
            blank: fill.repeat(cfg.indent),
            tee: format!("{TEE}{body}{ARROW}"),
            corner: format!("{CORNER}{body}{ARROW}"),
        }
    }

    /// Write one logical line for a node whose path below the root is
    /// `path` (`path[k]` tells whether the node at depth `k + 1` is the last
    /// of its siblings; the final entry is the node itself).
    ///
    /// Line breaks inside `label` go out untouched.
    pub(crate) fn write_line<W: Write>(
        &self,
        out: &mut W,
        path: &[bool],
        label: &impl fmt::Display,
    ) -> fmt::Result {
        if let Some((&is_last, ancestors)) = path.split_last() {
            for &done in ancestors {
                out.write_str(if done { &self.blank } else { &self.bar })?;
            }
            out.write_str(if is_last { &self.corner } else { &self.tee })?;
        }
        writeln!(out, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gutter(indent: usize, separator: char) -> Gutter {
        Gutter::new(&Config { indent, separator })
    }

    fn line(g: &Gutter, path: &[bool], label: &str) -> String {
        let mut s = String::new();
        g.write_line(&mut s, path, &label).unwrap();
        s
    }

    #[test]
    fn segments_are_indent_wide() {
        for indent in 2..8 {
            let g = gutter(indent, '.');
            for seg in [&g.bar, &g.blank, &g.tee, &g.corner] {
                assert_eq!(seg.chars().count(), indent, "segment {seg:?}");
            }
        }
    }

    #[test]
    fn minimal_connector_has_no_body() {
        let g = gutter(2, ' ');
        assert_eq!(g.tee, "├>");
        assert_eq!(g.corner, "└>");
        assert_eq!(g.bar, "│ ");
        assert_eq!(g.blank, "  ");
    }

    #[test]
    fn prefix_follows_path_flags() {
        let g = gutter(4, '.');
        assert_eq!(line(&g, &[], "root"), "root\n");
        assert_eq!(line(&g, &[false], "a"), "├──>a\n");
        assert_eq!(line(&g, &[true], "a"), "└──>a\n");
        assert_eq!(line(&g, &[false, true], "b"), "│...└──>b\n");
        assert_eq!(line(&g, &[true, false, true], "c"), "....│...└──>c\n");
    }

    #[test]
    fn continuation_lines_are_not_indented() {
        let g = gutter(2, ' ');
        assert_eq!(line(&g, &[true, true], "dva\nradky"), "  └>dva\nradky\n");
    }
}
