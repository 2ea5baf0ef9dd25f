//! Depth-first tree walk producing box-drawing text, one line per node.
//!
//! The walk keeps an explicit stack instead of recursing, so nesting depth is
//! bounded by memory rather than the call stack. `path` holds the
//! last-sibling flag of every node between the root and the node being
//! drawn; it is truncated to the current depth before each visit, so one
//! subtree never sees flags left behind by its siblings.

use std::fmt::Write;

use crate::{
    core::{
        config::Config,
        error::{ConfigError, RenderError, TreeFault},
        validate::{is_shorthand_pair, validate},
        value::{Scalar, Value},
    },
    render::layout::Gutter,
};

const NO_CHILDREN: &[Value] = &[];

/// Something still to be drawn.
#[derive(Clone, Copy)]
enum Item<'a> {
    /// A sequence that has to validate as a `[label, children]` pair.
    Pair(&'a [Value]),
    /// A scalar child; drawn as a leaf without validation.
    Leaf(&'a Scalar),
}

#[derive(Clone, Copy)]
struct Visit<'a> {
    item: Item<'a>,
    depth: usize,
    is_last: bool,
}

/// Immutable tree-art renderer; reusable and safe to share.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: Config,
    gutter: Gutter,
}

impl Renderer {
    /// Fails when `config` was assembled by hand with an invalid field.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            gutter: Gutter::new(&config),
            config,
        })
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render the whole tree, or nothing at all.
    pub fn render(&self, tree: &Value) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(tree, &mut out)?;
        Ok(out)
    }

    /// Render into `out`. After an error, whatever was already written to
    /// `out` is unspecified and should be discarded.
    pub fn render_into<W: Write>(&self, tree: &Value, out: &mut W) -> Result<(), RenderError> {
        let root = tree.as_seq().ok_or(TreeFault::NotAPair)?;

        let mut stack = vec![Visit {
            item: Item::Pair(root),
            depth: 0,
            is_last: true,
        }];
        let mut path: Vec<bool> = Vec::new();

        while let Some(Visit {
            item,
            depth,
            is_last,
        }) = stack.pop()
        {
            path.truncate(depth.saturating_sub(1));
            if depth > 0 {
                path.push(is_last);
            }

            let (label, children) = match item {
                Item::Leaf(label) => (label, NO_CHILDREN),
                Item::Pair(items) => {
                    let pair = validate(items)?;
                    (pair.label, pair.children)
                }
            };
            self.gutter.write_line(out, &path, label)?;

            if is_shorthand_pair(children) {
                stack.push(Visit {
                    item: Item::Pair(children),
                    depth: depth + 1,
                    is_last: true,
                });
                continue;
            }

            // reversed so the first child pops first
            let last = children.len().saturating_sub(1);
            for (i, child) in children.iter().enumerate().rev() {
                let item = match child {
                    Value::Seq(items) => Item::Pair(items),
                    Value::Scalar(label) => Item::Leaf(label),
                };
                stack.push(Visit {
                    item,
                    depth: depth + 1,
                    is_last: i == last,
                });
            }
        }
        Ok(())
    }
}
