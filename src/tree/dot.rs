//! DOT rendering of the tree, for inspection with Graphviz.
//!
//! A pure read-only adapter over [`SuffixTree::nodes`]: one small-circle
//! vertex per node, one labeled edge per child, and optionally a dashed
//! edge per suffix link.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::registry::is_reserved;
use super::{EdgeEnd, NodeId, SuffixTree};

impl SuffixTree {
    /// Writes the tree as a DOT digraph to `path`.
    ///
    /// # Errors
    /// Propagates any I/O error from creating or writing the file.
    pub fn to_dot<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);
        self.write_dot(&mut out, false)?;
        out.flush()
    }

    /// Like [`to_dot`](SuffixTree::to_dot), additionally drawing a dashed
    /// edge for every suffix link.
    ///
    /// # Errors
    /// Propagates any I/O error from creating or writing the file.
    pub fn to_dot_with_suffix_links<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);
        self.write_dot(&mut out, true)?;
        out.flush()
    }

    fn write_dot<W: Write>(&self, out: &mut W, suffix_links: bool) -> io::Result<()> {
        writeln!(out, "digraph suffix_tree {{")?;
        writeln!(out, "    rankdir = LR;")?;
        writeln!(out, "    node [shape=circle, label=\"\", width=0.2];")?;
        for (id, node) in self.nodes() {
            writeln!(out, "    n{};", id.index())?;
            for &child in node.children().values() {
                writeln!(
                    out,
                    "    n{} -> n{} [label=\"{}\"];",
                    id.index(),
                    child.index(),
                    self.edge_label(child)
                )?;
            }
            if suffix_links {
                if let Some(link) = node.suffix_link() {
                    writeln!(
                        out,
                        "    n{} -> n{} [style=dashed];",
                        id.index(),
                        link.index()
                    )?;
                }
            }
        }
        writeln!(out, "}}")
    }

    /// Label of the edge entering `node`, escaped for DOT. Terminators are
    /// rendered as `\u{XXXX}` escapes so emitted files read cleanly.
    fn edge_label(&self, node: NodeId) -> String {
        let n = self.node(node);
        let end = match n.end() {
            EdgeEnd::Fixed(end) => end,
            EdgeEnd::Open => self.registry.containing(n.start()).end(),
        };
        let mut label = String::new();
        for &ch in &self.text[n.start()..end] {
            match ch {
                _ if is_reserved(ch) => label.push_str(&format!("\\\\u{{{:04X}}}", ch as u32)),
                '"' => label.push_str("\\\""),
                '\\' => label.push_str("\\\\"),
                _ => label.push(ch),
            }
        }
        label
    }
}
