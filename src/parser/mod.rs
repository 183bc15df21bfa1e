//! Turns a hand-drawn directory tree into a [`Node`] tree.
//!
//! Nesting is inferred from the width of the drawing prefix of each line
//! rather than from any explicit delimiter, so the parser never rejects
//! oddly indented input. It only fails when there is nothing to parse.

mod line;
mod node;
mod normalize;
mod tree_builder;

pub use line::{ClassifiedLine, extract_name, parse_line};
pub use node::Node;
pub use normalize::normalize_tree_symbols;
pub use tree_builder::TreeBuilder;

use snafu::{OptionExt, Snafu, ensure};
use tracing::debug;

/// Parses the textual tree. The first non-blank line names the root.
pub fn parse_input(input: &str) -> Result<Node, ParseError> {
    let normalized = normalize_tree_symbols(input);
    ensure!(!normalized.trim().is_empty(), EmptyInputSnafu);

    let mut lines = normalized.lines().filter(|line| !line.trim().is_empty());
    let root_line = lines.next().context(EmptyInputSnafu)?;

    let mut builder = TreeBuilder::new(root_line);
    for classified in lines.filter_map(parse_line) {
        builder.push(classified);
    }

    let root = builder.finish();
    debug!("Parsed tree '{}' with {} nodes", root.name, root.count());
    Ok(root)
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum ParseError {
    #[snafu(display("Input is empty"))]
    EmptyInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child<'a>(node: &'a Node, name: &str) -> &'a Node {
        node.find_child(name)
            .unwrap_or_else(|| panic!("'{name}' not found under '{}'", node.name))
    }

    fn assert_levels_follow_parents(node: &Node) {
        for c in &node.children {
            assert_eq!(c.level, node.level + 1, "bad level for '{}'", c.name);
            assert_levels_follow_parents(c);
        }
    }

    #[test]
    fn parses_simple_structure() {
        let input = "project/\n├── src/\n│   └── main.go\n└── README.md";

        let root = parse_input(input).unwrap();

        assert_eq!(root.name, "project");
        assert!(root.is_dir);
        assert_eq!(root.level, 0);
        assert_eq!(root.children.len(), 2);

        let src = &root.children[0];
        assert_eq!(src.name, "src");
        assert!(src.is_dir);
        assert_eq!(src.level, 1);

        let main = &src.children[0];
        assert_eq!(main.name, "main.go");
        assert!(!main.is_dir);
        assert_eq!(main.level, 2);

        let readme = &root.children[1];
        assert_eq!(readme.name, "README.md");
        assert!(!readme.is_dir);
        assert_eq!(readme.level, 1);
    }

    #[test]
    fn parses_complex_structure() {
        let input = "\
app/
├── src/
│   ├── components/
│   │   ├── Button.js
│   │   └── Header.js
│   ├── utils/
│   │   └── helpers.js
│   └── index.js
├── public/
│   └── index.html
└── package.json";

        let root = parse_input(input).unwrap();

        assert_eq!(root.name, "app");
        assert_eq!(root.children.len(), 3);
        let src = child(&root, "src");
        assert_eq!(src.children.len(), 3);
        assert_eq!(child(src, "components").children.len(), 2);
        assert_eq!(child(src, "utils").children.len(), 1);
        assert_eq!(child(&root, "public").children.len(), 1);
        assert_levels_follow_parents(&root);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(parse_input(""), Err(ParseError::EmptyInput));
        assert_eq!(parse_input("  \n\t\n  "), Err(ParseError::EmptyInput));
    }

    #[test]
    fn comments_are_removed() {
        let input = "project/ # This is a comment\n├── src/ # Source code\n│   └── main.go # Main file\n└── README.md # Documentation";

        let root = parse_input(input).unwrap();

        assert_eq!(root.name, "project");
        assert_eq!(root.children.len(), 2);
        let src = child(&root, "src");
        assert_eq!(src.children[0].name, "main.go");
        assert_eq!(root.children[1].name, "README.md");
    }

    #[test]
    fn ascii_dialect_parses_like_box_drawing() {
        let ascii = parse_input("a/\n|-- b/\n|   |-- c.txt").unwrap();
        let boxed = parse_input("a/\n├── b/\n│   ├── c.txt").unwrap();

        assert_eq!(ascii, boxed);
        let b = child(&ascii, "b");
        assert!(b.is_dir);
        assert!(!child(b, "c.txt").is_dir);
    }

    #[test]
    fn ascii_tree_with_last_branch_marker() {
        let input = "project/\n|-- src/\n|   |-- main.go\n'-- README.md";

        let root = parse_input(input).unwrap();

        assert_eq!(root.children.len(), 2);
        assert_eq!(child(&root, "src").children[0].name, "main.go");
        assert!(child(&root, "README.md").children.is_empty());
    }

    #[test]
    fn blank_lines_are_ignored_anywhere() {
        let input = "\n\n  root/\n\n├── a.txt\n\n\n└── b/\n";

        let root = parse_input(input).unwrap();

        assert_eq!(root.name, "root");
        assert_eq!(root.children.len(), 2);
    }

    #[test]
    fn windows_line_endings_do_not_leak_into_names() {
        let root = parse_input("root/\r\n├── a.txt\r\n└── b/\r\n").unwrap();

        assert_eq!(root.children[0].name, "a.txt");
        assert_eq!(root.children[1].name, "b");
        assert!(root.children[1].is_dir);
    }

    #[test]
    fn root_consisting_of_a_comment_has_an_empty_name() {
        let root = parse_input("# just a comment\n├── a.txt").unwrap();

        assert_eq!(root.name, "");
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn levels_always_follow_the_tree_even_with_jumps() {
        let input = "root\n├── a/\n│   │   │   └── far.txt\n└── b.txt";

        let root = parse_input(input).unwrap();

        assert_eq!(child(child(&root, "a"), "far.txt").level, 2);
        assert_levels_follow_parents(&root);
    }
}
