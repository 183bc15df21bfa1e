use tracing::debug;

use super::line::{ClassifiedLine, strip_comment};
use super::node::Node;

/// Node under construction. Children refer to other slots of the arena.
#[derive(Debug)]
struct PendingNode {
    name: String,
    is_dir: bool,
    children: Vec<usize>,
}

/// Assembles classified lines into a tree.
///
/// `ancestors[level]` holds the arena index of the directory new nodes at
/// `level` get attached to. Index 0 is always the root.
#[derive(Debug)]
pub struct TreeBuilder {
    arena: Vec<PendingNode>,
    ancestors: Vec<usize>,
    prev_level: usize,
}

impl TreeBuilder {
    const ROOT: usize = 0;

    /// Starts a tree from the root line. The root is always a directory,
    /// whatever its name looks like.
    pub fn new(root_line: &str) -> Self {
        let root_name = strip_comment(root_line.trim()).trim();
        let root_name = root_name.strip_suffix('/').unwrap_or(root_name);

        Self {
            arena: vec![PendingNode {
                name: root_name.to_string(),
                is_dir: true,
                children: Vec::new(),
            }],
            ancestors: vec![Self::ROOT],
            prev_level: 0,
        }
    }

    pub fn push(&mut self, line: ClassifiedLine) {
        let ClassifiedLine {
            level,
            name,
            is_dir,
        } = line;

        if level <= self.prev_level {
            self.ancestors.truncate(level + 1);
        } else if level >= self.ancestors.len() {
            // Skipped indentation levels attach to the deepest known directory
            let deepest = *self.ancestors.last().unwrap_or(&Self::ROOT);
            self.ancestors.resize(level + 1, deepest);
        }

        let parent = self.ancestors[level];
        let index = self.arena.len();
        debug!(
            "Attaching '{}' at level {} under '{}'",
            name, level, self.arena[parent].name
        );
        self.arena.push(PendingNode {
            name,
            is_dir,
            children: Vec::new(),
        });
        self.arena[parent].children.push(index);

        if is_dir {
            if level + 1 < self.ancestors.len() {
                self.ancestors[level + 1] = index;
            } else {
                self.ancestors.push(index);
            }
        }

        self.prev_level = level;
    }

    pub fn finish(mut self) -> Node {
        self.take_node(Self::ROOT, 0)
    }

    fn take_node(&mut self, index: usize, level: usize) -> Node {
        let pending = &mut self.arena[index];
        let name = std::mem::take(&mut pending.name);
        let is_dir = pending.is_dir;
        let child_indices = std::mem::take(&mut pending.children);

        let children = child_indices
            .into_iter()
            .map(|child| self.take_node(child, level + 1))
            .collect();

        Node {
            name,
            is_dir,
            level,
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(level: usize, name: &str, is_dir: bool) -> ClassifiedLine {
        ClassifiedLine {
            level,
            name: name.to_string(),
            is_dir,
        }
    }

    #[test]
    fn root_line_is_stripped_of_comment_and_slash() {
        let tree = TreeBuilder::new("  project/  # the root").finish();

        assert_eq!(tree.name, "project");
        assert!(tree.is_dir);
        assert_eq!(tree.level, 0);
    }

    #[test]
    fn root_is_a_directory_even_with_an_extension() {
        let tree = TreeBuilder::new("site.com").finish();
        assert!(tree.is_dir);
    }

    #[test]
    fn dedent_pops_back_to_the_common_ancestor() {
        let mut builder = TreeBuilder::new("root");
        builder.push(line(1, "a", true));
        builder.push(line(2, "b", true));
        builder.push(line(3, "deep.txt", false));
        builder.push(line(1, "c.txt", false));
        let tree = builder.finish();

        let names: Vec<_> = tree.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["a", "c.txt"]);
        assert_eq!(tree.children[0].children[0].children[0].name, "deep.txt");
    }

    #[test]
    fn skipped_levels_attach_to_the_deepest_directory() {
        let mut builder = TreeBuilder::new("root");
        builder.push(line(1, "a", true));
        builder.push(line(4, "orphan.txt", false));
        let tree = builder.finish();

        let a = tree.find_child("a").unwrap();
        let orphan = a.find_child("orphan.txt").unwrap();
        assert_eq!(orphan.level, 2);
    }

    #[test]
    fn children_of_a_file_go_to_the_enclosing_directory() {
        let mut builder = TreeBuilder::new("root");
        builder.push(line(1, "a", true));
        builder.push(line(2, "b", true));
        builder.push(line(1, "notes.txt", false));
        builder.push(line(2, "stray.txt", false));
        let tree = builder.finish();

        let stray = tree.find_child("stray.txt").unwrap();
        assert_eq!(stray.level, 1);
        assert!(tree.find_child("notes.txt").unwrap().children.is_empty());
        assert!(tree.find_child("a").unwrap().find_child("stray.txt").is_none());
    }

    #[test]
    fn later_directory_replaces_stale_ancestor() {
        let mut builder = TreeBuilder::new("root");
        builder.push(line(1, "first", true));
        builder.push(line(2, "x.txt", false));
        builder.push(line(1, "second", true));
        builder.push(line(2, "y.txt", false));
        let tree = builder.finish();

        assert!(tree.find_child("second").unwrap().find_child("y.txt").is_some());
        assert_eq!(tree.find_child("first").unwrap().children.len(), 1);
    }
}
