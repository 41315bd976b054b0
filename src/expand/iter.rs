use super::parser::{Node, Sequence};

/// Lazy iterator over the expansions of a [`BracePattern`].
///
/// Works an explicit stack of partial expansions: each frame pairs the text
/// built so far with the nodes still to render.  Rendering a literal extends
/// the text; rendering a group forks the frame once per alternative.  A frame
/// with nothing left to render is a finished string.  Depth-first, so one
/// complete expansion is produced per `next` call without materializing the
/// rest.
///
/// [`BracePattern`]: super::BracePattern
pub struct Expansions<'a> {
    stack: Vec<Frame<'a>>,
}

struct Frame<'a> {
    built: String,
    /// Nodes still to render, stored in reverse so `pop` yields them in order.
    rest: Vec<&'a Node>,
}

impl<'a> Expansions<'a> {
    pub(crate) fn new(root: &'a [Sequence]) -> Self {
        // Push alternatives in reverse so the first one is expanded first.
        let stack = root
            .iter()
            .rev()
            .map(|alt| Frame {
                built: String::new(),
                rest: alt.nodes.iter().rev().collect(),
            })
            .collect();
        Self { stack }
    }
}

impl Iterator for Expansions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(Frame { mut built, mut rest }) = self.stack.pop() {
            match rest.pop() {
                None => return Some(built),
                Some(Node::Literal(text)) => {
                    built.push_str(text);
                    self.stack.push(Frame { built, rest });
                }
                Some(Node::Group(alternatives)) => {
                    for alt in alternatives.iter().rev() {
                        let mut forked = rest.clone();
                        forked.extend(alt.nodes.iter().rev());
                        self.stack.push(Frame {
                            built: built.clone(),
                            rest: forked,
                        });
                    }
                }
            }
        }
        None
    }
}
