//! # Container Splicing
//!
//! Single pass over the lines of `StoryTree.js` that turns the member classes
//! into private members of `StoryTree`:
//!
//! - every `alert` is rewritten to `throw`, in the container and in the members,
//! - the members are injected, tab indented, right after the first line
//!   holding a `{`,
//! - the first line holding `};` is dropped so that brace stays open,
//! - lines after both of those points are tab indented,
//! - a closing `};` is appended at the end.
//!
//! The pass is purely textual. Nothing here knows javascript.

use super::types::{Members, SpliceOutcome};

/// Comment emitted between the injected members and the rest of the container.
pub const MEMBERS_COMMENT: &str = "\t//These are the members of StoryTree \n";

/// Appended after the last container line to close the brace kept open.
pub const CLOSING_MARKER: &str = "\n};";

const INDENT: char = '\t';
const MEMBER_SEPARATOR: &str = "\n\n";

/// Turns `\r\n` and lone `\r` line breaks into `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Replaces every `alert` with `throw`, anywhere on the line.
pub fn rewrite_keywords(line: &str) -> String {
    line.replace("alert", "throw")
}

/// Splices `members` into `container`.
///
/// Line breaks in the container and the members are normalized to `\n`
/// first, so the output only ever holds `\n`. Returns the bundled text together with where the splice points landed.
pub fn splice(container: &str, members: &Members) -> (String, SpliceOutcome) {
    let mut splicer = Splicer::new(members);

    let container = normalize_line_endings(container);
    for (index, line) in container.split_inclusive('\n').enumerate() {
        splicer.push_line(index + 1, &rewrite_keywords(line));
    }

    splicer.finish()
}

struct Splicer<'a> {
    members: &'a Members,
    inject_pending: bool,
    seen_open_brace: bool,
    seen_close_brace: bool,
    output: String,
    outcome: SpliceOutcome,
}

impl<'a> Splicer<'a> {
    fn new(members: &'a Members) -> Self {
        Splicer {
            members,
            inject_pending: false,
            seen_open_brace: false,
            seen_close_brace: false,
            output: String::new(),
            outcome: SpliceOutcome::default(),
        }
    }

    fn push_line(&mut self, number: usize, line: &str) {
        // Injection is armed by the previous line, so it lands right after it.
        if self.inject_pending {
            self.inject_members();
            self.inject_pending = false;
            self.outcome.injected_after_line = Some(number - 1);
        }

        if line.contains("};") && !self.seen_close_brace {
            self.seen_close_brace = true;
            self.outcome.dropped_line = Some(number);
            return;
        }

        if self.seen_open_brace && self.seen_close_brace {
            self.output.push(INDENT);
        }
        self.output.push_str(line);

        if line.contains('{') && !self.seen_open_brace {
            self.seen_open_brace = true;
            self.inject_pending = true;
        }
    }

    fn inject_members(&mut self) {
        for member in self.members.in_order() {
            let member = normalize_line_endings(member);
            for line in member.split_inclusive('\n') {
                self.output.push(INDENT);
                self.output.push_str(&rewrite_keywords(line));
            }
            self.output.push_str(MEMBER_SEPARATOR);
        }

        self.output.push_str(MEMBER_SEPARATOR);
        self.output.push_str(MEMBERS_COMMENT);
    }

    fn finish(mut self) -> (String, SpliceOutcome) {
        self.output.push_str(CLOSING_MARKER);
        (self.output, self.outcome)
    }
}
