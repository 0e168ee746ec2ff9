// pathify/src/application/selector.rs

//! Interactive fuzzy selection over a list of paths.
//!
//! The loop alternates between two states:
//!
//! ```text
//!   Querying --matches--> Selecting --valid index--> done
//!      ^  |                   |
//!      |  +--no matches--+    |
//!      +------------------+---+ invalid index
//! ```
//!
//! Input and output are injected so the loop can be driven by scripted input.

use std::io::{BufRead, Write};

use crate::domain::error::DomainResult;
use crate::domain::matcher::{FuzzyMatch, FuzzyMatcher};
use tracing::{debug, instrument, trace};

pub const INSTRUCTIONS: &str =
    "Type to search paths. Press Enter to select. Press Ctrl+C to exit.";
pub const QUERY_PROMPT: &str = "> ";
pub const SELECT_PROMPT: &str = "Select a number: ";
pub const NO_MATCHES: &str = "No matches found.";
pub const INVALID_SELECTION: &str = "Invalid selection.";

#[derive(Debug)]
enum State {
    Querying,
    Selecting(Vec<FuzzyMatch>),
}

#[derive(Debug)]
pub struct Selector<'m, R, W> {
    matcher: &'m dyn FuzzyMatcher,
    input: R,
    output: W,
}

impl<'m, R: BufRead, W: Write> Selector<'m, R, W> {
    pub fn new(matcher: &'m dyn FuzzyMatcher, input: R, output: W) -> Self {
        Self {
            matcher,
            input,
            output,
        }
    }

    /// Run the loop until a valid selection is made.
    ///
    /// Returns `Ok(None)` when the input is exhausted before that, which is
    /// how a closed stdin (Ctrl+D, broken pipe) ends the session.
    #[instrument(skip_all, level = "debug", fields(candidates = candidates.len()))]
    pub fn run(&mut self, candidates: &[String]) -> DomainResult<Option<String>> {
        writeln!(self.output, "{}", INSTRUCTIONS)?;

        let mut state = State::Querying;
        loop {
            state = match state {
                State::Querying => {
                    let Some(query) = self.prompt(QUERY_PROMPT)? else {
                        return Ok(None);
                    };
                    let matches = self.matcher.find(&query, candidates);
                    debug!("Query {:?} matched {} candidates", query, matches.len());
                    if matches.is_empty() {
                        writeln!(self.output, "{}", NO_MATCHES)?;
                        State::Querying
                    } else {
                        for (i, m) in matches.iter().enumerate() {
                            writeln!(self.output, "{}: {}", i + 1, m.text)?;
                        }
                        State::Selecting(matches)
                    }
                }
                State::Selecting(mut matches) => {
                    let Some(answer) = self.prompt(SELECT_PROMPT)? else {
                        return Ok(None);
                    };
                    match parse_selection(&answer, matches.len()) {
                        Some(index) => {
                            trace!("Selected index {}", index);
                            return Ok(Some(matches.swap_remove(index - 1).text));
                        }
                        None => {
                            writeln!(self.output, "{}", INVALID_SELECTION)?;
                            State::Querying
                        }
                    }
                }
            };
        }
    }

    /// Print the prompt and read one line, without its terminator.
    /// `None` on end of input.
    fn prompt(&mut self, prompt: &str) -> DomainResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}

/// Parse a 1-based selection, `None` unless it lies in `[1, count]`.
fn parse_selection(input: &str, count: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=count).contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::matching::NucleoMatcher;
    use std::io::Cursor;

    /// Returns every candidate containing the query as a substring, list order.
    #[derive(Debug)]
    struct ContainsMatcher;

    impl FuzzyMatcher for ContainsMatcher {
        fn find(&self, query: &str, candidates: &[String]) -> Vec<FuzzyMatch> {
            if query.is_empty() {
                return Vec::new();
            }
            candidates
                .iter()
                .filter(|c| c.contains(query))
                .map(|c| FuzzyMatch {
                    text: c.clone(),
                    score: 1,
                })
                .collect()
        }
    }

    fn candidates() -> Vec<String> {
        vec!["/a/b".to_string(), "/a/c".to_string(), "/x/y".to_string()]
    }

    fn run_script(
        matcher: &dyn FuzzyMatcher,
        script: &str,
        candidates: &[String],
    ) -> (Option<String>, String) {
        let mut output = Vec::new();
        let result = Selector::new(matcher, Cursor::new(script), &mut output)
            .run(candidates)
            .unwrap();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn given_query_and_valid_index_when_run_then_returns_match() {
        let (selected, output) = run_script(&ContainsMatcher, "a\n2\n", &candidates());

        assert_eq!(selected.as_deref(), Some("/a/c"));
        assert!(output.starts_with(INSTRUCTIONS));
        assert!(output.contains("1: /a/b\n2: /a/c\n"));
        assert!(!output.contains("/x/y"));
        assert_eq!(output.matches(INSTRUCTIONS).count(), 1);
    }

    #[test]
    fn given_nucleo_matcher_when_select_first_then_returns_first_listed() {
        let matcher = NucleoMatcher::new();
        let (selected, output) = run_script(&matcher, "a\n1\n", &candidates());

        let first_listed = output
            .lines()
            .find_map(|l| l.strip_prefix("> 1: ").or_else(|| l.strip_prefix("1: ")))
            .unwrap();
        assert_eq!(selected.as_deref(), Some(first_listed));
        assert!(output.contains("/a/b"));
        assert!(output.contains("/a/c"));
        assert!(!output.contains("/x/y"));
    }

    #[test]
    fn given_no_matches_when_run_then_reports_and_queries_again() {
        let (selected, output) = run_script(&ContainsMatcher, "zzz\nx\n1\n", &candidates());

        assert_eq!(selected.as_deref(), Some("/x/y"));
        assert_eq!(output.matches(NO_MATCHES).count(), 1);
    }

    #[test]
    fn given_out_of_range_index_when_run_then_invalid_and_fresh_query() {
        let script = "a\n3\n/x\n1\n";
        let (selected, output) = run_script(&ContainsMatcher, script, &candidates());

        assert_eq!(selected.as_deref(), Some("/x/y"));
        assert_eq!(output.matches(INVALID_SELECTION).count(), 1);
        // the second query re-prompts with the query prompt, not the select prompt
        let after_invalid = &output[output.find(INVALID_SELECTION).unwrap()..];
        assert!(after_invalid.contains(QUERY_PROMPT));
    }

    #[test]
    fn given_non_numeric_or_zero_selection_when_run_then_invalid() {
        let script = "a\nfoo\na\n0\na\n-1\na\n 1 \n";
        let (selected, output) = run_script(&ContainsMatcher, script, &candidates());

        assert_eq!(selected.as_deref(), Some("/a/b"));
        assert_eq!(output.matches(INVALID_SELECTION).count(), 3);
    }

    #[test]
    fn given_empty_query_when_run_then_collaborator_policy_applies() {
        let matcher = NucleoMatcher::new();
        let (selected, output) = run_script(&matcher, "\n", &candidates());

        assert_eq!(selected, None);
        assert!(output.contains(NO_MATCHES));
    }

    #[test]
    fn given_empty_candidates_when_run_then_every_query_has_no_matches() {
        let (selected, output) = run_script(&ContainsMatcher, "a\nb\n", &[]);

        assert_eq!(selected, None);
        assert_eq!(output.matches(NO_MATCHES).count(), 2);
    }

    #[test]
    fn given_eof_while_selecting_when_run_then_no_selection() {
        let (selected, output) = run_script(&ContainsMatcher, "a\n", &candidates());

        assert_eq!(selected, None);
        assert!(output.ends_with(SELECT_PROMPT));
    }

    #[test]
    fn given_crlf_input_when_run_then_terminators_ignored() {
        let (selected, _) = run_script(&ContainsMatcher, "/a/b\r\n1\r\n", &candidates());
        assert_eq!(selected.as_deref(), Some("/a/b"));
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1", 3), Some(1));
        assert_eq!(parse_selection(" 3\t", 3), Some(3));
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("0", 3), None);
        assert_eq!(parse_selection("abc", 3), None);
        assert_eq!(parse_selection("", 3), None);
    }
}
