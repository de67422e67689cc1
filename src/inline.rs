use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::block::Inline;

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link pattern"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid bold pattern"));

/// Split a single line into text, bold and link spans.
///
/// Links are matched first over the whole line, then bold markers over the
/// text that is left between links. Unmatched markers stay literal.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    split_matches(text, &LINK, &mut spans, |caps| {
        Inline::link(&caps[1], &caps[2])
    });

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        match span {
            Inline::Text { text } => split_matches(&text, &BOLD, &mut out, |caps| {
                Inline::bold(&caps[1])
            }),
            other => out.push(other),
        }
    }
    out
}

fn split_matches(
    text: &str,
    pattern: &Regex,
    out: &mut Vec<Inline>,
    to_span: impl Fn(&Captures) -> Inline,
) {
    let mut last = 0;
    for caps in pattern.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            out.push(Inline::text(&text[last..whole.start()]));
        }
        out.push(to_span(&caps));
        last = whole.end();
    }
    if last < text.len() {
        out.push(Inline::text(&text[last..]));
    }
}
