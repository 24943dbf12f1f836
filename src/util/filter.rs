//! Label matching used by the quick filter.
//! A query either hides or shows a label; there is no ranking.

use crate::config::FilterConfig;

/// Trait for items that can be shown or hidden by a filter pass.
/// Implementors expose the text to match and accept the visibility result.
pub trait Filterable {
    fn filter_label(&self) -> &str;
    fn set_visible(&mut self, visible: bool);
}

/// Decide whether `label` stays visible for `query`.
///
/// Queries shorter than `min_length` characters show everything. Otherwise the
/// label matches when any whitespace-delimited token, the whitespace-stripped
/// query, or the collapsed query itself occurs in the label.
pub fn matches(query: &str, label: &str, config: &FilterConfig) -> bool {
    if query.chars().count() < config.min_length {
        return true;
    }

    let (query, label) = if config.case_sensitive {
        (query.to_string(), label.to_string())
    } else {
        (query.to_lowercase(), label.to_lowercase())
    };

    let collapsed = collapse_whitespace(&query);
    let merged_label = strip_whitespace(&label);

    if collapsed
        .split(' ')
        .any(|token| !token.is_empty() && merged_label.contains(token))
    {
        return true;
    }

    merged_label.contains(&strip_whitespace(&collapsed)) || label.contains(&collapsed)
}

/// Run one full pass over `items`, recomputing every visibility from scratch.
/// Returns the number of items left visible.
pub fn apply_filter<T: Filterable>(items: &mut [T], query: &str, config: &FilterConfig) -> usize {
    let mut visible = 0;
    for item in items.iter_mut() {
        let hit = matches(query, item.filter_label(), config);
        item.set_visible(hit);
        if hit {
            visible += 1;
        }
    }
    visible
}

/// Replace every run of two or more whitespace characters with one space.
/// A single whitespace character is kept as typed.
pub fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut run = String::new();

    for ch in input.chars() {
        if ch.is_whitespace() {
            run.push(ch);
            continue;
        }
        flush_run(&mut out, &mut run);
        out.push(ch);
    }
    flush_run(&mut out, &mut run);
    out
}

fn flush_run(out: &mut String, run: &mut String) {
    if run.chars().nth(1).is_some() {
        out.push(' ');
    } else {
        out.push_str(run);
    }
    run.clear();
}

#[inline]
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|ch| !ch.is_whitespace()).collect()
}
