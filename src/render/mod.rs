//! ASCII tree-diagram layout
//!
//! Lays out a padded level-order snapshot as a 2-D diagram: values in
//! parens, one row per level, with `/` and `\` edges between rows. All
//! widths derive from the last level, since that is where cells sit
//! closest together.
//!
//! This is a pure function of the snapshot; callers decide where the
//! string goes.

use std::fmt::Display;
use std::fmt::Write as _;

/// Render a level-order snapshot as a multi-line tree diagram
///
/// The snapshot must have complete-binary-tree shape (length 2^h - 1),
/// as produced by [`level_order`](crate::tree::level_order); absent slots
/// render as empty parens. An empty snapshot yields an explicit
/// "empty" message. The last line is always the absent-filtered flat
/// array, for verification against the diagram.
pub fn render_diagram<T: Display>(snapshot: &[Option<T>]) -> String {
    let cells: Vec<String> = snapshot
        .iter()
        .map(|slot| match slot {
            Some(value) => value.to_string(),
            None => String::new(),
        })
        .collect();

    let mut out = String::new();
    if cells.is_empty() {
        out.push_str("Tree diagram is empty.\n");
        let _ = writeln!(out, "{}", array_line(snapshot));
        return out;
    }

    let num_items = cells.len();
    let num_levels = (num_items.ilog2() as usize) + 1;

    // One cell must fit the widest value of the last level, plus padding
    let last_level_start = (1 << (num_levels - 1)) - 1;
    let value_width = cells[last_level_start..]
        .iter()
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or(0);
    let cell_width = value_width + 1;

    // Total diagram width assumes a full last level
    let total_width = (1 << num_levels) * cell_width;

    for level in 0..num_levels {
        let start_index = (1 << level) - 1;
        let num_elems = 1 << level;
        let field_width = total_width / num_elems;
        let next_field_width = total_width / (num_elems * 2);

        let mut row = vec![' '; total_width];
        let mut target = round(field_width as f64 / 2.0);
        for index in start_index..start_index + num_elems {
            if index < num_items {
                let boxed = format!("({:>value_width$})", cells[index]);
                overwrite_centered(&mut row, target, &boxed);
            }
            target += field_width;
        }
        push_row(&mut out, &row);

        if level == num_levels - 1 {
            break;
        }

        // Edge row: one / \ pair per field, leaning toward the midpoints
        // of the two child fields below
        let mut edges = vec![' '; total_width];
        let field = field_width as f64;
        let next = next_field_width as f64;
        for elem in 0..num_elems {
            let indent = (elem * field_width) as f64;
            let left_idx = round((field / 2.0 + next / 2.0) / 2.0 + indent).saturating_sub(1);
            let right_idx = round((field / 2.0 + next * 1.5) / 2.0 + indent);
            if let Some(slot) = edges.get_mut(left_idx) {
                *slot = '/';
            }
            if let Some(slot) = edges.get_mut(right_idx) {
                *slot = '\\';
            }
        }
        push_row(&mut out, &edges);
    }

    let _ = writeln!(out, "{}", array_line(snapshot));
    out
}

/// Flat absent-filtered array view, the diagram's last line
fn array_line<T: Display>(snapshot: &[Option<T>]) -> String {
    let present: Vec<String> = snapshot
        .iter()
        .flatten()
        .map(|value| value.to_string())
        .collect();
    format!("Array: [{}]", present.join(", "))
}

/// Overwrite `text` into `row`, centered on column `center`
fn overwrite_centered(row: &mut [char], center: usize, text: &str) {
    let chars: Vec<char> = text.chars().collect();
    let left = center.saturating_sub(round(chars.len() as f64 / 2.0));
    for (offset, ch) in chars.into_iter().enumerate() {
        if let Some(slot) = row.get_mut(left + offset) {
            *slot = ch;
        }
    }
}

/// Round half away from zero, to a column index
fn round(x: f64) -> usize {
    x.round() as usize
}

fn push_row(out: &mut String, row: &[char]) {
    let line: String = row.iter().collect();
    out.push_str(line.trim_end());
    out.push('\n');
}
