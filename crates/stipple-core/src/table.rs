//! Text renderings of a collection.
//!
//! Two human-facing views: a column-aligned table of (position, name,
//! kind) rows, and a one-line summary for sets too large or too empty for
//! a table to be useful. `Display` on [`ParticleSet`] picks between them.
//! These strings are inspection aids, not a data contract.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{DISPLAY_LIMIT, TABLE_PADDING};
use crate::manager::ParticleSet;

/// Column alignment for [`format_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    fn pad(&self, value: &str, width: usize) -> String {
        match self {
            Align::Left => format!("{value:<width$}"),
            Align::Center => format!("{value:^width$}"),
            Align::Right => format!("{value:>width$}"),
        }
    }
}

/// Layout knobs for [`format_table`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableOptions {
    pub align: Align,
    /// Spaces between columns.
    pub padding: usize,
    /// Emit the `NAME` / `KIND` header row.
    pub header: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            align: Align::default(),
            padding: TABLE_PADDING,
            header: true,
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aligned(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }
}

/// Column-aligned listing, one row per entry.
///
/// Column widths fit the widest cell, header included. Suppressing the
/// header omits the row entirely.
pub fn format_table(set: &ParticleSet, options: &TableOptions) -> String {
    let mut rows: Vec<[String; 3]> = Vec::new();
    if options.header {
        rows.push([String::new(), "NAME".to_string(), "KIND".to_string()]);
    }
    for (position, entry) in set.iter().enumerate() {
        rows.push([
            position.to_string(),
            entry.name().to_string(),
            entry.kind().to_string(),
        ]);
    }

    let mut widths = [0usize; 3];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let gap = " ".repeat(options.padding);
    rows.iter()
        .map(|row| {
            row.iter()
                .zip(widths)
                .map(|(cell, width)| options.align.pad(cell, width))
                .collect::<Vec<_>>()
                .join(&gap)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line census: count, first and last names, and the kind spread.
pub fn summarize(set: &ParticleSet) -> String {
    let names = set.names();
    match names.as_slice() {
        [] => "<< 0 particles >>".to_string(),
        [only] => format!("<< 1 particle ({only}) >>"),
        [first, .., last] => {
            let kinds = set.kinds();
            let kind_part = match kinds.as_slice() {
                [only] => format!("kind=\"{only}\""),
                several => format!("{} kinds", several.len()),
            };
            format!(
                "<< {} particles ({first}...{last}) / {kind_part} >>",
                names.len()
            )
        }
    }
}

impl fmt::Display for ParticleSet {
    /// Summary when empty or at [`DISPLAY_LIMIT`] and beyond, else the
    /// default table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() || self.len() >= DISPLAY_LIMIT {
            f.write_str(&summarize(self))
        } else {
            f.write_str(&format_table(self, &TableOptions::default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    fn two_kind_set() -> ParticleSet {
        let mut set = ParticleSet::new(testutil::factory());
        set.add(testutil::circle(1.0)).unwrap();
        set.add(testutil::dimer()).unwrap();
        set
    }

    #[test]
    fn test_align_pad() {
        assert_eq!(Align::Left.pad("ab", 4), "ab  ");
        assert_eq!(Align::Right.pad("ab", 4), "  ab");
        assert_eq!(Align::Center.pad("ab", 4), " ab ");
    }

    #[test]
    fn test_table_default_layout() {
        let table = format_table(&two_kind_set(), &TableOptions::default());
        let lines: Vec<&str> = table.lines().map(str::trim_end).collect();
        assert_eq!(
            lines,
            vec![
                "    NAME       KIND",
                "0   circle_0   circle",
                "1   dimer_0    dimer",
            ]
        );
    }

    #[test]
    fn test_table_right_align() {
        let options = TableOptions::new().aligned(Align::Right);
        let table = format_table(&two_kind_set(), &options);
        let header = table.lines().next().unwrap();
        assert_eq!(header, "        NAME     KIND");
    }

    #[test]
    fn test_table_without_header() {
        let mut set = ParticleSet::new(testutil::factory());
        set.add(testutil::circle(1.0)).unwrap();
        let options = TableOptions::new().without_header();
        assert_eq!(format_table(&set, &options), "0   circle_0   circle");
    }

    #[test]
    fn test_table_empty_set() {
        let set = ParticleSet::new(testutil::factory());
        let table = format_table(&set, &TableOptions::default());
        assert_eq!(table.trim_end(), "   NAME   KIND");
        assert_eq!(format_table(&set, &TableOptions::new().without_header()), "");
    }

    #[test]
    fn test_summary_empty_and_single() {
        let mut set = ParticleSet::new(testutil::factory());
        assert_eq!(summarize(&set), "<< 0 particles >>");
        set.add(testutil::circle(1.0)).unwrap();
        assert_eq!(summarize(&set), "<< 1 particle (circle_0) >>");
    }

    #[test]
    fn test_summary_kind_spread() {
        let mut set = ParticleSet::new(testutil::factory());
        for radius in [1.0, 2.0, 3.0] {
            set.add(testutil::circle(radius)).unwrap();
        }
        assert_eq!(
            summarize(&set),
            "<< 3 particles (circle_0...circle_2) / kind=\"circle\" >>"
        );
        set.add(testutil::dimer()).unwrap();
        assert_eq!(
            summarize(&set),
            "<< 4 particles (circle_0...dimer_0) / 2 kinds >>"
        );
    }

    #[test]
    fn test_align_serde() {
        let json = serde_json::to_string(&Align::Right).unwrap();
        assert_eq!(json, "\"right\"");
        let back: Align = serde_json::from_str("\"center\"").unwrap();
        assert_eq!(back, Align::Center);
    }

    #[test]
    fn test_display_picks_table_or_summary() {
        let mut set = ParticleSet::new(testutil::factory());
        assert_eq!(set.to_string(), "<< 0 particles >>");

        set.add(testutil::circle(1.0)).unwrap();
        assert!(set.to_string().contains("NAME"));

        while set.len() < DISPLAY_LIMIT {
            set.add(testutil::circle(1.0)).unwrap();
        }
        assert!(set.to_string().starts_with("<<"));
    }
}
