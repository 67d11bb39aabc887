use egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::pairs::PairTable;

/// One line of the side panel edge listing.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRow {
    pub source: String,
    pub target: String,
    pub pre: f64,
    pub post: f64,
    pub alpha: Option<f32>,
    pub in_pre: bool,
    pub in_post: bool,
}

impl EdgeRow {
    pub fn from_table(table: &PairTable) -> Vec<EdgeRow> {
        table
            .edges()
            .map(|(key, entry)| {
                let (source, target) = key.endpoints();
                EdgeRow {
                    source: source.to_string(),
                    target: target.to_string(),
                    pre: entry.pre,
                    post: entry.post,
                    alpha: entry.alpha,
                    in_pre: entry.in_pre,
                    in_post: entry.in_post,
                }
            })
            .collect()
    }

    /// Which panels draw this edge: "a", "b" or "a+b".
    pub fn panels(&self) -> &'static str {
        match (self.in_pre, self.in_post) {
            (true, true) => "a+b",
            (true, false) => "a",
            (false, true) => "b",
            (false, false) => "-",
        }
    }

    pub fn alpha_text(&self) -> String {
        self.alpha
            .map(|alpha| format!("{alpha:.2}"))
            .unwrap_or_else(|| "-".to_string())
    }
}

pub fn show(ui: &mut Ui, rows: &[EdgeRow]) {
    let table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(35.0))
        .column(Column::auto().at_least(35.0))
        .column(Column::auto().at_least(40.0))
        .column(Column::auto().at_least(35.0));

    table
        .header(20.0, |mut header| {
            header.col(|ui| { ui.strong("Source"); });
            header.col(|ui| { ui.strong("Target"); });
            header.col(|ui| { ui.strong("Pre"); });
            header.col(|ui| { ui.strong("Post"); });
            header.col(|ui| { ui.strong("Alpha"); });
            header.col(|ui| { ui.strong("Panel"); });
        })
        .body(|mut body| {
            for edge in rows {
                body.row(20.0, |mut row| {
                    row.col(|ui| { ui.label(&edge.source); });
                    row.col(|ui| { ui.label(&edge.target); });
                    row.col(|ui| { ui.label(edge.pre.to_string()); });
                    row.col(|ui| { ui.label(edge.post.to_string()); });
                    row.col(|ui| { ui.label(edge.alpha_text()); });
                    row.col(|ui| { ui.label(edge.panels()); });
                })
            }
        });
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::pairs::ExclusionFilter;

    #[test]
    fn rows_mirror_the_pair_table() {
        let table = PairTable::from_reader(
            Cursor::new("h\nB\tA\t3\t6\nB\tC\t0\t2\nD\tE\t1\t0\n"),
            &ExclusionFilter::default(),
        )
        .unwrap();
        let rows = EdgeRow::from_table(&table);

        assert_eq!(rows.len(), 3);
        assert_eq!((rows[0].source.as_str(), rows[0].target.as_str()), ("A", "B"));
        assert_eq!(rows[0].alpha_text(), "0.50");
        assert_eq!(rows[0].panels(), "a+b");
        assert_eq!((rows[0].pre.to_string(), rows[0].post.to_string()), ("3".into(), "6".into()));
        assert_eq!(rows[1].alpha_text(), "-");
        assert_eq!(rows[1].panels(), "b");
        assert_eq!(rows[2].panels(), "a");
    }
}
