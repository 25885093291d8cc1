//! One dropdown row bound to one record

use super::templates::{Templates, ROW_TEMPLATE};
use super::view::RenderedRow;
use crate::error::Result;
use crate::results::ResultRecord;
use serde::Serialize;

#[derive(Serialize)]
struct RowContext<'a> {
    index: usize,
    label: &'a str,
    permalink: &'a str,
}

/// Reported by a row when the user chose it; the owner collapses the list
/// and commits the record.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSelected {
    pub index: usize,
    pub record: ResultRecord,
}

/// Presents a single record as a clickable row
#[derive(Debug, Clone)]
pub struct RowPresenter {
    index: usize,
    record: ResultRecord,
}

impl RowPresenter {
    pub fn new(index: usize, record: ResultRecord) -> Self {
        Self { index, record }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn record(&self) -> &ResultRecord {
        &self.record
    }

    /// Label, link and markup for the bound record
    pub fn render(&self, templates: &Templates) -> Result<RenderedRow> {
        let label = self.record.label();
        let permalink = self.record.permalink();
        let markup = templates.render(
            ROW_TEMPLATE,
            &RowContext {
                index: self.index,
                label,
                permalink: &permalink,
            },
        )?;

        Ok(RenderedRow {
            index: self.index,
            label: label.to_string(),
            permalink,
            markup: markup.trim_end().to_string(),
        })
    }

    /// The user clicked this row
    pub fn select(&self) -> RowSelected {
        RowSelected {
            index: self.index,
            record: self.record.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let templates = Templates::new().unwrap();
        let row = RowPresenter::new(
            2,
            ResultRecord::new("Pea <soup>", "example.com/?p=1", "recipe", "pea"),
        );

        let rendered = row.render(&templates).unwrap();
        assert_eq!(rendered.index, 2);
        assert_eq!(rendered.label, "Pea <soup>");
        assert_eq!(rendered.permalink, "http://example.com/recipe/pea/");
        assert_eq!(
            rendered.markup,
            r#"<li class="autocomplete-row"><a href="http://example.com/recipe/pea/">Pea &lt;soup&gt;</a></li>"#
        );
    }

    #[test]
    fn test_render_is_pure() {
        let templates = Templates::new().unwrap();
        let row = RowPresenter::new(0, ResultRecord::new("A", "example.com/a", "post", "a"));
        assert_eq!(row.render(&templates).unwrap(), row.render(&templates).unwrap());
    }

    #[test]
    fn test_select_reports_record() {
        let record = ResultRecord::new("A", "example.com/a", "post", "a");
        let row = RowPresenter::new(4, record.clone());
        let selected = row.select();
        assert_eq!(selected.index, 4);
        assert_eq!(selected.record, record);
        assert_eq!(row.record(), &record);
        assert_eq!(row.index(), 4);
    }
}
