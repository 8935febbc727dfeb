use crate::config::ExtractLimits;
use crate::report::Table;
use crate::utils::clean_text;
use scraper::{Html, Selector};

/// Splits each `<table>` into a header row and data rows, in document
/// order
///
/// The first cell-bearing row counts as the header row when every one of
/// its cells is a `<th>` (which is how `<thead>` markup reads too); it is
/// consumed into `headers` and excluded from `rows`. Rows need not be
/// rectangular and are reported at whatever width they have. Rows with
/// no cells at all are dropped.
pub fn extract(doc: &Html, limits: &ExtractLimits) -> Vec<Table> {
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("th, td").unwrap();

    let mut tables = Vec::new();

    for table_el in doc.select(&table_selector).take(limits.max_tables) {
        let mut table = Table::default();
        let mut saw_first_row = false;

        for row in table_el.select(&row_selector) {
            let cells: Vec<_> = row.select(&cell_selector).collect();
            if cells.is_empty() {
                continue;
            }

            let texts = cells
                .iter()
                .map(|cell| clean_text(&cell.text().collect::<String>()))
                .collect::<Vec<_>>();

            if !saw_first_row {
                saw_first_row = true;
                if cells.iter().all(|cell| cell.value().name() == "th") {
                    table.headers = texts;
                    continue;
                }
            }

            if table.rows.len() >= limits.max_rows_per_table {
                ::log::debug!("Row cap reached for table {}", tables.len());
                break;
            }
            table.rows.push(texts);
        }

        tables.push(table);
    }

    tables
}
