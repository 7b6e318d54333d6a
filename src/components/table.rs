//! Appian read-only grids.
//!
//! Tables are found through a header cell whose `abbr` attribute carries the
//! column name. A column's position is not taken from the DOM order of the
//! header cells; Appian tags each header with a `headCell_<index>` class and
//! body cells line up with that index. Rows are addressed through their
//! `data-dnd-name="row N"` marker, which is one-based.
//!
//! Callers pass zero-based rows and get zero-based column indexes back.
//! Cells flagged `data-empty-grid-message` (the "No items available"
//! placeholder of an empty grid) never count as cells or rows.

use log::info;

use crate::components::resolve;
use crate::error::{no_such_element, WidgetError, WidgetResult};
use crate::query::xpath::{attr_equals, escape_string, normalized};
use crate::query::{Locator, MatchPolicy, Readiness};
use crate::{By, WebElement};

const WIDGET: &str = "table";

pub const COLUMN_TOKEN_PREFIX: &str = "headCell_";

const DATA_CELL: &str = "td[not(@data-empty-grid-message)]";

pub fn table_query(column: &str) -> String {
    format!(".//table[./thead/tr/th[{}]]", attr_equals("abbr", column))
}

/// The header cell for `column`, relative to a table element.
pub fn header_query(column: &str) -> String {
    format!("./thead/tr/th[@scope=\"col\" and {}]", attr_equals("abbr", column))
}

/// Body rows holding at least one real cell, relative to a table element.
pub fn data_rows_query() -> String {
    format!("./tbody/tr[./{}]", DATA_CELL)
}

/// The data cell at zero-based (`row`, `column_index`) of the table with `column`.
///
/// Fails with [`WidgetError::CellOutOfRange`] when either position has no
/// one-based form.
pub fn cell_query(column: &str, row: usize, column_index: usize) -> WidgetResult<String> {
    let out_of_range = || WidgetError::CellOutOfRange {
        column: column.to_string(),
        row,
        column_index,
    };
    let row_marker = row.checked_add(1).ok_or_else(out_of_range)?;
    let position = column_index.checked_add(1).ok_or_else(out_of_range)?;
    Ok(format!(
        "{}/tbody/tr[@data-dnd-name=\"row {}\"]/{}[{}]",
        table_query(column),
        row_marker,
        DATA_CELL,
        position
    ))
}

/// Decode the column index from a header cell's class list.
///
/// `"foo headCell_3 bar"` yields `Some(3)`.
pub fn parse_column_index(class: &str) -> Option<usize> {
    class
        .split_whitespace()
        .filter_map(|token| token.strip_prefix(COLUMN_TOKEN_PREFIX))
        .find_map(|suffix| suffix.parse().ok())
}

/// Find the table that has a column named `column`.
pub fn find_table<'a>(locator: &Locator<'a>, column: &str) -> WidgetResult<WebElement<'a>> {
    let query = table_query(column);
    resolve(locator, WIDGET, column, MatchPolicy::Exact, By::XPath(&query), Readiness::Visible)
}

/// Number of data rows in `table`, not counting an empty-grid placeholder.
pub fn row_count(table: &WebElement<'_>) -> WidgetResult<usize> {
    Ok(table.find_elements(By::XPath(&data_rows_query()))?.len())
}

/// Zero-based index of `column` within `table`.
pub fn column_index(table: &WebElement<'_>, column: &str) -> WidgetResult<usize> {
    let header = table.find_element(By::XPath(&header_query(column))).map_err(|e| {
        if e.is_no_such_element() {
            no_such_element(&format!("no header with abbr \"{}\" in table", column))
        } else {
            e
        }
    })?;
    let class = header.class_name()?.unwrap_or_default();
    parse_column_index(&class).ok_or_else(|| WidgetError::MissingColumnToken {
        column: column.to_string(),
        class,
    })
}

fn resolve_cell_query(locator: &Locator<'_>, column: &str, row: usize) -> WidgetResult<String> {
    let table = find_table(locator, column)?;
    let index = column_index(&table, column)?;
    cell_query(column, row, index)
}

/// The component rendered inside the cell at (`column`, `row`).
pub fn find_cell_component<'a>(
    locator: &Locator<'a>,
    column: &str,
    row: usize,
) -> WidgetResult<WebElement<'a>> {
    let query = format!("{}/*", resolve_cell_query(locator, column, row)?);
    resolve(locator, "table cell", column, MatchPolicy::Exact, By::XPath(&query), Readiness::Clickable)
}

/// Click the link in cell (`column`, `row`) whose hover text is `hover_text`.
pub fn click_link_by_hover_text(
    locator: &Locator<'_>,
    column: &str,
    row: usize,
    hover_text: &str,
) -> WidgetResult<()> {
    info!("table \"{}\" row {}: click link \"{}\"", column, row, hover_text);
    let query = format!(
        "{}/div/p/a[./span[{} = {}]]",
        resolve_cell_query(locator, column, row)?,
        normalized("text()"),
        escape_string(hover_text)
    );
    resolve(locator, "table link", hover_text, MatchPolicy::Exact, By::XPath(&query), Readiness::Clickable)?
        .click()
}

/// Click the hover button in cell (`column`, `row`).
///
/// Row action buttons only render once the cell has been clicked, so the
/// cell is clicked first.
pub fn click_button_by_hover_text(
    locator: &Locator<'_>,
    column: &str,
    row: usize,
    hover_text: &str,
) -> WidgetResult<()> {
    info!("table \"{}\" row {}: click button \"{}\"", column, row, hover_text);
    let cell = resolve_cell_query(locator, column, row)?;
    resolve(locator, "table cell", column, MatchPolicy::Exact, By::XPath(&cell), Readiness::Clickable)?
        .click()?;

    let query = format!(
        "{}/div/div/button[./span[{} = {}]]",
        cell,
        normalized("text()"),
        escape_string(hover_text)
    );
    resolve(locator, "table button", hover_text, MatchPolicy::Exact, By::XPath(&query), Readiness::Clickable)?
        .click()
}
