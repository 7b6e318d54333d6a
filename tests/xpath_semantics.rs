//! Widget queries evaluated against small Appian-shaped documents.

use appian_widgets::components::table::{cell_query, data_rows_query, table_query};
use appian_widgets::components::{button, dropdown, label, search_input};
use appian_widgets::MatchPolicy;
use sxd_document::parser;
use sxd_xpath::nodeset::Node;
use sxd_xpath::{evaluate_xpath, Value};

/// Ids of the elements `query` selects in `xml`, in document order.
fn select_ids(xml: &str, query: &str) -> Vec<String> {
    let package = parser::parse(xml).expect("fixture parses");
    let document = package.as_document();
    match evaluate_xpath(&document, query).expect("query evaluates") {
        Value::Nodeset(nodes) => nodes
            .document_order()
            .into_iter()
            .filter_map(|node| match node {
                Node::Element(e) => e.attribute_value("id").map(str::to_string),
                _ => None,
            })
            .collect(),
        other => panic!("expected a node-set, got {:?}", other),
    }
}

const BUTTONS: &str = "<root>\
    <button id=\"plain\"><span>Submit</span></button>\
    <button id=\"longer\"><span>Submit  Request</span></button>\
    <button id=\"nbsp\"><span>Submit\u{a0}Now</span></button>\
    <button id=\"padded\"><span>  Submit </span></button>\
    </root>";

#[test]
fn exact_label_rejects_near_misses() {
    assert_eq!(
        select_ids(BUTTONS, &button::query("Submit", MatchPolicy::Exact)),
        vec!["plain", "padded"]
    );
}

#[test]
fn partial_label_accepts_extensions() {
    assert_eq!(
        select_ids(BUTTONS, &button::query("Submit", MatchPolicy::Partial)),
        vec!["plain", "longer", "nbsp", "padded"]
    );
}

#[test]
fn whitespace_runs_and_nbsp_compare_as_single_space() {
    assert_eq!(select_ids(BUTTONS, &button::query("Submit Request", MatchPolicy::Exact)), vec![
        "longer"
    ]);
    assert_eq!(select_ids(BUTTONS, &button::query("Submit Now", MatchPolicy::Exact)), vec![
        "nbsp"
    ]);
}

#[test]
fn labels_with_both_quote_kinds_still_match() {
    let xml = "<root><p id=\"quoted\">It's \"done\"</p><p id=\"other\">Its done</p></root>";
    assert_eq!(select_ids(xml, &label::query("It's \"done\"", MatchPolicy::Exact)), vec![
        "quoted"
    ]);
    assert_eq!(select_ids(xml, &label::query("\"done\"", MatchPolicy::Partial)), vec!["quoted"]);
}

const DROPDOWNS: &str = "<root>\
    <div><div><span>Status</span></div>\
      <div><div><div><div id=\"status\" role=\"combobox\" aria-controls=\"list_a\"/></div></div></div></div>\
    <div><div><span>Status (old)</span></div>\
      <div><div><div><div id=\"old\" role=\"combobox\" aria-disabled=\"true\"/></div></div></div></div>\
    <div><ul id=\"list_a\"><li id=\"a_high\"><div>High</div></li><li id=\"a_low\"><div>Low</div></li></ul></div>\
    <div><ul id=\"list_b\"><li id=\"b_high\"><div>High</div></li></ul></div>\
    </root>";

#[test]
fn disabled_comboboxes_are_not_triggers() {
    assert_eq!(select_ids(DROPDOWNS, &dropdown::trigger_query("Status", MatchPolicy::Partial)), vec![
        "status"
    ]);
    assert!(select_ids(DROPDOWNS, &dropdown::trigger_query("Status (old)", MatchPolicy::Exact))
        .is_empty());
}

#[test]
fn options_are_scoped_to_their_list() {
    assert_eq!(select_ids(DROPDOWNS, &dropdown::option_query("list_a", "High")), vec!["a_high"]);
    assert_eq!(select_ids(DROPDOWNS, &dropdown::option_query("list_b", "High")), vec!["b_high"]);
    assert!(select_ids(DROPDOWNS, &dropdown::option_query("list_b", "Low")).is_empty());
}

const STATUS_FIELDS: &str = "<root>\
    <div><div><span>Status</span></div>\
      <div><div><div><div id=\"status\" role=\"combobox\"/></div></div></div></div>\
    <div><div><span>Status Reason</span></div>\
      <div><div><div><div id=\"reason\" role=\"combobox\"/></div></div></div></div>\
    <div><div><span> Status\u{a0}</span></div>\
      <div><div><div><div id=\"padded\" role=\"combobox\"/></div></div></div></div>\
    </root>";

#[test]
fn exact_dropdown_trigger_rejects_longer_labels() {
    assert_eq!(
        select_ids(STATUS_FIELDS, &dropdown::trigger_query("Status", MatchPolicy::Exact)),
        vec!["status", "padded"]
    );
}

#[test]
fn partial_dropdown_trigger_accepts_longer_labels() {
    assert_eq!(
        select_ids(STATUS_FIELDS, &dropdown::trigger_query("Status", MatchPolicy::Partial)),
        vec!["status", "reason", "padded"]
    );
    assert_eq!(
        select_ids(STATUS_FIELDS, &dropdown::trigger_query("Reason", MatchPolicy::Partial)),
        vec!["reason"]
    );
}

const PICKERS: &str = "<root>\
    <div><div><span>Employee</span></div>\
      <div><div><div><input id=\"employee\" role=\"combobox\"/></div></div></div></div>\
    <div><div><span>Employee Manager</span></div>\
      <div><div><div><input id=\"manager\" role=\"combobox\"/></div></div></div></div>\
    <div><div><span>Former Employee</span></div>\
      <div><div><div><input id=\"former\" role=\"combobox\" aria-disabled=\"true\"/></div></div></div></div>\
    </root>";

#[test]
fn exact_search_trigger_rejects_longer_labels() {
    assert_eq!(
        select_ids(PICKERS, &search_input::trigger_query("Employee", MatchPolicy::Exact)),
        vec!["employee"]
    );
    assert!(select_ids(PICKERS, &search_input::trigger_query("Manager", MatchPolicy::Exact))
        .is_empty());
}

#[test]
fn partial_search_trigger_skips_disabled_inputs() {
    assert_eq!(
        select_ids(PICKERS, &search_input::trigger_query("Employee", MatchPolicy::Partial)),
        vec!["employee", "manager"]
    );
}

/// One suggestion row, with the paragraph at Appian's nesting depth.
fn suggestion(id: &str, tabindex: &str, paragraph: &str) -> String {
    format!(
        "<li id=\"{}\" role=\"option\" tabindex=\"{}\">\
         <div><div><div><div><div><div><p>{}</p></div></div></div></div></div></div></li>",
        id, tabindex, paragraph
    )
}

fn suggestions() -> String {
    let rows = [
        suggestion("plain", "-1", "Jane Doe"),
        suggestion("nbsp", "-1", "Jane\u{a0}Doe"),
        suggestion("spaced", "-1", "  Jane \n  Doe "),
        suggestion("styled", "-1", "<b>Jane</b> Doe"),
        suggestion("longer", "-1", "Jane Doe Smith"),
        suggestion("focused", "0", "Jane Doe"),
    ];
    format!(
        "<root><ul id=\"picker_list\" role=\"listbox\">{}</ul>\
         <ul id=\"other_list\" role=\"listbox\">{}</ul></root>",
        rows.concat(),
        suggestion("elsewhere", "-1", "Jane Doe")
    )
}

#[test]
fn search_option_normalizes_paragraph_whitespace() {
    assert_eq!(
        select_ids(&suggestions(), &search_input::option_query("picker_list", "Jane Doe")),
        vec!["plain", "nbsp", "spaced", "styled"]
    );
}

#[test]
fn search_option_rejects_partial_text() {
    assert!(select_ids(&suggestions(), &search_input::option_query("picker_list", "Jane"))
        .is_empty());
    assert_eq!(
        select_ids(&suggestions(), &search_input::option_query("other_list", "Jane Doe")),
        vec!["elsewhere"]
    );
}

const TABLE: &str = "<root><table id=\"grid\">\
    <thead><tr>\
      <th scope=\"col\" abbr=\"Name\" class=\"headCell_0\"/>\
      <th scope=\"col\" abbr=\"Status\" class=\"headCell_1\"/>\
    </tr></thead>\
    <tbody>\
      <tr id=\"r1\" data-dnd-name=\"row 1\"><td id=\"r1c0\">A</td><td id=\"r1c1\">Open</td></tr>\
      <tr id=\"r2\" data-dnd-name=\"row 2\"><td id=\"r2c0\">B</td><td id=\"r2c1\">Closed</td></tr>\
      <tr id=\"r3\" data-dnd-name=\"row 3\"><td id=\"r3c0\">C</td><td id=\"r3c1\">Open</td></tr>\
      <tr id=\"r4\" data-dnd-name=\"row 4\"><td id=\"r4c0\">D</td><td id=\"r4c1\">Open</td></tr>\
      <tr id=\"empty\"><td id=\"placeholder\" data-empty-grid-message=\"\">No items available</td></tr>\
    </tbody></table></root>";

#[test]
fn placeholder_row_is_not_counted() {
    let rows = format!("//table{}", &data_rows_query()[1..]);
    assert_eq!(select_ids(TABLE, &rows), vec!["r1", "r2", "r3", "r4"]);
}

#[test]
fn table_found_by_column_abbr() {
    assert_eq!(select_ids(TABLE, &table_query("Status")), vec!["grid"]);
    assert!(select_ids(TABLE, &table_query("Owner")).is_empty());
}

#[test]
fn cell_query_addresses_row_and_column() {
    assert_eq!(select_ids(TABLE, &cell_query("Status", 1, 1).unwrap()), vec!["r2c1"]);
    assert_eq!(select_ids(TABLE, &cell_query("Name", 3, 0).unwrap()), vec!["r4c0"]);
    assert!(select_ids(TABLE, &cell_query("Name", 4, 0).unwrap()).is_empty());
}
