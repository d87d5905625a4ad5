//! Render the same small schema in every output format.

use dbreportlib::{
    Document, FormattingHelper, FormattingOptions, OutputFormat, TextFormattingHelper,
};
use std::env;

fn main() {
    let formats: Vec<OutputFormat> = match env::args().nth(1) {
        Some(name) => match name.parse() {
            Ok(format) => vec![format],
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(2);
            }
        },
        None => OutputFormat::ALL.to_vec(),
    };

    for format in formats {
        let helper =
            FormattingHelper::with_options(format, FormattingOptions::new().title("sample"));

        let mut customers = Document::start(&helper).object("customers");
        customers
            .name_row("customers", "[table]")
            .detail_row("1", "id", "INTEGER")
            .detail_row("2", "name", "VARCHAR(100)");

        let mut orders = customers.end().object("orders");
        let arrow = orders.helper().create_arrow();
        orders
            .name_row("orders", "[table]")
            .detail_row("1", "id", "INTEGER")
            .detail_row("2", "customer_id", "INTEGER")
            .separator_row()
            .name_row("fk_orders_customers", "[foreign key]")
            .detail_row("", &format!("customer_id{arrow}customers.id"), "")
            .row_header(&["id", "customer_id"])
            .row(&["id", "customer_id"], &["1", "42"]);

        let rendered = orders.end().finish();
        println!("==== {format} ({} rows)", rendered.rows);
        print!("{}", rendered.content);
    }
}
