//! Catalog rendering through dbreportlib's document builder

use anyhow::bail;
use dbreportlib::{Document, RenderedDocument, TextFormattingHelper};

use crate::catalog::{Catalog, CatalogObject};

/// Check shapes the renderer expects callers to get right.
///
/// Runs before anything is rendered so a bad catalog never produces a
/// partial report.
pub fn validate(catalog: &Catalog) -> anyhow::Result<()> {
    for object in &catalog.objects {
        if let Some(data) = &object.data {
            for (i, row) in data.rows.iter().enumerate() {
                if row.len() != data.columns.len() {
                    bail!(
                        "object '{}': data row {} has {} values but {} columns are declared",
                        object.name,
                        i + 1,
                        row.len(),
                        data.columns.len()
                    );
                }
            }
        }
    }
    Ok(())
}

/// Render a whole catalog as one document.
pub fn render_catalog<H: TextFormattingHelper>(
    catalog: &Catalog,
    helper: &H,
) -> anyhow::Result<RenderedDocument> {
    validate(catalog)?;

    let mut document = Document::start(helper);
    for object in &catalog.objects {
        document = render_object(document, object);
    }
    Ok(document.finish())
}

fn render_object<'h, H: TextFormattingHelper>(
    document: Document<'h, H>,
    object: &CatalogObject,
) -> Document<'h, H> {
    let mut section = document.object(&object.name);
    section.name_row(&object.name, &format!("[{}]", object.kind));

    if let Some(description) = &object.description {
        section.definition_row(description);
    }

    for column in &object.columns {
        let ordinal = column.ordinal.map(|o| o.to_string()).unwrap_or_default();
        section.detail_row(&ordinal, &column.name, &column.type_name);
    }

    if !object.foreign_keys.is_empty() {
        let arrow = section.helper().create_arrow();
        for fk in &object.foreign_keys {
            section
                .separator_row()
                .name_row(&fk.name, "[foreign key]")
                .detail_row("", &format!("{}{arrow}{}", fk.from, fk.to), "");
        }
    }

    if !object.properties.is_empty() {
        section.separator_row();
        for (name, value) in &object.properties {
            section.name_value_row(name, value);
        }
    }

    if let Some(definition) = &object.definition {
        section.definition_row(definition);
    }

    if let Some(source) = &object.source {
        section.preformatted(&format!("{}-source", object.name), source);
    }

    if let Some(data) = &object.data {
        section.empty_row().row_header(&data.columns);
        for row in &data.rows {
            section.row(&data.columns, row);
        }
    }

    section.end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Column, DataSample, ForeignKey};
    use dbreportlib::{FormattingHelper, FormattingOptions, OutputFormat};

    fn helper(format: OutputFormat) -> FormattingHelper {
        FormattingHelper::with_options(format, FormattingOptions::new().line_separator("\n"))
    }

    fn object(name: &str) -> CatalogObject {
        CatalogObject {
            name: name.to_string(),
            kind: "table".to_string(),
            description: None,
            columns: vec![],
            foreign_keys: vec![],
            properties: Default::default(),
            definition: None,
            source: None,
            data: None,
        }
    }

    fn sample_catalog() -> Catalog {
        let mut orders = object("orders");
        orders.columns = vec![
            Column {
                ordinal: Some(1),
                name: "id".to_string(),
                type_name: "INTEGER".to_string(),
            },
            Column {
                ordinal: None,
                name: "customer_id".to_string(),
                type_name: "INTEGER".to_string(),
            },
        ];
        orders.foreign_keys = vec![ForeignKey {
            name: "fk_customer".to_string(),
            from: "orders.customer_id".to_string(),
            to: "customers.id".to_string(),
        }];
        orders.properties.insert("owner".to_string(), "sales".to_string());
        orders.data = Some(DataSample {
            columns: vec!["id".to_string(), "customer_id".to_string()],
            rows: vec![vec!["1".to_string(), "42".to_string()]],
        });
        Catalog {
            objects: vec![orders, object("customers")],
        }
    }

    #[test]
    fn test_csv_rendering() {
        let rendered = render_catalog(&sample_catalog(), &helper(OutputFormat::Csv)).unwrap();
        let lines: Vec<&str> = rendered.content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "orders",
                "orders,[table]",
                "1,id,INTEGER",
                ",customer_id,INTEGER",
                ",,,",
                "fk_customer,[foreign key]",
                ",orders.customer_id --> customers.id,",
                ",,,",
                "owner,sales",
                ",,,",
                "id,customer_id",
                "1,42",
                "customers",
                "customers,[table]",
            ]
        );
        assert_eq!(rendered.objects, 2);
        assert_eq!(rendered.rows, 12);
    }

    #[test]
    fn test_row_count_matches_across_formats() {
        let catalog = sample_catalog();
        let counts: Vec<usize> = OutputFormat::ALL
            .iter()
            .map(|f| render_catalog(&catalog, &helper(*f)).unwrap().rows)
            .collect();
        assert_eq!(counts, vec![12, 12, 12]);
    }

    #[test]
    fn test_text_data_rows_are_delimited() {
        let rendered = render_catalog(&sample_catalog(), &helper(OutputFormat::Text)).unwrap();
        assert!(rendered.content.contains("\nid,customer_id\n1,42\n"));
    }

    #[test]
    fn test_description_and_source() {
        let mut view = object("active_orders");
        view.kind = "view".to_string();
        view.description = Some("Orders not yet shipped".to_string());
        view.source = Some("SELECT *\n  FROM orders".to_string());
        let catalog = Catalog {
            objects: vec![view],
        };

        let html = render_catalog(&catalog, &helper(OutputFormat::Html))
            .unwrap()
            .content;
        assert!(html.contains("<td class=\"description\">[view]</td>"));
        assert!(html.contains(">Orders not yet shipped</td>"));
        assert!(html.contains(
            "<tr><td colspan=\"3\" class=\"definition\"><pre id=\"active_orders-source\">SELECT *\n  FROM orders</pre></td></tr>"
        ));
    }

    #[test]
    fn test_mismatched_data_row_is_rejected() {
        let mut orders = object("orders");
        orders.data = Some(DataSample {
            columns: vec!["id".to_string()],
            rows: vec![vec!["1".to_string(), "extra".to_string()]],
        });
        let catalog = Catalog {
            objects: vec![orders],
        };
        let err = render_catalog(&catalog, &helper(OutputFormat::Csv)).unwrap_err();
        assert!(err.to_string().contains("data row 1 has 2 values"));
    }

    #[test]
    fn test_empty_catalog_renders_envelope_only() {
        let html = render_catalog(&Catalog::default(), &helper(OutputFormat::Html)).unwrap();
        assert_eq!(html.rows, 0);
        assert!(html.content.contains("<body>"));
        assert!(!html.content.contains("<table>"));
    }
}
