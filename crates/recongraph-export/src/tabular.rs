//! Delimited-table export: one table for entities, one for links.
//!
//! Column layout is `base columns + sorted schema keys`, where the schema
//! comes from the property inferencer. The tabular format has no
//! referential-integrity requirement, so dangling links are exported
//! as-is.

use recongraph_core::{Graph, property_text};
use recongraph_error::{Error, Result};

/// Fixed leading columns of the entity table.
pub const ENTITY_BASE_COLUMNS: [&str; 3] = ["id", "type", "value"];

/// Fixed leading columns of the link table.
pub const LINK_BASE_COLUMNS: [&str; 3] = ["source", "target", "type"];

/// Serialize every entity to CSV using the inferred property schema.
/// Missing keys render as empty cells; nested values as compact JSON.
pub fn entities_csv(graph: &Graph, schema: &[String]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_header(&mut writer, &ENTITY_BASE_COLUMNS, schema)?;

    for entity in graph.entities() {
        let mut row = vec![
            entity.id.clone(),
            entity.kind.clone(),
            entity.value.clone(),
        ];
        for key in schema {
            row.push(
                entity
                    .properties
                    .get(key)
                    .map(property_text)
                    .unwrap_or_default(),
            );
        }
        writer.write_record(&row).map_err(csv_error)?;
    }

    finish(writer)
}

/// Serialize every link to CSV, dangling links included.
pub fn links_csv(graph: &Graph, schema: &[String]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_header(&mut writer, &LINK_BASE_COLUMNS, schema)?;

    for link in graph.links() {
        let mut row = vec![
            link.source.clone(),
            link.target.clone(),
            link.relation.clone(),
        ];
        for key in schema {
            row.push(
                link.properties
                    .get(key)
                    .map(property_text)
                    .unwrap_or_default(),
            );
        }
        writer.write_record(&row).map_err(csv_error)?;
    }

    finish(writer)
}

fn write_header(
    writer: &mut csv::Writer<Vec<u8>>,
    base: &[&str],
    schema: &[String],
) -> Result<()> {
    let mut header: Vec<&str> = base.to_vec();
    header.extend(schema.iter().map(String::as_str));
    writer.write_record(&header).map_err(csv_error)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|err| Error::serialization_failed(err.to_string()).with_operation("tabular::flush"))?;
    String::from_utf8(bytes).map_err(|err| {
        Error::new(recongraph_error::ErrorKind::EncodingError, err.to_string())
            .with_operation("tabular::finish")
            .set_source(err)
    })
}

fn csv_error(err: csv::Error) -> Error {
    Error::serialization_failed(err.to_string())
        .with_operation("tabular::write")
        .set_source(err)
}
