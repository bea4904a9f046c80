//! Output formatting for describe command results.

use super::execute::DescribeResult;
use crate::definition::{HubReference, SatelliteAttributeDefinition};
use crate::introspect::EntityDefinition;
use crate::output::{Outputable, format_columns};
use crate::sql::ColumnDataType;

impl Outputable for DescribeResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        match &self.definition {
            EntityDefinition::Hub(hub) => {
                lines.push(format!("Hub: {} (rev {})", hub.name, hub.revision));
                lines.push(format!("Table: {}.{}", self.schema, self.table));
                lines.push(String::new());
                lines.push(format!("Business keys ({}):", hub.business_keys.len()));
                lines.extend(hub.business_keys.iter().map(|k| format!("  {}", k)));
            }
            EntityDefinition::Link(link) => {
                lines.push(format!("Link: {} (rev {})", link.name, link.revision));
                lines.push(format!("Table: {}.{}", self.schema, self.table));
                lines.push(String::new());
                lines.push(format!("Hubs ({}):", link.hub_references.len()));
                lines.extend(link.hub_references.iter().map(|r| format!("  {}", reference_label(r))));
            }
            EntityDefinition::Satellite(satellite) => {
                lines.push(format!("Satellite: {} (rev {})", satellite.name, satellite.revision));
                lines.push(format!("Table: {}.{}", self.schema, self.table));
                if let Some(hub) = &satellite.hub_reference {
                    lines.push(format!("Hub: {}", reference_label(hub)));
                }
                lines.push(String::new());
                lines.push(format!("Attributes ({}):", satellite.attributes.len()));
                let rows: Vec<Vec<String>> = satellite
                    .attributes
                    .iter()
                    .map(|a| {
                        vec![
                            a.name.clone(),
                            type_label(a),
                            if a.is_nullable { "yes" } else { "no" }.to_string(),
                        ]
                    })
                    .collect();
                lines.extend(
                    format_columns(&["NAME", "TYPE", "NULLABLE"], &rows)
                        .into_iter()
                        .map(|line| format!("  {}", line)),
                );
            }
        }

        lines.join("\n")
    }
}

fn reference_label(reference: &HubReference) -> String {
    format!("{} (rev {})", reference.hub_name, reference.revision)
}

pub(crate) fn type_label(attribute: &SatelliteAttributeDefinition) -> String {
    match attribute.data_type {
        ColumnDataType::Decimal if attribute.length > 0 => format!(
            "DECIMAL({},{})",
            attribute.length, attribute.decimal_precision
        ),
        ColumnDataType::Char | ColumnDataType::Varchar | ColumnDataType::Integer if attribute.length > 0 => {
            format!("{}({})", attribute.data_type, attribute.length)
        }
        other => other.to_string(),
    }
}
