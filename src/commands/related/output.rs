//! Output formatting for related command results.

use super::execute::RelatedResult;
use crate::definition::SatelliteDefinition;
use crate::output::Outputable;

impl Outputable for RelatedResult {
    fn to_table(&self) -> String {
        let relations = &self.relations;
        let mut lines = vec![
            format!("Hub: {} (rev {})", relations.hub.name, relations.hub.revision),
            format!("Business keys: {}", join_or_none(&relations.hub.business_keys)),
            String::new(),
            format!("Satellites ({}):", relations.satellites.len()),
        ];
        lines.extend(relations.satellites.iter().map(|s| format!("  {}", satellite_line(s))));

        lines.push(String::new());
        lines.push(format!("Links ({}):", relations.links.len()));
        for link in &relations.links {
            lines.push(format!("  {} (rev {})", link.link.name, link.link.revision));
            for related in &link.hubs {
                lines.push(format!(
                    "    {} (rev {}) keys: {}",
                    related.hub.name,
                    related.hub.revision,
                    join_or_none(&related.hub.business_keys)
                ));
                lines.extend(related.satellites.iter().map(|s| format!("      {}", satellite_line(s))));
            }
        }

        lines.join("\n")
    }
}

fn satellite_line(satellite: &SatelliteDefinition) -> String {
    let attributes: Vec<String> = satellite.attributes.iter().map(|a| a.name.clone()).collect();
    format!("{} (rev {}): {}", satellite.name, satellite.revision, join_or_none(&attributes))
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
