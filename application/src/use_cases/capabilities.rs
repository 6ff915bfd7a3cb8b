//! Capability listing and liveness reporting.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use toolchat_domain::{ToolCategory, ToolSpec};

/// Tool names grouped by category, categories in listing order.
///
/// Serializes as a JSON object keyed by category display name, e.g.
/// `{"Time & Date": ["get_time", ...], "Math": [...]}`.
#[derive(Debug, Clone, PartialEq)]
pub struct CapabilityReport {
    pub groups: Vec<(ToolCategory, Vec<String>)>,
}

impl CapabilityReport {
    pub fn total_tools(&self) -> usize {
        self.groups.iter().map(|(_, tools)| tools.len()).sum()
    }
}

impl Serialize for CapabilityReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (category, tools) in &self.groups {
            map.serialize_entry(category.display_name(), tools)?;
        }
        map.end()
    }
}

/// Liveness report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub model: String,
    pub total_tools: usize,
    pub tools: Vec<String>,
}

pub fn capability_report(spec: &ToolSpec) -> CapabilityReport {
    let groups = spec
        .by_category()
        .into_iter()
        .map(|(category, names)| {
            (
                category,
                names.into_iter().map(str::to_string).collect::<Vec<_>>(),
            )
        })
        .collect();
    CapabilityReport { groups }
}

pub fn health_report(model: &str, spec: &ToolSpec) -> HealthReport {
    HealthReport {
        status: "ok",
        model: model.to_string(),
        total_tools: spec.len(),
        tools: spec.names().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolchat_domain::ToolDefinition;

    fn spec() -> ToolSpec {
        ToolSpec::new()
            .register(ToolDefinition::new("roll_dice", "Dice", ToolCategory::RandomFun))
            .register(ToolDefinition::new("get_time", "Clock", ToolCategory::TimeDate))
            .register(ToolDefinition::new("calculator", "Calc", ToolCategory::Math))
            .register(ToolDefinition::new("flip_coin", "Coin", ToolCategory::RandomFun))
    }

    #[test]
    fn test_capability_report_groups_in_category_order() {
        let report = capability_report(&spec());
        assert_eq!(report.total_tools(), 4);
        let categories: Vec<ToolCategory> = report.groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            categories,
            vec![
                ToolCategory::TimeDate,
                ToolCategory::Math,
                ToolCategory::RandomFun
            ]
        );
        assert_eq!(report.groups[2].1, vec!["roll_dice", "flip_coin"]);
    }

    #[test]
    fn test_capability_report_serializes_as_ordered_map() {
        let json = serde_json::to_string(&capability_report(&spec())).unwrap();
        assert_eq!(
            json,
            r#"{"Time & Date":["get_time"],"Math":["calculator"],"Random/Fun":["roll_dice","flip_coin"]}"#
        );
    }

    #[test]
    fn test_health_report() {
        let report = health_report("llama-3.3-70b-versatile", &spec());
        assert_eq!(report.status, "ok");
        assert_eq!(report.total_tools, 4);
        assert_eq!(report.tools[0], "roll_dice");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["model"], "llama-3.3-70b-versatile");
        assert_eq!(json["total_tools"], 4);
    }
}
