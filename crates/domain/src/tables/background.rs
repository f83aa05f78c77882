use serde::{Deserialize, Serialize};

/// A character background: skills, tools, starting gear and a narrative feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundDefinition {
    pub name: String,
    pub skills: Vec<String>,
    pub tools: Vec<String>,
    pub equipment: Vec<String>,
    pub feature: String,
}
