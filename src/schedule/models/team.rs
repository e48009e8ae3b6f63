use serde::{Deserialize, Serialize};

/// Convenience alias for the opaque team identifier used throughout the crate.
pub type TeamId = String;

/// Immutable team reference data, loaded from the backend roster export.
/// Never mutated by this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    #[serde(rename = "teamId", alias = "id")]
    pub id: TeamId,
    #[serde(rename = "displayName", alias = "name")]
    pub display_name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(rename = "primaryColor", alias = "color", default)]
    pub primary_color: Option<String>,
}

impl Team {
    /// Short label for report headers: the abbreviation when present,
    /// otherwise the first three characters of the display name, uppercased.
    pub fn short_label(&self) -> String {
        match &self.abbreviation {
            Some(abbr) => abbr.clone(),
            None => self
                .display_name
                .chars()
                .take(3)
                .collect::<String>()
                .to_uppercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_deserialization_with_aliases() {
        let json = r##"{
            "id": "kansas",
            "name": "Kansas Jayhawks",
            "abbreviation": "KU",
            "color": "#0051BA"
        }"##;

        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.id, "kansas");
        assert_eq!(team.display_name, "Kansas Jayhawks");
        assert_eq!(team.abbreviation, Some("KU".to_string()));
        assert_eq!(team.primary_color, Some("#0051BA".to_string()));
    }

    #[test]
    fn test_team_deserialization_canonical_names() {
        let json = r##"{
            "teamId": "baylor",
            "displayName": "Baylor Bears",
            "primaryColor": "#154734"
        }"##;

        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.id, "baylor");
        assert_eq!(team.abbreviation, None);
    }

    #[test]
    fn test_short_label_falls_back_to_name_prefix() {
        let team = Team {
            id: "texastech".to_string(),
            display_name: "Texas Tech".to_string(),
            abbreviation: None,
            primary_color: None,
        };
        assert_eq!(team.short_label(), "TEX");

        let team = Team {
            abbreviation: Some("TTU".to_string()),
            ..team
        };
        assert_eq!(team.short_label(), "TTU");
    }
}
