//! Fakemon species records.

use serde::{Deserialize, Deserializer, Serialize};

/// One stage in a species' evolution line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionEntry {
    pub number: String,
    pub name: String,
    #[serde(default)]
    pub level: String,
    /// Dex number of the pre-evolution. `None` or empty marks a root stage.
    #[serde(default)]
    pub evolves_from: Option<String>,
}

/// Fakemon dex entry (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fakemon {
    pub number: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub type1: String,
    #[serde(default)]
    pub type2: Option<String>,
    #[serde(default)]
    pub type3: Option<String>,
    #[serde(default)]
    pub type4: Option<String>,
    #[serde(default)]
    pub type5: Option<String>,
    #[serde(default)]
    pub attribute: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, deserialize_with = "evolution_line_compat")]
    pub evolution_line: Vec<EvolutionEntry>,
    #[serde(default)]
    pub ability1: String,
    #[serde(default)]
    pub ability2: String,
    #[serde(default)]
    pub hidden_ability: String,
    #[serde(default = "default_stat")]
    pub hp: u16,
    #[serde(default = "default_stat")]
    pub attack: u16,
    #[serde(default = "default_stat")]
    pub defense: u16,
    #[serde(default = "default_stat")]
    pub special_attack: u16,
    #[serde(default = "default_stat")]
    pub special_defense: u16,
    #[serde(default = "default_stat")]
    pub speed: u16,
}

fn default_stat() -> u16 {
    50
}

impl Fakemon {
    /// Non-empty type slots in order.
    pub fn types(&self) -> Vec<&str> {
        let slots = [
            Some(self.type1.as_str()),
            self.type2.as_deref(),
            self.type3.as_deref(),
            self.type4.as_deref(),
            self.type5.as_deref(),
        ];
        slots.into_iter().flatten().filter(|t| !t.is_empty()).collect()
    }

    pub fn stats(&self) -> [u16; 6] {
        [
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
    }
}

/// Attribute options offered by the species form.
pub const SPECIES_ATTRIBUTES: &[&str] =
    &["Normal", "Mega", "Legendary", "Mythical", "Ultra Beast"];

/// Older backend rows store the evolution line as a JSON string, newer ones
/// as a real array. Accept both.
fn evolution_line_compat<'de, D>(deserializer: D) -> Result<Vec<EvolutionEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<EvolutionEntry>),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(Raw::List(list)) => Ok(list),
        Some(Raw::Text(text)) if text.trim().is_empty() => Ok(Vec::new()),
        Some(Raw::Text(text)) => serde_json::from_str(&text).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evolution_line_as_array() {
        let json = r#"{
            "number": "001", "name": "Bulbasaur", "type1": "Grass",
            "evolution_line": [{"number": "002", "name": "Ivysaur", "level": "16"}]
        }"#;
        let mon: Fakemon = serde_json::from_str(json).unwrap();
        assert_eq!(mon.evolution_line.len(), 1);
        assert_eq!(mon.evolution_line[0].name, "Ivysaur");
    }

    #[test]
    fn test_evolution_line_as_json_string() {
        let json = r#"{
            "number": "001", "name": "Bulbasaur", "type1": "Grass",
            "evolution_line": "[{\"number\": \"002\", \"name\": \"Ivysaur\", \"level\": \"16\"}]"
        }"#;
        let mon: Fakemon = serde_json::from_str(json).unwrap();
        assert_eq!(mon.evolution_line.len(), 1);
        assert_eq!(mon.evolution_line[0].number, "002");
    }

    #[test]
    fn test_evolution_line_missing_or_empty() {
        let json = r#"{"number": "001", "name": "Bulbasaur", "type1": "Grass"}"#;
        let mon: Fakemon = serde_json::from_str(json).unwrap();
        assert!(mon.evolution_line.is_empty());

        let json = r#"{"number": "001", "name": "Bulbasaur", "type1": "Grass", "evolution_line": ""}"#;
        let mon: Fakemon = serde_json::from_str(json).unwrap();
        assert!(mon.evolution_line.is_empty());
    }

    #[test]
    fn test_types_skips_empty_slots() {
        let json = r#"{"number": "006", "name": "Charizard", "type1": "Fire", "type2": "Flying", "type3": ""}"#;
        let mon: Fakemon = serde_json::from_str(json).unwrap();
        assert_eq!(mon.types(), vec!["Fire", "Flying"]);
    }
}
