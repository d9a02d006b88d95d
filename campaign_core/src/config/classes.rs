//! Class hit die configuration loading

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

const FALLBACK_HIT_DIE: i32 = 8;

/// Raw class table as written in TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClassesConfig {
    #[serde(default = "default_hit_die")]
    default_hit_die: i32,
    #[serde(default)]
    classes: Vec<ClassEntry>,
}

fn default_hit_die() -> i32 {
    FALLBACK_HIT_DIE
}

/// One class and its base hit die
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub name: String,
    pub hit_die: i32,
}

/// Class name → base hit die, with a default for unlisted classes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTable {
    default_hit_die: i32,
    /// Keyed by lowercase class name
    classes: HashMap<String, ClassEntry>,
}

impl Default for ClassTable {
    fn default() -> Self {
        ClassTable::new(FALLBACK_HIT_DIE)
    }
}

impl ClassTable {
    /// Empty table where every class uses `default_hit_die`
    pub fn new(default_hit_die: i32) -> Self {
        ClassTable {
            default_hit_die,
            classes: HashMap::new(),
        }
    }

    pub fn insert(&mut self, entry: ClassEntry) {
        self.classes.insert(entry.name.trim().to_lowercase(), entry);
    }

    /// Base hit die for a class (case-insensitive). Unknown classes get the default.
    pub fn hit_die(&self, class_name: &str) -> i32 {
        self.classes
            .get(&class_name.trim().to_lowercase())
            .map(|entry| entry.hit_die)
            .unwrap_or(self.default_hit_die)
    }

    pub fn default_hit_die(&self) -> i32 {
        self.default_hit_die
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.classes.contains_key(&class_name.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    fn from_config(config: ClassesConfig) -> Result<Self, ConfigError> {
        if config.default_hit_die <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "default_hit_die must be positive, got {}",
                config.default_hit_die
            )));
        }

        let mut table = ClassTable::new(config.default_hit_die);
        for entry in config.classes {
            if entry.hit_die <= 0 {
                return Err(ConfigError::ValidationError(format!(
                    "class '{}' has non-positive hit die {}",
                    entry.name, entry.hit_die
                )));
            }
            table.insert(entry);
        }
        Ok(table)
    }
}

/// Load the class table from a TOML file
pub fn load_class_table(path: &Path) -> Result<ClassTable, ConfigError> {
    let config: ClassesConfig = super::load_toml(path)?;
    ClassTable::from_config(config)
}

/// Load the class table from a TOML string
pub fn parse_class_table(content: &str) -> Result<ClassTable, ConfigError> {
    let config: ClassesConfig = super::parse_toml(content)?;
    ClassTable::from_config(config)
}

/// Get the built-in class table
pub fn default_classes() -> ClassTable {
    let toml = include_str!("../../config/classes.toml");
    parse_class_table(toml).unwrap_or_else(|e| {
        tracing::warn!("Built-in class table failed to load: {}", e);
        let mut table = ClassTable::default();
        table.insert(ClassEntry {
            name: "Barbarian".to_string(),
            hit_die: 12,
        });
        table
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classes() {
        let toml = r#"
default_hit_die = 8

[[classes]]
name = "Barbarian"
hit_die = 12

[[classes]]
name = "Wizard"
hit_die = 6
"#;

        let table = parse_class_table(toml).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.hit_die("Barbarian"), 12);
        assert_eq!(table.hit_die("wizard"), 6);
        assert_eq!(table.hit_die("Bard"), 8);
    }

    #[test]
    fn test_default_classes_loads_all() {
        let table = default_classes();

        assert_eq!(table.len(), 12, "Expected 12 classes from config");
        assert_eq!(table.default_hit_die(), 8);

        for (class, die) in [
            ("Barbarian", 12),
            ("Fighter", 10),
            ("Paladin", 10),
            ("Ranger", 10),
            ("Sorcerer", 6),
            ("Wizard", 6),
            ("Cleric", 8),
            ("Rogue", 8),
        ] {
            assert_eq!(table.hit_die(class), die, "Wrong hit die for {}", class);
        }
    }

    #[test]
    fn test_unknown_class_uses_default() {
        let table = default_classes();
        assert!(!table.contains("Artificer"));
        assert_eq!(table.hit_die("Artificer"), 8);
        assert_eq!(table.hit_die("  FIGHTER "), 10);
    }

    #[test]
    fn test_non_positive_hit_die_rejected() {
        let toml = r#"
[[classes]]
name = "Commoner"
hit_die = 0
"#;
        assert!(matches!(
            parse_class_table(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
