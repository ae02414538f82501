//! Warband paths and the flat bonuses each one grants.

use serde::{Deserialize, Serialize};

/// Flat modifiers a warband path contributes to checks and upkeep.
///
/// `combat` feeds battle rolls, `scout` widens the march reveal radius,
/// and `supplies` offsets the daily ration cost and pads hunt yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassBonuses {
    pub combat: i32,
    pub scout: i32,
    pub supplies: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClassId {
    #[default]
    Warrior,
    Scout,
    Chieftain,
}

impl ClassId {
    pub const ALL: [ClassId; 3] = [ClassId::Warrior, ClassId::Scout, ClassId::Chieftain];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ClassId::Warrior => "warrior",
            ClassId::Scout => "scout",
            ClassId::Chieftain => "chieftain",
        }
    }

    #[must_use]
    pub const fn bonuses(self) -> ClassBonuses {
        match self {
            ClassId::Warrior => ClassBonuses {
                combat: 3,
                scout: 0,
                supplies: 0,
            },
            ClassId::Scout => ClassBonuses {
                combat: 0,
                scout: 2,
                supplies: 0,
            },
            ClassId::Chieftain => ClassBonuses {
                combat: 1,
                scout: 0,
                supplies: 2,
            },
        }
    }

    /// Status-panel summary, e.g. `warrior (C+3, S+0, R+0)`.
    #[must_use]
    pub fn summary(self) -> String {
        let bonuses = self.bonuses();
        format!(
            "{self} (C+{}, S+{}, R+{})",
            bonuses.combat, bonuses.scout, bonuses.supplies
        )
    }
}

impl std::fmt::Display for ClassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ClassId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warrior" => Ok(ClassId::Warrior),
            "scout" => Ok(ClassId::Scout),
            "chieftain" => Ok(ClassId::Chieftain),
            _ => Err(()),
        }
    }
}

impl From<ClassId> for String {
    fn from(class: ClassId) -> Self {
        class.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonuses_match_path_identity() {
        assert_eq!(
            ClassId::Warrior.bonuses(),
            ClassBonuses {
                combat: 3,
                scout: 0,
                supplies: 0
            }
        );
        assert_eq!(
            ClassId::Scout.bonuses(),
            ClassBonuses {
                combat: 0,
                scout: 2,
                supplies: 0
            }
        );
        assert_eq!(
            ClassId::Chieftain.bonuses(),
            ClassBonuses {
                combat: 1,
                scout: 0,
                supplies: 2
            }
        );
    }

    #[test]
    fn class_ids_round_trip_through_strings() {
        for class in ClassId::ALL {
            let text = class.as_str();
            assert_eq!(text.parse::<ClassId>(), Ok(class));
            assert_eq!(String::from(class), text);
        }
        assert!("kingmaker".parse::<ClassId>().is_err());
    }

    #[test]
    fn summary_reports_all_three_bonuses() {
        assert_eq!(ClassId::Chieftain.summary(), "chieftain (C+1, S+0, R+2)");
    }
}
