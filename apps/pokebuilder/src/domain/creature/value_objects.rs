use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six battle stats every creature record carries
///
/// `Display` renders the catalog column header (`"Sp. Atk"`), which is also
/// the label charts use. `FromStr` accepts the header, the variant name, and
/// a few common spellings, ignoring case.
///
/// # Example
/// ```
/// use pokebuilder::domain::creature::Stat;
///
/// let stat: Stat = "sp. atk".parse().expect("known stat");
/// assert_eq!(stat, Stat::SpecialAttack);
/// assert_eq!(stat.to_string(), "Sp. Atk");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    /// All stats in catalog column order
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// Column header used by the catalog file
    pub fn column(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpecialAttack => "Sp. Atk",
            Stat::SpecialDefense => "Sp. Def",
            Stat::Speed => "Speed",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Stat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "hp" => Ok(Stat::Hp),
            "attack" | "atk" => Ok(Stat::Attack),
            "defense" | "def" => Ok(Stat::Defense),
            "spatk" | "specialattack" => Ok(Stat::SpecialAttack),
            "spdef" | "specialdefense" => Ok(Stat::SpecialDefense),
            "speed" | "spe" => Ok(Stat::Speed),
            _ => Err(format!("Unknown stat: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_column_headers() {
        for stat in Stat::ALL {
            assert_eq!(stat.column().parse::<Stat>(), Ok(stat));
        }
    }

    #[test]
    fn parses_variant_names_ignoring_case() {
        assert_eq!("SpecialDefense".parse::<Stat>(), Ok(Stat::SpecialDefense));
        assert_eq!("speed".parse::<Stat>(), Ok(Stat::Speed));
        assert_eq!(" HP ".parse::<Stat>(), Ok(Stat::Hp));
    }

    #[test]
    fn rejects_unknown_stat() {
        assert!("Luck".parse::<Stat>().is_err());
        assert!("".parse::<Stat>().is_err());
    }

    #[test]
    fn display_uses_column_header() {
        assert_eq!(Stat::SpecialAttack.to_string(), "Sp. Atk");
        assert_eq!(Stat::Hp.to_string(), "HP");
    }
}
