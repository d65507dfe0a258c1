use buildadeck::{Deck, DeckError, Shoe};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub deck: ConfigDeck,
    pub shoe: ConfigShoe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDeck {
    /// Suit names in dealing order. Defaults to the four French suits.
    #[serde(default = "default_suits")]
    pub suits: Vec<String>,
    pub ranked_cards: usize,
    #[serde(default)]
    pub wildcards: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigShoe {
    pub deck_count: usize,
    /// How many shuffled cards to deal. Deals the whole shoe when absent.
    #[serde(default)]
    pub draws: Option<usize>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("invalid deck: {0}")]
    Deck(#[from] DeckError),
}

fn default_suits() -> Vec<String> {
    Deck::standard(0)
        .suits()
        .iter()
        .map(ToString::to_string)
        .collect()
}

impl Config {
    /// Checks the config without dealing anything. The deck itself is only
    /// validated when it is turned into a shoe.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shoe.deck_count == 0 {
            return Err(ConfigError::Invalid(String::from(
                "shoe.deck_count must be at least 1",
            )));
        }
        Ok(())
    }
}

impl From<&ConfigDeck> for Deck<String> {
    fn from(config: &ConfigDeck) -> Self {
        Deck::new(config.suits.clone(), config.ranked_cards, config.wildcards)
    }
}

impl TryFrom<&Config> for Shoe<String> {
    type Error = ConfigError;

    /// Builds the shoe and materializes its deck, so a badly divided deck is
    /// reported here rather than halfway through a deal.
    fn try_from(config: &Config) -> Result<Self, Self::Error> {
        config.validate()?;
        let shoe = Shoe::new(Deck::from(&config.deck), config.shoe.deck_count);
        shoe.len()?;
        Ok(shoe)
    }
}

/// Reads the content of a given config file and parses it to a Config.
pub fn parse_config_from_file(filename: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = filename.as_ref();
    let file_content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config =
        serde_yaml::from_str(&file_content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn get_typical_config() -> Config {
        Config {
            deck: ConfigDeck {
                suits: default_suits(),
                ranked_cards: 52,
                wildcards: 4,
            },
            shoe: ConfigShoe {
                deck_count: 4,
                draws: Some(5),
            },
        }
    }

    #[test]
    fn can_convert_to_shoe() {
        let config = get_typical_config();
        let shoe = Shoe::try_from(&config).unwrap();
        assert_eq!(shoe.len().unwrap(), 224);
        assert_eq!(shoe.deck_count(), 4);
        assert_eq!(shoe.deck().suits()[0], "Clubs");
    }

    #[test]
    fn should_return_error_when_deck_is_uneven() {
        let mut config = get_typical_config();
        config.deck.ranked_cards = 50;
        let result = Shoe::try_from(&config);
        assert!(matches!(
            result,
            Err(ConfigError::Deck(DeckError::Validation { .. }))
        ));
    }

    #[test]
    fn should_return_error_when_shoe_has_no_decks() {
        let mut config = get_typical_config();
        config.shoe.deck_count = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        assert!(Shoe::try_from(&config).is_err());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = serde_yaml::from_str(
            "deck:\n  ranked_cards: 52\nshoe:\n  deck_count: 2\n",
        )
        .unwrap();
        assert_eq!(config.deck.suits, ["Clubs", "Diamonds", "Hearts", "Spades"]);
        assert_eq!(config.deck.wildcards, 0);
        assert_eq!(config.shoe.draws, None);
    }

    #[test]
    fn can_parse_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "deck:\n  suits: [Cups, Coins, Swords, Batons]\n  ranked_cards: 48\n  wildcards: 2\nshoe:\n  deck_count: 6\n  draws: 10\n"
        )
        .unwrap();
        let config = parse_config_from_file(file.path()).unwrap();
        assert_eq!(config.deck.suits.len(), 4);
        assert_eq!(config.shoe.draws, Some(10));
        assert_eq!(Shoe::try_from(&config).unwrap().len().unwrap(), 300);
    }

    #[test]
    fn reports_missing_and_malformed_files() {
        let missing = parse_config_from_file("/nonexistent/buildadeck.yml");
        assert!(matches!(missing, Err(ConfigError::Read { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "deck: [not, a, deck]").unwrap();
        let malformed = parse_config_from_file(file.path());
        assert!(matches!(malformed, Err(ConfigError::Parse { .. })));
    }
}
