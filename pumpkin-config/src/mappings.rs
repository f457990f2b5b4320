use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MappingsConfig {
    /// Directory holding `items.json`, `block_id_to_item_id_map.json` and one
    /// subdirectory of dictionaries per protocol version.
    pub data_path: PathBuf,
    /// Protocol versions to load mappings for. Empty loads every accepted version.
    pub protocols: Vec<u32>,
}

impl Default for MappingsConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("mappings"),
            protocols: Vec::new(),
        }
    }
}

impl MappingsConfig {
    pub fn validate(&self) {
        assert!(
            !self.data_path.as_os_str().is_empty(),
            "Mappings data path must not be empty"
        );
        for (i, protocol) in self.protocols.iter().enumerate() {
            assert!(
                !self.protocols[..i].contains(protocol),
                "Protocol {protocol} is listed more than once"
            );
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_loads_every_protocol() {
        let config = MappingsConfig::default();
        assert!(config.protocols.is_empty());
        config.validate();
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn empty_data_path_is_invalid() {
        MappingsConfig {
            data_path: PathBuf::new(),
            protocols: Vec::new(),
        }
        .validate();
    }
}
