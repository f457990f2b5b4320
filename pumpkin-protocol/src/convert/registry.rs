use std::{
    collections::{hash_map::Entry, HashMap},
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use pumpkin_config::MappingsConfig;
use pumpkin_world::item::{BlockItemIdMap, ItemRegistry};
use thiserror::Error;

use crate::{is_accepted_protocol, ACCEPTED_PROTOCOLS};

use super::{
    BlockStateDictionary, ItemTranslator, ItemTypeDictionary, TypeConversionError, TypeConverter,
};

const ITEMS_FILE: &str = "items.json";
const BLOCK_ITEM_MAP_FILE: &str = "block_id_to_item_id_map.json";
const REQUIRED_ITEM_LIST_FILE: &str = "required_item_list.json";
const BLOCK_STATE_META_MAP_FILE: &str = "block_state_meta_map.json";

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Mappings for protocol {protocol} are incomplete: {source}")]
    Conversion {
        protocol: u32,
        #[source]
        source: TypeConversionError,
    },
}

/// One [`TypeConverter`] per connected protocol version. Versions that share their
/// mappings share the converter.
#[derive(Debug, Default)]
pub struct ProtocolRegistry {
    converters: HashMap<u32, Arc<TypeConverter>>,
}

impl ProtocolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, protocol_id: u32, converter: Arc<TypeConverter>) {
        self.converters.insert(protocol_id, converter);
    }

    pub fn get(&self, protocol_id: u32) -> Option<&Arc<TypeConverter>> {
        self.converters.get(&protocol_id)
    }

    pub fn converter(&self, protocol_id: u32) -> Result<&Arc<TypeConverter>, TypeConversionError> {
        self.get(protocol_id)
            .ok_or(TypeConversionError::UnknownProtocol(protocol_id))
    }

    /// Registered protocol ids, oldest first.
    pub fn protocols(&self) -> Vec<u32> {
        let mut protocols: Vec<u32> = self.converters.keys().copied().collect();
        protocols.sort_unstable();
        protocols
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Builds converters for the configured protocol versions from the mapping files
    /// under `config.data_path`. Each dictionary file is read once, however many
    /// versions use it.
    pub fn load(config: &MappingsConfig) -> Result<Self, RegistryError> {
        let data_path = config.data_path.as_path();
        let protocols = if config.protocols.is_empty() {
            ACCEPTED_PROTOCOLS
        } else {
            config.protocols.as_slice()
        };

        let items = Arc::new(load_json(
            data_path.join(ITEMS_FILE),
            ItemRegistry::from_json,
        )?);
        let block_items = Arc::new(load_json(
            data_path.join(BLOCK_ITEM_MAP_FILE),
            BlockItemIdMap::from_json,
        )?);
        log::debug!(
            "Loaded {} item types from {}",
            items.len(),
            data_path.display()
        );

        let mut dictionaries: HashMap<u32, Arc<ItemTypeDictionary>> = HashMap::new();
        let mut block_states: HashMap<u32, Arc<BlockStateDictionary>> = HashMap::new();
        let mut shared: HashMap<u32, Arc<TypeConverter>> = HashMap::new();
        let mut registry = Self::new();

        for &protocol_id in protocols {
            if !is_accepted_protocol(protocol_id) {
                log::warn!("Skipping mappings for unsupported protocol {protocol_id}");
                continue;
            }
            let bucket = TypeConverter::convert_protocol(protocol_id);
            let converter = match shared.entry(bucket) {
                Entry::Occupied(entry) => entry.get().clone(),
                Entry::Vacant(entry) => {
                    let dictionary = load_shared(
                        &mut dictionaries,
                        ItemTypeDictionary::convert_protocol(protocol_id),
                        |bucket| {
                            load_json(
                                bucket_path(data_path, bucket, REQUIRED_ITEM_LIST_FILE),
                                ItemTypeDictionary::from_json,
                            )
                        },
                    )?;
                    let states = load_shared(
                        &mut block_states,
                        BlockStateDictionary::convert_protocol(protocol_id),
                        |bucket| {
                            load_json(
                                bucket_path(data_path, bucket, BLOCK_STATE_META_MAP_FILE),
                                BlockStateDictionary::from_json,
                            )
                        },
                    )?;
                    let translator = Arc::new(ItemTranslator::new(
                        bucket,
                        dictionary,
                        states,
                        items.clone(),
                        block_items.clone(),
                    ));
                    let converter = TypeConverter::new(bucket, translator).map_err(|source| {
                        RegistryError::Conversion {
                            protocol: protocol_id,
                            source,
                        }
                    })?;
                    entry.insert(Arc::new(converter)).clone()
                }
            };
            registry.register(protocol_id, converter);
        }

        log::info!(
            "Loaded item mappings for {} protocol versions ({} distinct)",
            registry.len(),
            shared.len()
        );
        Ok(registry)
    }
}

fn bucket_path(data_path: &Path, bucket: u32, file: &str) -> PathBuf {
    data_path.join(bucket.to_string()).join(file)
}

fn load_shared<T>(
    cache: &mut HashMap<u32, Arc<T>>,
    bucket: u32,
    load: impl FnOnce(u32) -> Result<T, RegistryError>,
) -> Result<Arc<T>, RegistryError> {
    if let Some(loaded) = cache.get(&bucket) {
        return Ok(loaded.clone());
    }
    let loaded = Arc::new(load(bucket)?);
    cache.insert(bucket, loaded.clone());
    Ok(loaded)
}

fn load_json<T>(
    path: PathBuf,
    parse: impl FnOnce(&str) -> serde_json::Result<T>,
) -> Result<T, RegistryError> {
    log::debug!("Reading {}", path.display());
    let content = fs::read_to_string(&path).map_err(|source| RegistryError::Io {
        path: path.clone(),
        source,
    })?;
    parse(&content).map_err(|source| RegistryError::Json { path, source })
}
