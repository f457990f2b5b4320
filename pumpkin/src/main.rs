#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::if_then_some_else_none)]

#[cfg(target_os = "wasi")]
compile_error!("Compiling for WASI targets is not supported!");

use std::{sync::Arc, time::Instant};

use itertools::Itertools;
use pumpkin_config::ADVANCED_CONFIG;
use pumpkin_protocol::{
    convert::{ProtocolRegistry, TypeConverter},
    minecraft_version, CURRENT_BEDROCK_PROTOCOL,
};
use pumpkin_world::item::AIR_TYPE_ID;

fn init_logger() {
    if ADVANCED_CONFIG.logging.enabled {
        let mut logger = simple_logger::SimpleLogger::new();
        logger = logger.with_timestamp_format(time::macros::format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ));

        if !ADVANCED_CONFIG.logging.timestamp {
            logger = logger.without_timestamps();
        }

        if ADVANCED_CONFIG.logging.env {
            logger = logger.env();
        }

        logger = logger.with_level(ADVANCED_CONFIG.logging.level.into());

        logger = logger.with_colors(ADVANCED_CONFIG.logging.color);
        logger = logger.with_threads(ADVANCED_CONFIG.logging.threads);
        if let Err(err) = logger.init() {
            eprintln!("Failed to initialize logger: {err}");
        }
    }
}

const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let time = Instant::now();
    init_logger();

    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        default_panic(info);
        std::process::exit(1);
    }));

    log::info!(
        "Starting Pumpkin {CARGO_PKG_VERSION} for Minecraft {} (Protocol {CURRENT_BEDROCK_PROTOCOL})",
        minecraft_version(CURRENT_BEDROCK_PROTOCOL).unwrap_or("unknown")
    );
    log::debug!(
        "Build info: FAMILY: \"{}\", OS: \"{}\", ARCH: \"{}\", BUILD: \"{}\"",
        std::env::consts::FAMILY,
        std::env::consts::OS,
        std::env::consts::ARCH,
        if cfg!(debug_assertions) {
            "Debug"
        } else {
            "Release"
        }
    );

    let registry = match ProtocolRegistry::load(&ADVANCED_CONFIG.mappings) {
        Ok(registry) => registry,
        Err(err) => {
            log::error!("Failed to load item mappings: {err}");
            std::process::exit(1);
        }
    };
    if registry.is_empty() {
        log::warn!(
            "No protocol versions are enabled, check the [mappings] section of features.toml"
        );
    }

    for (_, group) in &registry
        .protocols()
        .into_iter()
        .filter_map(|protocol| Some((protocol, registry.get(protocol)?.clone())))
        .chunk_by(|(_, converter)| converter.protocol_id())
    {
        let group: Vec<(u32, Arc<TypeConverter>)> = group.collect();
        let converter = &group[0].1;
        let versions = group
            .iter()
            .map(|(protocol, _)| version_label(*protocol))
            .join(", ");
        report(&versions, converter);
    }

    log::info!("Loaded mappings, took {}ms", time.elapsed().as_millis());
}

fn version_label(protocol: u32) -> String {
    let version = minecraft_version(protocol).unwrap_or("?");
    format!("{version} ({protocol})")
}

/// Logs how much of the server's item registry a protocol version can represent.
fn report(versions: &str, converter: &TypeConverter) {
    let translator = converter.translator();
    let dictionary = translator.dictionary();
    let unmapped = translator
        .items()
        .iter()
        .filter(|(string_id, type_id)| {
            *type_id != AIR_TYPE_ID && dictionary.from_string_id(string_id).is_err()
        })
        .map(|(string_id, _)| string_id)
        .sorted_unstable()
        .collect_vec();

    log::info!(
        "{versions}: {} item types, {} block states, shield id {}",
        dictionary.entries().len(),
        translator.block_states().len(),
        converter.shield_runtime_id()
    );
    if !unmapped.is_empty() {
        log::warn!(
            "{versions}: {} server items will be sent as placeholders",
            unmapped.len()
        );
        log::debug!("Unmapped items: {}", unmapped.join(", "));
    }
}
