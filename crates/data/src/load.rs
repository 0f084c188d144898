use crate::schema::{
    AnteRule, BlindRule, GameConfig, HandKind, HandRule, RoundRule, ANTES_FILE, BLINDS_FILE,
    HANDS_FILE, RULES_FILE,
};
use pokerun_core::Deck;
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Reads the four balance files from `dir`. `rules.json` is optional.
pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    let rules_path = dir.join(RULES_FILE);
    let rules: RoundRule = if rules_path.exists() {
        load_json(&rules_path)?
    } else {
        RoundRule::default()
    };
    let hands: Vec<HandRule> = load_json(&dir.join(HANDS_FILE))?;
    let antes: Vec<AnteRule> = load_json(&dir.join(ANTES_FILE))?;
    let blinds: Vec<BlindRule> = load_json(&dir.join(BLINDS_FILE))?;

    let config = GameConfig {
        rules,
        hands,
        blinds,
        antes,
    };
    validate_config(&config).with_context(|| format!("validate {}", dir.display()))?;
    log::info!(
        "loaded config from {}: {} antes, {} blinds",
        dir.display(),
        config.antes.len(),
        config.blinds.len()
    );
    Ok(config)
}

/// Loads from `dir` when it exists, otherwise the built-in tables.
pub fn load_game_config_or_standard(dir: &Path) -> anyhow::Result<GameConfig> {
    if dir.is_dir() {
        load_game_config(dir)
    } else {
        log::info!("{} not found, using built-in config", dir.display());
        Ok(GameConfig::standard())
    }
}

pub fn validate_config(config: &GameConfig) -> anyhow::Result<()> {
    let rules = &config.rules;
    if rules.max_selected == 0 {
        bail!("max_selected must be at least 1");
    }
    if rules.default_deal < rules.max_selected {
        bail!(
            "default_deal {} is smaller than max_selected {}",
            rules.default_deal,
            rules.max_selected
        );
    }
    if rules.hands == 0 {
        bail!("a round needs at least one hand");
    }
    // Worst case: every play and discard after the deal takes a full selection.
    let refills = (usize::from(rules.hands) - 1 + usize::from(rules.discards))
        .saturating_mul(rules.max_selected);
    let needed = rules.default_deal.saturating_add(refills);
    let available = Deck::standard52().len();
    if needed > available {
        bail!(
            "a round can draw {needed} cards but the deck holds {available} \
             (deal {}, hands {}, discards {}, max_selected {})",
            rules.default_deal,
            rules.hands,
            rules.discards,
            rules.max_selected
        );
    }

    for kind in HandKind::ALL {
        let mut entries = config.hands.iter().filter(|rule| rule.kind == kind);
        let Some(rule) = entries.next() else {
            bail!("no levels for {}", kind.id());
        };
        if entries.next().is_some() {
            bail!("duplicate entry for {}", kind.id());
        }
        if rule.levels.is_empty() {
            bail!("no levels for {}", kind.id());
        }
    }

    if config.blinds.is_empty() {
        bail!("blind ladder is empty");
    }
    for (idx, blind) in config.blinds.iter().enumerate() {
        if !(blind.target_mult.is_finite() && blind.target_mult > 0.0) {
            bail!("blind {idx} has invalid target_mult {}", blind.target_mult);
        }
    }

    if config.antes.is_empty() {
        bail!("ante table is empty");
    }
    for (idx, ante) in config.antes.iter().enumerate() {
        if ante.ante != idx {
            bail!(
                "ante entries must be numbered from 0 in order (found {} at {idx})",
                ante.ante
            );
        }
        if ante.base_target <= 0 {
            bail!("ante {} has non-positive base_target", ante.ante);
        }
    }
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
