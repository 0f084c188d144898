pub use pokerun_core::{AnteRule, BlindRule, GameConfig, HandKind, HandRule, LevelRule, RoundRule};

pub const RULES_FILE: &str = "rules.json";
pub const HANDS_FILE: &str = "hands.json";
pub const ANTES_FILE: &str = "antes.json";
pub const BLINDS_FILE: &str = "blinds.json";
