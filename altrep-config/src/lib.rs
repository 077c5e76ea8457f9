//! Loads alternate-repeat rules and magic key settings from a TOML file.
//!
//! ```toml
//! [magic]
//! training = true
//! nudge = "#"
//! default_profile = "night"
//!
//! [[profile]]
//! name = "night"
//! layer = 0
//! rules = [
//!   { key = "spc", text = "the" },
//!   { key = "dot", emit = "slsh" },
//! ]
//! ```

use std::path::Path;

use altrep::config::MagicConfig;
use altrep::controller::RepeatKeyController;
use altrep::registry::{Outcome, ProfileRuleProvider};
use altrep_types::keycode::KeyIdentity;
use altrep_types::profile::Profile;
use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;

pub mod error;
pub mod keycode_alias;

pub use error::{ConfigError, ConfigResult};
pub use keycode_alias::{KEYCODE_ALIAS, parse_key};

/// Root of the config file
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MagicTomlConfig {
    #[serde(default)]
    pub magic: MagicSection,
    #[serde(default)]
    pub profile: Vec<ProfileTomlConfig>,
}

/// The `[magic]` table
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MagicSection {
    /// Block keys the magic key would have typed
    #[serde_inline_default(false)]
    pub training: bool,
    /// Key sent instead of a blocked key
    #[serde_inline_default("#".to_string())]
    pub nudge: String,
    /// Profile active after boot
    #[serde_inline_default(Profile::Night)]
    pub default_profile: Profile,
}

impl Default for MagicSection {
    fn default() -> Self {
        Self {
            training: false,
            nudge: "#".to_string(),
            default_profile: Profile::Night,
        }
    }
}

/// One `[[profile]]` entry
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileTomlConfig {
    /// Lowercase profile name
    pub name: Profile,
    /// Default layer selecting this profile
    pub layer: u8,
    #[serde(default)]
    pub rules: Vec<RuleTomlConfig>,
}

/// `{ key = "...", text = "..." }` or `{ key = "...", emit = "..." }`
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleTomlConfig {
    pub key: String,
    pub text: Option<String>,
    pub emit: Option<String>,
}

impl MagicTomlConfig {
    /// Read and parse a config file
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path_str = path.as_ref().display().to_string();
        let s = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead {
            path: path_str.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&s).map_err(|e| ConfigError::TomlParse {
            path: path_str,
            message: e.message().to_string(),
        })
    }

    pub fn new_from_toml_str(s: &str) -> ConfigResult<Self> {
        toml::from_str(s).map_err(|e| ConfigError::TomlParse {
            path: "<string>".to_string(),
            message: e.message().to_string(),
        })
    }

    /// Settings of the magic key
    pub fn magic_config(&self) -> ConfigResult<MagicConfig> {
        let nudge = parse_key("magic.nudge", &self.magic.nudge)?;
        Ok(MagicConfig::new()
            .with_training(self.magic.training)
            .with_nudge(nudge)
            .with_default_profile(self.magic.default_profile))
    }

    /// Rules of all profiles, validated
    pub fn rule_set(&self) -> ConfigResult<RuleSet> {
        let mut profiles: Vec<ProfileRules> = Vec::with_capacity(self.profile.len());
        for (i, p) in self.profile.iter().enumerate() {
            let field = format!("profile[{}]", i);
            let profile = p.name;
            if profiles.iter().any(|other| other.profile == profile) {
                return Err(ConfigError::Validation {
                    field: format!("{}.name", field),
                    message: format!("profile '{}' is defined twice", profile.name()),
                });
            }
            if profiles.iter().any(|other| other.layer == p.layer) {
                return Err(ConfigError::Validation {
                    field: format!("{}.layer", field),
                    message: format!("layer {} already selects another profile", p.layer),
                });
            }

            let mut rules: Vec<Rule> = Vec::with_capacity(p.rules.len());
            for (j, r) in p.rules.iter().enumerate() {
                let rule_field = format!("{}.rules[{}]", field, j);
                let rule = parse_rule(&rule_field, r)?;
                if rules.iter().any(|other| other.trigger == rule.trigger) {
                    return Err(ConfigError::Validation {
                        field: rule_field,
                        message: format!("key '{}' already has a rule", r.key),
                    });
                }
                rules.push(rule);
            }
            profiles.push(ProfileRules {
                profile,
                layer: p.layer,
                rules,
            });
        }
        Ok(RuleSet { profiles })
    }

    /// A controller running the configured rules
    pub fn build_controller(&self) -> ConfigResult<RepeatKeyController<RuleSet>> {
        let config = self.magic_config()?;
        let rule_set = self.rule_set()?;
        if !rule_set.supports(config.default_profile) {
            return Err(ConfigError::UnknownProfile {
                field: "magic.default_profile".to_string(),
                name: config.default_profile.name().to_string(),
            });
        }
        Ok(RepeatKeyController::new(rule_set, config))
    }
}

fn parse_rule(field: &str, rule: &RuleTomlConfig) -> ConfigResult<Rule> {
    let trigger = parse_key(&format!("{}.key", field), &rule.key)?;
    let outcome = match (&rule.text, &rule.emit) {
        (Some(text), None) => {
            if text.is_empty() || !text.is_ascii() {
                return Err(ConfigError::Validation {
                    field: format!("{}.text", field),
                    message: "text must be non-empty ascii".to_string(),
                });
            }
            RuleOutcome::Text(text.clone())
        }
        (None, Some(emit)) => RuleOutcome::Key(parse_key(&format!("{}.emit", field), emit)?),
        _ => {
            return Err(ConfigError::Validation {
                field: field.to_string(),
                message: "a rule needs exactly one of `text` and `emit`".to_string(),
            });
        }
    };
    Ok(Rule { trigger, outcome })
}

/// What a loaded rule produces
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleOutcome {
    Key(KeyIdentity),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub trigger: KeyIdentity,
    pub outcome: RuleOutcome,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileRules {
    pub profile: Profile,
    pub layer: u8,
    pub rules: Vec<Rule>,
}

/// Rules loaded at runtime, owned
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    profiles: Vec<ProfileRules>,
}

impl RuleSet {
    pub fn profiles(&self) -> &[ProfileRules] {
        &self.profiles
    }
}

impl ProfileRuleProvider for RuleSet {
    fn lookup(&self, profile: Profile, key: KeyIdentity) -> Outcome<'_> {
        let rule = self
            .profiles
            .iter()
            .find(|p| p.profile == profile)
            .and_then(|p| p.rules.iter().find(|r| r.trigger == key));
        match rule.map(|r| &r.outcome) {
            Some(RuleOutcome::Key(k)) => Outcome::EmitKey(*k),
            Some(RuleOutcome::Text(text)) => Outcome::EmitText(text),
            None => Outcome::FallbackRepeat,
        }
    }

    fn profile_for_layer(&self, layer: u8) -> Option<Profile> {
        self.profiles.iter().find(|p| p.layer == layer).map(|p| p.profile)
    }

    fn supports(&self, profile: Profile) -> bool {
        self.profiles.iter().any(|p| p.profile == profile)
    }
}
