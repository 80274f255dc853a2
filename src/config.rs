use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

use crate::error::Result;
use crate::scenes::{ComposeOptions, Section};

/// Per-mount settings, read from a mount element's `data-scene` attribute.
///
/// The attribute is either a bare section name (`data-scene="about"`) or a
/// JSON object such as `{"section":"skills","count":80,"seed":7}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub section: Section,
    pub count: Option<i64>,
    pub stars: Option<i64>,
    pub seed: Option<u64>,
    pub fixed_height: Option<u32>,
}

impl SceneConfig {
    pub fn parse(attr: &str) -> Result<Self> {
        let attr = attr.trim();
        if attr.is_empty() {
            return Ok(Self::default());
        }
        if attr.starts_with('{') {
            return Ok(serde_json::from_str(attr)?);
        }
        Ok(Self {
            section: attr.parse()?,
            ..Self::default()
        })
    }

    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            count: self.count,
            star_count: self.stars,
        }
    }

    /// Surface height when the section does not follow the window height.
    pub fn height(&self) -> Option<u32> {
        self.fixed_height.or_else(|| self.section.fixed_height())
    }

    /// Seeded generator if a seed was given, otherwise one from entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SceneError;
    use rand::Rng;

    #[test]
    fn bare_section_name() {
        let config = SceneConfig::parse(" Skills ").unwrap();
        assert_eq!(config.section, Section::Skills);
        assert_eq!(config.count, None);
    }

    #[test]
    fn empty_attribute_is_background() {
        assert_eq!(SceneConfig::parse("").unwrap(), SceneConfig::default());
    }

    #[test]
    fn json_object() {
        let config =
            SceneConfig::parse(r#"{"section":"footer","count":-4,"stars":0,"seed":9}"#).unwrap();
        assert_eq!(config.section, Section::Footer);
        assert_eq!(config.compose_options(), ComposeOptions { count: Some(-4), star_count: Some(0) });
        assert_eq!(config.height(), Some(300));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = SceneConfig::parse(r#"{"section":"hero","colour":"red"}"#).unwrap_err();
        assert!(matches!(err, SceneError::Config(_)));
    }

    #[test]
    fn unknown_section_is_rejected() {
        let err = SceneConfig::parse("contact").unwrap_err();
        assert!(matches!(err, SceneError::UnknownSection(name) if name == "contact"));
    }

    #[test]
    fn bare_name_accepts_nav_anchor() {
        let config = SceneConfig::parse("home").unwrap();
        assert_eq!(config.section, Section::Hero);
        assert_eq!(config.section, "home".parse::<Section>().unwrap());
    }

    #[test]
    fn json_section_follows_bare_name_rules() {
        let config = SceneConfig::parse(r#"{"section":"Home","count":2}"#).unwrap();
        assert_eq!(config.section, Section::Hero);
        let err = SceneConfig::parse(r#"{"section":"contact"}"#).unwrap_err();
        assert!(matches!(err, SceneError::Config(_)));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = SceneConfig {
            seed: Some(42),
            ..SceneConfig::default()
        };
        let a: [u32; 4] = config.rng().gen();
        let b: [u32; 4] = config.rng().gen();
        assert_eq!(a, b);
    }
}
