//! Scene composers, one per page section.
//!
//! Every composer draws all of its randomness up front from the generator
//! it is handed; the frame path never touches a random source.

mod about;
mod background;
mod common;
mod education;
mod experience;
mod footer;
mod hero;
mod projects;
mod skills;

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Deserialize;

use crate::error::SceneError;
use crate::scene::Scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Section {
    /// Fixed full-page backdrop behind every section.
    #[default]
    Background,
    Hero,
    About,
    Education,
    Projects,
    Skills,
    Experience,
    Footer,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Background,
        Section::Hero,
        Section::About,
        Section::Education,
        Section::Projects,
        Section::Skills,
        Section::Experience,
        Section::Footer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Background => "background",
            Section::Hero => "hero",
            Section::About => "about",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Footer => "footer",
        }
    }

    /// In-page anchor the navigation bar scrolls to.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "home",
            other => other.name(),
        }
    }

    pub fn default_count(self) -> usize {
        match self {
            Section::Background => background::DEFAULT_COUNT,
            Section::Hero => hero::DEFAULT_COUNT,
            Section::About => about::DEFAULT_COUNT,
            Section::Education => education::DEFAULT_COUNT,
            Section::Projects => projects::DEFAULT_COUNT,
            Section::Skills => skills::DEFAULT_COUNT,
            Section::Experience => experience::DEFAULT_COUNT,
            Section::Footer => footer::DEFAULT_COUNT,
        }
    }

    pub fn default_stars(self) -> usize {
        match self {
            Section::Background => background::DEFAULT_STARS,
            Section::Hero => hero::DEFAULT_STARS,
            Section::About => about::DEFAULT_STARS,
            Section::Education => education::DEFAULT_STARS,
            Section::Projects => projects::DEFAULT_STARS,
            Section::Skills => skills::DEFAULT_STARS,
            Section::Experience => experience::DEFAULT_STARS,
            Section::Footer => footer::DEFAULT_STARS,
        }
    }

    /// Surface height in pixels for sections that do not fill the window.
    pub fn fixed_height(self) -> Option<u32> {
        match self {
            Section::Footer => Some(footer::HEIGHT),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for Section {
    type Error = SceneError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl FromStr for Section {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Section::ALL
            .into_iter()
            .find(|section| {
                section.name().eq_ignore_ascii_case(wanted)
                    || section.anchor().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| SceneError::UnknownSection(wanted.to_string()))
    }
}

/// Overrides for a composition. `None` keeps the section default; zero or
/// negative values yield an empty set rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComposeOptions {
    pub count: Option<i64>,
    pub star_count: Option<i64>,
}

impl ComposeOptions {
    pub fn with_count(count: i64) -> Self {
        Self {
            count: Some(count),
            ..Self::default()
        }
    }

    fn resolve(requested: Option<i64>, default: usize) -> usize {
        match requested {
            None => default,
            Some(n) => usize::try_from(n).unwrap_or(0),
        }
    }
}

/// Build the decorative scene for `section`.
///
/// The result holds exactly the requested number of primary objects; the
/// section's fixtures, links, lights and starfield are present regardless.
pub fn compose<R: Rng + ?Sized>(section: Section, options: &ComposeOptions, rng: &mut R) -> Scene {
    let count = ComposeOptions::resolve(options.count, section.default_count());
    let stars = ComposeOptions::resolve(options.star_count, section.default_stars());
    log::debug!("composing {section} scene: {count} objects, {stars} stars");

    match section {
        Section::Background => background::compose(count, stars, rng),
        Section::Hero => hero::compose(count, stars, rng),
        Section::About => about::compose(count, stars, rng),
        Section::Education => education::compose(count, stars, rng),
        Section::Projects => projects::compose(count, stars, rng),
        Section::Skills => skills::compose(count, stars, rng),
        Section::Experience => experience::compose(count, stars, rng),
        Section::Footer => footer::compose(count, stars, rng),
    }
}
