use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A chain of transformation components, rendered as `w_100,c_fill/e_sepia`.
///
/// Each component is a set of `key_value` pairs. Pairs inside a component are
/// emitted sorted by key, components are joined with `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transformation {
    chain: Vec<BTreeMap<String, String>>,
    current: BTreeMap<String, String>,
}

impl Transformation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.current.insert(key.to_string(), value.to_string());
        self
    }

    pub fn width(self, value: impl ToString) -> Self {
        self.param("w", value)
    }

    pub fn height(self, value: impl ToString) -> Self {
        self.param("h", value)
    }

    pub fn crop(self, mode: &str) -> Self {
        self.param("c", mode)
    }

    pub fn gravity(self, gravity: &str) -> Self {
        self.param("g", gravity)
    }

    pub fn quality(self, value: impl ToString) -> Self {
        self.param("q", value)
    }

    pub fn fetch_format(self, format: &str) -> Self {
        self.param("f", format)
    }

    pub fn effect(self, effect: &str) -> Self {
        self.param("e", effect)
    }

    pub fn angle(self, value: impl ToString) -> Self {
        self.param("a", value)
    }

    pub fn bit_rate(self, value: &str) -> Self {
        self.param("br", value)
    }

    pub fn video_codec(self, codec: &str) -> Self {
        self.param("vc", codec)
    }

    /// Reference a named transformation.
    pub fn named(self, name: &str) -> Self {
        self.param("t", name)
    }

    /// Close the current component and start a new one.
    pub fn chain(mut self) -> Self {
        if !self.current.is_empty() {
            let done = std::mem::take(&mut self.current);
            self.chain.push(done);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty() && self.current.is_empty()
    }

    fn components(&self) -> impl Iterator<Item = &BTreeMap<String, String>> {
        self.chain
            .iter()
            .chain(std::iter::once(&self.current))
            .filter(|component| !component.is_empty())
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .components()
            .map(|component| {
                component
                    .iter()
                    .map(|(key, value)| format!("{key}_{value}"))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join("/");
        f.write_str(&rendered)
    }
}

impl FromStr for Transformation {
    type Err = Infallible;

    /// Pairs without an underscore are treated as named transformations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut transformation = Transformation::new();
        for component in s.split('/').filter(|c| !c.trim().is_empty()) {
            for pair in component.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                transformation = match pair.split_once('_') {
                    Some((key, value)) => transformation.param(key, value),
                    None => transformation.named(pair),
                };
            }
            transformation = transformation.chain();
        }
        Ok(transformation)
    }
}

impl Serialize for Transformation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Eager and derived transformation lists travel as one `|`-separated value.
pub(crate) fn serialize_transformation_list<S: Serializer>(
    list: &[Transformation],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if list.is_empty() {
        return serializer.serialize_none();
    }
    let joined = list
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("|");
    serializer.serialize_str(&joined)
}

pub(crate) fn serialize_optional_transformation_list<S: Serializer>(
    list: &Option<Vec<Transformation>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match list {
        Some(list) => serialize_transformation_list(list, serializer),
        None => serializer.serialize_none(),
    }
}
