use crate::error::{KeResult, KeyErgoError};
use crate::geometry::KEYS;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Position names of the 30-key main block, top row first.
pub const MAIN_BLOCK: &str = "qwertyuiopasdfghjkl;zxcvbnm,./";

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, IntoStaticStr, PartialEq, Eq, Hash)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum KnownLayout {
    Qwerty,
    Dvorak,
    Colemak,
    ColemakDh,
    Workman,
    Halmak,
}

impl KnownLayout {
    /// Characters of the main block in `MAIN_BLOCK` order (ANSI row stagger).
    pub fn get_str(&self) -> &'static str {
        match self {
            Self::Qwerty => "qwertyuiopasdfghjkl;zxcvbnm,./",
            Self::Dvorak => "',.pyfgcrlaoeuidhtns;qjkxbmwvz",
            Self::Colemak => "qwfpgjluy;arstdhneiozxcvbkm,./",
            Self::ColemakDh => "qwfpbjluy;arstgmneiozxcdvkh,./",
            Self::Workman => "qdrwbjfup;ashtgyneoizxmcvkl,./",
            Self::Halmak => "wlrbz;qudjshnt,.aeoifmvc/gpxky",
        }
    }

    pub fn mapping(&self) -> LayoutMapping {
        LayoutMapping::from_layout_string(self.get_str())
    }
}

/// Every built-in layout, in declaration order.
pub fn builtin_layouts() -> Vec<(&'static str, LayoutMapping)> {
    KnownLayout::iter()
        .map(|l| (l.into(), l.mapping()))
        .collect()
}

/// Built-in layout by name, e.g. `"colemak-dh"`.
pub fn builtin(name: &str) -> Option<LayoutMapping> {
    KnownLayout::from_str(name.trim()).ok().map(|l| l.mapping())
}

/// Which character each physical position produces. Positions are named by
/// their QWERTY legend; positions without an entry type their own legend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct LayoutMapping {
    assignments: BTreeMap<char, char>,
}

impl From<BTreeMap<String, String>> for LayoutMapping {
    /// Keys must be single characters; values contribute their first character.
    /// Anything else is skipped.
    fn from(raw: BTreeMap<String, String>) -> Self {
        let mut mapping = LayoutMapping::default();
        for (position, value) in raw {
            let mut pos_chars = position.chars();
            let (Some(pos), None) = (pos_chars.next(), pos_chars.next()) else {
                continue;
            };
            if let Some(c) = value.chars().next() {
                mapping.assign(pos, c);
            }
        }
        mapping
    }
}

impl From<LayoutMapping> for BTreeMap<String, String> {
    fn from(mapping: LayoutMapping) -> Self {
        mapping
            .assignments
            .into_iter()
            .map(|(p, c)| (p.to_string(), c.to_string()))
            .collect()
    }
}

impl LayoutMapping {
    /// The empty mapping: every position types its own legend (QWERTY).
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut mapping = Self::default();
        for (pos, c) in pairs {
            mapping.assign(pos, c);
        }
        mapping
    }

    pub fn from_json(json: &str) -> KeResult<Self> {
        let mapping: LayoutMapping = serde_json::from_str(json)?;
        Ok(mapping)
    }

    pub fn to_json(&self) -> KeResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reads the main block left to right, top row first. Whitespace is
    /// ignored and extra characters are dropped.
    pub fn from_layout_string(layout: &str) -> Self {
        let chars = layout.chars().filter(|c| !c.is_whitespace());
        Self::from_pairs(MAIN_BLOCK.chars().zip(chars))
    }

    pub fn assign(&mut self, position: char, c: char) {
        self.assignments
            .insert(position.to_ascii_lowercase(), c.to_ascii_lowercase());
    }

    /// Character produced by a position, defaulting to its own legend.
    pub fn char_at(&self, position: char) -> char {
        let position = position.to_ascii_lowercase();
        self.assignments.get(&position).copied().unwrap_or(position)
    }

    /// Explicit entries only.
    pub fn assignments(&self) -> &BTreeMap<char, char> {
        &self.assignments
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Inverse view: character -> position. Explicit entries override the
    /// implicit identity of unassigned positions.
    pub fn char_positions(&self) -> HashMap<char, char> {
        let mut map = HashMap::with_capacity(KEYS.len() + self.assignments.len());
        for key in KEYS.iter() {
            if !self.assignments.contains_key(&key.name) {
                map.insert(key.name, key.name);
            }
        }
        for (&pos, &c) in &self.assignments {
            map.insert(c, pos);
        }
        map
    }

    /// Position typing `c`, if any table position produces it.
    pub fn position_of(&self, c: char) -> Option<char> {
        let c = c.to_ascii_lowercase();
        self.char_positions().get(&c).copied()
    }

    /// Exchanges the positions of two characters.
    pub fn swap_chars(&mut self, a: char, b: char) -> KeResult<()> {
        let pa = self.position_of(a).ok_or_else(|| {
            KeyErgoError::Validation(format!("Character '{}' is not on the layout", a))
        })?;
        let pb = self.position_of(b).ok_or_else(|| {
            KeyErgoError::Validation(format!("Character '{}' is not on the layout", b))
        })?;
        let (ca, cb) = (self.char_at(pa), self.char_at(pb));
        self.assign(pa, cb);
        self.assign(pb, ca);
        Ok(())
    }

    /// Canonical text form: sorted, identity entries dropped. Two mappings
    /// that type the same characters on the same positions share a key.
    pub fn normalized_key(&self) -> String {
        self.assignments
            .iter()
            .filter(|(p, c)| p != c)
            .map(|(p, c)| format!("{}={}", p, c))
            .collect::<Vec<_>>()
            .join(";")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_strings_cover_main_block() {
        for layout in KnownLayout::iter() {
            assert_eq!(layout.get_str().chars().count(), 30, "{}", layout);
        }
    }

    #[test]
    fn test_builtin_lookup_by_name() {
        assert!(builtin("colemak-dh").is_some());
        assert!(builtin("Dvorak").is_some());
        assert!(builtin("azerty").is_none());
    }

    #[test]
    fn test_qwerty_is_identity() {
        assert_eq!(KnownLayout::Qwerty.mapping().normalized_key(), "");
    }

    #[test]
    fn test_explicit_entry_wins_over_identity() {
        let m = LayoutMapping::from_pairs([('a', 's')]);
        let inv = m.char_positions();
        assert_eq!(inv.get(&'s'), Some(&'a'));
    }

    #[test]
    fn test_malformed_json_entries_are_skipped() {
        let m = LayoutMapping::from_json(r#"{"a": "", "sd": "x", "q": "Zed"}"#).unwrap();
        assert_eq!(m.len(), 1);
        assert_eq!(m.char_at('q'), 'z');
    }

    #[test]
    fn test_swap_chars() {
        let mut m = LayoutMapping::identity();
        m.swap_chars('e', 'h').unwrap();
        assert_eq!(m.char_at('e'), 'h');
        assert_eq!(m.char_at('h'), 'e');
        assert_eq!(m.position_of('h'), Some('e'));
    }
}
