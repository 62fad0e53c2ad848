//! Champion catalog types, normalization and search

use serde::{Deserialize, Serialize};

/// A playable champion as shown in the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Champion {
    pub id: i64,
    pub name: String,
    pub alias: String,
}

impl Champion {
    pub fn new(id: i64, name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            alias: alias.into(),
        }
    }

    /// Case-insensitive substring match on name or alias.
    ///
    /// `query_lower` must already be lower-cased.
    fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.alias.to_lowercase().contains(query_lower)
    }
}

/// Champion record as the backend returns it.
///
/// Every field is optional; malformed records are dropped by
/// [`normalize_catalog`] rather than failing the whole load.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawChampion {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
}

impl RawChampion {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: Some(name.to_string()),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }
}

/// Alias derived from a display name: lower-cased with whitespace removed
pub fn derive_alias(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Primary sort key for a display name: lower-cased, with Latin accents
/// and ligatures folded to their base letters, so "Élise" files under E.
fn collation_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        match c {
            'à'..='å' | 'ā' | 'ă' | 'ą' => key.push('a'),
            'æ' => key.push_str("ae"),
            'ç' | 'ć' | 'č' => key.push('c'),
            'è'..='ë' | 'ē' | 'ė' | 'ę' | 'ě' => key.push('e'),
            'ì'..='ï' | 'ī' | 'į' => key.push('i'),
            'ñ' | 'ń' | 'ň' => key.push('n'),
            'ò'..='ö' | 'ø' | 'ō' | 'ő' => key.push('o'),
            'œ' => key.push_str("oe"),
            'ß' => key.push_str("ss"),
            'š' | 'ś' => key.push('s'),
            'ù'..='ü' | 'ū' | 'ů' | 'ű' => key.push('u'),
            'ý' | 'ÿ' => key.push('y'),
            'ž' | 'ź' | 'ż' => key.push('z'),
            other => key.push(other),
        }
    }
    key
}

/// Turn raw backend records into a sorted, display-ready catalog.
///
/// Records with a non-positive id or an empty name are discarded. A missing or
/// empty alias is derived from the name. The result is sorted by name,
/// ignoring case and accents first, then by case, then by exact spelling.
pub fn normalize_catalog(raw: Vec<RawChampion>) -> Vec<Champion> {
    let mut champions: Vec<Champion> = raw
        .into_iter()
        .filter_map(|record| {
            let name = record.name.filter(|n| !n.is_empty())?;
            if record.id <= 0 {
                return None;
            }
            let alias = record
                .alias
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| derive_alias(&name));
            Some(Champion {
                id: record.id,
                name,
                alias,
            })
        })
        .collect();

    champions.sort_by_cached_key(|c| {
        (
            collation_key(&c.name),
            c.name.to_lowercase(),
            c.name.clone(),
        )
    });
    champions
}

/// Champions whose name or alias contains `query`, ignoring case.
///
/// An empty query returns the whole catalog. Order is preserved.
pub fn filter_champions<'a>(catalog: &'a [Champion], query: &str) -> Vec<&'a Champion> {
    let query_lower = query.to_lowercase();
    catalog
        .iter()
        .filter(|champion| champion.matches(&query_lower))
        .collect()
}

/// Look up a champion by id
pub fn find_champion(catalog: &[Champion], id: i64) -> Option<&Champion> {
    catalog.iter().find(|c| c.id == id)
}
