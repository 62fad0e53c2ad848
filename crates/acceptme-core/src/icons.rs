//! Champion icon resolution
//!
//! Icons are looked up in the bundled asset set first. Bundled file names do
//! not always follow the display name, so a fixed exception table is consulted
//! before the generic rule. When the bundled file is missing the public
//! Data Dragon CDN is used instead, keyed by the champion alias.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// Default Data Dragon base URL
pub const DEFAULT_CDN_BASE: &str = "https://ddragon.leagueoflegends.com/cdn";

/// Default Data Dragon patch version
pub const DEFAULT_CDN_VERSION: &str = "13.24.1";

/// Display names whose bundled icon file does not follow the generic rule.
const ICON_EXCEPTIONS: &[(&str, &str)] = &[
    ("AurelionSol", "aurelionsol"),
    ("Aurelion Sol", "aurelionsol"),
    ("Bel'Veth", "belveth"),
    ("Belveth", "belveth"),
    ("BelVeth", "belveth"),
    ("Blitzcrank", "blitz"),
    ("Cho'Gath", "chogath"),
    ("Chogath", "chogath"),
    ("ChoGath", "chogath"),
    ("Diana", "dianna"),
    ("Dr. Mundo", "drmundo"),
    ("Dr.Mundo", "drmundo"),
    ("DrMundo", "drmundo"),
    ("Fiddlesticks", "fiddlesticks"),
    ("Heimerdinger", "heimdanger"),
    ("Jarvan IV", "jarvan"),
    ("JarvanIV", "jarvan"),
    ("Kai'Sa", "kaisa"),
    ("Kaisa", "kaisa"),
    ("KaiSa", "kaisa"),
    ("Kha'Zix", "khazix"),
    ("Khazix", "khazix"),
    ("KhaZix", "khazix"),
    ("Kog'Maw", "kogmaw"),
    ("KogMaw", "kogmaw"),
    ("K'Sante", "ksante"),
    ("KSante", "ksante"),
    ("LeBlanc", "leblanc"),
    ("Leblanc", "leblanc"),
    ("Lee Sin", "leesin"),
    ("LeeSin", "leesin"),
    ("Lissandra", "lisandra"),
    ("Master Yi", "masteryi"),
    ("MasterYi", "masteryi"),
    ("Miss Fortune", "missfortune"),
    ("MissFortune", "missfortune"),
    ("Wukong", "wukong"),
    ("MonkeyKing", "wukong"),
    ("Nunu & Willump", "nunu"),
    ("Nunu&Willump", "nunu"),
    ("Nunu", "nunu"),
    ("Rek'Sai", "reksai"),
    ("RekSai", "reksai"),
    ("Renata Glasc", "renata"),
    ("RenataGlasc", "renata"),
    ("Renata", "renata"),
    ("Tahm Kench", "tahmkench"),
    ("TahmKench", "tahmkench"),
    ("Twisted Fate", "twistedfate"),
    ("TwistedFate", "twistedfate"),
    ("Vel'Koz", "velkoz"),
    ("Velkoz", "velkoz"),
    ("VelKoz", "velkoz"),
    ("Xin Zhao", "xinzhao"),
    ("XinZhao", "xinzhao"),
    // Bundled with their original capitalization
    ("Ambessa", "Ambessa"),
    ("Aurora", "Aurora"),
    ("Mel", "Mel"),
    ("Zaahen", "Zaahen"),
    ("Hecarim", "hecarim"),
    ("Hwei", "hwei"),
    ("Smolder", "smolder"),
    ("Maokai", "maokai"),
    ("Ziggs", "ziggs"),
    ("Zyra", "zyra"),
    ("Lillia", "lillia"),
    ("Kassadin", "kassadin"),
    ("Sejuani", "sejuani"),
    ("Cassiopeia", "cassiopeia"),
];

static STRIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s']").expect("Invalid icon strip regex"));

/// Bundled icon path for a champion display name, e.g. `/champions/ahri.png`.
pub fn champion_icon_path(name: &str) -> String {
    let file = ICON_EXCEPTIONS
        .iter()
        .find(|(display, _)| *display == name)
        .map(|(_, file)| (*file).to_string())
        .unwrap_or_else(|| {
            STRIP_PATTERN
                .replace_all(&name.to_lowercase(), "")
                .into_owned()
        });
    format!("/champions/{file}.png")
}

/// Where the CDN fallback images come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdnSource {
    pub base: String,
    pub version: String,
}

impl Default for CdnSource {
    fn default() -> Self {
        Self {
            base: DEFAULT_CDN_BASE.to_string(),
            version: DEFAULT_CDN_VERSION.to_string(),
        }
    }
}

impl CdnSource {
    pub fn new(base: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            version: version.into(),
        }
    }

    /// Remote image URL for a champion alias
    pub fn champion_url(&self, alias: &str) -> String {
        format!(
            "{}/{}/img/champion/{}.png",
            self.base.trim_end_matches('/'),
            self.version,
            alias
        )
    }
}

/// Which image a consumer should actually display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    Local(PathBuf),
    Remote(String),
}

impl IconSource {
    pub fn is_local(&self) -> bool {
        matches!(self, IconSource::Local(_))
    }

    /// Short description for display
    pub fn describe(&self) -> String {
        match self {
            IconSource::Local(path) => path.display().to_string(),
            IconSource::Remote(url) => url.clone(),
        }
    }
}

/// Two-tier icon reference: bundled asset first, CDN image as fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionIcon {
    pub local: String,
    pub fallback: String,
}

impl ChampionIcon {
    pub fn new(name: &str, alias: &str, cdn: &CdnSource) -> Self {
        Self {
            local: champion_icon_path(name),
            fallback: cdn.champion_url(alias),
        }
    }

    /// Pick the bundled file if it exists under `asset_root`, otherwise the CDN URL.
    pub fn resolve(&self, asset_root: Option<&Path>) -> IconSource {
        if let Some(root) = asset_root {
            let candidate = root.join(self.local.trim_start_matches('/'));
            if candidate.is_file() {
                return IconSource::Local(candidate);
            }
        }
        IconSource::Remote(self.fallback.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_rule() {
        assert_eq!(champion_icon_path("Ahri"), "/champions/ahri.png");
        assert_eq!(champion_icon_path("Vi"), "/champions/vi.png");
    }

    #[test]
    fn test_generic_rule_strips_spaces_and_apostrophes() {
        assert_eq!(champion_icon_path("Rek Sai'x"), "/champions/reksaix.png");
    }

    #[test]
    fn test_exception_table() {
        assert_eq!(champion_icon_path("Dr. Mundo"), "/champions/drmundo.png");
        assert_eq!(champion_icon_path("Blitzcrank"), "/champions/blitz.png");
        assert_eq!(champion_icon_path("Diana"), "/champions/dianna.png");
        assert_eq!(champion_icon_path("Heimerdinger"), "/champions/heimdanger.png");
        assert_eq!(champion_icon_path("Nunu & Willump"), "/champions/nunu.png");
        assert_eq!(champion_icon_path("MonkeyKing"), "/champions/wukong.png");
    }

    #[test]
    fn test_exception_table_keeps_capitalization() {
        assert_eq!(champion_icon_path("Ambessa"), "/champions/Ambessa.png");
        assert_eq!(champion_icon_path("Mel"), "/champions/Mel.png");
    }

    #[test]
    fn test_exception_lookup_is_exact() {
        // Only the listed spellings are exceptions
        assert_eq!(champion_icon_path("dr. mundo"), "/champions/dr.mundo.png");
    }

    #[test]
    fn test_cdn_url() {
        let cdn = CdnSource::default();
        assert_eq!(
            cdn.champion_url("Ahri"),
            "https://ddragon.leagueoflegends.com/cdn/13.24.1/img/champion/Ahri.png"
        );

        let cdn = CdnSource::new("https://example.test/cdn/", "14.1.1");
        assert_eq!(
            cdn.champion_url("ahri"),
            "https://example.test/cdn/14.1.1/img/champion/ahri.png"
        );
    }

    #[test]
    fn test_resolve_prefers_bundled_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("champions")).unwrap();
        std::fs::write(dir.path().join("champions/ahri.png"), b"png").unwrap();

        let icon = ChampionIcon::new("Ahri", "Ahri", &CdnSource::default());
        assert_eq!(
            icon.resolve(Some(dir.path())),
            IconSource::Local(dir.path().join("champions/ahri.png"))
        );
    }

    #[test]
    fn test_resolve_falls_back_to_cdn() {
        let dir = tempfile::tempdir().unwrap();
        let icon = ChampionIcon::new("Zed", "Zed", &CdnSource::default());

        let source = icon.resolve(Some(dir.path()));
        assert!(!source.is_local());
        assert_eq!(source.describe(), icon.fallback);
        assert_eq!(icon.resolve(None), IconSource::Remote(icon.fallback.clone()));
    }
}
