//! Interface languages available to the language selector.
//!
//! English is built in. Every other language is discovered from translation
//! files named `pixlume_<id>.qm` in the translation directories.

use std::{
    collections::BTreeSet,
    env::current_exe,
    fs::read_dir,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use {regex::Regex, tracing::debug};

use crate::config::settings::get_data_dir;

/// Matches `pixlume_de.qm`, `pixlume_pt_BR.qm` and captures the identifier.
static TRANSLATION_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^pixlume_([a-z]{2,3}(?:_[A-Z]{2})?)\.qm$").expect("valid translation pattern")
});

/// Identifier of the built-in language.
pub const DEFAULT_LANGUAGE: &str = "en";

const NATIVE_NAMES: &[(&str, &str)] = &[
    ("ar", "العربية"),
    ("bg", "Български"),
    ("cs", "Čeština"),
    ("de", "Deutsch"),
    ("en", "English"),
    ("es", "Español"),
    ("fr", "Français"),
    ("hu", "Magyar"),
    ("it", "Italiano"),
    ("ja", "日本語"),
    ("ko", "한국어"),
    ("nl", "Nederlands"),
    ("pl", "Polski"),
    ("pt", "Português"),
    ("pt_BR", "Português (Brasil)"),
    ("ru", "Русский"),
    ("sk", "Slovenčina"),
    ("sv", "Svenska"),
    ("tr", "Türkçe"),
    ("uk", "Українська"),
    ("zh_CN", "简体中文"),
    ("zh_TW", "繁體中文"),
];

/// One selectable language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Identifier stored in the settings.
    pub id: String,
    /// Name shown in the selector.
    pub name: String,
}

impl Language {
    fn from_id(id: &str) -> Self {
        let name = NATIVE_NAMES
            .iter()
            .find(|(known, _)| *known == id)
            .map_or(id, |&(_, name)| name);

        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Ordered list of selectable languages; English always comes first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCatalog {
    languages: Vec<Language>,
}

impl LanguageCatalog {
    /// Builds a catalog from translation identifiers.
    ///
    /// Duplicates and the built-in English entry are dropped, the rest is
    /// sorted by identifier.
    pub fn from_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let extra: BTreeSet<&str> = ids
            .into_iter()
            .filter(|id| *id != DEFAULT_LANGUAGE)
            .collect();

        let languages = [DEFAULT_LANGUAGE]
            .into_iter()
            .chain(extra)
            .map(Language::from_id)
            .collect();

        Self { languages }
    }

    /// Scans `dirs` for translation files. Unreadable directories are skipped.
    pub fn discover(dirs: &[PathBuf]) -> Self {
        let mut ids = Vec::new();

        for dir in dirs {
            let entries = match read_dir(dir) {
                Ok(entries) => entries,
                Err(e) => {
                    debug!("LanguageCatalog: skipping {:?}: {}", dir, e);
                    continue;
                }
            };

            for entry in entries.flatten() {
                let file_name = entry.file_name();
                if let Some(id) = file_name.to_str().and_then(translation_id) {
                    ids.push(id.to_string());
                }
            }
        }

        debug!("LanguageCatalog: found {} translations", ids.len());
        Self::from_ids(ids.iter().map(String::as_str))
    }

    /// Number of languages, English included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Always `false`; English is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Position of `id` in the selector.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.languages.iter().position(|language| language.id == id)
    }

    /// Identifier at selector position `index`.
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<&str> {
        self.languages.get(index).map(|language| language.id.as_str())
    }

    /// Names in selector order.
    #[must_use]
    pub fn display_names(&self) -> Vec<&str> {
        self.languages
            .iter()
            .map(|language| language.name.as_str())
            .collect()
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::from_ids([])
    }
}

/// Extracts the language identifier from a translation file name.
fn translation_id(file_name: &str) -> Option<&str> {
    TRANSLATION_FILE
        .captures(file_name)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
}

/// Directories searched for translation files, in priority order.
#[must_use]
pub fn translation_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![get_data_dir().join("translations")];

    if let Ok(exe) = current_exe()
        && let Some(exe_dir) = exe.parent()
    {
        dirs.push(exe_dir.join("translations"));
    }

    dirs.push(Path::new("/usr/share/pixlume/translations").to_path_buf());
    dirs
}
