//! Month-name tables keyed by language code.
//!
//! The built-in table is assembled once on first use and never mutated.
//! Lookups always succeed: unknown languages resolve to [`FALLBACK_LANGUAGE`].

use std::sync::LazyLock;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{ChartError, ChartResult};

pub const FALLBACK_LANGUAGE: &str = "en";
pub const MONTHS_PER_YEAR: usize = 12;

/// Full and abbreviated month names, index `0` is January.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthNames {
    pub full: [&'static str; MONTHS_PER_YEAR],
    pub short: [&'static str; MONTHS_PER_YEAR],
}

impl MonthNames {
    /// # Panics
    ///
    /// Panics when `month0` is not in `0..12`.
    #[must_use]
    pub fn full(&self, month0: usize) -> &'static str {
        self.full[month0]
    }

    /// # Panics
    ///
    /// Panics when `month0` is not in `0..12`.
    #[must_use]
    pub fn short(&self, month0: usize) -> &'static str {
        self.short[month0]
    }
}

pub const EN_MONTH_NAMES: MonthNames = MonthNames {
    full: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
};

pub const ES_MONTH_NAMES: MonthNames = MonthNames {
    full: [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],
    short: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
    ],
};

pub const FR_MONTH_NAMES: MonthNames = MonthNames {
    full: [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ],
    short: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
        "nov.", "déc.",
    ],
};

pub const DE_MONTH_NAMES: MonthNames = MonthNames {
    full: [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    short: [
        "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
    ],
};

static BUILTIN: LazyLock<LocaleTable> = LazyLock::new(|| LocaleTable {
    entries: IndexMap::from([
        (FALLBACK_LANGUAGE, EN_MONTH_NAMES),
        ("es", ES_MONTH_NAMES),
        ("fr", FR_MONTH_NAMES),
        ("de", DE_MONTH_NAMES),
    ]),
});

/// Read-only mapping from language code to month names.
///
/// Always contains a [`FALLBACK_LANGUAGE`] entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleTable {
    entries: IndexMap<&'static str, MonthNames>,
}

impl LocaleTable {
    /// Process-wide built-in table (`en`, `es`, `fr`, `de`).
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Builds a custom table. The entries must include the fallback language.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (&'static str, MonthNames)>,
    ) -> ChartResult<Self> {
        let entries: IndexMap<_, _> = entries.into_iter().collect();
        if !entries.contains_key(FALLBACK_LANGUAGE) {
            return Err(ChartError::InvalidData(format!(
                "locale table must contain the `{FALLBACK_LANGUAGE}` fallback entry"
            )));
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn contains(&self, language: &str) -> bool {
        self.entries.contains_key(language)
    }

    pub fn languages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Resolves month names for `language`.
    ///
    /// Tries the exact code, then its primary subtag (`en-GB` -> `en`), then
    /// falls back to `en`. Never fails.
    #[must_use]
    pub fn lookup(&self, language: Option<&str>) -> &MonthNames {
        let Some(language) = language.filter(|code| !code.is_empty()) else {
            return self.fallback();
        };
        if let Some(names) = self.entries.get(language) {
            return names;
        }
        let primary = language
            .split(['-', '_'])
            .next()
            .unwrap_or(language)
            .to_ascii_lowercase();
        if let Some(names) = self.entries.get(primary.as_str()) {
            return names;
        }
        debug!(language, "unknown label language, using fallback month names");
        self.fallback()
    }

    fn fallback(&self) -> &MonthNames {
        // `from_entries` and the builtin table both guarantee the entry.
        &self.entries[FALLBACK_LANGUAGE]
    }
}

/// Looks up month names in the built-in table.
#[must_use]
pub fn lookup(language: Option<&str>) -> &'static MonthNames {
    LocaleTable::builtin().lookup(language)
}
