//! 国际化（i18n）模块
//!
//! 纯 Rust 结构体翻译表，编译期类型检查；当前语言保存在一个原子索引里。

use std::sync::atomic::{AtomicUsize, Ordering};

mod bn_bd;
mod en_us;
pub mod keys;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 孟加拉语（孟加拉国）
    BnBd,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::BnBd]
    }

    /// 语言自身文字的显示名称
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::BnBd => "বাংলা",
        }
    }

    /// BCP 47 语言代码
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::BnBd => "bn-BD",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "bn-BD" | "bn" => Some(Language::BnBd),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Language::EnUs => 0,
            Language::BnBd => 1,
        }
    }
}

/// 当前语言索引（0 = EnUs）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0);

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &bn_bd::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang.index(), Ordering::Relaxed);
}

pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::BnBd,
        _ => Language::EnUs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::from_code("bn"), Some(Language::BnBd));
        assert_eq!(Language::from_code("fr-FR"), None);
    }

    #[test]
    fn tables_cover_every_language() {
        assert_eq!(en_us::TRANSLATIONS.nav.music, "Music");
        assert_eq!(bn_bd::TRANSLATIONS.feed.no_results, "কোনো ভিডিও পাওয়া যায়নি!");
        for lang in Language::all() {
            assert!(!lang.display_name().is_empty());
        }
    }
}
