//! Script-based language detection.

use super::LanguageDetector;
use crate::error::{Result, UtcError};

/// Writing systems the detector distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// Hiragana / Katakana
    Kana,
    /// CJK ideographs
    Han,
    /// Korean Hangul
    Hangul,
    /// Arabic
    Arabic,
    /// Hebrew
    Hebrew,
    /// Cyrillic
    Cyrillic,
    /// Greek
    Greek,
    /// Thai
    Thai,
    /// Devanagari
    Devanagari,
    /// Latin (basic and extended)
    Latin,
}

impl Script {
    // Order doubles as the tie-break when two scripts have equal counts.
    const ALL: [Script; 10] = [
        Script::Kana,
        Script::Han,
        Script::Hangul,
        Script::Arabic,
        Script::Hebrew,
        Script::Cyrillic,
        Script::Greek,
        Script::Thai,
        Script::Devanagari,
        Script::Latin,
    ];

    /// Classify a character, `None` for digits, punctuation, symbols, etc.
    pub fn of(c: char) -> Option<Self> {
        let code = c as u32;
        let script = match code {
            0x3040..=0x30FF | 0x31F0..=0x31FF | 0xFF66..=0xFF9F => Script::Kana,
            0x4E00..=0x9FFF | 0x3400..=0x4DBF | 0xF900..=0xFAFF => Script::Han,
            0xAC00..=0xD7AF | 0x1100..=0x11FF | 0x3130..=0x318F => Script::Hangul,
            0x0600..=0x06FF
            | 0x0750..=0x077F
            | 0x08A0..=0x08FF
            | 0xFB50..=0xFDFF
            | 0xFE70..=0xFEFF => Script::Arabic,
            0x0590..=0x05FF => Script::Hebrew,
            0x0400..=0x04FF | 0x0500..=0x052F => Script::Cyrillic,
            0x0370..=0x03FF => Script::Greek,
            0x0E00..=0x0E7F => Script::Thai,
            0x0900..=0x097F => Script::Devanagari,
            _ if c.is_ascii_alphabetic() => Script::Latin,
            0x00C0..=0x024F if c.is_alphabetic() => Script::Latin,
            _ => return None,
        };
        Some(script)
    }

    fn index(self) -> usize {
        Script::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// Detects language from the dominant Unicode script.
///
/// Any kana makes the text Japanese (Japanese mixes kana with kanji);
/// otherwise the most frequent script wins. Latin-script text reports `en`.
///
/// # Example
/// ```
/// use utc::language::{LanguageDetector, ScriptDetector};
///
/// let detector = ScriptDetector::new();
/// assert_eq!(detector.detect("これはテストです").unwrap(), "ja");
/// assert_eq!(detector.detect("Hello world").unwrap(), "en");
/// assert!(detector.detect("12345 !!!").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptDetector;

impl ScriptDetector {
    /// Create a new detector
    pub fn new() -> Self {
        Self
    }

    /// Dominant script of `text`, if it has any letters.
    pub fn dominant_script(&self, text: &str) -> Option<Script> {
        let mut counts = [0usize; Script::ALL.len()];
        for script in text.chars().filter_map(Script::of) {
            counts[script.index()] += 1;
        }

        if counts[Script::Kana.index()] > 0 {
            return Some(Script::Kana);
        }

        let (idx, &max) = counts
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))?;
        (max > 0).then_some(Script::ALL[idx])
    }
}

impl LanguageDetector for ScriptDetector {
    fn detect(&self, text: &str) -> Result<String> {
        let script = self.dominant_script(text).ok_or_else(|| {
            UtcError::LanguageDetection("no alphabetic characters in input".to_string())
        })?;

        let code = match script {
            Script::Kana => "ja",
            Script::Han => "zh",
            Script::Hangul => "ko",
            Script::Arabic => "ar",
            Script::Hebrew => "he",
            Script::Cyrillic => "ru",
            Script::Greek => "el",
            Script::Thai => "th",
            Script::Devanagari => "hi",
            Script::Latin => "en",
        };
        Ok(code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Option<String> {
        ScriptDetector::new().detect(text).ok()
    }

    #[test]
    fn test_japanese_with_kanji() {
        assert_eq!(detect("これはトークンカウンターのテストです。").as_deref(), Some("ja"));
        // Mostly kanji, a little kana
        assert_eq!(detect("日本語の文章").as_deref(), Some("ja"));
    }

    #[test]
    fn test_chinese() {
        assert_eq!(detect("这是一个测试").as_deref(), Some("zh"));
    }

    #[test]
    fn test_other_scripts() {
        assert_eq!(detect("안녕하세요").as_deref(), Some("ko"));
        assert_eq!(detect("مرحبا بالعالم").as_deref(), Some("ar"));
        assert_eq!(detect("Привет, мир").as_deref(), Some("ru"));
        assert_eq!(detect("Γειά σου κόσμε").as_deref(), Some("el"));
        assert_eq!(detect("สวัสดี").as_deref(), Some("th"));
        assert_eq!(detect("नमस्ते").as_deref(), Some("hi"));
        assert_eq!(detect("שלום").as_deref(), Some("he"));
    }

    #[test]
    fn test_latin() {
        assert_eq!(detect("The quick brown fox").as_deref(), Some("en"));
        assert_eq!(detect("Ça va très bien").as_deref(), Some("en"));
    }

    #[test]
    fn test_majority_wins() {
        assert_eq!(detect("Hello Привет мир друзья").as_deref(), Some("ru"));
    }

    #[test]
    fn test_no_letters_fails() {
        assert!(detect("").is_none());
        assert!(detect("   ").is_none());
        assert!(detect("42 + 17 = 59 !?").is_none());
        assert!(detect("🎉🎉🎉").is_none());
    }

    #[test]
    fn test_failure_is_language_detection_error() {
        let err = ScriptDetector::new().detect("...").unwrap_err();
        assert!(matches!(err, UtcError::LanguageDetection(_)));
        assert!(!err.is_domain());
    }
}
