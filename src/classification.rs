//! Watermark classification rules.
//!
//! Detected text is tested against an ordered list of matcher objects; the
//! first rule that accepts a `(text, confidence)` pair classifies the
//! detection as part of the watermark. Two rule shapes cover the Doubao
//! mark:
//!
//! * [`PatternMatcher`] — a regular expression catching stylized or
//!   obfuscated renderings of the brand token ("豆包A1", "豆包41",
//!   "豆@A1生成"). These are specific enough to be trusted at any reported
//!   confidence, so the default variants use a zero confidence floor.
//! * [`KeywordMatcher`] — substring containment over generic watermark
//!   tokens ("豆包", "AI", "生成"). Broad enough to hit unrelated text, so
//!   the default keyword rule requires confidence above 0.5.

use once_cell::sync::Lazy;
use regex::Regex;

/// Regexes for stylized renderings of the Doubao brand mark.
static VARIANT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // 豆包A1, 豆包a1, 豆包AI, 豆包Ai
        r"豆包.*[AaIi][1l]",
        // 豆A1生成, 豆@A1生成
        r"豆.*[AaIi][1l].*生成",
        // 豆包41, 豆包123
        r"豆包.*[0-9]+",
    ]
    .iter()
    .map(|pattern| {
        Regex::new(pattern)
            .unwrap_or_else(|e| panic!("failed to compile watermark pattern '{pattern}': {e}"))
    })
    .collect()
});

/// Keyword tokens for plain renderings of the watermark.
const WATERMARK_KEYWORDS: [&str; 5] = ["豆包", "AI生成", "豆包AI", "AI", "生成"];

/// Confidence floor applied to keyword containment matches.
const KEYWORD_CONFIDENCE_FLOOR: f32 = 0.5;

/// A single watermark classification rule.
///
/// Implementations decide whether a recognized text at a given detector
/// confidence belongs to the watermark. Rules are pure functions of
/// `(text, confidence)`.
pub trait WatermarkMatcher: Send + Sync + std::fmt::Debug {
    /// Name of the rule, used in logs.
    fn name(&self) -> &str;

    /// Minimum detector confidence required once the text matches.
    fn confidence_floor(&self) -> f32;

    /// Returns true when `text` matches this rule and `confidence` clears
    /// the rule's floor.
    fn evaluate(&self, text: &str, confidence: f32) -> bool;
}

/// A regex rule with a confidence floor.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    name: String,
    pattern: Regex,
    confidence_floor: f32,
}

impl PatternMatcher {
    /// Creates a new pattern rule.
    pub fn new(name: impl Into<String>, pattern: Regex, confidence_floor: f32) -> Self {
        Self {
            name: name.into(),
            pattern,
            confidence_floor,
        }
    }
}

impl WatermarkMatcher for PatternMatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn confidence_floor(&self) -> f32 {
        self.confidence_floor
    }

    fn evaluate(&self, text: &str, confidence: f32) -> bool {
        self.pattern.is_match(text) && confidence >= self.confidence_floor
    }
}

/// A substring containment rule with a confidence floor.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    name: String,
    keywords: Vec<String>,
    confidence_floor: f32,
}

impl KeywordMatcher {
    /// Creates a new keyword rule.
    pub fn new(
        name: impl Into<String>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
        confidence_floor: f32,
    ) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            confidence_floor,
        }
    }
}

impl WatermarkMatcher for KeywordMatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn confidence_floor(&self) -> f32 {
        self.confidence_floor
    }

    fn evaluate(&self, text: &str, confidence: f32) -> bool {
        self.keywords.iter().any(|k| text.contains(k.as_str()))
            && confidence >= self.confidence_floor
    }
}

/// An ordered list of watermark rules; the first accepting rule wins.
#[derive(Debug)]
pub struct WatermarkClassifier {
    matchers: Vec<Box<dyn WatermarkMatcher>>,
}

impl WatermarkClassifier {
    /// Creates a classifier from an ordered list of rules.
    pub fn new(matchers: Vec<Box<dyn WatermarkMatcher>>) -> Self {
        Self { matchers }
    }

    /// Creates the default rule set for the Doubao watermark: the variant
    /// patterns first (zero floor), then keyword containment (0.5 floor).
    pub fn doubao() -> Self {
        let mut matchers: Vec<Box<dyn WatermarkMatcher>> = VARIANT_PATTERNS
            .iter()
            .enumerate()
            .map(|(i, pattern)| {
                Box::new(PatternMatcher::new(
                    format!("doubao-variant-{i}"),
                    pattern.clone(),
                    0.0,
                )) as Box<dyn WatermarkMatcher>
            })
            .collect();
        matchers.push(Box::new(KeywordMatcher::new(
            "doubao-keywords",
            WATERMARK_KEYWORDS,
            KEYWORD_CONFIDENCE_FLOOR,
        )));
        Self::new(matchers)
    }

    /// Returns the first rule accepting the given text and confidence.
    pub fn classify(&self, text: &str, confidence: f32) -> Option<&dyn WatermarkMatcher> {
        self.matchers
            .iter()
            .find(|m| m.evaluate(text, confidence))
            .map(|m| &**m)
    }

    /// Returns true when any rule accepts the given text and confidence.
    pub fn is_watermark(&self, text: &str, confidence: f32) -> bool {
        self.classify(text, confidence).is_some()
    }
}

impl Default for WatermarkClassifier {
    fn default() -> Self {
        Self::doubao()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_patterns_accept_any_confidence() {
        let classifier = WatermarkClassifier::doubao();
        assert!(classifier.is_watermark("豆包A1", 0.01));
        assert!(classifier.is_watermark("豆包A1", 0.0));
        assert!(classifier.is_watermark("豆@A1生成", 0.0));
        assert!(classifier.is_watermark("豆包41", 0.0));
    }

    #[test]
    fn variant_match_is_reported_before_keywords() {
        let classifier = WatermarkClassifier::doubao();
        let rule = classifier.classify("豆包A1", 0.9).unwrap();
        assert!(rule.name().starts_with("doubao-variant"));
        assert_eq!(rule.confidence_floor(), 0.0);
    }

    #[test]
    fn plain_brand_text_is_accepted_by_the_keyword_rule() {
        // "豆包AI" has no digit/confusable suffix, so the variant patterns
        // skip it and keyword containment applies its floor.
        let classifier = WatermarkClassifier::doubao();
        let rule = classifier.classify("豆包AI", 0.9).unwrap();
        assert_eq!(rule.name(), "doubao-keywords");
        assert!(classifier.classify("豆包AI", 0.4).is_none());
    }

    #[test]
    fn keywords_require_confidence_above_floor() {
        let classifier = WatermarkClassifier::doubao();
        assert!(!classifier.is_watermark("AI", 0.4));
        assert!(classifier.is_watermark("AI", 0.6));
        assert!(!classifier.is_watermark("生成", 0.3));
        assert!(classifier.is_watermark("AI生成", 0.8));
    }

    #[test]
    fn keyword_rule_reports_its_floor() {
        let classifier = WatermarkClassifier::doubao();
        let rule = classifier.classify("AI", 0.6).unwrap();
        assert_eq!(rule.name(), "doubao-keywords");
        assert_eq!(rule.confidence_floor(), 0.5);
    }

    #[test]
    fn unrelated_text_is_rejected() {
        let classifier = WatermarkClassifier::doubao();
        assert!(!classifier.is_watermark("hello world", 0.99));
        assert!(!classifier.is_watermark("invoice #42", 1.0));
    }

    #[test]
    fn low_confidence_keyword_falls_through_all_rules() {
        let classifier = WatermarkClassifier::doubao();
        assert!(classifier.classify("豆包", 0.2).is_none());
    }

    #[test]
    fn custom_rules_run_in_order() {
        let first = KeywordMatcher::new("first", ["mark"], 0.0);
        let second = KeywordMatcher::new("second", ["mark"], 0.0);
        let classifier =
            WatermarkClassifier::new(vec![Box::new(first), Box::new(second)]);
        assert_eq!(classifier.classify("mark", 0.5).unwrap().name(), "first");
    }
}
