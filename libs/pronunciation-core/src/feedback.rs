//! Tiered pronunciation feedback.
//!
//! Feedback is a pure lookup over the accuracy score and a couple of
//! substring checks on the two words. The th / R-L hints are a lightweight
//! heuristic, not phonetic analysis.

use serde::{Deserialize, Serialize};

/// Lowest accuracy that counts as excellent.
pub const EXCELLENT_THRESHOLD: u8 = 90;
/// Lowest accuracy that counts as good.
pub const GOOD_THRESHOLD: u8 = 70;
/// Lowest accuracy at which confusable-sound hints are attempted.
pub const HINT_THRESHOLD: u8 = 50;

/// Category behind a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Excellent,
    Good,
    /// Target has a "th" the attempt lost.
    ThSound,
    /// Target has an R, attempt came out with an L.
    RSound,
    /// Target has an L, attempt came out with an R.
    LSound,
    SlowDown,
    ListenAgain,
}

/// Language the feedback text is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackLocale {
    En,
    Ja,
}

impl Default for FeedbackLocale {
    fn default() -> Self {
        Self::En
    }
}

impl FeedbackLocale {
    /// Get the locale code as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    /// Parse from a locale code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Self::En),
            "ja" => Some(Self::Ja),
            _ => None,
        }
    }
}

impl FeedbackKind {
    /// Render the message for this category.
    pub fn message(self, locale: FeedbackLocale) -> &'static str {
        match locale {
            FeedbackLocale::En => match self {
                Self::Excellent => "Excellent pronunciation!",
                Self::Good => "Good pronunciation. Practice a little more.",
                Self::ThSound => {
                    "Watch the \"th\" sound. Place your tongue between your teeth."
                }
                Self::RSound => {
                    "Distinguish R from L. For R, curl your tongue back without touching the roof of your mouth."
                }
                Self::LSound => {
                    "Distinguish L from R. For L, touch the ridge behind your upper teeth with the tip of your tongue."
                }
                Self::SlowDown => "Check your pronunciation again. Try speaking slowly.",
                Self::ListenAgain => "Let's try again. Listen carefully and imitate the audio.",
            },
            FeedbackLocale::Ja => match self {
                Self::Excellent => "素晴らしい発音です！",
                Self::Good => "良い発音です。もう少し練習してみましょう。",
                Self::ThSound => "\"th\"の音に注意してください。舌の位置を意識しましょう。",
                Self::RSound => "RとLの発音を区別してください。Rは舌を丸めます。",
                Self::LSound => {
                    "LとRの発音を区別してください。Lは舌先を上の歯茎につけます。"
                }
                Self::SlowDown => {
                    "発音をもう一度確認してみてください。ゆっくりと話してみましょう。"
                }
                Self::ListenAgain => {
                    "もう一度挑戦してみましょう。音声をよく聞いて真似してみてください。"
                }
            },
        }
    }
}

/// Pick the feedback category for an attempt.
///
/// Tiers use inclusive lower bounds. Inside the hint tier the checks run in
/// a fixed order and the first match wins: th, then R heard as L, then L
/// heard as R.
pub fn classify_feedback(target: &str, recognized: &str, accuracy: u8) -> FeedbackKind {
    if accuracy >= EXCELLENT_THRESHOLD {
        return FeedbackKind::Excellent;
    }
    if accuracy >= GOOD_THRESHOLD {
        return FeedbackKind::Good;
    }
    if accuracy < HINT_THRESHOLD {
        return FeedbackKind::ListenAgain;
    }

    let target = target.to_lowercase();
    let recognized = recognized.to_lowercase();

    if target.contains("th") && !recognized.contains("th") {
        FeedbackKind::ThSound
    } else if target.contains('r') && recognized.contains('l') {
        FeedbackKind::RSound
    } else if target.contains('l') && recognized.contains('r') {
        FeedbackKind::LSound
    } else {
        FeedbackKind::SlowDown
    }
}

/// Generate feedback text in the default locale.
pub fn generate_feedback(target: &str, recognized: &str, accuracy: u8) -> String {
    generate_feedback_in(target, recognized, accuracy, FeedbackLocale::default())
}

/// Generate feedback text in the given locale.
pub fn generate_feedback_in(
    target: &str,
    recognized: &str,
    accuracy: u8,
    locale: FeedbackLocale,
) -> String {
    classify_feedback(target, recognized, accuracy)
        .message(locale)
        .to_string()
}
