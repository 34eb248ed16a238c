//! Practice orchestration: play the target, listen, score.

use crate::error::{Result, SpeechError};
use crate::feedback::FeedbackLocale;
use crate::scoring::analyze_in;
use crate::speech::{clean_text_for_speech, SpeechRecognizer, SpeechSynthesizer};
use crate::types::{Language, PracticeSession};

/// Drives one learner through pronunciation attempts using injected
/// speech capabilities.
pub struct PronunciationCoach<R, S> {
    recognizer: R,
    synthesizer: S,
    locale: FeedbackLocale,
}

impl<R, S> PronunciationCoach<R, S>
where
    R: SpeechRecognizer,
    S: SpeechSynthesizer,
{
    pub fn new(recognizer: R, synthesizer: S) -> Self {
        Self {
            recognizer,
            synthesizer,
            locale: FeedbackLocale::default(),
        }
    }

    /// Render feedback in `locale` instead of the default.
    pub fn with_locale(mut self, locale: FeedbackLocale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> FeedbackLocale {
        self.locale
    }

    /// Speak the target word so the learner can hear it first.
    pub async fn play_reference(&self, word: &str, language: Language) -> Result<()> {
        if !self.synthesizer.is_supported() {
            return Err(SpeechError::Unsupported);
        }

        tracing::debug!(word, language = language.speech_code(), "playing reference");
        self.synthesizer.speak(word.trim(), language).await
    }

    /// Listen for one attempt at `target` and score it.
    ///
    /// Punctuation the recognizer adds is stripped before scoring. A
    /// transcript with nothing left is reported as `NoSpeech` rather
    /// than scored.
    pub async fn attempt(
        &self,
        vocabulary_id: &str,
        target: &str,
        language: Language,
    ) -> Result<PracticeSession> {
        if !self.recognizer.is_supported() {
            return Err(SpeechError::Unsupported);
        }

        let transcript = self.recognizer.recognize(language).await?;
        let recognized = clean_text_for_speech(&transcript.text);
        if recognized.is_empty() {
            tracing::debug!(vocabulary_id, "no speech captured");
            return Err(SpeechError::NoSpeech);
        }

        let analysis = analyze_in(target, &recognized, self.locale);
        tracing::info!(
            vocabulary_id,
            target,
            recognized = %recognized,
            confidence = transcript.confidence,
            accuracy = analysis.accuracy,
            "scored pronunciation attempt"
        );

        Ok(PracticeSession::from_analysis(vocabulary_id, language, analysis))
    }

    /// Stop any in-flight listening or playback.
    pub fn cancel(&self) {
        self.recognizer.cancel();
        self.synthesizer.cancel();
    }
}
