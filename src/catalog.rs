//! Options a UI shell offers: voices, the speed slider and sample texts.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tts::{VoiceId, MAX_SPEED, MIN_SPEED};

/// Speed slider bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeedControl {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

pub const SPEED_CONTROL: SpeedControl = SpeedControl {
    min: MIN_SPEED,
    max: MAX_SPEED,
    step: 0.1,
    default: 1.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleCategory {
    Greetings,
    CommonPhrases,
    Sentences,
}

const GREETINGS: &[&str] = &["ሰላም እንደምን ነዎት?", "እንደምን አደርክ/ሽ?", "ጤና ይስጥልኝ"];

const COMMON_PHRASES: &[&str] = &["እባክዎ ይታገሱ", "አመሰግናለሁ", "ይቅርታ", "እንኳን ደህና መጣህ/ሽ"];

const SENTENCES: &[&str] = &[
    "ኢትዮጵያ የተለያዩ ባህሎች መስተጋብር ያላት ሀገር ናት።",
    "አዲስ አበባ የኢትዮጵያ ዋና ከተማ ናት።",
    "የኢትዮጵያ ሰዎች በጣም ቆንጆ ናቸው።",
];

impl SampleCategory {
    pub const ALL: [SampleCategory; 3] = [
        SampleCategory::Greetings,
        SampleCategory::CommonPhrases,
        SampleCategory::Sentences,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Greetings => "Greetings",
            Self::CommonPhrases => "Common Phrases",
            Self::Sentences => "Sentences",
        }
    }

    pub fn samples(&self) -> &'static [&'static str] {
        match self {
            Self::Greetings => GREETINGS,
            Self::CommonPhrases => COMMON_PHRASES,
            Self::Sentences => SENTENCES,
        }
    }

    /// Uniform pick from this category.
    pub fn random_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        // every category list is non-empty
        self.samples().choose(rng).copied().unwrap_or_default()
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Everything a UI shell needs to draw the settings panel.
pub fn ui_manifest() -> serde_json::Value {
    let voices: Vec<_> = VoiceId::ALL
        .iter()
        .map(|v| serde_json::json!({ "label": v.label(), "id": v.provider_id() }))
        .collect();
    let categories: Vec<_> = SampleCategory::ALL
        .iter()
        .map(|c| serde_json::json!({ "label": c.label(), "samples": c.samples() }))
        .collect();
    serde_json::json!({
        "voices": voices,
        "default_voice": VoiceId::default().provider_id(),
        "speed": SPEED_CONTROL,
        "sample_categories": categories,
    })
}
