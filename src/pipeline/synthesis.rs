use serde::Serialize;

/// What is being synthesized; selects voice and pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Explanation,
    Summary,
    Urgent,
}

/// Synthesis parameters handed to the speech collaborator alongside the
/// normalized SSML.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisPlan {
    pub language_code: &'static str,
    pub voice_name: &'static str,
    pub gender: &'static str,
    pub speaking_rate: f32,
    pub pitch: f32,
    pub volume_gain_db: f32,
    pub audio_encoding: &'static str,
    pub effects_profile: &'static str,
}

/// Fixed per-kind voice and tuning table.
///
/// Explanations use the default warm voice slightly slowed; summaries a
/// second voice at normal pace; urgent content slows further and gains
/// volume.
pub fn plan_synthesis(kind: ContentKind) -> SynthesisPlan {
    let base = SynthesisPlan {
        language_code: "pt-BR",
        voice_name: "pt-BR-Wavenet-A",
        gender: "FEMALE",
        speaking_rate: 0.9,
        pitch: 0.0,
        volume_gain_db: 0.0,
        audio_encoding: "MP3",
        effects_profile: "headphone-class-device",
    };

    match kind {
        ContentKind::Explanation => base,
        ContentKind::Summary => SynthesisPlan {
            voice_name: "pt-BR-Wavenet-B",
            gender: "MALE",
            speaking_rate: 1.0,
            pitch: -2.0,
            ..base
        },
        ContentKind::Urgent => SynthesisPlan {
            speaking_rate: 0.8,
            pitch: 2.0,
            volume_gain_db: 3.0,
            ..base
        },
    }
}
