use crate::domain::{Locale, ProcessorSelection, RedirectTarget};

/// Legacy `/{locale}/audio-converter` now lives inside the unified processor.
pub fn locale_audio_converter_redirect(locale: &Locale) -> RedirectTarget {
    RedirectTarget::path(format!("/{}/media-processor", locale))
        .with_selection(ProcessorSelection::AUDIO_EXTRACT)
}

pub fn locale_media_processor_redirect(locale: &Locale) -> RedirectTarget {
    RedirectTarget::path(format!("/{}/processor/audio/convert", locale))
}

/// Pre-locale `/audio-converter` links. Never consults a locale.
pub fn legacy_audio_converter_redirect() -> RedirectTarget {
    RedirectTarget::path("/media-processor").with_selection(ProcessorSelection::AUDIO_EXTRACT)
}

/// One row of the redirect table, as seen from a given locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRule {
    pub source: String,
    pub target: RedirectTarget,
}

pub fn redirect_rules(locale: &Locale) -> Vec<RedirectRule> {
    vec![
        RedirectRule {
            source: format!("/{}/audio-converter", locale),
            target: locale_audio_converter_redirect(locale),
        },
        RedirectRule {
            source: format!("/{}/media-processor", locale),
            target: locale_media_processor_redirect(locale),
        },
        RedirectRule {
            source: "/audio-converter".to_string(),
            target: legacy_audio_converter_redirect(),
        },
    ]
}
