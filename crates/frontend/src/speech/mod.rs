//! Speech narration service.
//!
//! Wraps the browser speech-synthesis engine behind a service provided
//! once through context. The service enforces the single-utterance rule
//! (starting a narration silences the previous one) and owns the voice
//! catalog, which is populated at most once per session.

pub mod explain;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance, SpeechSynthesisVoice};

/// Narration defaults: slightly slowed Hindi.
pub const SPEECH_RATE: f32 = 0.9;
pub const SPEECH_PITCH: f32 = 1.0;
pub const SPEECH_VOLUME: f32 = 1.0;
pub const SPEECH_LANG: &str = "hi-IN";

/// Narration is single-slot: at most one utterance is ever active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeechState {
    #[default]
    Idle,
    Speaking,
}

#[derive(Clone, Copy)]
pub struct SpeechService {
    /// Voices reported by the engine. Populated once, then read-only.
    voices: StoredValue<Vec<SpeechSynthesisVoice>, LocalStorage>,
    /// Set once the catalog has been populated; engines without voices
    /// legitimately populate it empty.
    voices_loaded: StoredValue<bool>,
    state: RwSignal<SpeechState>,
    /// Ticket of the active utterance. End events from an utterance that
    /// was already cancelled must not clear a newer utterance's state.
    utterance_generation: StoredValue<u64>,
}

impl SpeechService {
    pub fn new() -> Self {
        Self {
            voices: StoredValue::new_local(Vec::new()),
            voices_loaded: StoredValue::new(false),
            state: RwSignal::new(SpeechState::Idle),
            utterance_generation: StoredValue::new(0),
        }
    }

    fn synth() -> Option<SpeechSynthesis> {
        web_sys::window().and_then(|w| w.speech_synthesis().ok())
    }

    /// Whether this host can narrate at all.
    pub fn is_supported(&self) -> bool {
        Self::synth().is_some()
    }

    /// Populates the voice catalog, once. Engines load voices lazily, so
    /// when the first query comes back empty this waits for the one-shot
    /// `voiceschanged` signal before querying again. Returns the catalog
    /// size.
    pub async fn ensure_voices(&self) -> usize {
        if self.voices_loaded.get_value() {
            return self.voices.with_value(|v| v.len());
        }
        let Some(synth) = Self::synth() else {
            log::warn!("Speech synthesis not supported; narration disabled");
            self.voices_loaded.set_value(true);
            return 0;
        };

        let mut available = synth.get_voices();
        if available.length() == 0 {
            wait_for_voiceschanged(&synth).await;
            if self.voices_loaded.get_value() {
                return self.voices.with_value(|v| v.len());
            }
            available = synth.get_voices();
        }

        let voices: Vec<SpeechSynthesisVoice> = available
            .iter()
            .filter_map(|v| v.dyn_into::<SpeechSynthesisVoice>().ok())
            .collect();
        let count = voices.len();
        self.voices.set_value(voices);
        self.voices_loaded.set_value(true);
        count
    }

    /// Speaks `text`, silencing any narration already in progress. The
    /// language tag is applied to the utterance, and its primary subtag
    /// picks the voice: the first catalog entry whose tag contains it,
    /// case-insensitively, or the engine default when none matches.
    /// Returns `false` when the host cannot narrate.
    pub fn narrate(&self, text: &str, lang: &str) -> bool {
        self.cancel();

        let Some(synth) = Self::synth() else {
            log::error!("Speech synthesis not supported");
            return false;
        };
        let Ok(utterance) = SpeechSynthesisUtterance::new_with_text(text) else {
            log::error!("Failed to create utterance");
            return false;
        };
        utterance.set_rate(SPEECH_RATE);
        utterance.set_pitch(SPEECH_PITCH);
        utterance.set_volume(SPEECH_VOLUME);
        utterance.set_lang(lang);
        if let Some(voice) = self.matching_voice(lang) {
            utterance.set_voice(Some(&voice));
        }

        let generation = self.utterance_generation.with_value(|g| g + 1);
        self.utterance_generation.set_value(generation);

        // Only the utterance that set the flag may clear it; cancel()
        // fires end events for the utterance it tears down.
        let state = self.state;
        let ticket = self.utterance_generation;
        let on_done = Closure::wrap(Box::new(move || {
            if ticket.get_value() == generation {
                state.set(SpeechState::Idle);
            }
        }) as Box<dyn FnMut()>);
        utterance.set_onend(Some(on_done.as_ref().unchecked_ref()));
        utterance.set_onerror(Some(on_done.as_ref().unchecked_ref()));
        on_done.forget();

        synth.speak(&utterance);
        self.state.set(SpeechState::Speaking);
        true
    }

    /// Stops any active narration. Safe to call when idle.
    pub fn cancel(&self) {
        if let Some(synth) = Self::synth() {
            synth.cancel();
        }
        self.state.set(SpeechState::Idle);
    }

    /// True while an utterance started here is still sounding. Reactive
    /// when read inside a tracking scope.
    pub fn is_active(&self) -> bool {
        self.state.get() == SpeechState::Speaking
    }

    fn matching_voice(&self, lang: &str) -> Option<SpeechSynthesisVoice> {
        let hint = primary_subtag(lang).to_lowercase();
        self.voices.with_value(|voices| {
            voices
                .iter()
                .find(|voice| voice.lang().to_lowercase().contains(&hint))
                .cloned()
        })
    }
}

/// Grabs the narration service provided by the application root.
pub fn use_speech() -> SpeechService {
    use_context::<SpeechService>().expect("SpeechService context not found")
}

/// Primary language subtag of a BCP-47 tag: "hi-IN" -> "hi".
fn primary_subtag(lang: &str) -> &str {
    lang.split(['-', '_']).next().unwrap_or(lang)
}

/// Resolves once the engine announces its voices.
async fn wait_for_voiceschanged(synth: &SpeechSynthesis) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let engine = synth.clone();
        let in_handler = engine.clone();
        let handler = Closure::once_into_js(move || {
            in_handler.set_onvoiceschanged(None);
            let _ = resolve.call0(&JsValue::NULL);
        });
        engine.set_onvoiceschanged(Some(handler.unchecked_ref()));
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_subtag_strips_the_region() {
        assert_eq!(primary_subtag("hi-IN"), "hi");
        assert_eq!(primary_subtag("en_US"), "en");
        assert_eq!(primary_subtag("hi"), "hi");
    }

    #[test]
    fn narration_starts_idle() {
        assert_eq!(SpeechState::default(), SpeechState::Idle);
    }
}
