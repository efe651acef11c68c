//! Browser speech recognition (`SpeechRecognition` / `webkitSpeechRecognition`).

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{SpeechRecognition, SpeechRecognitionEvent};

use super::SpeechInput;

/// Engine callbacks forwarded to the session controller.
pub struct RecognitionHandlers {
    pub on_start: Box<dyn Fn()>,
    pub on_result: Box<dyn Fn(String)>,
    pub on_error: Box<dyn Fn(String)>,
    pub on_end: Box<dyn Fn()>,
}

/// Single-shot recognizer: one final result per session.
pub struct BrowserRecognition {
    inner: SpeechRecognition,
}

impl BrowserRecognition {
    /// Construct the page's recognizer, or `None` if the browser has none.
    pub fn new(lang: &str) -> Option<Self> {
        let window = web_sys::window()?;
        let ctor = ["SpeechRecognition", "webkitSpeechRecognition"]
            .iter()
            .filter_map(|name| js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok())
            .find(JsValue::is_function)?;
        let instance = js_sys::Reflect::construct(ctor.unchecked_ref::<js_sys::Function>(), &js_sys::Array::new())
            .map_err(|e| leptos::logging::warn!("speech recognition construction failed: {e:?}"))
            .ok()?;
        let inner: SpeechRecognition = instance.unchecked_into();
        inner.set_continuous(false);
        inner.set_interim_results(false);
        inner.set_max_alternatives(1);
        inner.set_lang(lang);
        Some(Self { inner })
    }

    /// Attach engine callbacks. The closures live for the rest of the page.
    pub fn bind(&self, handlers: RecognitionHandlers) {
        let RecognitionHandlers {
            on_start,
            on_result,
            on_error,
            on_end,
        } = handlers;

        let start_cb = Closure::<dyn FnMut()>::new(move || on_start());
        self.inner.set_onstart(Some(start_cb.as_ref().unchecked_ref()));
        start_cb.forget();

        let result_cb = Closure::<dyn FnMut(SpeechRecognitionEvent)>::new(move |ev: SpeechRecognitionEvent| {
            let transcript = ev
                .results()
                .and_then(|list| list.get(0))
                .and_then(|result| result.get(0))
                .map(|alt| alt.transcript());
            match transcript {
                Some(text) => on_result(text),
                None => leptos::logging::warn!("speech recognition result without transcript"),
            }
        });
        self.inner.set_onresult(Some(result_cb.as_ref().unchecked_ref()));
        result_cb.forget();

        let error_cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let code = js_sys::Reflect::get(&ev, &JsValue::from_str("error"))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| "unknown".to_owned());
            on_error(code);
        });
        self.inner.set_onerror(Some(error_cb.as_ref().unchecked_ref()));
        error_cb.forget();

        let end_cb = Closure::<dyn FnMut()>::new(move || on_end());
        self.inner.set_onend(Some(end_cb.as_ref().unchecked_ref()));
        end_cb.forget();
    }
}

impl SpeechInput for BrowserRecognition {
    fn is_supported(&self) -> bool {
        true
    }

    fn start(&self) -> Result<(), String> {
        self.inner.start().map_err(|e| format!("{e:?}"))
    }

    fn stop(&self) {
        self.inner.stop();
    }
}
