use crate::{EmojiTranscoder, Format};
use std::str::FromStr;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub struct WasmEmojiTranscoder {
    transcoder: EmojiTranscoder,
}

#[wasm_bindgen]
impl WasmEmojiTranscoder {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmEmojiTranscoder, JsValue> {
        init();
        Ok(WasmEmojiTranscoder {
            transcoder: EmojiTranscoder::builtin(),
        })
    }

    /// Convert a single emoji. Format must be 'emoji', 'shortcode', 'html' or 'unicode'
    #[wasm_bindgen]
    pub fn transform(&self, input: &str, format: &str) -> Result<String, JsValue> {
        self.transcoder
            .transform_as(input, format)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Convert every emoji in a block of text
    #[wasm_bindgen(js_name = transformText)]
    pub fn transform_text(&self, text: &str, format: &str) -> Result<String, JsValue> {
        let format = Format::from_str(format).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.transcoder.transform_text(text, format))
    }

    /// Full record as a plain JS object
    #[wasm_bindgen(js_name = getInfo)]
    pub fn get_info(&self, input: &str) -> Result<JsValue, JsValue> {
        let record = self
            .transcoder
            .get_info(input)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(serde_wasm_bindgen::to_value(record)?)
    }

    #[wasm_bindgen(js_name = listSupported)]
    pub fn list_supported(&self) -> Vec<String> {
        self.transcoder
            .list_supported()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[wasm_bindgen(js_name = isSupported)]
    pub fn is_supported(&self, input: &str) -> bool {
        self.transcoder.is_supported(input)
    }
}

// Enable console logging in WASM
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);
}

/// Forward `log` records to the browser console
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            warn(&format!("[{}] {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

/// Route library warnings to `console.warn`
#[wasm_bindgen(js_name = enableConsoleLogging)]
pub fn enable_console_logging() {
    static LOGGER: ConsoleLogger = ConsoleLogger;
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Warn);
    }
}
