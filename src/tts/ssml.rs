//! SSML request body for neural voice providers.

use super::types::SynthesisRequest;

/// Escape the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a request as a single `<speak>` document with one voice and one prosody element.
pub fn build_ssml(request: &SynthesisRequest) -> String {
    let voice = request.voice();
    format!(
        "<speak version='1.0' xmlns='http://www.w3.org/2001/10/synthesis' xml:lang='{}'>\
         <voice name='{}'><prosody rate='{}'>{}</prosody></voice></speak>",
        voice.locale(),
        voice.provider_id(),
        request.rate(),
        escape_xml(request.text()),
    )
}
