use crate::config::DateLocale;
use chrono::{Datelike, Local, NaiveDate};
use wasm_bindgen::JsValue;

pub(crate) fn today_local() -> NaiveDate {
    // Browser local timezone via chrono's wasmbind clock.
    Local::now().date_naive()
}

/// Long calendar date, as a person would write it.
pub(crate) fn format_long_date(date: NaiveDate, locale: DateLocale) -> String {
    match locale {
        DateLocale::ZhCn => format!("{}年{}月{}日", date.year(), date.month(), date.day()),
        DateLocale::EnUs => date.format("%B %-d, %Y").to_string(),
    }
}

/// Best-effort text for a thrown JS value (`DOMException`, `Error`, string).
pub(crate) fn js_message(v: &JsValue) -> String {
    v.as_string()
        .or_else(|| {
            js_sys::Reflect::get(v, &"message".into())
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{v:?}"))
}
