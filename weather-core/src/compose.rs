//! Tooltip markup, the bar record and the plain-text cache summary.

use crate::{
    classify::Classification,
    format::DisplayValues,
    model::{Location, OutputRecord},
};

/// Line glyphs (Nerd Font).
pub mod glyph {
    pub const TEMP_MIN: &str = "\u{f2cb}";
    pub const TEMP_MAX: &str = "\u{f2c7}";
    pub const THERMOMETER: &str = "\u{f2c9}";
    pub const WIND: &str = "\u{e27e}";
    pub const HUMIDITY: &str = "\u{e373}";
    pub const VISIBILITY: &str = "\u{f06e}";
    pub const HOURLY: &str = "\u{e318}";
    pub const UNAVAILABLE: &str = "\u{f06a}";
}

/// Pango markup shown when hovering the module.
///
/// The visibility line is dropped when visibility was omitted, and the
/// hourly block only appears with a non-empty precipitation summary.
pub fn tooltip(class: &Classification, v: &DisplayValues) -> String {
    let min_max = format!(
        "{}  {}\t\t{}  {}",
        glyph::TEMP_MIN,
        v.temp_min,
        glyph::TEMP_MAX,
        v.temp_max
    );
    let wind = format!("{}  {} km/h", glyph::WIND, v.wind);
    let humidity = format!("{}  {}%", glyph::HUMIDITY, v.humidity);
    let visibility = if v.visibility.is_empty() {
        String::new()
    } else {
        format!("{}  {} km", glyph::VISIBILITY, v.visibility)
    };
    let prediction = if v.precip_summary.is_empty() {
        String::new()
    } else {
        format!("\n\n{} (hourly) {}", glyph::HOURLY, v.precip_summary)
    };

    format!(
        "\t\t<span size=\"xx-large\">{temp}</span>\t\t\n\
         <big> {icon}</big>\n\
         <b>{status}</b>\n\
         <small>Feels like {feels}</small>\n\
         \n\
         <b>{min_max}</b>\n\
         {wind}\t{humidity}\n\
         {visibility}{prediction}",
        temp = v.temp,
        icon = class.icon,
        status = class.phrase,
        feels = v.feels_like,
    )
}

/// `alt` shows the city when geolocation produced one.
pub fn alt_text(phrase: &str, city: &str) -> String {
    if city.is_empty() { phrase.to_string() } else { format!("{phrase} - {city}") }
}

pub fn record(class: &Classification, v: &DisplayValues, location: &Location) -> OutputRecord {
    OutputRecord {
        text: format!("{}  {}", class.icon, v.temp),
        alt: alt_text(class.phrase, &location.city),
        tooltip: tooltip(class, v),
        class: class.css_class.to_string(),
    }
}

/// Plain summary read by other desktop scripts.
pub fn cache_text(class: &Classification, v: &DisplayValues) -> String {
    let mut out = format!(
        "{icon}  {status}\n\
         {thermo}  {temp} (Feels {feels})\n\
         {wind_glyph}  {wind} km/h \n\
         {hum_glyph}  {humidity}% \n",
        icon = class.icon,
        status = class.phrase,
        thermo = glyph::THERMOMETER,
        temp = v.temp,
        feels = v.feels_like,
        wind_glyph = glyph::WIND,
        wind = v.wind,
        hum_glyph = glyph::HUMIDITY,
        humidity = v.humidity,
    );
    if !v.visibility.is_empty() {
        out.push_str(&format!("{}  {} km\n", glyph::VISIBILITY, v.visibility));
    }
    out
}
