//! WMO weather code → presentation mapping.
//!
//! See <https://open-meteo.com/en/docs#weathervariables> for the code list.

use serde::Serialize;
use std::fmt;

/// CSS class consumed by the bar stylesheet. Renaming a variant's string is
/// a breaking change for users' styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CssClass {
    SunnyDay,
    ClearNight,
    CloudyFoggyDay,
    CloudyFoggyNight,
    RainyDay,
    RainyNight,
    SnowyIcyDay,
    SnowyIcyNight,
    Severe,
    Default,
}

impl CssClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CssClass::SunnyDay => "sunnyDay",
            CssClass::ClearNight => "clearNight",
            CssClass::CloudyFoggyDay => "cloudyFoggyDay",
            CssClass::CloudyFoggyNight => "cloudyFoggyNight",
            CssClass::RainyDay => "rainyDay",
            CssClass::RainyNight => "rainyNight",
            CssClass::SnowyIcyDay => "snowyIcyDay",
            CssClass::SnowyIcyNight => "snowyIcyNight",
            CssClass::Severe => "severe",
            CssClass::Default => "default",
        }
    }

    pub const fn all() -> &'static [CssClass] {
        &[
            CssClass::SunnyDay,
            CssClass::ClearNight,
            CssClass::CloudyFoggyDay,
            CssClass::CloudyFoggyNight,
            CssClass::RainyDay,
            CssClass::RainyNight,
            CssClass::SnowyIcyDay,
            CssClass::SnowyIcyNight,
            CssClass::Severe,
            CssClass::Default,
        ]
    }
}

impl fmt::Display for CssClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nerd Font glyphs, one per class.
pub mod icon {
    pub const SUNNY_DAY: &str = "\u{f0599}";
    pub const CLEAR_NIGHT: &str = "\u{f0594}";
    pub const CLOUDY_DAY: &str = "\u{e303}";
    pub const CLOUDY_NIGHT: &str = "\u{e346}";
    pub const RAINY_DAY: &str = "\u{e306}";
    pub const RAINY_NIGHT: &str = "\u{e331}";
    pub const SNOWY_DAY: &str = "\u{e30a}";
    pub const SNOWY_NIGHT: &str = "\u{e327}";
    pub const SEVERE: &str = "\u{e36e}";
    pub const UNKNOWN: &str = "\u{e302}";
}

/// Everything the output needs to know about a weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub css_class: CssClass,
    pub icon: &'static str,
    pub phrase: &'static str,
}

impl Classification {
    const fn new(css_class: CssClass, icon: &'static str, phrase: &'static str) -> Self {
        Self { css_class, icon, phrase }
    }
}

struct Row {
    codes: &'static [i64],
    day: Classification,
    night: Classification,
}

const fn row(codes: &'static [i64], day: Classification, night: Classification) -> Row {
    Row { codes, day, night }
}

const TABLE: &[Row] = &[
    row(
        &[0],
        Classification::new(CssClass::SunnyDay, icon::SUNNY_DAY, "Clear sky"),
        Classification::new(CssClass::ClearNight, icon::CLEAR_NIGHT, "Clear sky"),
    ),
    row(
        &[1],
        Classification::new(CssClass::CloudyFoggyDay, icon::CLOUDY_DAY, "Mainly clear Day"),
        Classification::new(CssClass::CloudyFoggyNight, icon::CLOUDY_NIGHT, "Mainly clear Night"),
    ),
    row(
        &[2],
        Classification::new(CssClass::CloudyFoggyDay, icon::CLOUDY_DAY, "Partly cloudy Day"),
        Classification::new(CssClass::CloudyFoggyNight, icon::CLOUDY_NIGHT, "Partly cloudy Night"),
    ),
    row(
        &[3],
        Classification::new(CssClass::CloudyFoggyDay, icon::CLOUDY_DAY, "Overcast Day"),
        Classification::new(CssClass::CloudyFoggyNight, icon::CLOUDY_NIGHT, "Overcast Night"),
    ),
    row(
        &[45, 48],
        Classification::new(CssClass::CloudyFoggyDay, icon::CLOUDY_DAY, "Fog"),
        Classification::new(CssClass::CloudyFoggyNight, icon::CLOUDY_NIGHT, "Fog"),
    ),
    row(
        &[51, 53, 55, 56, 57],
        Classification::new(CssClass::RainyDay, icon::RAINY_DAY, "Drizzle"),
        Classification::new(CssClass::RainyNight, icon::RAINY_NIGHT, "Drizzle"),
    ),
    row(
        &[61, 63, 65, 66, 67, 80, 81, 82],
        Classification::new(CssClass::RainyDay, icon::RAINY_DAY, "Rain"),
        Classification::new(CssClass::RainyNight, icon::RAINY_NIGHT, "Rain"),
    ),
    row(
        &[71, 73, 75, 77, 85, 86],
        Classification::new(CssClass::SnowyIcyDay, icon::SNOWY_DAY, "Snow"),
        Classification::new(CssClass::SnowyIcyNight, icon::SNOWY_NIGHT, "Snow"),
    ),
    row(
        &[95, 96, 97, 99],
        Classification::new(CssClass::Severe, icon::SEVERE, "Thunderstorm"),
        Classification::new(CssClass::Severe, icon::SEVERE, "Thunderstorm"),
    ),
];

pub const UNKNOWN: Classification = Classification::new(CssClass::Default, icon::UNKNOWN, "Unknown");

/// Map a weather code and day flag to its presentation. Total: codes that
/// are not in the table (negative ones included) map to [`UNKNOWN`].
pub fn classify(code: i64, is_day: bool) -> Classification {
    TABLE
        .iter()
        .find(|r| r.codes.contains(&code))
        .map(|r| if is_day { r.day } else { r.night })
        .unwrap_or(UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(code: i64, is_day: bool, class: CssClass, icon: &str, phrase: &str) {
        let c = classify(code, is_day);
        assert_eq!(c.css_class, class, "class for code {code} day={is_day}");
        assert_eq!(c.icon, icon, "icon for code {code} day={is_day}");
        assert_eq!(c.phrase, phrase, "phrase for code {code} day={is_day}");
    }

    #[test]
    fn clear_sky() {
        check(0, true, CssClass::SunnyDay, icon::SUNNY_DAY, "Clear sky");
        check(0, false, CssClass::ClearNight, icon::CLEAR_NIGHT, "Clear sky");
    }

    #[test]
    fn cloud_cover_phrases_carry_day_or_night() {
        check(1, true, CssClass::CloudyFoggyDay, icon::CLOUDY_DAY, "Mainly clear Day");
        check(1, false, CssClass::CloudyFoggyNight, icon::CLOUDY_NIGHT, "Mainly clear Night");
        check(2, true, CssClass::CloudyFoggyDay, icon::CLOUDY_DAY, "Partly cloudy Day");
        check(2, false, CssClass::CloudyFoggyNight, icon::CLOUDY_NIGHT, "Partly cloudy Night");
        check(3, true, CssClass::CloudyFoggyDay, icon::CLOUDY_DAY, "Overcast Day");
        check(3, false, CssClass::CloudyFoggyNight, icon::CLOUDY_NIGHT, "Overcast Night");
    }

    #[test]
    fn fog() {
        for code in [45, 48] {
            check(code, true, CssClass::CloudyFoggyDay, icon::CLOUDY_DAY, "Fog");
            check(code, false, CssClass::CloudyFoggyNight, icon::CLOUDY_NIGHT, "Fog");
        }
    }

    #[test]
    fn drizzle_and_rain() {
        for code in [51, 53, 55, 56, 57] {
            check(code, true, CssClass::RainyDay, icon::RAINY_DAY, "Drizzle");
            check(code, false, CssClass::RainyNight, icon::RAINY_NIGHT, "Drizzle");
        }
        for code in [61, 63, 65, 66, 67, 80, 81, 82] {
            check(code, true, CssClass::RainyDay, icon::RAINY_DAY, "Rain");
            check(code, false, CssClass::RainyNight, icon::RAINY_NIGHT, "Rain");
        }
    }

    #[test]
    fn snow() {
        for code in [71, 73, 75, 77, 85, 86] {
            check(code, true, CssClass::SnowyIcyDay, icon::SNOWY_DAY, "Snow");
            check(code, false, CssClass::SnowyIcyNight, icon::SNOWY_NIGHT, "Snow");
        }
    }

    #[test]
    fn thunderstorm_ignores_day_flag() {
        for code in [95, 96, 97, 99] {
            for is_day in [true, false] {
                check(code, is_day, CssClass::Severe, icon::SEVERE, "Thunderstorm");
            }
        }
    }

    #[test]
    fn unlisted_codes_are_unknown() {
        for code in [-1, 4, 44, 50, 60, 98, 100, 1000, i64::MIN, i64::MAX] {
            for is_day in [true, false] {
                assert_eq!(classify(code, is_day), UNKNOWN, "code {code}");
            }
        }
        assert_eq!(UNKNOWN.css_class.as_str(), "default");
    }

    #[test]
    fn css_class_strings_are_stable() {
        let names: Vec<&str> = CssClass::all().iter().map(CssClass::as_str).collect();
        assert_eq!(
            names,
            [
                "sunnyDay",
                "clearNight",
                "cloudyFoggyDay",
                "cloudyFoggyNight",
                "rainyDay",
                "rainyNight",
                "snowyIcyDay",
                "snowyIcyNight",
                "severe",
                "default",
            ]
        );
        for class in CssClass::all() {
            let json = serde_json::to_string(class).expect("serialize");
            assert_eq!(json, format!("\"{class}\""));
        }
    }
}
