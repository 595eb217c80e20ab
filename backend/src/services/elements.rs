//! Calendar element derivation: tithi, nakshatra, yoga and karana.
//!
//! A pure function of four longitudes sampled at the sunrise instant.
//! Every angle is normalized into [0, 360) before division and every index
//! is reduced modulo its table length after the floor, so a value of
//! exactly 360.0 resolves to index 0 of the next cycle instead of running
//! off the end of a table.

use crate::astro::normalize_deg;
use crate::models::{CalendarElements, Paksha};

/// Span of one tithi: 12 degrees of Moon-Sun elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Span of one nakshatra or yoga: 360/27 = 13.333... degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Span of one karana: 6 degrees (half a tithi).
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// The 30 tithi names; entries 0-14 are the bright fortnight ending in
/// Purnima, 15-29 the dark fortnight ending in Amavasya.
const TITHI_NAMES: [&str; 30] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Amavasya",
];

const TITHI_NAMES_HI: [&str; 30] = [
    "प्रतिपदा",
    "द्वितीया",
    "तृतीया",
    "चतुर्थी",
    "पंचमी",
    "षष्ठी",
    "सप्तमी",
    "अष्टमी",
    "नवमी",
    "दशमी",
    "एकादशी",
    "द्वादशी",
    "त्रयोदशी",
    "चतुर्दशी",
    "पूर्णिमा",
    "प्रतिपदा",
    "द्वितीया",
    "तृतीया",
    "चतुर्थी",
    "पंचमी",
    "षष्ठी",
    "सप्तमी",
    "अष्टमी",
    "नवमी",
    "दशमी",
    "एकादशी",
    "द्वादशी",
    "त्रयोदशी",
    "चतुर्दशी",
    "अमावस्या",
];

/// The 27 nakshatras, Ashwini through Revati.
const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishtha",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

const NAKSHATRA_NAMES_HI: [&str; 27] = [
    "अश्विनी",
    "भरणी",
    "कृत्तिका",
    "रोहिणी",
    "मृगशिरा",
    "आर्द्रा",
    "पुनर्वसु",
    "पुष्य",
    "अश्लेषा",
    "मघा",
    "पूर्वा फाल्गुनी",
    "उत्तरा फाल्गुनी",
    "हस्त",
    "चित्रा",
    "स्वाती",
    "विशाखा",
    "अनुराधा",
    "ज्येष्ठा",
    "मूल",
    "पूर्वाषाढ़ा",
    "उत्तराषाढ़ा",
    "श्रवण",
    "धनिष्ठा",
    "शतभिषा",
    "पूर्वाभाद्रपद",
    "उत्तराभाद्रपद",
    "रेवती",
];

/// The 27 yogas, Vishkambha through Vaidhriti.
const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Sobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shula",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyan",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

const YOGA_NAMES_HI: [&str; 27] = [
    "विष्कम्भ",
    "प्रीति",
    "आयुष्मान",
    "सौभाग्य",
    "शोभन",
    "अतिगण्ड",
    "सुकर्मा",
    "धृति",
    "शूल",
    "गण्ड",
    "वृद्धि",
    "ध्रुव",
    "व्याघात",
    "हर्षण",
    "वज्र",
    "सिद्धि",
    "व्यतिपात",
    "वरीयान",
    "परिघ",
    "शिव",
    "सिद्ध",
    "साध्य",
    "शुभ",
    "शुक्ल",
    "ब्रह्म",
    "इन्द्र",
    "वैधृति",
];

/// The seven movable karanas, repeating through counters 2..=57.
const KARANA_CYCLE: [&str; 7] = [
    "Bava", "Balava", "Kaulava", "Taitila", "Gara", "Vanija", "Vishti",
];

const KARANA_CYCLE_HI: [&str; 7] = ["बव", "बालव", "कौलव", "तैतिल", "गर", "वणिज", "विष्टि"];

/// Karana names for a month counter in [1, 60].
///
/// Counter 1 and counters 58-60 are the four fixed karanas; everything in
/// between cycles through the seven movable names.
fn karana_names(counter: u8) -> (&'static str, &'static str) {
    match counter {
        1 => ("Kimstughna", "किस्तुघ्न"),
        58 => ("Shakuni", "शकुनि"),
        59 => ("Chatushpada", "चतुष्पद"),
        60 => ("Naga", "नाग"),
        n => {
            let i = ((n as usize) - 2) % 7;
            (KARANA_CYCLE[i], KARANA_CYCLE_HI[i])
        }
    }
}

/// Derive all calendar elements from the Sun/Moon longitudes at one
/// instant. Tropical longitudes feed the tithi/karana elongation (the
/// ayanamsa cancels in the difference); sidereal longitudes feed the
/// nakshatra and yoga.
pub fn derive(
    sun_lon_deg: f64,
    moon_lon_deg: f64,
    sidereal_sun_deg: f64,
    sidereal_moon_deg: f64,
) -> CalendarElements {
    let diff = normalize_deg(moon_lon_deg - sun_lon_deg);

    let tithi_raw = (diff / TITHI_SEGMENT_DEG).floor() as usize;
    let tithi_index = tithi_raw % 30;
    let paksha = if tithi_index < 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };

    let nakshatra_index =
        ((normalize_deg(sidereal_moon_deg) / NAKSHATRA_SPAN_DEG).floor() as usize) % 27;

    let yoga_sum = normalize_deg(sidereal_sun_deg + sidereal_moon_deg);
    let yoga_index = ((yoga_sum / NAKSHATRA_SPAN_DEG).floor() as usize) % 27;

    // diff < 360 guarantees the counter lands in [1, 60]; the assertion
    // documents the normalization invariant this module depends on.
    let karana_counter = (diff / KARANA_SEGMENT_DEG).floor() as u8 + 1;
    debug_assert!((1..=60).contains(&karana_counter));
    let (karana, karana_hindi) = karana_names(karana_counter);

    CalendarElements {
        tithi_index: tithi_index as u8,
        tithi: TITHI_NAMES[tithi_index],
        tithi_hindi: TITHI_NAMES_HI[tithi_index],
        paksha,
        nakshatra_index: nakshatra_index as u8,
        nakshatra: NAKSHATRA_NAMES[nakshatra_index],
        nakshatra_hindi: NAKSHATRA_NAMES_HI[nakshatra_index],
        yoga_index: yoga_index as u8,
        yoga: YOGA_NAMES[yoga_index],
        yoga_hindi: YOGA_NAMES_HI[yoga_index],
        karana_counter,
        karana,
        karana_hindi,
    }
}
