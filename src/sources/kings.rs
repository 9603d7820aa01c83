//! King name to bibliography ID resolution.
//!
//! Each monarch's annal volume series has a fixed bibliography ID on the
//! remote service. Lookup is by exact normalized name only; there is no fuzzy
//! matching. Revised/supplement compilations ("수정실록" etc.) carry their own
//! IDs and are addressed by suffixed names.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Known king names, Hangeul first, then romanized. Romanized keys are
/// stored lower-cased, which is what [`bibliography_id`] normalizes to.
static KING_BIBLIOGRAPHY: &[(&str, &str)] = &[
    // Hangeul
    ("태조", "ITKC_JT_A0"),
    ("정종", "ITKC_JT_B0"),
    ("태종", "ITKC_JT_C0"),
    ("세종", "ITKC_JT_D0"),
    ("문종", "ITKC_JT_E0"),
    ("단종", "ITKC_JT_F0"),
    ("세조", "ITKC_JT_G0"),
    ("예종", "ITKC_JT_H0"),
    ("성종", "ITKC_JT_I0"),
    ("연산군", "ITKC_JT_J0"),
    ("중종", "ITKC_JT_K0"),
    ("인종", "ITKC_JT_L0"),
    ("명종", "ITKC_JT_M0"),
    ("선조", "ITKC_JT_N0"),
    ("선조(수정)", "ITKC_JT_N1"),
    ("광해군", "ITKC_JT_O0"),
    ("인조", "ITKC_JT_P0"),
    ("효종", "ITKC_JT_Q0"),
    ("현종", "ITKC_JT_R0"),
    ("현종(개수)", "ITKC_JT_R1"),
    ("숙종", "ITKC_JT_S0"),
    ("숙종보궐정오", "ITKC_JT_S1"),
    ("경종", "ITKC_JT_T0"),
    ("경종(수정)", "ITKC_JT_T1"),
    ("영조", "ITKC_JT_U0"),
    ("정조", "ITKC_JT_V0"),
    ("순조", "ITKC_JT_W0"),
    ("헌종", "ITKC_JT_X0"),
    ("철종", "ITKC_JT_Y0"),
    // Romanized
    ("taejo", "ITKC_JT_A0"),
    ("jeongjong", "ITKC_JT_B0"),
    ("taejong", "ITKC_JT_C0"),
    ("sejong", "ITKC_JT_D0"),
    ("munjong", "ITKC_JT_E0"),
    ("danjong", "ITKC_JT_F0"),
    ("sejo", "ITKC_JT_G0"),
    ("yejong", "ITKC_JT_H0"),
    ("seongjong", "ITKC_JT_I0"),
    ("yeonsangun", "ITKC_JT_J0"),
    ("jungjong", "ITKC_JT_K0"),
    ("injong", "ITKC_JT_L0"),
    ("myeongjong", "ITKC_JT_M0"),
    ("seonjo", "ITKC_JT_N0"),
    ("seonjo(revised)", "ITKC_JT_N1"),
    ("gwanghaegun", "ITKC_JT_O0"),
    ("injo", "ITKC_JT_P0"),
    ("hyojong", "ITKC_JT_Q0"),
    ("hyeonjong", "ITKC_JT_R0"),
    ("hyeonjong(revised)", "ITKC_JT_R1"),
    ("sukjong", "ITKC_JT_S0"),
    ("sukjong(supplement)", "ITKC_JT_S1"),
    ("gyeongjong", "ITKC_JT_T0"),
    ("gyeongjong(revised)", "ITKC_JT_T1"),
    ("yeongjo", "ITKC_JT_U0"),
    ("jeongjo", "ITKC_JT_V0"),
    ("sunjo", "ITKC_JT_W0"),
    ("heonjong", "ITKC_JT_X0"),
    ("cheoljong", "ITKC_JT_Y0"),
];

fn king_map() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| KING_BIBLIOGRAPHY.iter().copied().collect())
}

/// Resolve a king name to its bibliography ID.
///
/// The name is trimmed and lower-cased before lookup, so `" SEJONG "` and
/// `"세종"` both resolve. Unknown names return `None`; the caller decides
/// whether to fall back to a keyword-only search.
pub fn bibliography_id(name: &str) -> Option<&'static str> {
    let normalized = name.trim().to_lowercase();
    king_map().get(normalized.as_str()).copied()
}

/// All known (name, bibliography ID) pairs, Hangeul entries first.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    KING_BIBLIOGRAPHY.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hangeul_and_romanized_resolve_to_same_id() {
        for (hangeul, romanized) in [
            ("태조", "Taejo"),
            ("세종", "Sejong"),
            ("선조", "Seonjo"),
            ("연산군", "Yeonsangun"),
            ("철종", "Cheoljong"),
        ] {
            assert_eq!(
                bibliography_id(hangeul),
                bibliography_id(romanized),
                "{hangeul} vs {romanized}"
            );
            assert!(bibliography_id(hangeul).is_some());
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trimmed() {
        assert_eq!(bibliography_id("sejong"), Some("ITKC_JT_D0"));
        assert_eq!(bibliography_id("SEJONG"), Some("ITKC_JT_D0"));
        assert_eq!(bibliography_id("  Sejong  "), Some("ITKC_JT_D0"));
        assert_eq!(bibliography_id(" 세종 "), Some("ITKC_JT_D0"));
    }

    #[test]
    fn test_revised_compilations_have_their_own_ids() {
        assert_eq!(bibliography_id("선조(수정)"), Some("ITKC_JT_N1"));
        assert_eq!(bibliography_id("seonjo(revised)"), Some("ITKC_JT_N1"));
        assert_ne!(bibliography_id("선조"), bibliography_id("선조(수정)"));
        assert_eq!(bibliography_id("숙종보궐정오"), Some("ITKC_JT_S1"));
        assert_eq!(bibliography_id("sukjong(supplement)"), Some("ITKC_JT_S1"));
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert_eq!(bibliography_id("고종"), None);
        assert_eq!(bibliography_id("sejong the great"), None);
        assert_eq!(bibliography_id(""), None);
    }

    #[test]
    fn test_every_entry_resolves_through_lookup() {
        for (name, id) in entries() {
            assert_eq!(bibliography_id(name), Some(id), "entry {name}");
        }
    }
}
