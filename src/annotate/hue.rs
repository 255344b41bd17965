//! Stable per-element hue

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// 32-bit FNV-1a over the UTF-16 code units of `text`
pub fn hash32(text: &str) -> u32 {
    text.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
        (h ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Hue in `[0, 360)` for a frame element id. Depends only on the id.
pub fn element_hue(element_id: &str) -> u16 {
    (hash32(&format!("fe:{}", element_id)) % 360) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_reference_values() {
        assert_eq!(hash32(""), 2_166_136_261);
        assert_eq!(hash32("a"), 0xe40c_292c);
        assert_eq!(hash32("foobar"), 0xbf9c_f968);
    }

    #[test]
    fn test_hue_is_pure_and_in_range() {
        for id in ["Self_mover", "Goal", "Åskådare", ""] {
            let hue = element_hue(id);
            assert!(hue < 360);
            assert_eq!(hue, element_hue(id));
        }
        assert_eq!(element_hue("Goal"), (hash32("fe:Goal") % 360) as u16);
    }

    #[test]
    fn test_hashes_utf16_units() {
        // U+1F600 is a surrogate pair: two code units, not four bytes
        let units: Vec<u16> = "😀".encode_utf16().collect();
        let expected = units
            .iter()
            .fold(FNV_OFFSET_BASIS, |h, u| (h ^ u32::from(*u)).wrapping_mul(FNV_PRIME));
        assert_eq!(hash32("😀"), expected);
    }
}
