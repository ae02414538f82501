//! Reversible share-code scheme with a 64-word list.
//! Code format: TW-<WORD><NN>, e.g., TW-BANNER42

fn fnv1a64(bytes: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;
    let mut hash = FNV_OFFSET;
    for b in bytes {
        hash = (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME);
    }
    hash
}

fn sanitize_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

// Word list for share codes
pub const WORD_LIST: [&str; 64] = [
    "BANNER", "THRONE", "CROWN", "EXILE", "WINTER", "RAVEN", "SHIELD", "SPEAR", "HEARTH", "WOLF",
    "STAG", "BOAR", "FALCON", "TORCH", "EMBER", "OATH", "SAGA", "RUNE", "HELM", "AXE", "GLORY",
    "FAME", "TRIBUTE", "SIEGE", "GATE", "KEEP", "TOWER", "RAMPART", "MOAT", "MARSH", "FJORD",
    "CRAG", "RIDGE", "VALE", "GLEN", "MOOR", "HEATH", "PINE", "BIRCH", "STEED", "SADDLE",
    "QUIVER", "ARROW", "BOW", "BLADE", "ANVIL", "FORGE", "SHRINE", "RELIC", "CHAPEL", "HERALD",
    "SQUIRE", "KNIGHT", "LANCE", "CHARGE", "RALLY", "MARCH", "CAMP", "SCOUT", "HUNTER", "WARDEN",
    "CHIEF", "ROYAL", "REALM",
];

#[inline]
fn pack(word_index: u16, nn: u8) -> u16 {
    word_index & 0x003F | ((u16::from(nn) & 0x7F) << 6)
}

#[inline]
fn unpack(packed: u16) -> (u16, u8) {
    (packed & 0x003F, ((packed >> 6) & 0x7F) as u8)
}

fn compose_seed(word_index: u16, nn: u8) -> u64 {
    let packed = pack(word_index, nn);
    // Domain-separated FNV input
    let mut buf = [0u8; 10];
    buf[..7].copy_from_slice(b"THRONE-");
    buf[7] = (packed & 0xFF) as u8;
    buf[8] = (packed >> 8) as u8;
    buf[9] = 0x5A;
    let h = fnv1a64(&buf);
    (h & 0xFFFF_FFFF_FFFF_0000) | u64::from(packed)
}

#[must_use]
pub fn encode_friendly(seed: u64) -> String {
    let packed = (seed & 0xFFFF) as u16;
    let (wi, mut nn) = unpack(packed);
    let word = WORD_LIST.get(wi as usize).copied().unwrap_or("BANNER");
    if nn > 99 {
        nn %= 100;
    }
    format!("TW-{word}{nn:02}")
}

#[must_use]
pub fn decode_to_seed(code: &str) -> Option<u64> {
    let s = code.trim();
    let (prefix, rest) = s.split_once('-')?;
    if !prefix.eq_ignore_ascii_case("TW") {
        return None;
    }
    // The split below needs byte positions to be char boundaries.
    if rest.len() < 3 || !rest.is_ascii() {
        return None;
    }
    let (word_part, nn_part) = rest.split_at(rest.len() - 2);
    let nn: u8 = nn_part.parse().ok()?;
    let word = sanitize_word(word_part);
    let idx = WORD_LIST.iter().position(|w| *w == word)?;
    let wi = u16::try_from(idx).ok()?;
    Some(compose_seed(wi, nn))
}

#[must_use]
pub fn generate_code_from_entropy(entropy: u64) -> String {
    let wi = u16::try_from(entropy % WORD_LIST.len() as u64).unwrap_or(0);
    let nn = ((entropy >> 17) % 100) as u8;
    encode_friendly(compose_seed(wi, nn))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_roundtrips_code() {
        let seed = 0xDEAD_BEEF_CAFE_BABE;
        let code = encode_friendly(seed);
        let new_seed = decode_to_seed(&code).unwrap();
        assert_eq!(encode_friendly(new_seed), code);
    }

    #[test]
    fn tw_banner_42_stable() {
        let seed = decode_to_seed("TW-BANNER42").unwrap();
        assert_eq!(encode_friendly(seed), "TW-BANNER42");
    }

    #[test]
    fn decode_is_forgiving_of_case_and_spacing() {
        let upper = decode_to_seed("TW-WOLF07").unwrap();
        let lower = decode_to_seed("  tw-wolf07  ").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_to_seed("WOLF07").is_none());
        assert!(decode_to_seed("XX-WOLF07").is_none());
        assert!(decode_to_seed("TW-07").is_none());
        assert!(decode_to_seed("TW-GOBLIN07").is_none());
        assert!(decode_to_seed("TW-WOLFZZ").is_none());
        assert!(decode_to_seed("TW-W\u{d6}LF07").is_none());
    }

    #[test]
    fn generated_codes_always_decode() {
        for entropy in [0u64, 1, 64, 1 << 17, 0x1234_5678_9ABC_DEF0, u64::MAX] {
            let code = generate_code_from_entropy(entropy);
            let seed = decode_to_seed(&code).expect("generated code decodes");
            assert_eq!(encode_friendly(seed), code);
        }
    }

    #[test]
    fn seeds_embed_their_packed_code() {
        let seed = decode_to_seed("TW-SIEGE13").unwrap();
        let packed = (seed & 0xFFFF) as u16;
        let (wi, nn) = unpack(packed);
        assert_eq!(WORD_LIST[wi as usize], "SIEGE");
        assert_eq!(nn, 13);
    }
}
