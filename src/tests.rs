use crate::{Alphabet, AlphabetRegistry, Base32Codec, DecodeError, TextCodec, decode, encode};

fn round_trip(codec: &Base32Codec, data: &[u8]) {
    let encoded = codec.encode(data);
    assert_eq!(
        encoded.chars().count(),
        Base32Codec::encoded_len(data.len()),
        "length law violated for {} bytes",
        data.len()
    );
    let decoded = codec.decode(&encoded).unwrap();
    assert_eq!(decoded, data);
}

fn registry_codec(name: &str) -> Base32Codec {
    AlphabetRegistry::load_default().unwrap().codec(name).unwrap()
}

#[test]
fn test_known_vectors() {
    let codec = Base32Codec::new();
    assert_eq!(codec.encode(b"a"), "ME");
    assert_eq!(codec.encode(b"Aardvark"), "IFQXEZDWMFZGW");
    assert_eq!(codec.encode(b"Gloucester"), "I5WG65LDMVZXIZLS");
}

#[test]
fn test_known_vectors_lowercase_alphabet() {
    let codec = Base32Codec::with_alphabet(Alphabet::rfc4648_lower(), false).unwrap();
    assert_eq!(codec.encode(b"a"), "me");
    assert_eq!(codec.encode(b"Aardvark"), "ifqxezdwmfzgw");
    assert_eq!(codec.encode(b"Gloucester"), "i5wg65ldmvzxizls");
}

#[test]
fn test_rfc4648_test_vectors_without_padding() {
    let codec = Base32Codec::new();
    let vectors: [(&[u8], &str); 6] = [
        (b"f", "MY"),
        (b"fo", "MZXQ"),
        (b"foo", "MZXW6"),
        (b"foob", "MZXW6YQ"),
        (b"fooba", "MZXW6YTB"),
        (b"foobar", "MZXW6YTBOI"),
    ];
    for (data, expected) in vectors {
        assert_eq!(codec.encode(data), expected);
        assert_eq!(codec.decode(expected).unwrap(), data);
    }
}

#[test]
fn test_empty_input() {
    let codec = Base32Codec::new();
    assert_eq!(codec.encode(b""), "");
    assert_eq!(codec.decode("").unwrap(), Vec::<u8>::new());
}

#[test]
fn test_round_trip_short_inputs() {
    let codec = Base32Codec::new();
    round_trip(&codec, b"a");
    round_trip(&codec, b"12345");
    round_trip(&codec, b"123456");
}

#[test]
fn test_round_trip_non_ascii_text() {
    let codec = Base32Codec::new();
    round_trip(&codec, "çåƒé-søçîé†¥".as_bytes());

    let utf16: Vec<u8> = "çåƒé-søçîé†¥"
        .encode_utf16()
        .flat_map(|unit| unit.to_be_bytes())
        .collect();
    round_trip(&codec, &utf16);
}

#[test]
fn test_round_trip_binary() {
    let codec = Base32Codec::new();
    let all_bytes: Vec<u8> = (0..=255).collect();
    round_trip(&codec, &all_bytes);
    round_trip(&codec, &[0u8; 7]);
    round_trip(&codec, &[0xFFu8; 9]);
}

#[test]
fn test_round_trip_large_input() {
    let codec = Base32Codec::new();
    let data: Vec<u8> = (0..2 * 1024 * 1024u32)
        .map(|i| (i.wrapping_mul(2_654_435_761) >> 13) as u8)
        .collect();
    round_trip(&codec, &data);
}

#[test]
fn test_round_trip_every_registry_alphabet() {
    let registry = AlphabetRegistry::load_default().unwrap();
    let data = b"Hello, World! \x00\x01\xfe\xff";
    for name in registry.names() {
        let codec = registry.codec(&name).unwrap();
        round_trip(&codec, data);
    }
}

#[test]
fn test_deterministic() {
    let codec = Base32Codec::new();
    let first = codec.encode(b"determinism");
    for _ in 0..10 {
        assert_eq!(codec.encode(b"determinism"), first);
        assert_eq!(codec.decode(&first).unwrap(), b"determinism");
    }
}

#[test]
fn test_case_insensitive_decode() {
    let codec = Base32Codec::new();
    let encoded = codec.encode(b"Gloucester");
    let upper = codec.decode(&encoded.to_uppercase()).unwrap();
    let lower = codec.decode(&encoded.to_lowercase()).unwrap();
    let mixed = codec.decode("i5Wg65lDmVzXiZlS").unwrap();
    assert_eq!(upper, b"Gloucester");
    assert_eq!(lower, b"Gloucester");
    assert_eq!(mixed, b"Gloucester");
}

#[test]
fn test_case_insensitive_lowercase_alphabet_accepts_uppercase() {
    let codec = registry_codec("rfc4648_lower");
    assert_eq!(codec.decode("IFQXEZDWMFZGW").unwrap(), b"Aardvark");
}

#[test]
fn test_case_sensitive_rejects_flipped_case() {
    let codec = Base32Codec::builder().case_sensitive(true).build().unwrap();
    let encoded = codec.encode(b"Aardvark");
    assert_eq!(codec.decode(&encoded).unwrap(), b"Aardvark");

    let err = codec.decode(&encoded.to_lowercase()).unwrap_err();
    assert_eq!(err.symbol(), 'i');
    assert_eq!(err.position(), 0);
}

#[test]
fn test_case_sensitive_case_carries_information() {
    let codec = registry_codec("wordsafe");
    let encoded = codec.encode(b"\x00\x10\x20\x30\x40");
    let flipped: String = encoded
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect();
    assert_ne!(flipped, encoded);

    match codec.decode(&flipped) {
        Ok(decoded) => assert_ne!(decoded, b"\x00\x10\x20\x30\x40"),
        Err(DecodeError::InvalidInput { .. }) => {}
    }
}

#[test]
fn test_invalid_symbol() {
    let codec = Base32Codec::new();
    let err = codec.decode("#").unwrap_err();
    assert_eq!(
        err,
        DecodeError::InvalidInput {
            symbol: '#',
            position: 0,
            input: "#".to_string(),
            valid_symbols: "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567".to_string(),
        }
    );
}

#[test]
fn test_invalid_symbol_rejected_anywhere() {
    let codec = Base32Codec::new();
    // Digits 0, 1, 8 and 9 are not part of RFC 4648
    for input in ["MZXW6YTB0I", "1MZXW6", "MZXW6YT8", "MZXW 6"] {
        assert!(codec.decode(input).is_err(), "{} should be rejected", input);
    }

    let err = codec.decode("MZXW6YTBOI=").unwrap_err();
    assert_eq!(err.symbol(), '=');
    assert_eq!(err.position(), 10);
}

#[test]
fn test_invalid_position_counts_chars() {
    let codec = Base32Codec::new();
    let err = codec.decode("MEé").unwrap_err();
    assert_eq!(err.symbol(), 'é');
    assert_eq!(err.position(), 2);
}

#[test]
fn test_custom_unicode_alphabet() {
    let runes: String = ('\u{16A0}'..='\u{16BF}').collect();
    let codec = Base32Codec::builder()
        .alphabet_str(&runes)
        .case_sensitive(true)
        .build()
        .unwrap();
    let encoded = codec.encode(b"Aardvark");
    assert_eq!(encoded.chars().count(), 13);
    assert_eq!(codec.decode(&encoded).unwrap(), b"Aardvark");
}

#[test]
fn test_codecs_are_independent() {
    let upper = Base32Codec::new();
    let hex = registry_codec("base32hex");
    assert_ne!(upper.encode(b"a"), hex.encode(b"a"));
    assert_eq!(hex.encode(b"a"), "C4");
    assert!(upper.decode("C4").is_ok());
    assert_ne!(upper.decode("C4").unwrap(), b"a");
}

#[test]
fn test_shared_across_threads() {
    let codec = std::sync::Arc::new(Base32Codec::new());
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let codec = std::sync::Arc::clone(&codec);
            std::thread::spawn(move || {
                let data = vec![i; 1000];
                codec.decode(&codec.encode(&data)).unwrap() == data
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_text_codec_trait_object() {
    let codec: Box<dyn TextCodec> = Box::new(registry_codec("crockford"));
    let encoded = codec.encode(b"digest");
    assert_eq!(codec.decode(&encoded).unwrap(), b"digest");
}

#[test]
fn test_free_functions_use_rfc4648() {
    assert_eq!(encode(b"a"), "ME");
    assert_eq!(decode("me").unwrap(), b"a");
    assert!(decode("m!").is_err());
}
