use pakdh_core::oracle::*;
use pakdh_core::types::*;

#[test]
fn extended_oracle_known_answer() {
    let digest = extended_oracle(1, b"test").unwrap();
    assert_eq!(
        hex::encode(digest.as_bytes()),
        concat!(
            "2830791d5aa48b95ddbd61b0c829e281",
            "58c5b378fa7abca2892ade148643deac",
            "b0f2cc82d451dd5b71f4a0ec505a3eac",
            "07a36714ff87cd7b644e2f520a18f567",
            "78d1e1e346fb21cdc5a8aa8a37a9ee3f",
            "4db8a938676ea40a0401cff3328a4064",
            "f9f5032f0744f7c6b744bf85693fcdb5",
            "9777227a4e0a2fd9133b40cb403b371b",
            "318795fca26fd3f033736bcc736e4b55",
        )
    );
}

#[test]
fn compact_oracle_known_answers() {
    assert_eq!(
        compact_oracle(3, b"test").unwrap().to_hex(),
        "c9c7ab3ee7670a6143fc6d0497ca729d"
    );
    assert_eq!(
        compact_oracle(5, b"").unwrap().to_hex(),
        "288e9e6dcd71ccde5cee80f1d5a774eb"
    );
}

#[test]
fn extended_oracle_is_1152_bits_for_any_message() {
    for message in [&b""[..], b"a", b"test", &[0xffu8; 1000][..]] {
        let digest = extended_oracle(2, message).unwrap();
        assert_eq!(digest.as_bytes().len() * 8, 1152);
        assert!(digest.to_biguint().bits() <= 1152);
    }
}

#[test]
fn compact_oracle_is_128_bits_for_any_message() {
    for message in [&b""[..], b"a", b"test", &[0xffu8; 1000][..]] {
        let digest = compact_oracle(4, message).unwrap();
        assert_eq!(digest.as_bytes().len() * 8, 128);
        assert_eq!(digest.to_hex().len(), COMPACT_DIGEST_HEX_LENGTH);
    }
}

#[test]
fn selectors_map_to_tags() {
    assert_eq!(BlindingOracle::H1.tag(), 1);
    assert_eq!(BlindingOracle::H2.tag(), 2);
    assert_eq!(ConfirmationOracle::H3.tag(), 3);
    assert_eq!(ConfirmationOracle::H4.tag(), 4);
    assert_eq!(ConfirmationOracle::H5.tag(), 5);

    let via_selector = BlindingOracle::H1.digest(b"test").unwrap();
    let direct = extended_oracle(1, b"test").unwrap();
    assert_eq!(via_selector.as_bytes(), direct.as_bytes());
}

#[test]
fn oracles_are_domain_separated() {
    let h1 = BlindingOracle::H1.digest(b"message").unwrap();
    let h2 = BlindingOracle::H2.digest(b"message").unwrap();
    assert_ne!(h1.as_bytes(), h2.as_bytes());

    let h3 = ConfirmationOracle::H3.digest(b"message").unwrap();
    let h4 = ConfirmationOracle::H4.digest(b"message").unwrap();
    let h5 = ConfirmationOracle::H5.digest(b"message").unwrap();
    assert_ne!(h3, h4);
    assert_ne!(h4, h5);
    assert_ne!(h3, h5);
}

#[test]
fn compact_oracle_hashes_length_prefixed_message_twice() {
    let message = b"abc";
    let mut expected = [0u8; SHA256_LENGTH];
    pakdh_core::crypto::sha256(b"33abcabc", &mut expected);
    let digest = compact_oracle(3, message).unwrap();
    assert_eq!(digest.as_bytes(), pakdh_core::crypto::lower_128(&expected));
}

#[test]
fn compact_digest_hex_round_trip_and_rejection() {
    let digest = compact_oracle(3, b"test").unwrap();
    let parsed = CompactDigest::from_hex(&digest.to_hex()).unwrap();
    assert_eq!(parsed, digest);

    let upper = digest.to_hex().to_uppercase();
    assert_eq!(CompactDigest::from_hex(&upper).unwrap(), digest);

    assert_eq!(
        CompactDigest::from_hex("c9c7ab3e").unwrap_err(),
        PakError::InvalidProtocolMessage
    );
    assert_eq!(
        CompactDigest::from_hex("zzc7ab3ee7670a6143fc6d0497ca729d").unwrap_err(),
        PakError::InvalidProtocolMessage
    );
}

#[test]
fn digest_debug_is_redacted() {
    let digest = compact_oracle(5, b"secret").unwrap();
    assert_eq!(format!("{:?}", digest), "CompactDigest([REDACTED; 16])");
}
