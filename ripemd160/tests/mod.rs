//! Published RIPEMD-160 test vectors and drive-loop properties.

use digest::Digest;
use hex_literal::hex;
use ripemd160::{hash_reader, Ripemd160};

// Test messages from the published RIPEMD-160 suite. The 56- and 62-byte
// entries leave a remainder in the 56..=63 window, so their framing bytes
// spill into a second trailing block.
const VECTORS: [(&[u8], [u8; 20]); 8] = [
    (b"", hex!("9c1185a5c5e9fc54612808977ee8f548b2258d31")),
    (b"a", hex!("0bdc9d2d256b3ee9daae347be6f4dc835a467ffe")),
    (b"abc", hex!("8eb208f7e05d987a9b044a8e98c6b087f15a0bfc")),
    (
        b"message digest",
        hex!("5d0689ef49d2fae572b881b123a85ffa21595f36"),
    ),
    (
        b"abcdefghijklmnopqrstuvwxyz",
        hex!("f71c27109c692c1b56bbdceb5b9d2865b3708dbc"),
    ),
    (
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        hex!("12a053384a9c0c88e405a06c27dcf49ada62eb2b"),
    ),
    (
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        hex!("b0e20b6e3116640286ed3a87a5713079b21f5189"),
    ),
    (
        b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        hex!("9b752e45573d4b39f4dbd3323cab82bf63326bfb"),
    ),
];

#[test]
fn known_answers() {
    for (input, expected) in VECTORS.iter() {
        let digest = Ripemd160::digest(input);
        assert_eq!(digest.len(), 20);
        assert_eq!(digest[..], expected[..]);
    }
}

#[test]
fn one_million_a() {
    let mut hasher = Ripemd160::new();
    for _ in 0..1000 {
        hasher.update(&[b'a'; 1000][..]);
    }
    assert_eq!(
        hasher.finalize()[..],
        hex!("52783243c1697bdbe16d37f97f68f08325dc1528")[..]
    );
}

#[test]
fn split_updates_match_one_shot() {
    for (input, expected) in VECTORS.iter() {
        for split in 0..=input.len() {
            let mut hasher = Ripemd160::new();
            hasher.update(&input[..split]);
            hasher.update(&input[split..]);
            assert_eq!(hasher.finalize()[..], expected[..]);
        }
    }
}

#[test]
fn reader_matches_buffer_mode() {
    for (input, expected) in VECTORS.iter() {
        let digest = hash_reader(*input).unwrap();
        assert_eq!(digest[..], expected[..]);
        assert_eq!(digest, Ripemd160::digest(input));
    }
}

#[test]
fn padding_spill_lengths_agree() {
    // Sweep a window spanning both trailing-block shapes on each side of
    // the 64-byte boundary; byte-at-a-time hashing must agree with one-shot
    // at every length.
    let data = [0x5au8; 136];
    for len in 48..=136 {
        let msg = &data[..len];
        let one_shot = Ripemd160::digest(msg);
        let mut hasher = Ripemd160::new();
        for byte in msg {
            hasher.update(&[*byte]);
        }
        assert_eq!(hasher.finalize(), one_shot, "length {}", len);
    }
}

#[test]
fn deterministic_and_reset() {
    let first = Ripemd160::digest(b"message digest");
    assert_eq!(Ripemd160::digest(b"message digest"), first);

    let mut hasher = Ripemd160::new();
    hasher.update(b"message digest");
    assert_eq!(hasher.finalize_reset(), first);

    // The reset hasher reproduces a fresh hasher's digest.
    hasher.update(b"message digest");
    assert_eq!(hasher.finalize(), first);
}

#[test]
fn hex_rendering_shape() {
    for (input, _) in VECTORS.iter() {
        let rendered = hex::encode(Ripemd160::digest(input));
        assert_eq!(rendered.len(), 40);
        assert!(rendered
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    }
}
