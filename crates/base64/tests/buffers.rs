//! Tests for the caller-owned buffer API (encode_into / decode_into).

use base64_buf::{
    decode_into, decoded_len, encode_into, encoded_capacity, encoded_len, Base64Error,
};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let mut ascii = vec![0u8; encoded_capacity(blob.len())];
        let len = encode_into(&blob, &mut ascii).unwrap();
        assert_eq!(len, encoded_len(blob.len()));

        let encoded = &ascii[..len];
        assert_eq!(decoded_len(encoded), Ok(blob.len()));

        let mut bin = vec![0u8; blob.len()];
        assert_eq!(decode_into(encoded, &mut bin), Ok(blob.len()));
        assert_eq!(bin, blob);
    }
}

#[test]
fn oversized_buffers_are_fine() {
    let mut ascii = [0xaau8; 64];
    let len = encode_into(b"hello", &mut ascii).unwrap();
    assert_eq!(&ascii[..len + 1], b"aGVsbG8=\0");
    assert!(ascii[len + 1..].iter().all(|&b| b == 0xaa));

    let mut bin = [0xaau8; 64];
    let len = decode_into(b"aGVsbG8=", &mut bin).unwrap();
    assert_eq!(&bin[..len], b"hello");
    assert!(bin[len..].iter().all(|&b| b == 0xaa));
}

#[test]
fn encode_buffer_must_fit_terminator() {
    for n in 0..10usize {
        let blob = vec![7u8; n];
        let mut ascii = vec![0u8; encoded_capacity(n) - 1];
        assert_eq!(
            encode_into(&blob, &mut ascii),
            Err(Base64Error::OutputTooSmall {
                required: encoded_capacity(n),
                available: encoded_capacity(n) - 1
            })
        );
    }
}

#[test]
fn decode_buffer_sized_after_padding() {
    let mut bin = [0u8; 1];
    assert_eq!(decode_into(b"TQ==", &mut bin), Ok(1));
    assert_eq!(bin, *b"M");

    let mut empty: [u8; 0] = [];
    assert!(matches!(
        decode_into(b"TQ==", &mut empty),
        Err(Base64Error::OutputTooSmall { required: 1, available: 0 })
    ));
    assert_eq!(decode_into(b"", &mut empty), Ok(0));
}
