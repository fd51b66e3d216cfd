//! Exhaustive checks of the (8,4) code: encoding, codebook construction and
//! nearest-codeword decoding, plus the decoded output of the binary.

use linear84::ecc::linear84::{CODEBOOK_SIZE, CODEWORD_BITS};
use linear84::{build_codebook, codebook, decode, encode, Codebook, Codeword, InfoWord, CODEBOOK};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::process::Command;

/// Index of the first entry at minimum distance, found the slow way.
fn brute_force_nearest(book: &Codebook, received: Codeword) -> usize {
    let distances: Vec<u32> = book.iter().map(|c| c.distance(received)).collect();
    let minimum = *distances.iter().min().unwrap();
    distances.iter().position(|&d| d == minimum).unwrap()
}

#[test]
fn test_round_trip_uncorrupted() {
    let book = build_codebook();
    for info in InfoWord::all() {
        assert_eq!(decode(&book, encode(info)), info);
    }
}

#[test]
fn test_single_bit_errors_corrected() {
    for info in InfoWord::all() {
        let sent = encode(info);
        for bit in 0..CODEWORD_BITS {
            let received = sent.flip(bit);
            let result = CODEBOOK.nearest(received);
            assert_eq!(result.info, info, "info {info}, flipped bit {bit}");
            assert_eq!(result.codeword, sent);
            assert_eq!(result.distance, 1);
        }
    }
}

#[test]
fn test_pairwise_minimum_distance() {
    let words: Vec<Codeword> = CODEBOOK.iter().collect();
    let mut minimum = u32::MAX;
    for (i, a) in words.iter().enumerate() {
        for b in &words[i + 1..] {
            minimum = minimum.min(a.distance(*b));
        }
    }
    assert_eq!(minimum, 3);
    assert_eq!(CODEBOOK.minimum_distance(), minimum);
}

#[test]
fn test_codebook_complete_and_stable() {
    let first = build_codebook();
    let second = Codebook::build();
    assert_eq!(first.len(), CODEBOOK_SIZE);
    assert_eq!(first, second);
    assert_eq!(first, *codebook());

    let mut seen: Vec<u8> = first.iter().map(|c| c.bits()).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), CODEBOOK_SIZE);

    for (index, word) in first.iter().enumerate() {
        assert_eq!(word.info().value() as usize, index);
    }
}

#[test]
fn test_every_received_word_matches_brute_force() {
    for bits in 0..=u8::MAX {
        let received = Codeword::from_bits(bits);
        let expected = brute_force_nearest(&CODEBOOK, received);
        assert_eq!(
            CODEBOOK.decode(received).value() as usize,
            expected,
            "received {received}"
        );
    }
}

#[test]
fn test_random_two_bit_errors_decode_to_nearest() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..1000 {
        let info = InfoWord::new(rng.gen_range(0..16)).unwrap();
        let first = rng.gen_range(0..CODEWORD_BITS);
        let mut second = rng.gen_range(0..CODEWORD_BITS);
        while second == first {
            second = rng.gen_range(0..CODEWORD_BITS);
        }
        let received = encode(info).flip(first).flip(second);

        let result = CODEBOOK.nearest(received);
        let expected = brute_force_nearest(&CODEBOOK, received);
        assert_eq!(result.info.value() as usize, expected);
        // Two errors exceed the correction radius, but the sent word is still within reach
        assert!(result.distance <= 2);
    }
}

#[test]
fn test_tie_break_is_deterministic() {
    // 0x0B sits at distance 2 from the codewords for 10, 11 and 15
    let received = Codeword::from_bits(0x0B);
    for candidate in [10u8, 11, 15] {
        let word = CODEBOOK.get(InfoWord::new(candidate).unwrap());
        assert_eq!(word.distance(received), 2);
    }
    let answers: Vec<u8> = (0..10).map(|_| CODEBOOK.decode(received).value()).collect();
    assert!(answers.iter().all(|&v| v == 10));
}

#[test]
fn test_all_ones_regression() {
    let info = decode(&build_codebook(), Codeword::from_bits(0xFF));
    assert_eq!(info.value(), 14);
}

#[test]
fn test_concurrent_readers_share_codebook() {
    let book = codebook();
    std::thread::scope(|scope| {
        for offset in 0..4u8 {
            scope.spawn(move || {
                for info in InfoWord::all() {
                    let bit = u32::from(offset) * 2;
                    assert_eq!(book.decode(encode(info).flip(bit)), info);
                }
            });
        }
    });
}

#[test]
fn test_binary_prints_decoded_value() {
    let output = Command::new(env!("CARGO_BIN_EXE_decode_all_ones"))
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "14\n");
}
