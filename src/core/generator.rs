//! The "quantum circuit": one fair coin per bit.
//!
//! Each bit position is measured independently with probability 0.5, which is
//! the same distribution as one uniform draw from `[0, 2^bit_width - 1]`.

use crate::prng::BitSource;
use crate::request::GenerationRequest;

/// Build one number by measuring `bit_width` simulated qubits, LSB first.
pub fn measure<B: BitSource>(source: &mut B, bit_width: u8) -> u32 {
    let mut value = 0u32;
    for bit in 0..bit_width.min(32) {
        if source.flip() {
            value |= 1u32 << bit;
        }
    }
    value
}

pub fn generate<B: BitSource>(source: &mut B, bit_width: u8, count: usize) -> Vec<u32> {
    let mut numbers = Vec::with_capacity(count);
    for _ in 0..count {
        numbers.push(measure(source, bit_width));
    }
    numbers
}

pub fn generate_for<B: BitSource>(source: &mut B, request: &GenerationRequest) -> Vec<u32> {
    generate(source, request.bit_width(), request.count())
}


#[cfg(test)]
mod tests {
    use super::test_support::ScriptedBits;
    use super::*;
    use crate::prng::Prng;
    use crate::request::max_value_for;

    #[test]
    fn bits_are_assembled_lsb_first() {
        // 1,0,1,0 -> 0b0101
        let mut src = ScriptedBits::new(&[true, false, true, false]);
        assert_eq!(measure(&mut src, 4), 5);
    }

    #[test]
    fn all_heads_is_max_value() {
        let mut src = ScriptedBits::new(&[true]);
        for width in 0..=32u8 {
            assert_eq!(measure(&mut src, width), max_value_for(width));
        }
    }

    #[test]
    fn count_and_range_hold_for_every_width() {
        let mut rng = Prng::new(99);
        for width in 0..=32u8 {
            for count in [0usize, 1, 7, 64] {
                let nums = generate(&mut rng, width, count);
                assert_eq!(nums.len(), count);
                let max = max_value_for(width);
                assert!(nums.iter().all(|&n| n <= max), "width {width}");
            }
        }
    }

    #[test]
    fn zero_width_is_all_zero() {
        let mut rng = Prng::new(5);
        assert!(generate(&mut rng, 0, 50).iter().all(|&n| n == 0));
    }

    #[test]
    fn one_bit_only_yields_zero_or_one() {
        let mut rng = Prng::new(11);
        let nums = generate(&mut rng, 1, 10);
        assert_eq!(nums.len(), 10);
        assert!(nums.iter().all(|&n| n == 0 || n == 1));
    }

    #[test]
    fn each_bit_position_is_roughly_fair() {
        let mut rng = Prng::new(2024);
        let nums = generate(&mut rng, 8, 8_000);
        for bit in 0..8 {
            let set = nums.iter().filter(|&&n| n & (1 << bit) != 0).count();
            let rate = set as f64 / nums.len() as f64;
            assert!((0.45..0.55).contains(&rate), "bit {bit} rate {rate}");
        }
    }

    #[test]
    fn request_drives_shape() {
        use crate::format::NumberFormat;
        let req = GenerationRequest::new(3, 12, NumberFormat::Binary).unwrap();
        let mut rng = Prng::new(3);
        let nums = generate_for(&mut rng, &req);
        assert_eq!(nums.len(), 12);
        assert!(nums.iter().all(|&n| n <= 7));
    }
}
