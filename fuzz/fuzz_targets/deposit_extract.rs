#![no_main]

// Checks that the dispatched deposit / extract agree with the portable backend,
// that extract inverts deposit, and that the BMI2 backend (when the CPU has it)
// agrees too.

use libfuzzer_sys::fuzz_target;
use standard_swizzle::bench::bits::{portable_deposit_bits, portable_extract_bits};
use standard_swizzle::bits::{deposit_bits, extract_bits};

fuzz_target!(|input: (u32, u32)| {
    let (value, mask) = input;

    let deposited = portable_deposit_bits(value, mask);
    assert_eq!(deposit_bits(value, mask), deposited);
    assert_eq!(deposited & !mask, 0, "deposit wrote outside mask {mask:#010x}");

    let extracted = portable_extract_bits(value, mask);
    assert_eq!(extract_bits(value, mask), extracted);

    // Only the low popcount(mask) bits of the value survive a deposit.
    let width = mask.count_ones();
    let low = if width == 32 { value } else { value & ((1u32 << width) - 1) };
    assert_eq!(portable_extract_bits(deposited, mask), low);

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    if std::is_x86_feature_detected!("bmi2") {
        use standard_swizzle::bench::bits::{bmi2_deposit_bits, bmi2_extract_bits};
        unsafe {
            assert_eq!(bmi2_deposit_bits(value, mask), deposited);
            assert_eq!(bmi2_extract_bits(value, mask), extracted);
        }
    }
});
