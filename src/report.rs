use alloc::format;
use alloc::string::String;

use crate::mersenne::mt19937_64::Mt19937_64;
use crate::mersenne::Error;
use crate::tgfsr::Tgfsr;
use crate::word::Word;

/// Map a 64-bit output onto [0, 1] by dividing by 2^64
///
/// Values within half an ulp of 2^64 round up to exactly 1.0
pub fn fraction(value: u64) -> f64 {
    libm::ldexp(value as f64, -64)
}

/// Format one output as `index: fraction` with 16 decimal places
pub fn fraction_line(index: usize, value: u64) -> String {
    format!("{:4}: {:.16}", index, fraction(value))
}

/// Format the next `count` outputs of an MT19937-64 PRNG, one line each
pub fn fraction_report<const N: usize>(rng: &mut Mt19937_64<N>, count: usize) -> Result<String, Error> {
    let mut res = String::new();

    for i in 0..count {
        res.push_str(&fraction_line(i, rng.extract()?));
        res.push('\n');
    }

    Ok(res)
}

/// Concatenate words as zero-padded lowercase hex, BITS / 4 digits each
pub fn hex_stream<W: Word, I: IntoIterator<Item = W>>(words: I) -> String {
    let width = ((W::BITS + 3) / 4) as usize;
    words.into_iter().map(|w| format!("{:01$x}", w, width)).collect()
}

/// Hex stream of the next `count` TGFSR outputs
pub fn tgfsr_report<W: Word>(rng: &mut Tgfsr<W>, count: usize) -> String {
    hex_stream(rng.by_ref().take(count))
}
