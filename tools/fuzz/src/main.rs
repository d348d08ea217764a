use afl::fuzz;
use chilean_rut::{clean_rut, format_rut, is_valid, Rut};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

/// Inserts separators or flips the case of the check letter, the way users type a RUT
fn gen_variant(input: &str, rng: &mut StdRng) -> String {
    let mut variant = String::with_capacity(input.len() * 2);
    for c in input.chars() {
        match rng.gen_range::<u8, _>(0..8) {
            0 => variant.push('.'),
            1 => variant.push('-'),
            2 => variant.push(' '),
            _ => {}
        }
        if c == 'k' && rng.gen_bool(0.5) {
            variant.push('K');
        } else {
            variant.push(c);
        }
    }
    variant
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let validate = rng.gen_bool(0.5);
    let variant = gen_variant(input, &mut rng);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Variant: {:?}", variant);
        println!("Validate: {:?}", validate);
    }

    for candidate in [input, variant.as_str()] {
        check_invariants(candidate, validate);
    }
}

fn check_invariants(input: &str, validate: bool) {
    let valid = is_valid(input);
    if input.starts_with('0') {
        assert!(!valid);
    }

    let formatted = format_rut(input, validate);
    let cleaned = clean_rut(input, validate);
    // both share the same format, length and validation checks
    assert_eq!(formatted.is_ok(), cleaned.is_ok());
    if validate {
        assert_eq!(cleaned.is_ok(), valid);
    }

    // Zeros kept behind a leading noise character (`-0012-3`) are dropped on a second pass,
    // so only outputs without a leading zero are stable.
    if let Some(formatted) = formatted.as_ref().ok().filter(|x| !x.starts_with('0')) {
        assert_eq!(format_rut(formatted.as_str(), false).as_ref(), Ok(formatted));
    }
    if let Some(cleaned) = cleaned.as_ref().ok().filter(|x| !x.starts_with('0')) {
        assert_eq!(clean_rut(cleaned.as_str(), false).as_ref(), Ok(cleaned));
    }

    if valid {
        let formatted = format_rut(input, true).unwrap();
        let cleaned = clean_rut(input, true).unwrap();
        assert_eq!(clean_rut(formatted.as_str(), true).as_ref(), Ok(&cleaned));

        let rut: Rut = input.parse().unwrap();
        assert_eq!(rut.to_string(), formatted);
        assert_eq!(rut.compact(), cleaned);
    }
}
