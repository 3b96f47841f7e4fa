pub fn u8s_from_str(input: &str) -> [u8; 32] {
    blake3::hash(input.as_bytes()).into()
}

/// Seed for one round of a repeated batch. Round 0 keeps the base seed so a
/// single run and the first round of `--forever` agree.
pub fn round_seed(base: &str, round: u64) -> [u8; 32] {
    match round {
        0 => u8s_from_str(base),
        r => u8s_from_str(&format!("{}:{}", base, r)),
    }
}
