use std::fmt;
use num_enum::TryFromPrimitive;

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// `⌈log2(n)⌉`, with `ceil_log2(0) == ceil_log2(1) == 0`.
pub fn ceil_log2(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}

/// Deepest recursion level a bisection of `n` items can reach, counting the
/// top-level call as level 1.
pub fn max_split_depth(n: usize) -> u32 {
    ceil_log2(n) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_log2_matches_powers_of_two() {
        assert_eq!(ceil_log2(0), 0);
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(3), 2);
        assert_eq!(ceil_log2(4), 2);
        assert_eq!(ceil_log2(5), 3);
        assert_eq!(ceil_log2(1024), 10);
        assert_eq!(ceil_log2(1025), 11);
    }

    #[test]
    fn max_split_depth_counts_top_level() {
        assert_eq!(max_split_depth(1), 1);
        assert_eq!(max_split_depth(8), 4);
    }
}
