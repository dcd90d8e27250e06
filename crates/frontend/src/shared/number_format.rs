//! Number formatting in the Indian numbering system.
//!
//! Card values use the compact K / L (lakh) / Cr (crore) suffixes;
//! narration spells magnitudes out the way they are spoken ("15 crore
//! 84 lakh"). Both forms share the same thresholds: 1e3, 1e5, 1e7.

/// Formats a magnitude as a compact card value.
///
/// Thresholds are inclusive lower bounds. From one crore up the value is
/// divided by 1e7 and carries "Cr" at two decimals, from one lakh up it is
/// divided by 1e5 and carries "L" at two decimals, from one thousand up it
/// is divided by 1e3 and carries "K" at one decimal. Anything smaller
/// renders as the plain numeral. The suffix is chosen before rounding, so
/// 99,999 displays as "100.0K", not "1.00L".
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_compact;
///
/// assert_eq!(format_compact(45_000.0), "45.0K");
/// assert_eq!(format_compact(158_400_000.0), "15.84Cr");
/// ```
pub fn format_compact(value: f64) -> String {
    if value >= 10_000_000.0 {
        format!("{:.2}Cr", value / 10_000_000.0)
    } else if value >= 100_000.0 {
        format!("{:.2}L", value / 100_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Spells a count the way it is spoken in the Indian system: "2 crore
/// 5 lakh", "25 lakh", "45 thousand". Components use floor division, so
/// 1,999 is "1 thousand", and the lakh remainder of a crore value is only
/// voiced when it is non-zero.
pub fn spoken_indian(n: u64) -> String {
    if n >= 10_000_000 {
        let crore = n / 10_000_000;
        let lakh = (n % 10_000_000) / 100_000;
        if lakh > 0 {
            format!("{} crore {} lakh", crore, lakh)
        } else {
            format!("{} crore", crore)
        }
    } else if n >= 100_000 {
        format!("{} lakh", n / 100_000)
    } else if n >= 1_000 {
        format!("{} thousand", n / 1_000)
    } else {
        n.to_string()
    }
}

/// Signed month-over-month change label at one decimal: "+2.3%", "-5.5%".
pub fn format_change(pct: f64) -> String {
    format!("{:+.1}%", pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_below_thousand_is_the_plain_numeral() {
        assert_eq!(format_compact(0.0), "0");
        assert_eq!(format_compact(350.0), "350");
        assert_eq!(format_compact(999.0), "999");
        assert_eq!(format_compact(92.5), "92.5");
    }

    #[test]
    fn compact_thousands_carry_one_decimal() {
        assert_eq!(format_compact(1_000.0), "1.0K");
        assert_eq!(format_compact(45_000.0), "45.0K");
        assert_eq!(format_compact(45_500.0), "45.5K");
    }

    #[test]
    fn suffix_is_chosen_before_rounding() {
        // 99,999 is below the lakh threshold, so it stays in the K range
        // even though the rounded figure reads 100.0.
        assert_eq!(format_compact(99_999.0), "100.0K");
        assert_eq!(format_compact(9_999_999.0), "100.00L");
    }

    #[test]
    fn compact_lakh_and_crore_carry_two_decimals() {
        assert_eq!(format_compact(100_000.0), "1.00L");
        assert_eq!(format_compact(2_500_000.0), "25.00L");
        assert_eq!(format_compact(10_000_000.0), "1.00Cr");
        assert_eq!(format_compact(158_400_000.0), "15.84Cr");
    }

    #[test]
    fn spoken_zero_and_small_counts_are_plain() {
        assert_eq!(spoken_indian(0), "0");
        assert_eq!(spoken_indian(350), "350");
        assert_eq!(spoken_indian(999), "999");
    }

    #[test]
    fn spoken_components_floor() {
        assert_eq!(spoken_indian(1_000), "1 thousand");
        assert_eq!(spoken_indian(1_999), "1 thousand");
        assert_eq!(spoken_indian(45_000), "45 thousand");
        assert_eq!(spoken_indian(99_999), "99 thousand");
    }

    #[test]
    fn spoken_lakh_range() {
        assert_eq!(spoken_indian(100_000), "1 lakh");
        assert_eq!(spoken_indian(2_500_000), "25 lakh");
        assert_eq!(spoken_indian(9_999_999), "99 lakh");
    }

    #[test]
    fn spoken_crore_voices_the_lakh_remainder_only_when_present() {
        assert_eq!(spoken_indian(10_000_000), "1 crore");
        assert_eq!(spoken_indian(20_500_000), "2 crore 5 lakh");
        assert_eq!(spoken_indian(158_400_000), "15 crore 84 lakh");
    }

    #[test]
    fn change_label_is_signed_at_one_decimal() {
        assert_eq!(format_change(2.27), "+2.3%");
        assert_eq!(format_change(12.0), "+12.0%");
        assert_eq!(format_change(-5.5), "-5.5%");
    }
}
