/// Format whole rupees with Indian digit grouping, e.g. `₹ 1,23,45,600`.
///
/// The last three digits form one group; everything before that is
/// grouped in pairs.
pub fn format_inr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let sign = if amount < 0 { "-" } else { "" };

    format!("₹ {}{}", sign, group_indian(&digits))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts_are_not_grouped() {
        assert_eq!(format_inr(0), "₹ 0");
        assert_eq!(format_inr(800), "₹ 800");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_inr(1_000), "₹ 1,000");
        assert_eq!(format_inr(10_000), "₹ 10,000");
        assert_eq!(format_inr(100_000), "₹ 1,00,000");
        assert_eq!(format_inr(12_345_600), "₹ 1,23,45,600");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_inr(-250_000), "₹ -2,50,000");
    }
}
