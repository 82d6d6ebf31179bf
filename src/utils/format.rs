//! Formatting utilities for display values.

/// Uppercase initials of a name, e.g. "Sarah Chen" -> "SC".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Reveal delay for the `index`-th item of a staggered group.
pub fn stagger(base_ms: u32, index: usize, step_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(index.saturating_mul(step_ms))
}

/// Noun with a naive plural suffix, e.g. "1 post", "3 posts".
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah Chen"), "SC");
        assert_eq!(initials("  ada   lovelace byron "), "ALB");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0, 0, 100), 0);
        assert_eq!(stagger(300, 2, 50), 400);
        assert_eq!(stagger(1, usize::MAX, 100), u32::MAX);
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0, "post"), "0 posts");
        assert_eq!(count_label(1, "post"), "1 post");
        assert_eq!(count_label(6, "post"), "6 posts");
    }
}
