/// Compute effective limit with precedence: local arg -> configured default.
#[must_use]
pub fn effective_limit(local: Option<u32>, fallback: u32) -> usize {
    local.unwrap_or(fallback) as usize
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn local_takes_precedence() {
        assert_eq!(effective_limit(Some(5), 50), 5);
    }

    #[test]
    fn fallback_used_when_unset() {
        assert_eq!(effective_limit(None, 50), 50);
    }
}
