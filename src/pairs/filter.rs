use std::collections::BTreeSet;

/// Case-insensitive substring filter over knowledge source names.
///
/// A name is excluded when any token appears anywhere inside it, so
/// `"Infores:ChEBIProps-v2"` is caught by the token `chebiprops`.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    tokens: BTreeSet<String>,
}

impl ExclusionFilter {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|token| token.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn should_exclude(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.tokens.iter().any(|token| name.contains(token.as_str()))
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EXCLUSIONS;

    fn default_filter() -> ExclusionFilter {
        ExclusionFilter::new(DEFAULT_EXCLUSIONS)
    }

    #[test]
    fn matches_substrings_ignoring_case() {
        let filter = default_filter();
        assert!(filter.should_exclude("litcoin"));
        assert!(filter.should_exclude("LitCoin"));
        assert!(filter.should_exclude("infores:chebiprops_v2"));
        assert!(filter.should_exclude("my-YEAST-source"));
        assert!(filter.should_exclude("Old_Ubergraph"));
    }

    #[test]
    fn keeps_names_without_tokens() {
        let filter = default_filter();
        assert!(!filter.should_exclude("ctd"));
        assert!(!filter.should_exclude("hetio"));
        assert!(!filter.should_exclude("ubergraph"));
        assert!(!filter.should_exclude(""));
    }

    #[test]
    fn tokens_are_lowercased_on_construction() {
        let filter = ExclusionFilter::new(["HMDB"]);
        assert!(filter.should_exclude("hmdb-metabolites"));
        assert_eq!(filter.tokens().collect::<Vec<_>>(), vec!["hmdb"]);
    }

    #[test]
    fn empty_token_excludes_everything() {
        let filter = ExclusionFilter::new([""]);
        assert!(filter.should_exclude(""));
        assert!(filter.should_exclude("anything"));
    }

    #[test]
    fn empty_filter_excludes_nothing() {
        let filter = ExclusionFilter::default();
        assert!(!filter.should_exclude("litcoin"));
    }
}
