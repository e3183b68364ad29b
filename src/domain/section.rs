// SPDX-License-Identifier: MPL-2.0
//! Section enumeration for the tab switcher.

/// Content sections the user can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Projects,
    Lab,
    Bio,
}

impl Section {
    /// All sections in tab order.
    pub const ALL: [Section; 3] = [Section::Projects, Section::Lab, Section::Bio];

    /// The i18n key for the tab label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Projects => "tab-projects",
            Section::Lab => "tab-lab",
            Section::Bio => "tab-bio",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_section_is_projects() {
        assert_eq!(Section::default(), Section::Projects);
    }

    #[test]
    fn label_keys_are_distinct() {
        let keys: Vec<_> = Section::ALL.iter().map(|s| s.label_key()).collect();
        assert_eq!(keys.len(), 3);
        assert!(keys.windows(2).all(|w| w[0] != w[1]));
    }
}
