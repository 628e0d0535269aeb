//! Ordered CSS declarations.
//!
//! A [`StyleSet`] keeps every declaration in the order it was added, even when
//! several share a property name. The consuming HTML viewer applies the last
//! one it understands, which lets a composer emit a widely supported value
//! followed by a more precise override (`#RRGGBB` then `rgba(...)`,
//! `right` then `end`).

use std::fmt;

/// A single `property:value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDeclaration {
    /// CSS property name, e.g. `font-weight`.
    pub property: &'static str,
    /// CSS value, e.g. `bold`.
    pub value: String,
}

impl StyleDeclaration {
    /// Create a declaration.
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

impl fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.property, self.value)
    }
}

/// An append-only, insertion-ordered list of declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSet {
    declarations: Vec<StyleDeclaration>,
}

impl StyleSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration after all existing ones.
    pub fn push(&mut self, property: &'static str, value: impl Into<String>) {
        self.declarations.push(StyleDeclaration::new(property, value));
    }

    /// Number of declarations, counting repeated property names.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Check whether no declaration has been added.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Iterate over declarations in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, StyleDeclaration> {
        self.declarations.iter()
    }

    /// Every value declared for `property`, in insertion order.
    pub fn values_of<'a>(&'a self, property: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.declarations
            .iter()
            .filter(move |decl| decl.property == property)
            .map(|decl| decl.value.as_str())
    }

    /// The value a viewer applies for `property`: the last one declared.
    pub fn effective_value(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|decl| decl.property == property)
            .map(|decl| decl.value.as_str())
    }

    /// Render as the content of a `style` attribute.
    ///
    /// Declarations are joined with `;` and no trailing separator; an empty
    /// set renders as an empty string.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, decl) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{decl}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a StyleSet {
    type Item = &'a StyleDeclaration;
    type IntoIter = std::slice::Iter<'a, StyleDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_renders_empty_string() {
        assert_eq!(StyleSet::new().to_css(), "");
    }

    #[test]
    fn declarations_join_without_trailing_separator() {
        let mut set = StyleSet::new();
        set.push("font-weight", "bold");
        set.push("text-align", "center");
        assert_eq!(set.to_css(), "font-weight:bold;text-align:center");
    }

    #[test]
    fn repeated_properties_are_kept_in_order() {
        let mut set = StyleSet::new();
        set.push("text-align", "right");
        set.push("text-align", "end");

        assert_eq!(set.len(), 2);
        assert_eq!(set.values_of("text-align").collect::<Vec<_>>(), ["right", "end"]);
        assert_eq!(set.effective_value("text-align"), Some("end"));
        assert_eq!(set.effective_value("color"), None);
        assert_eq!(set.to_css(), "text-align:right;text-align:end");
    }
}
