use std::str::FromStr;

/// Policy for the synthetic layer that list and map encodings insert between
/// the annotated group and its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterimLayerPolicy {
    /// Keep the interim layer in paths (`tags.list.element`), matching the
    /// physical column paths.
    #[default]
    Keep,
    /// Elide the interim layer from paths (`tags.element`).
    Collapse,
}

impl InterimLayerPolicy {
    pub fn from_collapse(collapse: bool) -> Self {
        if collapse { Self::Collapse } else { Self::Keep }
    }

    pub fn collapses(&self) -> bool {
        matches!(self, Self::Collapse)
    }
}

impl FromStr for InterimLayerPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "keep" => Ok(Self::Keep),
            "collapse" => Ok(Self::Collapse),
            other => Err(format!(
                "unknown interim layer policy '{other}' (expected keep | collapse)"
            )),
        }
    }
}
