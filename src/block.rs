/// Style of one inline run: the closed bold × italic × superscript lattice.
///
/// No other combinations are representable (no underline, no strikethrough).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Normal,
    Bold,
    Italic,
    BoldItalic,
    Superscript,
    BoldSuperscript,
    ItalicSuperscript,
    BoldItalicSuperscript,
}

impl Style {
    /// Style for the current emphasis toggle state.
    pub fn from_toggles(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => Style::Normal,
            (true, false) => Style::Bold,
            (false, true) => Style::Italic,
            (true, true) => Style::BoldItalic,
        }
    }

    pub fn bold(self) -> bool {
        matches!(
            self,
            Style::Bold | Style::BoldItalic | Style::BoldSuperscript | Style::BoldItalicSuperscript
        )
    }

    pub fn italic(self) -> bool {
        matches!(
            self,
            Style::Italic
                | Style::BoldItalic
                | Style::ItalicSuperscript
                | Style::BoldItalicSuperscript
        )
    }

    pub fn superscript(self) -> bool {
        matches!(
            self,
            Style::Superscript
                | Style::BoldSuperscript
                | Style::ItalicSuperscript
                | Style::BoldItalicSuperscript
        )
    }

    /// The superscript-combined variant of this style.
    pub fn with_superscript(self) -> Self {
        match self {
            Style::Normal | Style::Superscript => Style::Superscript,
            Style::Bold | Style::BoldSuperscript => Style::BoldSuperscript,
            Style::Italic | Style::ItalicSuperscript => Style::ItalicSuperscript,
            Style::BoldItalic | Style::BoldItalicSuperscript => Style::BoldItalicSuperscript,
        }
    }
}

/// A maximal span of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub style: Style,
}

impl Run {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Whether a list item carries a bullet or a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Number,
}

/// Block-level elements assembled from the source lines.
///
/// Blocks appear in source line order. List items are flat: `tier` selects a
/// visual nesting style, there is no parent/child structure, and consecutive
/// items of one kind form a visual list purely by adjacency.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading {
        level: u8,
        runs: Vec<Run>,
    },
    ListItem {
        kind: ListKind,
        /// Nesting tier, clamped to 0..=2.
        tier: u8,
        /// Source numeral label (for example `1.2.`), kept verbatim.
        number_label: Option<String>,
        runs: Vec<Run>,
    },
    Paragraph {
        indent: u8,
        runs: Vec<Run>,
    },
}
