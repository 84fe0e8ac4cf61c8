/// Half-open byte range `[start, end)` into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Outcome of pulling the inline style and main script out of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub css: Option<String>,
    pub js: Option<String>,
    pub html: String,
}

impl Extraction {
    pub fn style_replaced(&self) -> bool {
        self.css.is_some()
    }

    pub fn script_replaced(&self) -> bool {
        self.js.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cleanup {
    pub html: String,
    /// Characters dropped between the end of the link line and `</head>`.
    pub removed: usize,
}

/// Outcome of the tolerant head cleanup plus main-script replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct Finish {
    pub html: String,
    /// `None` when the stylesheet link or `</head>` could not be found.
    pub removed: Option<usize>,
    pub script_replaced: bool,
}

/// Assets recovered from a half-transformed page, both trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct Fix {
    pub css: String,
    pub js: Option<String>,
    pub html: String,
}
