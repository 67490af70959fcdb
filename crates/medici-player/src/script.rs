//! Script model - scenarios and the lines they are made of.
//!
//! A script is a static table: the player never mutates it, and nothing
//! validates it at runtime. The pairing rule (a [`LineKind::PromptMarker`]
//! is always immediately followed by a [`LineKind::UserInput`]) is a
//! structural precondition that the builtin scenarios honour.

/// What kind of terminal output a [`Line`] represents.
///
/// The kind decides how the line is revealed and how long the player
/// waits afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Dimmed status output (`▸ 847 documents indexed`).
    System,
    /// The shell prompt. Shown at once, then its paired input is typed.
    PromptMarker,
    /// Text the simulated user types after a prompt.
    UserInput,
    /// Plain response text.
    Response,
    /// A response rendered with success emphasis.
    Highlight,
    /// A citation pointing at the document an answer came from.
    SourceCitation,
    /// An empty spacer row.
    Gap,
}

/// One scripted unit of terminal output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// How the line is revealed.
    pub kind: LineKind,
    /// Display text. May contain `**strong**` and `` `code` `` spans.
    pub text: String,
    /// Leave a blinking caret after this line once it is shown.
    pub trailing_caret: bool,
}

impl Line {
    /// Create a line of the given kind.
    #[must_use]
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            trailing_caret: false,
        }
    }

    /// A dimmed status line.
    #[must_use]
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(LineKind::System, text)
    }

    /// A prompt marker with the given prompt text.
    #[must_use]
    pub fn prompt(text: impl Into<String>) -> Self {
        Self::new(LineKind::PromptMarker, text)
    }

    /// Text typed after a prompt.
    #[must_use]
    pub fn user_input(text: impl Into<String>) -> Self {
        Self::new(LineKind::UserInput, text)
    }

    /// A plain response line.
    #[must_use]
    pub fn response(text: impl Into<String>) -> Self {
        Self::new(LineKind::Response, text)
    }

    /// An emphasised response line.
    #[must_use]
    pub fn highlight(text: impl Into<String>) -> Self {
        Self::new(LineKind::Highlight, text)
    }

    /// A source citation line.
    #[must_use]
    pub fn source(text: impl Into<String>) -> Self {
        Self::new(LineKind::SourceCitation, text)
    }

    /// An empty spacer row.
    #[must_use]
    pub fn gap() -> Self {
        Self::new(LineKind::Gap, String::new())
    }

    /// Mark this line as the one that keeps a blinking caret.
    #[must_use]
    pub fn with_caret(mut self) -> Self {
        self.trailing_caret = true;
        self
    }
}

/// One complete scripted demo sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Short identifier used on the command line.
    pub name: String,
    /// Caption shown on the scenario's tab.
    pub label: String,
    /// Lines in playback order.
    pub lines: Vec<Line>,
}

impl Scenario {
    /// Create an empty scenario.
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            lines: Vec::new(),
        }
    }

    /// Append a line.
    #[must_use]
    pub fn line(mut self, line: Line) -> Self {
        self.lines.push(line);
        self
    }

    /// Append a prompt marker followed by the text typed after it.
    #[must_use]
    pub fn command(self, prompt: &str, input: impl Into<String>) -> Self {
        self.line(Line::prompt(prompt)).line(Line::user_input(input))
    }

    /// Number of elements a full play-through leaves on the output surface.
    ///
    /// A prompt marker that is directly followed by user input collapses
    /// with it into one element; a user input line that is not preceded by
    /// a prompt is never rendered.
    #[must_use]
    pub fn render_units(&self) -> usize {
        let mut units: usize = 0;
        let mut i: usize = 0;
        while let Some(line) = self.lines.get(i) {
            i = i.saturating_add(1);
            match line.kind {
                LineKind::UserInput => {},
                LineKind::PromptMarker => {
                    units = units.saturating_add(1);
                    if self.lines.get(i).is_some_and(|l| l.kind == LineKind::UserInput) {
                        i = i.saturating_add(1);
                    }
                },
                _ => units = units.saturating_add(1),
            }
        }
        units
    }

    /// Indices of prompt markers that are not followed by user input.
    ///
    /// Empty for a well-formed script. The player copes with violations by
    /// falling back to a short delay; this exists for tests and tooling.
    #[must_use]
    pub fn unpaired_prompts(&self) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(i, line)| {
                line.kind == LineKind::PromptMarker
                    && self
                        .lines
                        .get(i.saturating_add(1))
                        .is_none_or(|next| next.kind != LineKind::UserInput)
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Total number of characters typed during a play-through.
    #[must_use]
    pub fn typed_chars(&self) -> usize {
        let mut total: usize = 0;
        for pair in self.lines.windows(2) {
            if pair[0].kind == LineKind::PromptMarker && pair[1].kind == LineKind::UserInput {
                total = total.saturating_add(pair[1].text.chars().count());
            }
        }
        total
    }
}
