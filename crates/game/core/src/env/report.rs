//! Narrative sink for everything that happens during an encounter.

/// Receives narration. The engine only depends on these being called, never
/// on how (or whether) the text is rendered.
pub trait Reporter {
    fn report(&mut self, message: &str);

    /// Round banners and other headline events.
    fn major_report(&mut self, message: &str);
}

/// Writes narration into the tracing stream. Used for headless simulations.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, message: &str) {
        tracing::info!(target: "narration", "{message}");
    }

    fn major_report(&mut self, message: &str) {
        tracing::info!(target: "narration", major = true, "{message}");
    }
}

/// One captured narration line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    Minor(String),
    Major(String),
}

impl Report {
    pub fn text(&self) -> &str {
        match self {
            Self::Minor(text) | Self::Major(text) => text,
        }
    }
}

/// Keeps every report in order, for assertions and replays.
#[derive(Clone, Debug, Default)]
pub struct RecordingReporter {
    entries: Vec<Report>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Report] {
        &self.entries
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Report::text)
    }

    /// True if any report contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.lines().any(|line| line.contains(needle))
    }

    /// Number of reports that contain `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.lines().filter(|line| line.contains(needle)).count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, message: &str) {
        self.entries.push(Report::Minor(message.to_owned()));
    }

    fn major_report(&mut self, message: &str) {
        self.entries.push(Report::Major(message.to_owned()));
    }
}
