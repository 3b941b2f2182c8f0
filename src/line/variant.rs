use crate::line::circular::CircularLine;
use crate::line::definition::{Line, LineKind};
use crate::line::error::LineError;
use crate::line::linear::LinearLine;
use crate::line::registry::Registry;
use crate::line::traversal::Traversal;

/// Closed union over the line topologies, for callers that only learn
/// the kind of a line at runtime.
#[derive(Clone, Debug)]
pub enum LineVariant {
    Linear(LinearLine),
    Circular(CircularLine),
}

impl LineVariant {
    pub fn new(kind: LineKind, name: impl Into<String>) -> Self {
        match kind {
            LineKind::Linear => LineVariant::Linear(LinearLine::new(name)),
            LineKind::Circular => LineVariant::Circular(CircularLine::new(name)),
        }
    }

    fn as_line(&self) -> &dyn Line {
        match self {
            LineVariant::Linear(line) => line,
            LineVariant::Circular(line) => line,
        }
    }

    fn as_line_mut(&mut self) -> &mut dyn Line {
        match self {
            LineVariant::Linear(line) => line,
            LineVariant::Circular(line) => line,
        }
    }
}

impl From<LinearLine> for LineVariant {
    fn from(line: LinearLine) -> Self {
        LineVariant::Linear(line)
    }
}

impl From<CircularLine> for LineVariant {
    fn from(line: CircularLine) -> Self {
        LineVariant::Circular(line)
    }
}

impl Line for LineVariant {
    fn name(&self) -> &str {
        self.as_line().name()
    }

    fn kind(&self) -> LineKind {
        self.as_line().kind()
    }

    fn registry(&self) -> &Registry {
        self.as_line().registry()
    }

    fn registry_mut(&mut self) -> &mut Registry {
        self.as_line_mut().registry_mut()
    }

    fn add_station(&mut self, name: &str) -> Result<(), LineError> {
        self.as_line_mut().add_station(name)
    }

    fn remove_station(&mut self, name: &str) -> Result<(), LineError> {
        self.as_line_mut().remove_station(name)
    }

    fn iter_forward(&self, start: &str) -> Result<Traversal<'_>, LineError> {
        self.as_line().iter_forward(start)
    }

    fn iter_backward(&self, start: &str) -> Result<Traversal<'_>, LineError> {
        self.as_line().iter_backward(start)
    }

    fn stations(&self) -> Traversal<'_> {
        self.as_line().stations()
    }
}
