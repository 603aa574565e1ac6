/// Resolution outcome for one named stat: either its current value or the
/// registry's failure text for that lookup. Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleOutcome {
    Value(i64),
    Error(String),
}

/// One resolved (name, outcome) pair.
///
/// A fresh sequence of these flows from the resolver into exactly one
/// formatter per request; nothing is shared across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatSample {
    pub name: String,
    pub outcome: SampleOutcome,
}

impl StatSample {
    /// A sample carrying a successfully read value.
    pub fn value(name: impl Into<String>, value: i64) -> Self {
        StatSample {
            name: name.into(),
            outcome: SampleOutcome::Value(value),
        }
    }

    /// A sample carrying the registry's failure message for this name.
    pub fn error(name: impl Into<String>, message: impl Into<String>) -> Self {
        StatSample {
            name: name.into(),
            outcome: SampleOutcome::Error(message.into()),
        }
    }
}
