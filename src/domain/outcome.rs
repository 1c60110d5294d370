/// Result of a use case whose only expected failure is absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T = ()> {
    Success(T),
    NotFound,
}

impl Outcome<()> {
    pub fn success() -> Self {
        Outcome::Success(())
    }
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Outcome::NotFound)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::NotFound => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::NotFound => Outcome::NotFound,
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Outcome::NotFound, Outcome::Success)
    }
}
