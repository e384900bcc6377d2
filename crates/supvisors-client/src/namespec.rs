//! Process specifications in the supervisor's `namespec` syntax.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const SEPARATOR: char = ':';
const WILDCARD: &str = "*";

/// A process specification: `name`, `application:process` or `application:*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespec {
    text: String,
}

impl Namespec {
    /// A bare process name.
    ///
    /// # Errors
    ///
    /// Returns [`NamespecParseError`] if `name` is empty or contains `:`.
    pub fn process(name: &str) -> Result<Self, NamespecParseError> {
        check_part(name)?;
        Ok(Self {
            text: name.to_owned(),
        })
    }

    /// One process of an application.
    ///
    /// # Errors
    ///
    /// Returns [`NamespecParseError`] if either part is empty or contains `:`.
    pub fn of(application: &str, process: &str) -> Result<Self, NamespecParseError> {
        check_part(application)?;
        check_part(process)?;
        Ok(Self {
            text: format!("{application}{SEPARATOR}{process}"),
        })
    }

    /// Every process of an application.
    ///
    /// # Errors
    ///
    /// Returns [`NamespecParseError`] if `application` is empty or contains `:`.
    pub fn application(application: &str) -> Result<Self, NamespecParseError> {
        check_part(application)?;
        Ok(Self {
            text: format!("{application}{SEPARATOR}{WILDCARD}"),
        })
    }

    /// Application part, when one is given.
    #[must_use]
    pub fn application_name(&self) -> Option<&str> {
        self.text
            .split_once(SEPARATOR)
            .map(|(application, _)| application)
    }

    /// Process part, unless the spec covers a whole application.
    #[must_use]
    pub fn process_name(&self) -> Option<&str> {
        match self.text.split_once(SEPARATOR) {
            Some((_, WILDCARD)) => None,
            Some((_, process)) => Some(process),
            None => Some(self.text.as_str()),
        }
    }

    /// Whether the spec covers every process of an application.
    #[must_use]
    pub fn is_application_wide(&self) -> bool {
        self.process_name().is_none()
    }

    /// Wire form of the spec.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Namespec {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Namespec {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.text)
    }
}

impl FromStr for Namespec {
    type Err = NamespecParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.split_once(SEPARATOR) {
            Some((application, WILDCARD)) => Self::application(application),
            Some((application, process)) => Self::of(application, process),
            None => Self::process(input),
        }
    }
}

/// A string is not a valid namespec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespecParseError {
    /// A name part is empty.
    #[error("namespec has an empty part")]
    EmptyPart,
    /// A name part contains the separator.
    #[error("namespec part '{0}' contains ':'")]
    NestedSeparator(String),
}

fn check_part(part: &str) -> Result<(), NamespecParseError> {
    if part.is_empty() {
        Err(NamespecParseError::EmptyPart)
    } else if part.contains(SEPARATOR) {
        Err(NamespecParseError::NestedSeparator(part.to_owned()))
    } else {
        Ok(())
    }
}
