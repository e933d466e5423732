//! Form field value objects

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Date format accepted by the birth date field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Failure to parse a field name or value from its literal form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFieldError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("unknown city `{0}`")]
    UnknownCity(String),
    #[error("unknown salary range `{0}`")]
    UnknownSalaryRange(String),
    #[error("expected `Yes` or `No`, got `{0}`")]
    NotYesNo(String),
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Named slot of the application record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    BirthDate,
    City,
    ExpectedSalary,
    Reason,
    Question1,
    Question2,
    Question3,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 8] = [
        FieldName::Name,
        FieldName::BirthDate,
        FieldName::City,
        FieldName::ExpectedSalary,
        FieldName::Reason,
        FieldName::Question1,
        FieldName::Question2,
        FieldName::Question3,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::BirthDate => "birth_date",
            Self::City => "city",
            Self::ExpectedSalary => "expected_salary",
            Self::Reason => "reason",
            Self::Question1 => "question1",
            Self::Question2 => "question2",
            Self::Question3 => "question3",
        }
    }

    /// Label shown on the field border
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name *",
            Self::BirthDate => "Date of Birth (YYYY-MM-DD) *",
            Self::City => "Preferred Work City *",
            Self::ExpectedSalary => "Expected Salary *",
            Self::Reason => "Why do you want to apply for this job?",
            Self::Question1 => "Do you have previous experience in this field?",
            Self::Question2 => "Are you willing to work overtime when needed?",
            Self::Question3 => "Can you start working within two weeks of acceptance?",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Reason)
    }

    /// The yes/no question this field holds, if any
    pub fn as_question(&self) -> Option<Question> {
        match self {
            Self::Question1 => Some(Question::First),
            Self::Question2 => Some(Question::Second),
            Self::Question3 => Some(Question::Third),
            _ => None,
        }
    }

    /// 1-based question number, if this is a yes/no question
    pub fn question_number(&self) -> Option<usize> {
        self.as_question()
            .and_then(|q| Question::ALL.iter().position(|other| *other == q))
            .map(|idx| idx + 1)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseFieldError::UnknownField(s.to_string()))
    }
}

/// Preferred work city
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Riyadh,
    Qassim,
    Jeddah,
    Makkah,
    Dammam,
    Hail,
}

impl City {
    pub const ALL: [City; 6] = [
        City::Riyadh,
        City::Qassim,
        City::Jeddah,
        City::Makkah,
        City::Dammam,
        City::Hail,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Riyadh => "Riyadh",
            Self::Qassim => "Qassim",
            Self::Jeddah => "Jeddah",
            Self::Makkah => "Makkah",
            Self::Dammam => "Dammam",
            Self::Hail => "Ha'il",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for City {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|city| city.label() == s)
            .ok_or_else(|| ParseFieldError::UnknownCity(s.to_string()))
    }
}

/// Expected monthly salary range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryRange {
    From3000To8000,
    From9000To13000,
    From15000,
}

impl SalaryRange {
    pub const ALL: [SalaryRange; 3] = [
        SalaryRange::From3000To8000,
        SalaryRange::From9000To13000,
        SalaryRange::From15000,
    ];

    /// Stored value of the range
    pub fn value(&self) -> &'static str {
        match self {
            Self::From3000To8000 => "3000-8000",
            Self::From9000To13000 => "9000-13000",
            Self::From15000 => "15000+",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::From3000To8000 => "3000 - 8000",
            Self::From9000To13000 => "9000 - 13000",
            Self::From15000 => "15000 and above",
        }
    }
}

impl fmt::Display for SalaryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for SalaryRange {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|range| range.value() == s)
            .ok_or_else(|| ParseFieldError::UnknownSalaryRange(s.to_string()))
    }
}

/// One of the three yes/no questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Question {
    First,
    Second,
    Third,
}

impl Question {
    pub const ALL: [Question; 3] = [Question::First, Question::Second, Question::Third];

    /// The record field holding this question's answer
    pub fn field(&self) -> FieldName {
        match self {
            Self::First => FieldName::Question1,
            Self::Second => FieldName::Question2,
            Self::Third => FieldName::Question3,
        }
    }
}

/// Answer to a yes/no question. Unanswered is `None` at the use site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for YesNo {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yes" => Ok(Self::Yes),
            "No" => Ok(Self::No),
            other => Err(ParseFieldError::NotYesNo(other.to_string())),
        }
    }
}

/// Parse a `YYYY-MM-DD` birth date
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseFieldError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| ParseFieldError::InvalidDate(input.to_string()))
}

/// A single edit to the application record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    BirthDate(Option<NaiveDate>),
    City(Option<City>),
    ExpectedSalary(Option<SalaryRange>),
    Reason(String),
    Question(Question, Option<YesNo>),
}

impl FieldUpdate {
    /// The field this update writes to
    pub fn field(&self) -> FieldName {
        match self {
            Self::Name(_) => FieldName::Name,
            Self::BirthDate(_) => FieldName::BirthDate,
            Self::City(_) => FieldName::City,
            Self::ExpectedSalary(_) => FieldName::ExpectedSalary,
            Self::Reason(_) => FieldName::Reason,
            Self::Question(question, _) => question.field(),
        }
    }

    /// Build an update from a field name and its literal value.
    ///
    /// An empty value unsets optional fields.
    pub fn parse(field: FieldName, value: &str) -> Result<Self, ParseFieldError> {
        let update = match field {
            FieldName::Name => Self::Name(value.to_string()),
            FieldName::Reason => Self::Reason(value.to_string()),
            FieldName::BirthDate => {
                Self::BirthDate(non_empty(value).map(parse_date).transpose()?)
            }
            FieldName::City => Self::City(non_empty(value).map(|v| v.parse()).transpose()?),
            FieldName::ExpectedSalary => {
                Self::ExpectedSalary(non_empty(value).map(|v| v.parse()).transpose()?)
            }
            FieldName::Question1 => Self::Question(Question::First, parse_answer(value)?),
            FieldName::Question2 => Self::Question(Question::Second, parse_answer(value)?),
            FieldName::Question3 => Self::Question(Question::Third, parse_answer(value)?),
        };
        Ok(update)
    }
}

fn parse_answer(value: &str) -> Result<Option<YesNo>, ParseFieldError> {
    non_empty(value).map(|v| v.parse()).transpose()
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
