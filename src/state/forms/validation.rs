//! Validation rules for the application record

use super::field::{FieldName, Question};
use super::record::ApplicationRecord;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

pub const MIN_NAME_LENGTH: usize = 4;
pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 70;

pub const NAME_TOO_SHORT: &str = "Name must be at least 4 characters long";
pub const BIRTH_DATE_MISSING: &str = "Please enter your birth date";
pub const AGE_OUT_OF_RANGE: &str = "Age must be between 18 and 70 years";
pub const CITY_MISSING: &str = "Please select a city";
pub const SALARY_MISSING: &str = "Please select expected salary range";
pub const QUESTION_UNANSWERED: &str = "Please answer this question";

/// Field-level validation messages. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: BTreeMap<FieldName, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Remove the entry for a field, returning whether one existed
    pub fn remove(&mut self, field: FieldName) -> bool {
        self.entries.remove(&field).is_some()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Failing fields in display order
    pub fn fields(&self) -> Vec<FieldName> {
        self.entries.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

/// Age in whole years on `today`.
///
/// One less than the year difference while today's month/day precedes the
/// birth month/day.
pub fn calculate_age(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Validate every field of the record independently
pub fn validate(record: &ApplicationRecord, today: NaiveDate) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if record.name.trim().chars().count() < MIN_NAME_LENGTH {
        errors.insert(FieldName::Name, NAME_TOO_SHORT);
    }

    match record.birth_date {
        None => errors.insert(FieldName::BirthDate, BIRTH_DATE_MISSING),
        Some(birth_date) => {
            let age = calculate_age(birth_date, today);
            if !(MIN_AGE..=MAX_AGE).contains(&age) {
                errors.insert(FieldName::BirthDate, AGE_OUT_OF_RANGE);
            }
        }
    }

    if record.city.is_none() {
        errors.insert(FieldName::City, CITY_MISSING);
    }

    if record.expected_salary.is_none() {
        errors.insert(FieldName::ExpectedSalary, SALARY_MISSING);
    }

    for question in Question::ALL {
        let field = question.field();
        if record.answer(field).is_none() {
            errors.insert(field, QUESTION_UNANSWERED);
        }
    }

    errors
}
