//! The application record edited by the form

use super::field::{City, FieldName, FieldUpdate, Question, SalaryRange, YesNo};
use chrono::NaiveDate;

/// Values entered by the applicant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationRecord {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub city: Option<City>,
    pub expected_salary: Option<SalaryRange>,
    pub reason: String,
    pub question1: Option<YesNo>,
    pub question2: Option<YesNo>,
    pub question3: Option<YesNo>,
}

impl ApplicationRecord {
    /// Write a single field
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(name) => self.name = name,
            FieldUpdate::BirthDate(date) => self.birth_date = date,
            FieldUpdate::City(city) => self.city = city,
            FieldUpdate::ExpectedSalary(range) => self.expected_salary = range,
            FieldUpdate::Reason(reason) => self.reason = reason,
            FieldUpdate::Question(question, answer) => *self.answer_mut(question) = answer,
        }
    }

    /// Answer to a yes/no question field
    pub fn answer(&self, field: FieldName) -> Option<YesNo> {
        match field.as_question()? {
            Question::First => self.question1,
            Question::Second => self.question2,
            Question::Third => self.question3,
        }
    }

    fn answer_mut(&mut self, question: Question) -> &mut Option<YesNo> {
        match question {
            Question::First => &mut self.question1,
            Question::Second => &mut self.question2,
            Question::Third => &mut self.question3,
        }
    }

    /// Whether every field is at its empty default
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let record = ApplicationRecord::default();
        assert!(record.is_empty());
        assert!(record.name.is_empty());
        assert!(record.birth_date.is_none());
        assert!(record.city.is_none());
        assert!(record.expected_salary.is_none());
        assert!(record.reason.is_empty());
        for q in Question::ALL {
            assert!(record.answer(q.field()).is_none());
        }
    }

    #[test]
    fn test_apply_writes_only_target_field() {
        let mut record = ApplicationRecord::default();
        record.apply(FieldUpdate::City(Some(City::Jeddah)));
        assert_eq!(record.city, Some(City::Jeddah));
        assert!(record.name.is_empty());
        assert!(!record.is_empty());
    }

    #[test]
    fn test_apply_question() {
        let mut record = ApplicationRecord::default();
        record.apply(FieldUpdate::Question(Question::Second, Some(YesNo::No)));
        assert_eq!(record.question2, Some(YesNo::No));
        assert!(record.question1.is_none());
        assert!(record.question3.is_none());
    }

    #[test]
    fn test_answer_reads_back_applied_question() {
        let mut record = ApplicationRecord::default();
        record.apply(FieldUpdate::Question(Question::Third, Some(YesNo::Yes)));
        assert_eq!(record.answer(FieldName::Question3), Some(YesNo::Yes));
        assert_eq!(record.answer(FieldName::Name), None);
    }

    #[test]
    fn test_unset_optional_field() {
        let mut record = ApplicationRecord {
            expected_salary: Some(SalaryRange::From15000),
            ..Default::default()
        };
        record.apply(FieldUpdate::ExpectedSalary(None));
        assert!(record.is_empty());
    }
}
