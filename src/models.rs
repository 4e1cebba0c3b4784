//! Defines the expense domain types and the parsing of client input into them.

use serde::{Deserialize, Serialize};

use crate::{DatabaseID, Error};

/// An expense record: an identified monetary event with a title, a free-text
/// note, and an ordered list of tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID assigned by the store when the expense was created.
    pub id: DatabaseID,
    /// A short description of the expense.
    pub title: String,
    /// The monetary amount. No currency is attached.
    pub amount: f64,
    /// Free text attached to the expense. May be empty.
    pub note: String,
    /// Free-form string labels in insertion order. Duplicates are allowed.
    pub tags: Vec<String>,
}

/// The client-supplied fields of an expense that has not been assigned an ID
/// yet.
///
/// Fields missing from the payload take their zero value, so an absent field
/// and an explicitly empty one are indistinguishable. Unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewExpense {
    /// A short description of the expense.
    #[serde(default)]
    pub title: String,
    /// The monetary amount.
    #[serde(default)]
    pub amount: f64,
    /// Free text attached to the expense.
    #[serde(default)]
    pub note: String,
    /// Free-form string labels in insertion order.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Parse a request body as an expense payload.
///
/// # Errors
/// Returns an [Error::InvalidExpenseBody] if the body is not well-formed JSON
/// or a field has the wrong shape.
pub fn parse_expense_body(body: &[u8]) -> Result<NewExpense, Error> {
    serde_json::from_slice(body).map_err(|error| Error::InvalidExpenseBody(error.to_string()))
}

/// Parse a URL path segment as an expense ID.
///
/// # Errors
/// Returns an [Error::InvalidExpenseId] unless the segment is a non-negative
/// integer.
pub fn parse_expense_id(path_segment: &str) -> Result<DatabaseID, Error> {
    match path_segment.parse::<DatabaseID>() {
        Ok(id) if id >= 0 => Ok(id),
        _ => Err(Error::InvalidExpenseId(path_segment.to_owned())),
    }
}


#[cfg(test)]
mod parse_expense_id_tests {
    use crate::Error;

    use super::parse_expense_id;

    #[test]
    fn parses_non_negative_integers() {
        assert_eq!(parse_expense_id("0"), Ok(0));
        assert_eq!(parse_expense_id("42"), Ok(42));
    }

    #[test]
    fn fails_on_empty_segment() {
        assert_eq!(
            parse_expense_id(""),
            Err(Error::InvalidExpenseId("".to_owned()))
        );
    }

    #[test]
    fn fails_on_non_numeric_segment() {
        assert_eq!(
            parse_expense_id("abc"),
            Err(Error::InvalidExpenseId("abc".to_owned()))
        );
        assert_eq!(
            parse_expense_id("1.5"),
            Err(Error::InvalidExpenseId("1.5".to_owned()))
        );
    }

    #[test]
    fn fails_on_negative_integer() {
        assert_eq!(
            parse_expense_id("-1"),
            Err(Error::InvalidExpenseId("-1".to_owned()))
        );
    }
}
