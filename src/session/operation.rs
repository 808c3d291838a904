use std::fmt;

use crate::polynomial::Polynomial;

/// A deferred calculator action waiting in the pending queue.
///
/// `Add` and `Subtract` capture their operands when they are enqueued, so
/// editing the session's operands afterwards does not change them.
#[derive(Clone, Debug, PartialEq)]
pub enum Operation {
    Add { lhs: Polynomial, rhs: Polynomial },
    Subtract { lhs: Polynomial, rhs: Polynomial },
    AddTerm { coefficient: f64, degree: usize },
    DeleteTerm { degree: usize },
    SortAscending,
    SortDescending,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "add",
            Operation::Subtract { .. } => "subtract",
            Operation::AddTerm { .. } => "add_term",
            Operation::DeleteTerm { .. } => "delete_term",
            Operation::SortAscending => "sort_asc",
            Operation::SortDescending => "sort_desc",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add { lhs, rhs } => write!(f, "Add ({lhs}, {rhs})"),
            Operation::Subtract { lhs, rhs } => write!(f, "Subtract ({lhs}, {rhs})"),
            Operation::AddTerm {
                coefficient,
                degree,
            } => write!(f, "Add term ({coefficient}, {degree})"),
            Operation::DeleteTerm { degree } => write!(f, "Delete term ({degree})"),
            Operation::SortAscending => f.write_str("Sort ascending"),
            Operation::SortDescending => f.write_str("Sort descending"),
        }
    }
}
