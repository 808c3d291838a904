//! Calculator session: two operands, a result, an undo history and a queue of
//! pending operations.

mod operation;

pub use operation::Operation;

use log::debug;

use crate::error::Result;
use crate::notation::Notation;
use crate::polynomial::Polynomial;
use crate::structures::{Queue, Stack};

#[derive(Debug)]
pub struct Calculator {
    lhs: Polynomial,
    rhs: Polynomial,
    result: Polynomial,
    history: Stack<Polynomial>,
    pending: Queue<Operation>,
    notation: Notation,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator::with_notation(Notation::default())
    }

    /// The history starts with a single zero snapshot.
    pub fn with_notation(notation: Notation) -> Self {
        let mut history = Stack::new();
        history.push(Polynomial::zero());
        Calculator {
            lhs: Polynomial::zero(),
            rhs: Polynomial::zero(),
            result: Polynomial::zero(),
            history,
            pending: Queue::new(),
            notation,
        }
    }

    pub fn notation(&self) -> &Notation {
        &self.notation
    }

    pub fn lhs(&self) -> &Polynomial {
        &self.lhs
    }

    pub fn rhs(&self) -> &Polynomial {
        &self.rhs
    }

    pub fn result(&self) -> &Polynomial {
        &self.result
    }

    pub fn result_text(&self) -> String {
        self.result.to_text_with(&self.notation)
    }

    /// Parses both operands before replacing either, so a failure leaves the
    /// session unchanged. `rhs` of `None` keeps the current right operand.
    pub fn set_operands(&mut self, lhs: &str, rhs: Option<&str>) -> Result<()> {
        let lhs = Polynomial::parse_with(lhs, &self.notation)?;
        let rhs = rhs
            .map(|text| Polynomial::parse_with(text, &self.notation))
            .transpose()?;
        self.lhs = lhs;
        if let Some(rhs) = rhs {
            self.rhs = rhs;
        }
        Ok(())
    }

    pub fn load_result(&mut self, text: &str) -> Result<()> {
        self.result = Polynomial::parse_with(text, &self.notation)?;
        Ok(())
    }

    pub fn add(&mut self) -> &Polynomial {
        self.result = self.lhs.add(&self.rhs);
        debug!("add: {} + {} = {}", self.lhs, self.rhs, self.result);
        self.record();
        &self.result
    }

    pub fn subtract(&mut self) -> &Polynomial {
        self.result = self.lhs.subtract(&self.rhs);
        debug!("subtract: {} - {} = {}", self.lhs, self.rhs, self.result);
        self.record();
        &self.result
    }

    pub fn add_term(&mut self, coefficient: f64, degree: usize) -> &Polynomial {
        self.result.insert_or_merge(coefficient, degree);
        self.record();
        &self.result
    }

    /// Nothing is recorded when no term of `degree` exists.
    pub fn delete_term(&mut self, degree: usize) -> bool {
        let deleted = self.result.delete_term(degree);
        if deleted {
            self.record();
        } else {
            debug!("delete_term: no term of degree {degree} in {}", self.result);
        }
        deleted
    }

    pub fn search_term(&self, degree: usize) -> Option<f64> {
        self.result.search_term(degree)
    }

    pub fn sort_terms(&mut self, ascending: bool) -> &Polynomial {
        self.result.sort_terms(ascending);
        self.record();
        &self.result
    }

    /// Drops the current snapshot and restores the one below it, or zero once
    /// the history runs out.
    pub fn undo(&mut self) {
        if self.history.pop().is_none() {
            debug!("undo: history is empty");
            return;
        }
        self.result = match self.history.peek() {
            Some(previous) => previous.clone(),
            None => Polynomial::zero(),
        };
        debug!("undo: result restored to {}", self.result);
    }

    pub fn clear_history(&mut self) {
        debug!("clearing {} history snapshot(s)", self.history.len());
        self.history.clear();
    }

    /// Rendered snapshots, most recent first.
    pub fn history(&self) -> Vec<String> {
        self.history
            .iter()
            .map(|p| p.to_text_with(&self.notation))
            .collect()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn enqueue(&mut self, operation: Operation) {
        debug!("enqueue {}", operation.name());
        self.pending.enqueue(operation);
    }

    pub fn enqueue_add(&mut self) {
        self.enqueue(Operation::Add {
            lhs: self.lhs.clone(),
            rhs: self.rhs.clone(),
        });
    }

    pub fn enqueue_subtract(&mut self) {
        self.enqueue(Operation::Subtract {
            lhs: self.lhs.clone(),
            rhs: self.rhs.clone(),
        });
    }

    /// Pending operations, front of the queue first.
    pub fn pending(&self) -> Vec<String> {
        self.pending.iter().map(|op| op.to_string()).collect()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }

    /// Applies the operation at the front of the queue. Returns `false` when
    /// the queue is empty.
    pub fn process_next(&mut self) -> bool {
        let Some(operation) = self.pending.dequeue() else {
            return false;
        };
        debug!("process {}", operation.name());
        match operation {
            Operation::Add { lhs, rhs } => self.result = lhs.add(&rhs),
            Operation::Subtract { lhs, rhs } => self.result = lhs.subtract(&rhs),
            Operation::AddTerm {
                coefficient,
                degree,
            } => self.result.insert_or_merge(coefficient, degree),
            Operation::DeleteTerm { degree } => {
                self.result.delete_term(degree);
            }
            Operation::SortAscending => self.result.sort_terms(true),
            Operation::SortDescending => self.result.sort_terms(false),
        }
        self.record();
        true
    }

    pub fn process_all(&mut self) -> usize {
        let mut processed = 0;
        while self.process_next() {
            processed += 1;
        }
        processed
    }

    fn record(&mut self) {
        self.history.push(self.result.clone());
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new()
    }
}
