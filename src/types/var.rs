//! Var struct and variable arena API
use std::fmt;

/// Index of a variable in the arena held by
/// [`AssignStack`](`crate::assign::AssignStack`). Literals refer to their
/// variable through this index, never through a shared reference.
pub type VarId = usize;

/// Object representing a variable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Var {
    /// display name, taken from the DIMACS index or the builder token
    pub(crate) name: String,
    /// tri-state assignment
    pub(crate) assign: Option<bool>,
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Var {
    pub fn new<S: AsRef<str>>(name: S) -> Var {
        Var {
            name: name.as_ref().to_string(),
            assign: None,
        }
    }
    /// return a new vector of $n$ `Var`s named by their 1-based indices.
    pub fn new_vars(n: usize) -> Vec<Var> {
        (1..=n).map(|i| Var::new(i.to_string())).collect::<Vec<_>>()
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn value(&self) -> Option<bool> {
        self.assign
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vars() {
        let vars = Var::new_vars(3);
        assert_eq!(vars.len(), 3);
        assert_eq!(vars[0].name(), "1");
        assert_eq!(vars[2].name(), "3");
        assert!(vars.iter().all(|v| v.value().is_none()));
    }
}
