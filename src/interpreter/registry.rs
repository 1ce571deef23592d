use std::collections::HashMap;

use crate::interpreter::token::{BinaryOperator, Fixity, Function, Operator};

/// How operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a op b op c` groups as `(a op b) op c`.
    Left,
    /// `a op b op c` groups as `a op (b op c)`.
    Right,
}

/// Parsing metadata for one operator.
///
/// The evaluation rule is not stored here: it follows from the
/// [`Operator`] variant, see [`crate::interpreter::evaluator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorDefinition {
    /// The operator kind.
    pub operator:      Operator,
    /// Higher numbers bind tighter.
    pub precedence:    u8,
    /// Grouping of equal-precedence chains.
    pub associativity: Associativity,
    /// Short human-readable name, used in help text.
    pub name:          &'static str,
}

impl OperatorDefinition {
    /// The character that spells this operator.
    #[must_use]
    pub const fn symbol(&self) -> char {
        self.operator.symbol()
    }

    /// Where the operator sits relative to its operands.
    #[must_use]
    pub const fn fixity(&self) -> Fixity {
        self.operator.fixity()
    }

    /// Number of operands consumed during evaluation.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.operator.arity()
    }

    /// Returns `true` for prefix functions such as `S`.
    #[must_use]
    pub const fn is_prefix(&self) -> bool {
        matches!(self.fixity(), Fixity::Prefix)
    }

    /// Returns `true` if equal-precedence chains group to the left.
    #[must_use]
    pub const fn is_left_associative(&self) -> bool {
        matches!(self.associativity, Associativity::Left)
    }

    /// Help-text entry for the operator: its symbol followed by its name.
    ///
    /// # Example
    /// ```
    /// use shuntcalc::interpreter::registry::Registry;
    ///
    /// let registry = Registry::standard();
    /// assert_eq!(registry.lookup('S').unwrap().description(), "S (sin)");
    /// assert_eq!(registry.lookup('r').unwrap().description(), "r (root)");
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} ({})", self.symbol(), self.name)
    }

    /// Returns `true` if `self`, sitting on the operator stack, must be
    /// emitted before `incoming` is pushed.
    ///
    /// # Example
    /// ```
    /// use shuntcalc::interpreter::registry::Registry;
    ///
    /// let registry = Registry::standard();
    /// let mul = registry.lookup('*').unwrap();
    /// let add = registry.lookup('+').unwrap();
    /// let pow = registry.lookup('^').unwrap();
    ///
    /// assert!(mul.yields_to(add));
    /// assert!(!add.yields_to(mul));
    /// assert!(!pow.yields_to(pow)); // right-associative
    /// assert!(add.yields_to(add)); // left-associative
    /// ```
    #[must_use]
    pub const fn yields_to(&self, incoming: &Self) -> bool {
        self.precedence > incoming.precedence
        || (self.precedence == incoming.precedence && incoming.is_left_associative())
    }
}

/// Builds the standard operator table.
///
/// Each entry provides the operator, its precedence, associativity and
/// name. The macro produces `STANDARD_OPERATORS`, a static slice in
/// declaration order.
macro_rules! operator_table {
    (
        $(
            $op:expr => {
                precedence: $precedence:literal,
                associativity: $associativity:ident,
                name: $name:literal $(,)?
            }
        ),* $(,)?
    ) => {
        static STANDARD_OPERATORS: &[OperatorDefinition] = &[
            $(
                OperatorDefinition { operator:      $op,
                                     precedence:    $precedence,
                                     associativity: Associativity::$associativity,
                                     name:          $name, },
            )*
        ];
    };
}

operator_table! {
    Operator::Factorial                          => { precedence: 6, associativity: Left,  name: "factorial" },
    Operator::Function(Function::Sin)            => { precedence: 5, associativity: Right, name: "sin" },
    Operator::Function(Function::Sinh)           => { precedence: 5, associativity: Right, name: "sinh" },
    Operator::Function(Function::Cos)            => { precedence: 5, associativity: Right, name: "cos" },
    Operator::Function(Function::Cosh)           => { precedence: 5, associativity: Right, name: "cosh" },
    Operator::Function(Function::Tan)            => { precedence: 5, associativity: Right, name: "tan" },
    Operator::Function(Function::Tanh)           => { precedence: 5, associativity: Right, name: "tanh" },
    Operator::Function(Function::Ln)             => { precedence: 5, associativity: Right, name: "ln" },
    Operator::Function(Function::Log10)          => { precedence: 5, associativity: Right, name: "log10" },
    Operator::Binary(BinaryOperator::Power)      => { precedence: 4, associativity: Right, name: "power" },
    Operator::Binary(BinaryOperator::Root)       => { precedence: 4, associativity: Left,  name: "root" },
    Operator::Binary(BinaryOperator::Multiply)   => { precedence: 3, associativity: Left,  name: "multiply" },
    Operator::Binary(BinaryOperator::Divide)     => { precedence: 3, associativity: Left,  name: "divide" },
    Operator::Binary(BinaryOperator::Add)        => { precedence: 2, associativity: Left,  name: "add" },
    Operator::Binary(BinaryOperator::Subtract)   => { precedence: 2, associativity: Left,  name: "subtract" },
}

/// The full standard operator table, in declaration order.
///
/// Useful as a starting point for [`Registry::from_definitions`].
#[must_use]
pub fn standard_definitions() -> &'static [OperatorDefinition] {
    STANDARD_OPERATORS
}

/// Immutable lookup table from operator symbols to their definitions.
///
/// A registry is built once, before any expression is processed, and then
/// passed by reference to the tokenizer, the converter and the evaluator.
/// It is never mutated afterwards, so a single instance can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct Registry {
    definitions: Vec<OperatorDefinition>,
    by_symbol:   HashMap<char, usize>,
}

impl Registry {
    /// Creates a registry holding every standard operator.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_definitions(STANDARD_OPERATORS.iter().copied())
    }

    /// Creates a registry from arbitrary definitions.
    ///
    /// A later definition for the same symbol replaces the earlier one in
    /// place.
    ///
    /// # Example
    /// ```
    /// use shuntcalc::interpreter::registry::{Registry, standard_definitions};
    ///
    /// let no_trig = Registry::from_definitions(standard_definitions().iter()
    ///                                                                .copied()
    ///                                                                .filter(|d| d.name != "sin"));
    /// assert!(no_trig.lookup('S').is_none());
    /// assert!(no_trig.lookup('+').is_some());
    /// ```
    pub fn from_definitions<I>(definitions: I) -> Self
        where I: IntoIterator<Item = OperatorDefinition>
    {
        let mut registry = Self { definitions: Vec::new(),
                                  by_symbol:   HashMap::new(), };

        for definition in definitions {
            let symbol = definition.symbol();
            if let Some(&index) = registry.by_symbol.get(&symbol) {
                registry.definitions[index] = definition;
            } else {
                registry.by_symbol.insert(symbol, registry.definitions.len());
                registry.definitions.push(definition);
            }
        }

        registry
    }

    /// Finds the definition spelled by `symbol`.
    ///
    /// `'-'` resolves to binary subtraction.
    #[must_use]
    pub fn lookup(&self, symbol: char) -> Option<&OperatorDefinition> {
        self.by_symbol.get(&symbol).map(|&index| &self.definitions[index])
    }

    /// Finds the definition of an operator kind.
    #[must_use]
    pub fn definition(&self, operator: Operator) -> Option<&OperatorDefinition> {
        self.lookup(operator.symbol())
            .filter(|definition| definition.operator == operator)
    }

    /// Iterates over all definitions in table order.
    pub fn iter(&self) -> impl Iterator<Item = &OperatorDefinition> {
        self.definitions.iter()
    }

    /// Number of distinct operator symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if the registry defines no operators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
