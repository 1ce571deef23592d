/// The registry module holds the operator table.
///
/// Every symbol the calculator understands is described here once: its
/// precedence, associativity and fixity. The tokenizer, the converter and
/// the evaluator all read from the same immutable [`registry::Registry`].
pub mod registry;
/// The token module defines the values that flow between stages.
///
/// # Responsibilities
/// - Declares [`token::Token`] and the operator kinds it carries.
/// - Maps every operator to its source symbol.
/// - Renders token sequences back into source notation.
pub mod token;
/// The lexer module cuts raw text into lexemes.
///
/// The lexer is generated by `logos` and is context free: it does not
/// decide whether a minus sign is unary or binary.
pub mod lexer;
/// The tokenizer module turns lexemes into tokens.
///
/// # Responsibilities
/// - Resolves operator symbols through the registry.
/// - Distinguishes unary from binary minus and folds unary minus into the
///   following number.
/// - Reports lexical errors with their position in the input.
pub mod tokenizer;
/// The parser module reorders tokens into postfix notation.
///
/// It implements the shunting-yard algorithm driven by the registry's
/// precedence and associativity data.
pub mod parser;
/// The evaluator module computes the value of postfix tokens.
///
/// # Responsibilities
/// - Runs a value stack over RPN tokens.
/// - Applies every operator's numeric rule.
/// - Reports malformed RPN and numeric domain failures.
pub mod evaluator;
/// The calculator module ties the pipeline together.
///
/// [`calculator::Calculator`] owns a registry and runs tokenize, convert and
/// evaluate for each expression it is given.
pub mod calculator;
