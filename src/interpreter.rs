/// The evaluator module reduces an AST to a number.
///
/// The evaluator walks the tree recursively, applies signs and arithmetic
/// operators, and reports division by zero. It holds no state between calls.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The tokenizer reads the raw text and produces, on demand, numbers,
/// operators, parentheses and finally an end-of-input sentinel. This is the
/// first stage of evaluation.
///
/// # Responsibilities
/// - Skips whitespace between tokens.
/// - Scans numeric literals greedily and validates them.
/// - Reports lexical errors with their source position.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the tokenizer one at a time and constructs an
/// AST honouring precedence and associativity through a three-level
/// recursive-descent grammar.
///
/// # Responsibilities
/// - Converts tokens into `Literal`, `Unary` and `Binary` nodes.
/// - Validates the grammar, reporting the first error with its position.
/// - Requires the whole input to form a single expression.
pub mod parser;
