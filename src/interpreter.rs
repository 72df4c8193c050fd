/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the tree bottom-up, applying each operator to the
/// values of its two operands with checked 64-bit integer arithmetic.
///
/// # Responsibilities
/// - Evaluates literals and binary operations.
/// - Reports division by zero and integer overflow with the operator's
///   position.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// integers, the four arithmetic operators and parentheses. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their byte offset.
/// - Skips whitespace between tokens.
/// - Reports invalid characters and integer literals that overflow.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser validates each token against its predecessor and combines
/// operands and operators by precedence using an explicit stack of frames,
/// one per open parenthesis.
///
/// # Responsibilities
/// - Converts tokens into a single rooted `Expr` tree.
/// - Enforces operator precedence and left associativity.
/// - Reports adjacency violations and unbalanced parentheses with positions.
pub mod parser;
