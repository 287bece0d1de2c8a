/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the tree the parser builds
///
/// Submodules:
/// - ast: The `Node` trait, the statement/expression sum types and `Program`
/// - expressions: Definitions for the concrete expression nodes
/// - statements: Definitions for the concrete statement nodes
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
