//! Path operators, compiled expressions, and the live position stack

pub mod compiler;
pub mod expression;
pub mod operator;
pub mod position;

pub use compiler::PathCompiler;
pub use expression::PathExpression;
pub use operator::PathOperator;
pub use position::{CurrentPosition, FrameKind, PositionFrame};
