mod category;
pub mod locale_tag;
mod operand;
mod operands;

pub use category::{PluralCategory, RULE_KEY_PREFIX, RuleType, UnknownCategory};
pub use operand::{ModuloVar, Operand, OperandSet, Var};
pub use operands::Operands;
