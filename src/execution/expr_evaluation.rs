/// Comparison applied by a selection between an attribute value and a
/// constant operand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Comparison {
    Equal,
    LessThan,
    GreaterThan,
}

impl Comparison {
    pub fn evaluate(self, value: i32, operand: i32) -> bool {
        match self {
            Comparison::Equal => value == operand,
            Comparison::LessThan => value < operand,
            Comparison::GreaterThan => value > operand,
        }
    }
}
