pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::{pow_op, powf_op};
pub use sub::sub_op;
