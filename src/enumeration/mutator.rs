use crate::enumeration::{MutableEquations, encode};
use crate::error::IndexOutOfRange;
use crate::model::{LinkOperator, LinkOperators};
use log::trace;

/// Link operator selected by one digit of a variant bit pattern.
pub fn bit_to_operator(bit: bool) -> LinkOperator {
    if bit { LinkOperator::Or } else { LinkOperator::And }
}

/// Digit of a variant bit pattern that selects `operator` (`None` for operators
/// that cannot be selected).
pub fn operator_to_bit(operator: LinkOperator) -> Option<bool> {
    match operator {
        LinkOperator::And => Some(false),
        LinkOperator::Or => Some(true),
        LinkOperator::None => None,
    }
}

/// Mutate `model` in place into the variant identified by `index`.
///
/// Only equations whose current operator differs from the target operator are flipped,
/// hence applying the same index twice does nothing the second time. Returns the number
/// of flipped equations.
pub fn apply_variant<M: LinkOperators>(
    model: &mut M,
    index: u64,
    mutable: &MutableEquations,
) -> Result<usize, IndexOutOfRange> {
    let signed = i64::try_from(index).map_err(|_| IndexOutOfRange::ExceedsDigits {
        index: i64::MAX,
        digits: mutable.digits(),
        max: i64::MAX,
    })?;
    let pattern = encode(signed, mutable.digits())?;

    let mut flips = 0;
    for (position, digit) in mutable.positions().iter().zip(pattern.chars()) {
        let target = bit_to_operator(digit == '1');
        if model.link_operator(*position) != target {
            trace!("Variant {index}: equation {position} set to `{target}`.");
            model.flip_link_operator(*position);
            flips += 1;
        }
    }
    Ok(flips)
}
