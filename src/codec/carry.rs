use super::Error;

/// Multiplies the number held in the tail of `digits` by `multiplier`, adds
/// `carry`, and renormalises every touched position to `base`.
///
/// `length` is how many trailing positions are in use before the call; the
/// count after the call is returned.
pub(super) fn propagate(digits: &mut [u8], length: usize, mut carry: usize, multiplier: usize, base: usize) -> Result<usize, Error> {
    let mut index = 0;
    for digit in digits.iter_mut().rev() {
        if carry == 0 && index >= length {
            break;
        }
        carry += multiplier * (*digit as usize);
        *digit = (carry % base) as u8;
        carry /= base;
        index += 1;
    }
    if carry != 0 {
        return Err(Error::NonZeroCarry);
    }
    Ok(index)
}

pub(super) fn capacity(count: usize, factor: f64) -> usize {
    (count as f64 * factor) as usize + 1
}

pub(super) fn first_significant(digits: &[u8], length: usize) -> usize {
    let start = digits.len() - length;
    start + digits[start..].iter().take_while(|&&digit| digit == 0).count()
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn propagate() {
        let mut digits = [0u8; 3];
        assert_eq!(super::propagate(&mut digits, 0, 255, 256, 10), Ok(3));
        assert_eq!(digits, [2, 5, 5]);
        // 255 * 256 + 1 = 65281 does not fit in three decimal digits.
        assert_eq!(super::propagate(&mut digits, 3, 1, 256, 10), Err(Error::NonZeroCarry));
    }

    #[test]
    fn propagate_keeps_carrying_through_used_digits() {
        let mut digits = [0u8, 0, 0, 9, 9];
        assert_eq!(super::propagate(&mut digits, 2, 1, 10, 10), Ok(3));
        assert_eq!(digits, [0, 0, 9, 9, 1]);
    }

    #[test]
    fn capacity() {
        assert_eq!(super::capacity(0, 1.37), 1);
        assert_eq!(super::capacity(3, 1.37), 5);
    }

    #[test]
    fn first_significant() {
        assert_eq!(super::first_significant(&[0, 0, 0, 4, 2], 3), 3);
        assert_eq!(super::first_significant(&[0, 0, 0], 0), 3);
        assert_eq!(super::first_significant(&[0, 0, 0], 2), 3);
    }
}
