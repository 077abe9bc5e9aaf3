use eyre::{ensure, Result};

/// Python-style `items[start:stop:step]` over any slice-backed sequence.
///
/// Negative indices count from the back and a negative step walks the
/// sequence in reverse. All three parameters are optional: the step defaults
/// to 1, the start to whichever end the step leaves from, and the stop to
/// "past the last element" in the walk direction. Returns a freshly built
/// sequence of the same kind as the input.
///
/// Fails when the step is zero or when the magnitude of an explicit start or
/// stop exceeds the sequence length.
pub fn slice<C, T>(
    items: &C,
    start: Option<isize>,
    stop: Option<isize>,
    step: Option<isize>,
) -> Result<C>
where
    C: AsRef<[T]> + FromIterator<T>,
    T: Clone,
{
    let items = items.as_ref();
    let len = items.len() as isize;

    let step = step.unwrap_or(1);
    ensure!(step != 0, "Slice step must be non-zero");

    // Default start depends on the walk direction.
    let begin = match start {
        Some(index) => index,
        None if step > 0 => 0,
        None => len - 1,
    };
    let until = stop.unwrap_or(len);

    ensure!(
        begin.abs() <= len,
        "Slice start {begin} out of range for a sequence of length {len}"
    );
    ensure!(
        until.abs() <= len,
        "Slice stop {until} out of range for a sequence of length {len}"
    );

    // A negative index addresses the position that many steps before the end.
    let locate = |index: isize| if index < 0 { len + index } else { index };
    let (begin, limit) = (locate(begin), locate(until));

    let within = |position: isize| {
        if step > 0 {
            position < limit
        } else if stop.is_some() {
            position > limit
        } else {
            // Backward walk with the stop omitted runs up to the front.
            position >= 0
        }
    };

    let mut taken = Vec::new();
    let mut position = begin;
    while within(position) {
        match items.get(position as usize) {
            Some(item) => taken.push(item.clone()),
            None => break,
        }
        position += step;
    }
    Ok(taken.into_iter().collect())
}

/// Codepoint-wise [`slice`] for strings.
pub fn slice_str(
    items: &str,
    start: Option<isize>,
    stop: Option<isize>,
    step: Option<isize>,
) -> Result<String> {
    let chars: Vec<char> = items.chars().collect();
    let taken = slice(&chars, start, stop, step)?;
    Ok(taken.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use pyseq_core::range;

    use super::*;

    fn digits() -> Vec<i32> {
        range(10).into_iter().collect()
    }

    #[test]
    fn test_backward_with_stop() -> Result<()> {
        assert_eq!(
            slice(&digits(), Some(-1), Some(2), Some(-2))?,
            vec![9, 7, 5, 3]
        );
        Ok(())
    }

    #[test]
    fn test_forward_with_step() -> Result<()> {
        assert_eq!(slice(&digits(), Some(3), Some(8), Some(2))?, vec![3, 5, 7]);
        Ok(())
    }

    #[test]
    fn test_identity() -> Result<()> {
        let nums = digits();
        assert_eq!(slice(&nums, Some(0), Some(10), Some(1))?, nums);
        assert_eq!(slice(&nums, None, None, None)?, nums);
        Ok(())
    }

    #[test]
    fn test_full_reverse() -> Result<()> {
        let nums = digits();
        let reversed = nums.iter().rev().copied().collect_vec();
        assert_eq!(slice(&nums, None, None, Some(-1))?, reversed);
        Ok(())
    }

    #[test]
    fn test_negative_indices() -> Result<()> {
        let nums = digits();
        assert_eq!(slice(&nums, Some(-3), None, None)?, vec![7, 8, 9]);
        assert_eq!(slice(&nums, Some(0), Some(-5), None)?, vec![0, 1, 2, 3, 4]);
        Ok(())
    }

    #[test]
    fn test_empty_results() -> Result<()> {
        let nums = digits();
        assert_eq!(slice(&nums, Some(5), Some(5), None)?, vec![]);
        assert_eq!(slice(&nums, Some(8), Some(2), Some(1))?, vec![]);

        let nothing: Vec<i32> = vec![];
        assert_eq!(slice(&nothing, None, None, None)?, vec![]);
        Ok(())
    }

    #[test]
    fn test_rejects_zero_step() {
        assert!(slice(&digits(), None, None, Some(0)).is_err());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(slice(&digits(), Some(11), None, None).is_err());
        assert!(slice(&digits(), Some(-11), None, None).is_err());
        assert!(slice(&digits(), None, Some(11), None).is_err());
        assert!(slice(&digits(), None, Some(-11), None).is_err());

        // Boundary magnitudes are still valid.
        assert!(slice(&digits(), Some(10), None, None).is_ok());
        assert!(slice(&digits(), Some(-10), Some(10), None).is_ok());
    }

    #[test]
    fn test_strings() -> Result<()> {
        assert_eq!(slice_str("hello world", Some(-5), None, None)?, "world");
        assert_eq!(slice_str("hello", None, None, Some(-1))?, "olleh");
        assert_eq!(slice_str("abcdef", Some(1), Some(5), Some(2))?, "bd");
        Ok(())
    }
}
