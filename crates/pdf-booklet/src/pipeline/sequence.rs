//! Saddle-stitch page ordering
//!
//! Pages are paired from the outside in: the first and last page share a
//! sheet side, then the second and second to last, and so on. The pair
//! orientation alternates so that, printed double-sided and folded, the
//! pages come out in reading order.
//!
//! **4 pages:** `[(4, 1), (2, 3)]`
//!
//! **8 pages:** `[(8, 1), (2, 7), (6, 3), (4, 5)]`

/// Pair pages into sheet sides.
///
/// Even inputs of length `n` give `n / 2` pairs, each page used once.
pub fn rearrange_pages<T: Clone>(pages: &[T]) -> Vec<(T, T)> {
    let mut pairs = Vec::with_capacity(pages.len() / 2);
    if pages.is_empty() {
        return pairs;
    }

    let mut begin = 0;
    let mut end = pages.len() - 1;
    let mut twist = true;
    while begin < end {
        let pair = if twist {
            (pages[end].clone(), pages[begin].clone())
        } else {
            (pages[begin].clone(), pages[end].clone())
        };
        pairs.push(pair);
        twist = !twist;
        begin += 1;
        end -= 1;
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_pages() {
        assert_eq!(rearrange_pages(&[0, 1, 2, 3]), vec![(3, 0), (1, 2)]);
    }

    #[test]
    fn test_eight_pages() {
        assert_eq!(
            rearrange_pages(&[1, 2, 3, 4, 5, 6, 7, 8]),
            vec![(8, 1), (2, 7), (6, 3), (4, 5)]
        );
    }

    #[test]
    fn test_two_pages() {
        assert_eq!(rearrange_pages(&["a", "b"]), vec![("b", "a")]);
    }

    #[test]
    fn test_empty() {
        assert!(rearrange_pages::<u8>(&[]).is_empty());
    }
}
