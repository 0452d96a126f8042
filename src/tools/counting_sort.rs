/// Sort bytes drawn from a small alphabet by counting occurrences, O(n + k)
/// where k is the alphabet size. `max_value` is the exclusive upper bound on
/// the byte values; every input byte must be below it.
pub fn counting_sort(input: &[u8], max_value: usize) -> Vec<u8> {
    let mut counts = vec![0_usize; max_value];
    for &value in input {
        counts[value as usize] += 1;
    }

    let mut sorted = Vec::with_capacity(input.len());
    for (value, &count) in counts.iter().enumerate() {
        for _ in 0..count {
            sorted.push(value as u8);
        }
    }
    sorted
}

#[cfg(test)]
mod test {
    use super::counting_sort;

    #[test]
    fn empty_test() {
        assert_eq!(counting_sort(&[], 256), Vec::<u8>::new());
    }

    #[test]
    fn single_test() {
        assert_eq!(counting_sort(&[5], 6), vec![5]);
    }

    #[test]
    fn small_alphabet_test() {
        assert_eq!(counting_sort(&[3, 1, 2, 1, 0], 4), vec![0, 1, 1, 2, 3]);
    }

    #[test]
    fn text_test() {
        let sorted = counting_sort("banana bandana".as_bytes(), 256);
        assert_eq!(sorted, " aaaaaabbdnnnn".as_bytes());
    }

    #[test]
    fn matches_std_sort_test() {
        // Cheap xorshift so the input is repeatable
        let mut state = 0x2545_f491_4f6c_dd1d_u64;
        let mut data = Vec::with_capacity(1000);
        for _ in 0..1000 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            data.push(state as u8);
        }

        let mut expected = data.clone();
        expected.sort_unstable();
        assert_eq!(counting_sort(&data, 256), expected);
    }
}
