use lsb_marker::bits::{join_bits, split_bits};
use proptest::prelude::*;

/// 每个字节按最高位在前展开
#[test]
fn test_split_bits_msb_first() {
    let bits: Vec<u8> = split_bits(&[0b1010_0001, 0xFF]).collect();
    assert_eq!(
        bits,
        vec![1, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1]
    );
}

/// 空输入产生空的比特序列，反向组装也得到空字节
#[test]
fn test_empty_input() {
    assert_eq!(split_bits(&[]).count(), 0);
    assert!(join_bits(std::iter::empty::<u8>()).is_empty());
}

/// 克隆出的迭代器可以从头重新遍历
#[test]
fn test_split_bits_is_restartable() {
    let data = b"Hi";
    let bits = split_bits(data);
    let first: Vec<u8> = bits.clone().collect();
    let second: Vec<u8> = bits.collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 16);
}

/// 不足 8 位的尾部比特被丢弃
#[test]
fn test_join_bits_drops_trailing_bits() {
    let bits = [0u8, 1, 0, 0, 0, 0, 0, 1, 1, 1, 1];
    assert_eq!(join_bits(bits), b"A".to_vec());

    let only_tail = [1u8, 0, 1];
    assert!(join_bits(only_tail).is_empty());
}

proptest! {
    /// 拆分后再组装必须还原原始字节
    #[test]
    fn prop_join_inverts_split(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(join_bits(split_bits(&data)), data.clone());
        prop_assert_eq!(split_bits(&data).count(), data.len() * 8);
    }

    /// 输出长度总是 floor(len / 8)
    #[test]
    fn prop_join_len_is_floor(bits in proptest::collection::vec(0u8..=1, 0..200)) {
        prop_assert_eq!(join_bits(bits.clone()).len(), bits.len() / 8);
    }
}
