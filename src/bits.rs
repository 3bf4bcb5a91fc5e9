//! # 位编解码模块
//!
//! 在字节序列与单个比特序列之间相互转换。
//! 每个字节内部按最高有效位在前 (MSB first) 的顺序展开。

use crate::constants::BITS_PER_BYTE;

/// 将字节序列拆分为比特序列 (每项取值 0 或 1)。
///
/// 返回的迭代器是惰性的、有限的，并且可以通过 `clone` 重新开始，
/// 总共产生 `8 * data.len()` 个比特。每个字节从第 7 位遍历到第 0 位。
pub fn split_bits(data: &[u8]) -> impl Iterator<Item = u8> + Clone + '_ {
    data.iter()
        .flat_map(|&byte| (0..BITS_PER_BYTE).rev().map(move |i| (byte >> i) & 1))
}

/// 将比特序列按 8 位一组重新组装为字节。
///
/// 组内第一个比特为最高位。不足 8 位的尾部比特会被直接丢弃，
/// 因此输出长度为 `floor(len(bits) / 8)`。
pub fn join_bits<I>(bits: I) -> Vec<u8>
where
    I: IntoIterator<Item = u8>,
{
    let bits = bits.into_iter();
    let mut out = Vec::with_capacity(bits.size_hint().0 / BITS_PER_BYTE);
    let mut current = 0u8;
    let mut count = 0;

    for bit in bits {
        current = (current << 1) | (bit & 1);
        count += 1;
        if count == BITS_PER_BYTE {
            out.push(current);
            current = 0;
            count = 0;
        }
    }

    out
}
