use crate::bits::{join_bits, split_bits};
use crate::constants::{BITS_PER_BYTE, LSB_CLEAR_MASK, MARKER};
use crate::error::StegoError;
use crate::raster::{ChannelPosition, Raster, capacity_bits};
use log::debug;

/// 构造实际写入图像的有效载荷：`message ++ marker`。
pub fn build_payload(message: &[u8], marker: &[u8]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(message.len() + marker.len());
    payload.extend_from_slice(message);
    payload.extend_from_slice(marker);
    payload
}

/// 将有效载荷逐位写入栅格各通道的最低位，返回实际写入的比特数。
///
/// 写入顺序由 [`ChannelPosition::from_index`] 决定。容量不足时直接返回
/// [`StegoError::CapacityExceeded`]，此时栅格不会被修改；写完最后一位后，
/// 其余通道保持原值。
pub fn embed<R: Raster + ?Sized>(raster: &mut R, payload: &[u8]) -> Result<usize, StegoError> {
    let required = payload.len() * BITS_PER_BYTE;
    let available = capacity_bits(raster);
    if required > available {
        return Err(StegoError::CapacityExceeded {
            required,
            available,
        });
    }

    let width = raster.width();
    let mut written = 0;
    for (index, bit) in split_bits(payload).enumerate() {
        let pos = ChannelPosition::from_index(index, width);
        let mut rgb = raster.read_rgb(pos.col, pos.row);
        rgb[pos.channel] = (rgb[pos.channel] & LSB_CLEAR_MASK) | bit;
        raster.write_rgb(pos.col, pos.row, rgb);
        written += 1;
    }

    debug!("embedded {written} of {available} available bits");
    Ok(written)
}

/// 读取整个栅格所有通道的最低位，返回 `marker` 首次出现之前的字节。
///
/// 找不到标记时返回 [`StegoError::MarkerNotFound`]，不会返回任何部分数据。
pub fn extract<R: Raster + ?Sized>(raster: &R, marker: &[u8]) -> Result<Vec<u8>, StegoError> {
    let width = raster.width();
    let available = capacity_bits(raster);
    let bits = (0..available).map(|index| {
        let pos = ChannelPosition::from_index(index, width);
        raster.read_rgb(pos.col, pos.row)[pos.channel] & 1
    });
    let mut data = join_bits(bits);

    let end = find_marker(&data, marker).ok_or(StegoError::MarkerNotFound)?;
    debug!("scanned {available} bits, marker found at byte offset {end}");

    data.truncate(end);
    Ok(data)
}

/// 返回 `marker` 在 `data` 中首次出现的起始偏移。空标记视为出现在偏移 0。
pub fn find_marker(data: &[u8], marker: &[u8]) -> Option<usize> {
    if marker.is_empty() {
        return Some(0);
    }
    data.windows(marker.len()).position(|window| window == marker)
}

/// 使用固定的 [`MARKER`] 将消息隐藏进栅格，返回写入的比特数。
pub fn hide_message<R: Raster + ?Sized>(raster: &mut R, message: &[u8]) -> Result<usize, StegoError> {
    embed(raster, &build_payload(message, &MARKER))
}

/// 使用固定的 [`MARKER`] 从栅格中恢复消息。
pub fn reveal_message<R: Raster + ?Sized>(raster: &R) -> Result<Vec<u8>, StegoError> {
    extract(raster, &MARKER)
}

/// 栅格能够容纳的最长消息字节数 (已扣除标记长度)。
pub fn max_message_len<R: Raster + ?Sized>(raster: &R) -> usize {
    (capacity_bits(raster) / BITS_PER_BYTE).saturating_sub(MARKER.len())
}
