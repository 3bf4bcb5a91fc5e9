/// 标记有效载荷结束位置的哨兵字节序列。
/// 隐藏时追加在消息末尾，恢复时以其首次出现的位置作为消息边界。
/// 它在常见的 UTF-8 文本中极少出现，但并不保证唯一。
pub const MARKER: [u8; 4] = [0xFF, 0x00, 0xFF, 0x00];

/// 每个像素参与隐写的颜色通道数 (R, G, B)。
/// 每个通道的最低位存储 1 bit。
pub const CHANNELS_PER_PIXEL: usize = 3;

/// 每个字节包含的位数。
pub const BITS_PER_BYTE: usize = 8;

/// 用于清除通道值最低位的掩码。
pub const LSB_CLEAR_MASK: u8 = 0xFE;

/// 未指定输出路径时，隐写图像文件名的前缀。
pub const DOCTORED_PREFIX: &str = "doctored_";

/// 未指定输出路径时，恢复文本文件名的前缀。
pub const RECOVERED_PREFIX: &str = "recovered_";
