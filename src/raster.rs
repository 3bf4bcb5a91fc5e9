//! # 像素栅格模块
//!
//! 定义隐写算法所操作的 RGB 栅格抽象，以及通道序号与像素坐标之间的固定映射。
//! 嵌入与提取共享同一套遍历顺序：先按行 (自上而下)，行内从左到右，像素内按 R、G、B。

use crate::constants::CHANNELS_PER_PIXEL;
use image::{Rgb, RgbImage};

/// 可供隐写读写的 RGB 栅格。
///
/// 图像文件的解码与编码不属于本抽象，调用方负责把图像转换为实现了该 trait 的类型。
pub trait Raster {
    /// 栅格宽度 (像素)。
    fn width(&self) -> u32;

    /// 栅格高度 (像素)。
    fn height(&self) -> u32;

    /// 读取 `(x, y)` 处像素的 `[R, G, B]` 通道值。
    fn read_rgb(&self, x: u32, y: u32) -> [u8; 3];

    /// 将 `(x, y)` 处像素写为给定的 `[R, G, B]` 通道值。
    fn write_rgb(&mut self, x: u32, y: u32, rgb: [u8; 3]);
}

impl Raster for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn read_rgb(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).0
    }

    fn write_rgb(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        self.put_pixel(x, y, Rgb(rgb));
    }
}

/// 栅格能够承载的最大比特数，即 `width * height * 3`。
pub fn capacity_bits<R: Raster + ?Sized>(raster: &R) -> usize {
    raster.width() as usize * raster.height() as usize * CHANNELS_PER_PIXEL
}

/// 扁平通道流中某个序号对应的像素坐标与通道。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelPosition {
    pub row: u32,
    pub col: u32,
    /// 0 = R, 1 = G, 2 = B
    pub channel: usize,
}

impl ChannelPosition {
    /// 将通道流序号映射为 `(row, col, channel)`。
    ///
    /// 容量为 0 的栅格不会产生任何序号，因此嵌入与提取不会以 `width == 0` 调用本函数。
    ///
    /// # Panics
    ///
    /// 当 `width` 为 0 时发生除零 panic。
    pub fn from_index(index: usize, width: u32) -> Self {
        let pixel = index / CHANNELS_PER_PIXEL;
        let width = width as usize;
        Self {
            row: (pixel / width) as u32,
            col: (pixel % width) as u32,
            channel: index % CHANNELS_PER_PIXEL,
        }
    }
}
